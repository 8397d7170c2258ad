//! Index-stride walker.
//!
//! Given a logical length `n` and, per buffer, a stride and a starting
//! offset, the walker yields the physical indices `offset + i*stride` for
//! `i = 0..n`. Strides may be negative; the caller supplies an offset that
//! keeps every visited index in range (see [`stride2offset`] for the usual
//! tail-biased choice).

use crate::{Result, StridedError};

/// Offset of the first logical element when only a stride is given.
///
/// Nonnegative strides start at `0`; a negative stride starts at the tail,
/// `(1 - n) * stride`.
#[inline]
pub fn stride2offset(n: usize, stride: isize) -> usize {
    if stride >= 0 || n == 0 {
        return 0;
    }
    (n - 1) * stride.unsigned_abs()
}

/// [`stride2offset`] with overflow checking, for validated entry points.
pub fn checked_stride2offset(n: usize, stride: isize) -> Result<usize> {
    if stride >= 0 || n == 0 {
        return Ok(0);
    }
    (n - 1)
        .checked_mul(stride.unsigned_abs())
        .ok_or(StridedError::OffsetOverflow)
}

/// Convert a signed traversal count to a visit count (`n <= 0` visits nothing).
#[inline]
pub(crate) fn visit_count(n: isize) -> usize {
    if n <= 0 {
        0
    } else {
        n as usize
    }
}

/// Lockstep traversal of `K` buffers.
///
/// Yields `[offsets[k] + i*strides[k]; K]` for `i = 0..n`.
///
/// Indices are produced as `usize`; a caller-supplied combination that
/// would step below zero yields an index that no buffer can hold, and the
/// subsequent access panics.
#[derive(Debug, Clone)]
pub struct StridedWalk<const K: usize> {
    front: [isize; K],
    strides: [isize; K],
    remaining: usize,
}

impl<const K: usize> StridedWalk<K> {
    /// Number of positions not yet visited.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// Walk `n` positions across `K` buffers.
#[inline]
pub fn walk<const K: usize>(n: usize, strides: [isize; K], offsets: [usize; K]) -> StridedWalk<K> {
    StridedWalk {
        front: offsets.map(|o| o as isize),
        strides,
        remaining: n,
    }
}

/// Walk `n` positions of a single buffer.
#[inline]
pub fn indices(
    n: usize,
    stride: isize,
    offset: usize,
) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
    walk(n, [stride], [offset]).map(|[i]| i)
}

impl<const K: usize> Iterator for StridedWalk<K> {
    type Item = [usize; K];

    #[inline]
    fn next(&mut self) -> Option<[usize; K]> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.front.map(|c| c as usize);
        self.remaining -= 1;
        if self.remaining > 0 {
            for (c, s) in self.front.iter_mut().zip(self.strides.iter()) {
                *c += *s;
            }
        }
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const K: usize> ExactSizeIterator for StridedWalk<K> {}

impl<const K: usize> DoubleEndedIterator for StridedWalk<K> {
    #[inline]
    fn next_back(&mut self) -> Option<[usize; K]> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let last = self.remaining as isize;
        let mut out = [0usize; K];
        for k in 0..K {
            out[k] = (self.front[k] + last * self.strides[k]) as usize;
        }
        Some(out)
    }
}

// ============================================================================
// Range computation
// ============================================================================

/// Physical index of the last logical element, with overflow checking.
fn last_index(n: usize, stride: isize, offset: usize) -> Result<isize> {
    let offset = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    if n == 0 {
        return Ok(offset);
    }
    let steps = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    steps
        .checked_mul(stride)
        .and_then(|span| offset.checked_add(span))
        .ok_or(StridedError::OffsetOverflow)
}

/// Smallest physical index visited by a traversal.
pub fn min_index(n: usize, stride: isize, offset: usize) -> Result<isize> {
    let last = last_index(n, stride, offset)?;
    Ok(last.min(offset as isize))
}

/// Largest physical index visited by a traversal.
pub fn max_index(n: usize, stride: isize, offset: usize) -> Result<isize> {
    let last = last_index(n, stride, offset)?;
    Ok(last.max(offset as isize))
}

/// Validate that a traversal stays within a buffer of length `len`.
///
/// A zero stride is rejected when more than one element would be visited.
/// Empty traversals are always valid.
pub fn check_bounds(len: usize, n: usize, stride: isize, offset: usize) -> Result<()> {
    if n == 0 {
        return Ok(());
    }
    if stride == 0 && n > 1 {
        return Err(StridedError::ZeroStride { n });
    }
    let lo = min_index(n, stride, offset)?;
    let hi = max_index(n, stride, offset)?;
    if lo < 0 {
        return Err(StridedError::OutOfBounds { index: lo, len });
    }
    if hi as usize >= len {
        return Err(StridedError::OutOfBounds { index: hi, len });
    }
    Ok(())
}

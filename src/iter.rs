//! Iterators over the values of a strided traversal.

use std::iter::FusedIterator;

use strided_accessors::Gettable;

use crate::walker::{visit_count, walk, StridedWalk};

/// Yields `buf[offset + i*stride]` for `i = 0..n`.
///
/// Reading goes through [`Gettable::get`], so accessor arrays yield boxed
/// values. Iterating from the back visits the same positions right to left.
pub struct StridedValues<'a, B: Gettable + ?Sized> {
    buf: &'a B,
    positions: StridedWalk<1>,
}

/// Iterate the values of a strided traversal of `buf`.
pub fn strided_values<B: Gettable + ?Sized>(
    n: isize,
    buf: &B,
    stride: isize,
    offset: usize,
) -> StridedValues<'_, B> {
    StridedValues {
        buf,
        positions: walk(visit_count(n), [stride], [offset]),
    }
}

impl<B: Gettable + ?Sized> Clone for StridedValues<'_, B> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            positions: self.positions.clone(),
        }
    }
}

impl<B: Gettable + ?Sized> Iterator for StridedValues<'_, B> {
    type Item = B::Elem;

    #[inline]
    fn next(&mut self) -> Option<B::Elem> {
        let [i] = self.positions.next()?;
        Some(self.buf.get(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<B: Gettable + ?Sized> DoubleEndedIterator for StridedValues<'_, B> {
    #[inline]
    fn next_back(&mut self) -> Option<B::Elem> {
        let [i] = self.positions.next_back()?;
        Some(self.buf.get(i))
    }
}

impl<B: Gettable + ?Sized> ExactSizeIterator for StridedValues<'_, B> {}

impl<B: Gettable + ?Sized> FusedIterator for StridedValues<'_, B> {}

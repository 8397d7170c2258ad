//! Validated strided vectors.
//!
//! The kernels in [`crate::map`] and [`crate::blas`] trust their callers:
//! an offset/stride combination that leaves the buffer panics on the first
//! bad access. [`StridedVector`] and [`StridedVectorMut`] check the whole
//! traversal once at construction, so the entry points below can report a
//! [`StridedError`] instead.
//!
//! # Example
//! ```rust
//! use strided_base::view::{axpy, StridedVector, StridedVectorMut};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut y = [6.0, 7.0, 8.0, 9.0, 10.0];
//! let xv = StridedVector::new(&x[..], 3, -2, 4).unwrap();
//! let mut yv = StridedVectorMut::new(&mut y[..], 3, -1, 3).unwrap();
//! axpy(&mut yv, 3.0, &xv).unwrap();
//! assert_eq!(y, [6.0, 10.0, 17.0, 24.0, 10.0]);
//! ```

use strided_accessors::{Gettable, Settable};

use crate::blas::{gaxpy_ndarray, gscal_ndarray, Scalar};
use crate::iter::{strided_values, StridedValues};
use crate::map::{binary_ndarray, unary_ndarray};
use crate::walker::{check_bounds, checked_stride2offset};
use crate::{Result, StridedError};

/// Read-only strided traversal of a buffer, bounds-checked at construction.
#[derive(Debug)]
pub struct StridedVector<'a, B: ?Sized> {
    data: &'a B,
    len: usize,
    stride: isize,
    offset: usize,
}

/// Mutable strided traversal of a buffer, bounds-checked at construction.
#[derive(Debug)]
pub struct StridedVectorMut<'a, B: ?Sized> {
    data: &'a mut B,
    len: usize,
    stride: isize,
    offset: usize,
}

impl<B: ?Sized> Clone for StridedVector<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for StridedVector<'_, B> {}

fn validate(buf_len: usize, len: usize, stride: isize, offset: usize) -> Result<()> {
    check_bounds(buf_len, len, stride, offset).inspect_err(|err| {
        tracing::debug!(buf_len, len, stride, offset, %err, "rejected strided vector");
    })
}

/// Physical index of the last element, for a traversal already validated.
fn last_physical(len: usize, stride: isize, offset: usize) -> usize {
    if len == 0 {
        return offset;
    }
    (offset as isize + (len as isize - 1) * stride) as usize
}

impl<'a, B: Gettable + ?Sized> StridedVector<'a, B> {
    /// View `len` elements of `data` starting at `offset`, `stride` apart.
    ///
    /// # Errors
    /// - [`StridedError::ZeroStride`] if `stride == 0` and `len > 1`
    /// - [`StridedError::OutOfBounds`] if any visited index is outside `data`
    /// - [`StridedError::OffsetOverflow`] if index arithmetic overflows
    pub fn new(data: &'a B, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate(data.len(), len, stride, offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Like [`new`](Self::new), with the offset implied by the stride.
    ///
    /// # Errors
    /// Same as [`new`](Self::new); an implied offset that overflows is
    /// [`StridedError::OffsetOverflow`].
    pub fn from_simple(data: &'a B, len: usize, stride: isize) -> Result<Self> {
        Self::new(data, len, stride, checked_stride2offset(len, stride)?)
    }

    /// The same elements in the opposite order.
    pub fn reversed(self) -> Self {
        Self {
            offset: last_physical(self.len, self.stride, self.offset),
            stride: -self.stride,
            ..self
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn data(&self) -> &'a B {
        self.data
    }

    /// Logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> B::Elem {
        assert!(i < self.len, "index out of bounds");
        self.data.get(last_physical(i + 1, self.stride, self.offset))
    }

    pub fn iter(&self) -> StridedValues<'a, B> {
        strided_values(self.len as isize, self.data, self.stride, self.offset)
    }
}

impl<'a, B: Settable + ?Sized> StridedVectorMut<'a, B> {
    /// Mutable counterpart of [`StridedVector::new`].
    pub fn new(data: &'a mut B, len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate(data.len(), len, stride, offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    pub fn from_simple(data: &'a mut B, len: usize, stride: isize) -> Result<Self> {
        Self::new(data, len, stride, checked_stride2offset(len, stride)?)
    }

    pub fn reversed(self) -> Self {
        Self {
            offset: last_physical(self.len, self.stride, self.offset),
            stride: -self.stride,
            ..self
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Shared view of the same traversal.
    pub fn as_view(&self) -> StridedVector<'_, B> {
        StridedVector {
            data: &*self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> B::Elem {
        self.as_view().get(i)
    }

    /// Write logical element `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn set(&mut self, i: usize, value: B::Elem) {
        assert!(i < self.len, "index out of bounds");
        self.data
            .set(last_physical(i + 1, self.stride, self.offset), value);
    }

    pub fn iter(&self) -> StridedValues<'_, B> {
        strided_values(self.len as isize, &*self.data, self.stride, self.offset)
    }
}

// ============================================================================
// Entry points
// ============================================================================

fn ensure_same_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        tracing::debug!(a, b, "strided vector length mismatch");
        return Err(StridedError::LengthMismatch(a, b));
    }
    Ok(())
}

/// `dest[i] = f(src[i])`.
pub fn map_into<X, Y, F>(
    dest: &mut StridedVectorMut<'_, Y>,
    src: &StridedVector<'_, X>,
    f: F,
) -> Result<()>
where
    X: Gettable + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    ensure_same_len(dest.len, src.len)?;
    unary_ndarray(
        dest.len as isize,
        src.data,
        src.stride,
        src.offset,
        &mut *dest.data,
        dest.stride,
        dest.offset,
        f,
    );
    Ok(())
}

/// `dest[i] = f(a[i], b[i])`.
pub fn zip_map2_into<X, Y, Z, F>(
    dest: &mut StridedVectorMut<'_, Z>,
    a: &StridedVector<'_, X>,
    b: &StridedVector<'_, Y>,
    f: F,
) -> Result<()>
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem) -> Z::Elem,
{
    ensure_same_len(dest.len, a.len)?;
    ensure_same_len(dest.len, b.len)?;
    binary_ndarray(
        dest.len as isize,
        a.data,
        a.stride,
        a.offset,
        b.data,
        b.stride,
        b.offset,
        &mut *dest.data,
        dest.stride,
        dest.offset,
        f,
    );
    Ok(())
}

/// `y = alpha*x + y`, with the `alpha == 0` shortcut of
/// [`gaxpy_ndarray`](crate::blas::gaxpy_ndarray).
pub fn axpy<T, X, Y>(
    y: &mut StridedVectorMut<'_, Y>,
    alpha: T,
    x: &StridedVector<'_, X>,
) -> Result<()>
where
    T: Scalar,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    ensure_same_len(y.len, x.len)?;
    gaxpy_ndarray(
        y.len as isize,
        alpha,
        x.data,
        x.stride,
        x.offset,
        &mut *y.data,
        y.stride,
        y.offset,
    );
    Ok(())
}

/// `dest[i] = src[i]`.
pub fn copy_into<T, X, Y>(
    dest: &mut StridedVectorMut<'_, Y>,
    src: &StridedVector<'_, X>,
) -> Result<()>
where
    T: Copy,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    map_into(dest, src, |v| v)
}

/// `x[i] = alpha*x[i]`.
pub fn scale<T, X>(x: &mut StridedVectorMut<'_, X>, alpha: T)
where
    T: Scalar,
    X: Settable<Elem = T> + ?Sized,
{
    gscal_ndarray(x.len as isize, alpha, &mut *x.data, x.stride, x.offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use strided_accessors::Complex128Array;

    #[test]
    fn test_new_validates() {
        let data = [0.0; 5];
        assert!(StridedVector::new(&data[..], 3, 2, 0).is_ok());
        assert!(StridedVector::new(&data[..], 3, -2, 4).is_ok());
        assert!(StridedVector::new(&data[..], 0, 0, 99).is_ok());
        assert_eq!(
            StridedVector::new(&data[..], 2, 0, 0).unwrap_err(),
            StridedError::ZeroStride { n: 2 }
        );
        assert_eq!(
            StridedVector::new(&data[..], 3, 2, 1).unwrap_err(),
            StridedError::OutOfBounds { index: 5, len: 5 }
        );
        assert_eq!(
            StridedVector::new(&data[..], 3, isize::MAX, 0).unwrap_err(),
            StridedError::OffsetOverflow
        );
    }

    #[test]
    fn test_from_simple_offset_overflow() {
        let data = [0.0f64; 4];
        assert_eq!(
            StridedVector::from_simple(&data[..], 3, isize::MIN).unwrap_err(),
            StridedError::OffsetOverflow
        );
        let mut data = [0.0f64; 4];
        assert_eq!(
            StridedVectorMut::from_simple(&mut data[..], 3, isize::MIN).unwrap_err(),
            StridedError::OffsetOverflow
        );
    }

    #[test]
    fn test_from_simple_and_reversed() {
        let data = [1, 2, 3, 4, 5];
        let v = StridedVector::from_simple(&data[..], 3, -2).unwrap();
        assert_eq!(v.offset(), 4);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![5, 3, 1]);

        let r = v.reversed();
        assert_eq!(r.stride(), 2);
        assert_eq!(r.offset(), 0);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(r.get(2), 5);
    }

    #[test]
    fn test_mut_get_set() {
        let mut data = vec![0; 4];
        {
            let mut v = StridedVectorMut::new(&mut data, 2, -3, 3).unwrap();
            v.set(0, 7);
            v.set(1, 9);
            assert_eq!(v.get(1), 9);
            assert_eq!(v.iter().collect::<Vec<_>>(), vec![7, 9]);
        }
        assert_eq!(data, vec![9, 0, 0, 7]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_get_past_len_panics() {
        let data = [1.0; 4];
        let v = StridedVector::new(&data[..], 2, 1, 0).unwrap();
        v.get(2);
    }

    #[test]
    fn test_map_and_zip() {
        let x = [1.0, -2.0, 3.0];
        let mut y = [0.0; 3];
        let xv = StridedVector::new(&x[..], 3, 1, 0).unwrap();
        let mut yv = StridedVectorMut::from_simple(&mut y[..], 3, -1).unwrap();
        map_into(&mut yv, &xv, f64::abs).unwrap();
        assert_eq!(yv.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        zip_map2_into(&mut yv, &xv, &xv.reversed(), |a, b| a - b).unwrap();
        assert_eq!(y, [2.0, 0.0, -2.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let x = [1.0; 3];
        let mut y = [0.0; 3];
        let xv = StridedVector::new(&x[..], 3, 1, 0).unwrap();
        let mut yv = StridedVectorMut::new(&mut y[..], 2, 1, 0).unwrap();
        assert_eq!(
            copy_into(&mut yv, &xv).unwrap_err(),
            StridedError::LengthMismatch(2, 3)
        );
        assert_eq!(
            axpy(&mut yv, 1.0, &xv).unwrap_err(),
            StridedError::LengthMismatch(2, 3)
        );
        assert_eq!(y, [0.0; 3]);
    }

    #[test]
    fn test_axpy_scale_copy() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y = [1.0; 5];
        let xv = StridedVector::new(&x[..], 5, 1, 0).unwrap();
        let mut yv = StridedVectorMut::new(&mut y[..], 5, 1, 0).unwrap();
        axpy(&mut yv, 2.0, &xv).unwrap();
        scale(&mut yv, 0.5);
        assert_eq!(y, [1.5, 2.5, 3.5, 4.5, 5.5]);

        let mut z = [0.0; 5];
        let mut zv = StridedVectorMut::new(&mut z[..], 5, -1, 4).unwrap();
        copy_into(&mut zv, &xv).unwrap();
        assert_eq!(z, [5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_accessor_buffers() {
        let mut parts = [0.0; 4];
        let mut arr = Complex128Array::new(&mut parts[..]).unwrap();
        let src = [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
        let sv = StridedVector::new(&src[..], 2, 1, 0).unwrap();
        {
            let mut dv = StridedVectorMut::new(&mut arr, 2, 1, 0).unwrap();
            copy_into(&mut dv, &sv).unwrap();
            assert_eq!(dv.get(1), Complex64::new(3.0, 4.0));
        }
        assert_eq!(parts, [1.0, 2.0, 3.0, 4.0]);
    }
}

//! Interleaved complex accessor arrays.
//!
//! A [`ComplexArray`] views a real buffer `[re0, im0, re1, im1, ...]` as a
//! sequence of `Complex<F>` values. Each logical element occupies two
//! physical slots, so the array cannot be indexed directly and always goes
//! through the accessor path.

use std::marker::PhantomData;

use bytemuck::Pod;
use num_complex::Complex;
use num_traits::Float;

use crate::accessor::{Gettable, Settable};
use crate::dtype::DType;
use crate::element::Element;
use crate::AccessorError;

/// Real component type of an interleaved complex buffer.
pub trait ComplexPart: Float + Pod + Element {
    /// Tag of the complex dtype built from two parts of this type.
    const COMPLEX_DTYPE: DType;
}

impl ComplexPart for f32 {
    const COMPLEX_DTYPE: DType = DType::Complex64;
}

impl ComplexPart for f64 {
    const COMPLEX_DTYPE: DType = DType::Complex128;
}

/// Complex view over interleaved real storage `B`.
#[derive(Debug, Clone)]
pub struct ComplexArray<B, F> {
    buf: B,
    _part: PhantomData<F>,
}

/// Single-precision complex array (`complex64`).
pub type Complex64Array<B> = ComplexArray<B, f32>;

/// Double-precision complex array (`complex128`).
pub type Complex128Array<B> = ComplexArray<B, f64>;

impl<B: AsRef<[F]>, F: ComplexPart> ComplexArray<B, F> {
    /// Wrap interleaved storage.
    pub fn new(buf: B) -> Result<Self, AccessorError> {
        let len = buf.as_ref().len();
        if len % 2 != 0 {
            return Err(AccessorError::OddLength(len));
        }
        Ok(Self {
            buf,
            _part: PhantomData,
        })
    }

    /// Real part of element `idx`.
    #[inline]
    pub fn real(&self, idx: usize) -> F {
        self.buf.as_ref()[2 * idx]
    }

    /// Imaginary part of element `idx`.
    #[inline]
    pub fn imag(&self, idx: usize) -> F {
        self.buf.as_ref()[2 * idx + 1]
    }

    /// The interleaved storage.
    #[inline]
    pub fn as_parts(&self) -> &[F] {
        self.buf.as_ref()
    }

    #[inline]
    pub fn into_inner(self) -> B {
        self.buf
    }
}

impl<F: ComplexPart> ComplexArray<Vec<F>, F> {
    /// Owned array of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            buf: vec![F::zero(); 2 * n],
            _part: PhantomData,
        }
    }
}

impl<'a, F: ComplexPart> ComplexArray<&'a [F], F> {
    /// Zero-copy view over a slice of complex values.
    pub fn from_complex(src: &'a [Complex<F>]) -> Self {
        Self {
            buf: reinterpret(src),
            _part: PhantomData,
        }
    }
}

impl<'a, F: ComplexPart> ComplexArray<&'a mut [F], F> {
    /// Zero-copy mutable view over a slice of complex values.
    pub fn from_complex_mut(src: &'a mut [Complex<F>]) -> Self {
        Self {
            buf: reinterpret_mut(src),
            _part: PhantomData,
        }
    }
}

impl<B: AsRef<[F]>, F: ComplexPart> Gettable for ComplexArray<B, F> {
    type Elem = Complex<F>;

    #[inline]
    fn len(&self) -> usize {
        self.buf.as_ref().len() / 2
    }

    #[inline]
    fn get(&self, idx: usize) -> Complex<F> {
        let parts = self.buf.as_ref();
        Complex::new(parts[2 * idx], parts[2 * idx + 1])
    }

    #[inline]
    fn dtype(&self) -> DType {
        F::COMPLEX_DTYPE
    }
}

impl<B: AsRef<[F]> + AsMut<[F]>, F: ComplexPart> Settable for ComplexArray<B, F> {
    #[inline]
    fn set(&mut self, idx: usize, value: Complex<F>) {
        let parts = self.buf.as_mut();
        parts[2 * idx] = value.re;
        parts[2 * idx + 1] = value.im;
    }
}

/// Reinterpret complex values as their interleaved real parts.
#[inline]
pub fn reinterpret<F: ComplexPart>(src: &[Complex<F>]) -> &[F] {
    bytemuck::cast_slice(src)
}

/// Mutable variant of [`reinterpret`].
#[inline]
pub fn reinterpret_mut<F: ComplexPart>(src: &mut [Complex<F>]) -> &mut [F] {
    bytemuck::cast_slice_mut(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::is_accessor_array;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_get_boxes_interleaved_pairs() {
        let parts = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let arr = Complex64Array::new(&parts[..]).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(1), Complex32::new(3.0, 4.0));
        assert_eq!(arr.real(2), 5.0);
        assert_eq!(arr.imag(2), 6.0);
        assert_eq!(arr.dtype(), DType::Complex64);
        assert!(is_accessor_array(&arr));
    }

    #[test]
    fn test_set_unboxes() {
        let mut parts = vec![0.0f64; 4];
        {
            let mut arr = Complex128Array::new(&mut parts[..]).unwrap();
            arr.set(1, Complex64::new(-1.5, 2.5));
        }
        assert_eq!(parts, vec![0.0, 0.0, -1.5, 2.5]);
    }

    #[test]
    fn test_odd_length_rejected() {
        let parts = [1.0f64, 2.0, 3.0];
        let err = Complex128Array::new(&parts[..]).unwrap_err();
        assert_eq!(err, AccessorError::OddLength(3));
    }

    #[test]
    fn test_from_complex_shares_storage() {
        let mut values = vec![Complex64::new(1.0, -1.0), Complex64::new(2.0, -2.0)];
        {
            let mut arr = Complex128Array::from_complex_mut(&mut values);
            assert_eq!(arr.get(1), Complex64::new(2.0, -2.0));
            arr.set(0, Complex64::new(9.0, 8.0));
        }
        assert_eq!(values[0], Complex64::new(9.0, 8.0));
        assert_eq!(reinterpret(&values), &[9.0, 8.0, 2.0, -2.0]);
    }

    #[test]
    fn test_zeros() {
        let arr = Complex64Array::<Vec<f32>>::zeros(3);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.as_parts(), &[0.0f32; 6]);
    }
}

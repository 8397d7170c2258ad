//! Element-wise math kernels built on the map appliers.
//!
//! Every function here is a one-line instantiation of [`crate::map`],
//! [`crate::map_by`] or [`crate::mask`] with a fixed element type or a fixed
//! operation.

use std::ops::{Add, Div, Mul, Sub};

use num_complex::{Complex32, Complex64};
use num_traits::Float;
use strided_accessors::{Gettable, Settable};

use crate::map::{binary, binary_ndarray, unary, unary_ndarray};
use crate::map_by::{binary_by, binary_by_ndarray, unary_by, unary_by_ndarray, Visit};
use crate::mask::{mskunary, mskunary_ndarray};

// ============================================================================
// Typed maps
// ============================================================================

macro_rules! impl_slice_map {
    ($t:ty, $map:ident, $map_nd:ident, $map2:ident, $map2_nd:ident, $msk:ident, $msk_nd:ident) => {
        #[doc = concat!("Unary map over `", stringify!($t), "` slices.")]
        #[inline]
        pub fn $map<'y, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            y: &'y mut [$t],
            stride_y: isize,
            f: F,
        ) -> &'y mut [$t]
        where
            F: FnMut($t) -> $t,
        {
            unary(n, x, stride_x, y, stride_y, f)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $map_nd<'y, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'y mut [$t],
            stride_y: isize,
            offset_y: usize,
            f: F,
        ) -> &'y mut [$t]
        where
            F: FnMut($t) -> $t,
        {
            unary_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, f)
        }

        #[doc = concat!("Binary map over `", stringify!($t), "` slices.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $map2<'z, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            y: &[$t],
            stride_y: isize,
            z: &'z mut [$t],
            stride_z: isize,
            f: F,
        ) -> &'z mut [$t]
        where
            F: FnMut($t, $t) -> $t,
        {
            binary(n, x, stride_x, y, stride_y, z, stride_z, f)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $map2_nd<'z, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &[$t],
            stride_y: isize,
            offset_y: usize,
            z: &'z mut [$t],
            stride_z: isize,
            offset_z: usize,
            f: F,
        ) -> &'z mut [$t]
        where
            F: FnMut($t, $t) -> $t,
        {
            binary_ndarray(
                n, x, stride_x, offset_x, y, stride_y, offset_y, z, stride_z, offset_z, f,
            )
        }

        #[doc = concat!("Masked unary map over `", stringify!($t), "` slices.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $msk<'y, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            mask: &[u8],
            stride_mask: isize,
            y: &'y mut [$t],
            stride_y: isize,
            f: F,
        ) -> &'y mut [$t]
        where
            F: FnMut($t) -> $t,
        {
            mskunary(n, x, stride_x, mask, stride_mask, y, stride_y, f)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $msk_nd<'y, F>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            mask: &[u8],
            stride_mask: isize,
            offset_mask: usize,
            y: &'y mut [$t],
            stride_y: isize,
            offset_y: usize,
            f: F,
        ) -> &'y mut [$t]
        where
            F: FnMut($t) -> $t,
        {
            mskunary_ndarray(
                n,
                x,
                stride_x,
                offset_x,
                mask,
                stride_mask,
                offset_mask,
                y,
                stride_y,
                offset_y,
                f,
            )
        }
    };
}

impl_slice_map!(f64, dmap, dmap_ndarray, dmap2, dmap2_ndarray, dmskmap, dmskmap_ndarray);
impl_slice_map!(f32, smap, smap_ndarray, smap2, smap2_ndarray, smskmap, smskmap_ndarray);

macro_rules! impl_complex_map {
    ($t:ty, $tag:literal, $map:ident, $map_nd:ident) => {
        #[doc = concat!("Unary map over any buffers of `", $tag, "` elements.")]
        #[inline]
        pub fn $map<'y, X, Y, F>(
            n: isize,
            x: &X,
            stride_x: isize,
            y: &'y mut Y,
            stride_y: isize,
            f: F,
        ) -> &'y mut Y
        where
            X: Gettable<Elem = $t> + ?Sized,
            Y: Settable<Elem = $t> + ?Sized,
            F: FnMut($t) -> $t,
        {
            unary(n, x, stride_x, y, stride_y, f)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $map_nd<'y, X, Y, F>(
            n: isize,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            y: &'y mut Y,
            stride_y: isize,
            offset_y: usize,
            f: F,
        ) -> &'y mut Y
        where
            X: Gettable<Elem = $t> + ?Sized,
            Y: Settable<Elem = $t> + ?Sized,
            F: FnMut($t) -> $t,
        {
            unary_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, f)
        }
    };
}

impl_complex_map!(Complex64, "Complex<f64>", zmap, zmap_ndarray);
impl_complex_map!(Complex32, "Complex<f32>", cmap, cmap_ndarray);

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_binary_op {
    ($op_trait:ident, $op:tt, $name:ident, $name_nd:ident, $by:ident, $by_nd:ident) => {
        #[doc = concat!("`z = x ", stringify!($op), " y` element-wise.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name<'z, T, X, Y, Z>(
            n: isize,
            x: &X,
            stride_x: isize,
            y: &Y,
            stride_y: isize,
            z: &'z mut Z,
            stride_z: isize,
        ) -> &'z mut Z
        where
            T: Copy + $op_trait<Output = T>,
            X: Gettable<Elem = T> + ?Sized,
            Y: Gettable<Elem = T> + ?Sized,
            Z: Settable<Elem = T> + ?Sized,
        {
            binary(n, x, stride_x, y, stride_y, z, stride_z, |a, b| a $op b)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name_nd<'z, T, X, Y, Z>(
            n: isize,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            y: &Y,
            stride_y: isize,
            offset_y: usize,
            z: &'z mut Z,
            stride_z: isize,
            offset_z: usize,
        ) -> &'z mut Z
        where
            T: Copy + $op_trait<Output = T>,
            X: Gettable<Elem = T> + ?Sized,
            Y: Gettable<Elem = T> + ?Sized,
            Z: Settable<Elem = T> + ?Sized,
        {
            binary_ndarray(
                n, x, stride_x, offset_x, y, stride_y, offset_y, z, stride_z, offset_z,
                |a, b| a $op b,
            )
        }

        #[doc = concat!(
            "`z = a ", stringify!($op), " b` where `(a, b)` comes from a callback; ",
            "`None` leaves `z` untouched."
        )]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $by<'z, T, X, Y, Z, C>(
            n: isize,
            x: &X,
            stride_x: isize,
            y: &Y,
            stride_y: isize,
            z: &'z mut Z,
            stride_z: isize,
            clbk: C,
        ) -> &'z mut Z
        where
            T: Copy + $op_trait<Output = T>,
            X: Gettable + ?Sized,
            Y: Gettable + ?Sized,
            Z: Settable<Elem = T> + ?Sized,
            C: FnMut((X::Elem, Y::Elem), Visit<(&X, &Y, &Z), 3>) -> Option<(T, T)>,
        {
            binary_by(n, x, stride_x, y, stride_y, z, stride_z, |a: T, b: T| a $op b, clbk)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $by_nd<'z, T, X, Y, Z, C>(
            n: isize,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            y: &Y,
            stride_y: isize,
            offset_y: usize,
            z: &'z mut Z,
            stride_z: isize,
            offset_z: usize,
            clbk: C,
        ) -> &'z mut Z
        where
            T: Copy + $op_trait<Output = T>,
            X: Gettable + ?Sized,
            Y: Gettable + ?Sized,
            Z: Settable<Elem = T> + ?Sized,
            C: FnMut((X::Elem, Y::Elem), Visit<(&X, &Y, &Z), 3>) -> Option<(T, T)>,
        {
            binary_by_ndarray(
                n,
                x,
                stride_x,
                offset_x,
                y,
                stride_y,
                offset_y,
                z,
                stride_z,
                offset_z,
                |a: T, b: T| a $op b,
                clbk,
            )
        }
    };
}

impl_binary_op!(Add, +, add, add_ndarray, add_by, add_by_ndarray);
impl_binary_op!(Sub, -, sub, sub_ndarray, sub_by, sub_by_ndarray);
impl_binary_op!(Mul, *, mul, mul_ndarray, mul_by, mul_by_ndarray);

/// `z = x / y` element-wise.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn div<'z, T, X, Y, Z>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &'z mut Z,
    stride_z: isize,
) -> &'z mut Z
where
    T: Copy + Div<Output = T>,
    X: Gettable<Elem = T> + ?Sized,
    Y: Gettable<Elem = T> + ?Sized,
    Z: Settable<Elem = T> + ?Sized,
{
    binary(n, x, stride_x, y, stride_y, z, stride_z, |a, b| a / b)
}

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn div_ndarray<'z, T, X, Y, Z>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
    z: &'z mut Z,
    stride_z: isize,
    offset_z: usize,
) -> &'z mut Z
where
    T: Copy + Div<Output = T>,
    X: Gettable<Elem = T> + ?Sized,
    Y: Gettable<Elem = T> + ?Sized,
    Z: Settable<Elem = T> + ?Sized,
{
    binary_ndarray(
        n,
        x,
        stride_x,
        offset_x,
        y,
        stride_y,
        offset_y,
        z,
        stride_z,
        offset_z,
        |a, b| a / b,
    )
}

// ============================================================================
// Special functions
// ============================================================================

/// `max(x, 0)`, with `NaN` passed through.
#[inline]
pub fn ramp<T: Float>(x: T) -> T {
    if x.is_nan() || x > T::zero() {
        x
    } else {
        T::zero()
    }
}

macro_rules! impl_unary_by {
    ($name:ident, $name_nd:ident, $func:expr, $what:literal) => {
        #[doc = concat!("Apply `", $what, "` to callback-selected values; `None` skips.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name<'y, T, X, Y, C>(
            n: isize,
            x: &X,
            stride_x: isize,
            y: &'y mut Y,
            stride_y: isize,
            clbk: C,
        ) -> &'y mut Y
        where
            T: Float,
            X: Gettable + ?Sized,
            Y: Settable<Elem = T> + ?Sized,
            C: FnMut(X::Elem, Visit<(&X, &Y), 2>) -> Option<T>,
        {
            unary_by(n, x, stride_x, y, stride_y, $func, clbk)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name_nd<'y, T, X, Y, C>(
            n: isize,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            y: &'y mut Y,
            stride_y: isize,
            offset_y: usize,
            clbk: C,
        ) -> &'y mut Y
        where
            T: Float,
            X: Gettable + ?Sized,
            Y: Settable<Elem = T> + ?Sized,
            C: FnMut(X::Elem, Visit<(&X, &Y), 2>) -> Option<T>,
        {
            unary_by_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, $func, clbk)
        }
    };
}

impl_unary_by!(abs_by, abs_by_ndarray, |v: T| v.abs(), "abs");
impl_unary_by!(cbrt_by, cbrt_by_ndarray, |v: T| v.cbrt(), "cbrt");
impl_unary_by!(sin_by, sin_by_ndarray, |v: T| v.sin(), "sin");
impl_unary_by!(acos_by, acos_by_ndarray, |v: T| v.acos(), "acos");
impl_unary_by!(acosh_by, acosh_by_ndarray, |v: T| v.acosh(), "acosh");
impl_unary_by!(atanh_by, atanh_by_ndarray, |v: T| v.atanh(), "atanh");

macro_rules! impl_masked {
    ($name:ident, $name_nd:ident, $func:expr, $what:literal) => {
        #[doc = concat!("Apply `", $what, "` where the mask is zero.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name<'y, T, X, M, Y>(
            n: isize,
            x: &X,
            stride_x: isize,
            mask: &M,
            stride_mask: isize,
            y: &'y mut Y,
            stride_y: isize,
        ) -> &'y mut Y
        where
            T: Float,
            X: Gettable<Elem = T> + ?Sized,
            M: Gettable<Elem = u8> + ?Sized,
            Y: Settable<Elem = T> + ?Sized,
        {
            mskunary(n, x, stride_x, mask, stride_mask, y, stride_y, $func)
        }

        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $name_nd<'y, T, X, M, Y>(
            n: isize,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            mask: &M,
            stride_mask: isize,
            offset_mask: usize,
            y: &'y mut Y,
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut Y
        where
            T: Float,
            X: Gettable<Elem = T> + ?Sized,
            M: Gettable<Elem = u8> + ?Sized,
            Y: Settable<Elem = T> + ?Sized,
        {
            mskunary_ndarray(
                n,
                x,
                stride_x,
                offset_x,
                mask,
                stride_mask,
                offset_mask,
                y,
                stride_y,
                offset_y,
                $func,
            )
        }
    };
}

impl_masked!(mskabs, mskabs_ndarray, |v: T| v.abs(), "abs");
impl_masked!(mskceil, mskceil_ndarray, |v: T| v.ceil(), "ceil");
impl_masked!(mskcbrt, mskcbrt_ndarray, |v: T| v.cbrt(), "cbrt");
impl_masked!(mskramp, mskramp_ndarray, ramp::<T>, "ramp");

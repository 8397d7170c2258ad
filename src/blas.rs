//! BLAS level-1 style kernels over strided buffers.
//!
//! The generic kernels (`g*`) work on any [`Gettable`]/[`Settable`] buffers
//! whose element type is a [`Scalar`], including accessor arrays such as
//! [`Complex128Array`](strided_accessors::Complex128Array). The typed
//! variants (`d*`, `s*`, `z*`, `c*`) fix the element type in the usual BLAS
//! naming scheme.

use num_complex::{Complex32, Complex64};
use num_traits::{One, Zero};
use strided_accessors::{resolve_getter, resolve_setter, Gettable, Settable};

use crate::dispatch::{all_unit, is_indexed, is_indexed_mut, select, Path};
use crate::simd;
use crate::walker::{stride2offset, visit_count, walk};

/// Element types usable by the BLAS-style kernels.
///
/// Blanket-implemented for every type with the required arithmetic, so
/// custom numeric types qualify without an explicit impl.
pub trait Scalar:
    Copy + std::ops::Mul<Output = Self> + std::ops::Add<Output = Self> + Zero + One + PartialEq
{
}

impl<T> Scalar for T where
    T: Copy + std::ops::Mul<Output = T> + std::ops::Add<Output = T> + Zero + One + PartialEq
{
}

// ============================================================================
// AXPY
// ============================================================================

/// `y = alpha*x + y` with offsets implied by strides.
pub fn gaxpy<'y, T, X, Y>(
    n: isize,
    alpha: T,
    x: &X,
    stride_x: isize,
    y: &'y mut Y,
    stride_y: isize,
) -> &'y mut Y
where
    T: Scalar,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    let count = visit_count(n);
    let offset_x = stride2offset(count, stride_x);
    let offset_y = stride2offset(count, stride_y);
    gaxpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// `y[iy] = alpha*x[ix] + y[iy]` for `n` lockstep positions.
///
/// When `alpha` is zero, `y` is returned without being read or written.
/// A `NaN` or infinity in `x` therefore does not reach `y` in that case.
#[allow(clippy::too_many_arguments)]
pub fn gaxpy_ndarray<'y, T, X, Y>(
    n: isize,
    alpha: T,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut Y
where
    T: Scalar,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    let n = visit_count(n);
    if n == 0 || alpha == T::zero() {
        return y;
    }
    match select("gaxpy", n, &[is_indexed(x), is_indexed_mut(y)]) {
        Path::Indexed => {
            if let (Some(xs), Some(ys)) = (x.as_slice(), y.as_mut_slice()) {
                if all_unit(&[stride_x, stride_y]) {
                    let xs = &xs[offset_x..offset_x + n];
                    let ys = &mut ys[offset_y..offset_y + n];
                    simd::dispatch_if_large(n, || {
                        for (d, &s) in ys.iter_mut().zip(xs) {
                            *d = alpha * s + *d;
                        }
                    });
                } else {
                    for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                        ys[iy] = alpha * xs[ix] + ys[iy];
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(&*y);
            let set = resolve_setter(&*y);
            for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                let v = alpha * get_x(x, ix) + get_y(y, iy);
                set(y, iy, v);
            }
        }
    }
    y
}

/// AXPY where `x` and `y` are two traversals of the same buffer.
///
/// Positions are processed in order, so overlapping traversals see the
/// values written at earlier positions. Same `alpha == 0` rule as
/// [`gaxpy_ndarray`].
#[allow(clippy::too_many_arguments)]
pub fn gaxpy_within_ndarray<'b, T, B>(
    n: isize,
    alpha: T,
    buf: &'b mut B,
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
) -> &'b mut B
where
    T: Scalar,
    B: Settable<Elem = T> + ?Sized,
{
    let n = visit_count(n);
    if n == 0 || alpha == T::zero() {
        return buf;
    }
    match select("gaxpy_within", n, &[is_indexed_mut(buf)]) {
        Path::Indexed => {
            if let Some(s) = buf.as_mut_slice() {
                for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                    s[iy] = alpha * s[ix] + s[iy];
                }
            }
        }
        Path::Accessor => {
            let get = resolve_getter(&*buf);
            let set = resolve_setter(&*buf);
            for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                let v = alpha * get(buf, ix) + get(buf, iy);
                set(buf, iy, v);
            }
        }
    }
    buf
}

// ============================================================================
// SCAL / COPY / SWAP
// ============================================================================

/// `x = alpha*x` in place, offset implied by the stride.
pub fn gscal<'x, T, X>(n: isize, alpha: T, x: &'x mut X, stride_x: isize) -> &'x mut X
where
    T: Scalar,
    X: Settable<Elem = T> + ?Sized,
{
    let offset_x = stride2offset(visit_count(n), stride_x);
    gscal_ndarray(n, alpha, x, stride_x, offset_x)
}

/// `x[ix] = alpha*x[ix]` for `n` positions.
pub fn gscal_ndarray<'x, T, X>(
    n: isize,
    alpha: T,
    x: &'x mut X,
    stride_x: isize,
    offset_x: usize,
) -> &'x mut X
where
    T: Scalar,
    X: Settable<Elem = T> + ?Sized,
{
    let n = visit_count(n);
    if n == 0 {
        return x;
    }
    match select("gscal", n, &[is_indexed_mut(x)]) {
        Path::Indexed => {
            if let Some(xs) = x.as_mut_slice() {
                if stride_x == 1 {
                    let xs = &mut xs[offset_x..offset_x + n];
                    simd::dispatch_if_large(n, || {
                        for v in xs.iter_mut() {
                            *v = alpha * *v;
                        }
                    });
                } else {
                    for [ix] in walk(n, [stride_x], [offset_x]) {
                        xs[ix] = alpha * xs[ix];
                    }
                }
            }
        }
        Path::Accessor => {
            let get = resolve_getter(&*x);
            let set = resolve_setter(&*x);
            for [ix] in walk(n, [stride_x], [offset_x]) {
                let v = alpha * get(x, ix);
                set(x, ix, v);
            }
        }
    }
    x
}

/// `y = x` with offsets implied by strides.
pub fn gcopy<'y, T, X, Y>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &'y mut Y,
    stride_y: isize,
) -> &'y mut Y
where
    T: Copy,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    crate::map::unary(n, x, stride_x, y, stride_y, |v| v)
}

/// `y[iy] = x[ix]` for `n` lockstep positions.
#[allow(clippy::too_many_arguments)]
pub fn gcopy_ndarray<'y, T, X, Y>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut Y
where
    T: Copy,
    X: Gettable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    crate::map::unary_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, |v| v)
}

/// Exchange `x` and `y`, offsets implied by strides. Returns `y`.
pub fn gswap<'y, T, X, Y>(
    n: isize,
    x: &mut X,
    stride_x: isize,
    y: &'y mut Y,
    stride_y: isize,
) -> &'y mut Y
where
    T: Copy,
    X: Settable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    let count = visit_count(n);
    let offset_x = stride2offset(count, stride_x);
    let offset_y = stride2offset(count, stride_y);
    gswap_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Exchange `x[ix]` and `y[iy]` for `n` lockstep positions. Returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn gswap_ndarray<'y, T, X, Y>(
    n: isize,
    x: &mut X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
) -> &'y mut Y
where
    T: Copy,
    X: Settable<Elem = T> + ?Sized,
    Y: Settable<Elem = T> + ?Sized,
{
    let n = visit_count(n);
    if n == 0 {
        return y;
    }
    match select("gswap", n, &[is_indexed_mut(x), is_indexed_mut(y)]) {
        Path::Indexed => {
            if let (Some(xs), Some(ys)) = (x.as_mut_slice(), y.as_mut_slice()) {
                if all_unit(&[stride_x, stride_y]) {
                    xs[offset_x..offset_x + n].swap_with_slice(&mut ys[offset_y..offset_y + n]);
                } else {
                    for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                        std::mem::swap(&mut xs[ix], &mut ys[iy]);
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(&*x);
            let set_x = resolve_setter(&*x);
            let get_y = resolve_getter(&*y);
            let set_y = resolve_setter(&*y);
            for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                let a = get_x(x, ix);
                let b = get_y(y, iy);
                set_x(x, ix, b);
                set_y(y, iy, a);
            }
        }
    }
    y
}

// ============================================================================
// DOT
// ============================================================================

/// `sum_i x[i]*y[i]` with offsets implied by strides.
pub fn gdot<T, X, Y>(n: isize, x: &X, stride_x: isize, y: &Y, stride_y: isize) -> T
where
    T: Scalar,
    X: Gettable<Elem = T> + ?Sized,
    Y: Gettable<Elem = T> + ?Sized,
{
    let count = visit_count(n);
    let offset_x = stride2offset(count, stride_x);
    let offset_y = stride2offset(count, stride_y);
    gdot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
}

/// Dot product over `n` lockstep positions; zero when `n <= 0`.
///
/// No conjugation is applied to complex inputs.
pub fn gdot_ndarray<T, X, Y>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
) -> T
where
    T: Scalar,
    X: Gettable<Elem = T> + ?Sized,
    Y: Gettable<Elem = T> + ?Sized,
{
    let n = visit_count(n);
    if n == 0 {
        return T::zero();
    }
    let positions = walk(n, [stride_x, stride_y], [offset_x, offset_y]);
    match select("gdot", n, &[is_indexed(x), is_indexed(y)]) {
        Path::Indexed => {
            if let (Some(xs), Some(ys)) = (x.as_slice(), y.as_slice()) {
                if all_unit(&[stride_x, stride_y]) {
                    let xs = &xs[offset_x..offset_x + n];
                    let ys = &ys[offset_y..offset_y + n];
                    return simd::dispatch_if_large(n, || {
                        xs.iter()
                            .zip(ys)
                            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
                    });
                }
                return positions.fold(T::zero(), |acc, [ix, iy]| acc + xs[ix] * ys[iy]);
            }
            T::zero()
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            positions.fold(T::zero(), |acc, [ix, iy]| {
                acc + get_x(x, ix) * get_y(y, iy)
            })
        }
    }
}

// ============================================================================
// Typed instantiations
// ============================================================================

macro_rules! impl_real_blas {
    (
        $t:ty, $tag:literal,
        $axpy:ident, $axpy_nd:ident,
        $scal:ident, $scal_nd:ident,
        $copy:ident, $copy_nd:ident,
        $swap:ident, $swap_nd:ident,
        $dot:ident, $dot_nd:ident
    ) => {
        #[doc = concat!("[`gaxpy`] over `", $tag, "` slices.")]
        #[inline]
        pub fn $axpy<'y>(
            n: isize,
            alpha: $t,
            x: &[$t],
            stride_x: isize,
            y: &'y mut [$t],
            stride_y: isize,
        ) -> &'y mut [$t] {
            gaxpy(n, alpha, x, stride_x, y, stride_y)
        }

        #[doc = concat!("[`gaxpy_ndarray`] over `", $tag, "` slices.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $axpy_nd<'y>(
            n: isize,
            alpha: $t,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'y mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut [$t] {
            gaxpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("[`gscal`] over a `", $tag, "` slice.")]
        #[inline]
        pub fn $scal(n: isize, alpha: $t, x: &mut [$t], stride_x: isize) -> &mut [$t] {
            gscal(n, alpha, x, stride_x)
        }

        #[doc = concat!("[`gscal_ndarray`] over a `", $tag, "` slice.")]
        #[inline]
        pub fn $scal_nd(
            n: isize,
            alpha: $t,
            x: &mut [$t],
            stride_x: isize,
            offset_x: usize,
        ) -> &mut [$t] {
            gscal_ndarray(n, alpha, x, stride_x, offset_x)
        }

        #[doc = concat!("[`gcopy`] over `", $tag, "` slices.")]
        #[inline]
        pub fn $copy<'y>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            y: &'y mut [$t],
            stride_y: isize,
        ) -> &'y mut [$t] {
            gcopy(n, x, stride_x, y, stride_y)
        }

        #[doc = concat!("[`gcopy_ndarray`] over `", $tag, "` slices.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $copy_nd<'y>(
            n: isize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &'y mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut [$t] {
            gcopy_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("[`gswap`] over `", $tag, "` slices.")]
        #[inline]
        pub fn $swap<'y>(
            n: isize,
            x: &mut [$t],
            stride_x: isize,
            y: &'y mut [$t],
            stride_y: isize,
        ) -> &'y mut [$t] {
            gswap(n, x, stride_x, y, stride_y)
        }

        #[doc = concat!("[`gswap_ndarray`] over `", $tag, "` slices.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $swap_nd<'y>(
            n: isize,
            x: &mut [$t],
            stride_x: isize,
            offset_x: usize,
            y: &'y mut [$t],
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut [$t] {
            gswap_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("[`gdot`] over `", $tag, "` slices.")]
        #[inline]
        pub fn $dot(n: isize, x: &[$t], stride_x: isize, y: &[$t], stride_y: isize) -> $t {
            gdot(n, x, stride_x, y, stride_y)
        }

        #[doc = concat!("[`gdot_ndarray`] over `", $tag, "` slices.")]
        #[inline]
        pub fn $dot_nd(
            n: isize,
            x: &[$t],
            stride_x: isize,
            offset_x: usize,
            y: &[$t],
            stride_y: isize,
            offset_y: usize,
        ) -> $t {
            gdot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y)
        }
    };
}

impl_real_blas!(
    f64, "f64", daxpy, daxpy_ndarray, dscal, dscal_ndarray, dcopy, dcopy_ndarray, dswap,
    dswap_ndarray, ddot, ddot_ndarray
);
impl_real_blas!(
    f32, "f32", saxpy, saxpy_ndarray, sscal, sscal_ndarray, scopy, scopy_ndarray, sswap,
    sswap_ndarray, sdot, sdot_ndarray
);

macro_rules! impl_complex_blas {
    ($t:ty, $tag:literal, $axpy:ident, $axpy_nd:ident, $scal:ident, $scal_nd:ident) => {
        #[doc = concat!("[`gaxpy`] over any buffers of `", $tag, "` elements.")]
        #[inline]
        pub fn $axpy<'y, X, Y>(
            n: isize,
            alpha: $t,
            x: &X,
            stride_x: isize,
            y: &'y mut Y,
            stride_y: isize,
        ) -> &'y mut Y
        where
            X: Gettable<Elem = $t> + ?Sized,
            Y: Settable<Elem = $t> + ?Sized,
        {
            gaxpy(n, alpha, x, stride_x, y, stride_y)
        }

        #[doc = concat!("[`gaxpy_ndarray`] over any buffers of `", $tag, "` elements.")]
        #[inline]
        #[allow(clippy::too_many_arguments)]
        pub fn $axpy_nd<'y, X, Y>(
            n: isize,
            alpha: $t,
            x: &X,
            stride_x: isize,
            offset_x: usize,
            y: &'y mut Y,
            stride_y: isize,
            offset_y: usize,
        ) -> &'y mut Y
        where
            X: Gettable<Elem = $t> + ?Sized,
            Y: Settable<Elem = $t> + ?Sized,
        {
            gaxpy_ndarray(n, alpha, x, stride_x, offset_x, y, stride_y, offset_y)
        }

        #[doc = concat!("[`gscal`] over any buffer of `", $tag, "` elements.")]
        #[inline]
        pub fn $scal<'x, X>(n: isize, alpha: $t, x: &'x mut X, stride_x: isize) -> &'x mut X
        where
            X: Settable<Elem = $t> + ?Sized,
        {
            gscal(n, alpha, x, stride_x)
        }

        #[doc = concat!("[`gscal_ndarray`] over any buffer of `", $tag, "` elements.")]
        #[inline]
        pub fn $scal_nd<'x, X>(
            n: isize,
            alpha: $t,
            x: &'x mut X,
            stride_x: isize,
            offset_x: usize,
        ) -> &'x mut X
        where
            X: Settable<Elem = $t> + ?Sized,
        {
            gscal_ndarray(n, alpha, x, stride_x, offset_x)
        }
    };
}

impl_complex_blas!(Complex64, "Complex<f64>", zaxpy, zaxpy_ndarray, zscal, zscal_ndarray);
impl_complex_blas!(Complex32, "Complex<f32>", caxpy, caxpy_ndarray, cscal, cscal_ndarray);

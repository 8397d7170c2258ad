//! Masked map kernels.
//!
//! A mask is a strided `u8` buffer traversed in lockstep with the data.
//! A nonzero mask element marks the position as masked: the output element
//! there is left untouched and `f` is not called.

use strided_accessors::{resolve_getter, resolve_setter, Gettable, Settable};

use crate::dispatch::{is_indexed, is_indexed_mut, select, Path};
use crate::walker::{stride2offset, visit_count, walk};

/// Masked unary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn mskunary<'y, X, M, Y, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    mask: &M,
    stride_mask: isize,
    y: &'y mut Y,
    stride_y: isize,
    f: F,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    M: Gettable<Elem = u8> + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let count = visit_count(n);
    mskunary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        mask,
        stride_mask,
        stride2offset(count, stride_mask),
        y,
        stride_y,
        stride2offset(count, stride_y),
        f,
    )
}

/// `y[iy] = f(x[ix])` wherever `mask[im] == 0`.
#[allow(clippy::too_many_arguments)]
pub fn mskunary_ndarray<'y, X, M, Y, F>(
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
    mut f: F,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    M: Gettable<Elem = u8> + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return y;
    }
    let strides = [stride_x, stride_mask, stride_y];
    let offsets = [offset_x, offset_mask, offset_y];
    let probes = [is_indexed(x), is_indexed(mask), is_indexed_mut(y)];
    match select("mskunary", n, &probes) {
        Path::Indexed => {
            if let (Some(xs), Some(ms), Some(ys)) =
                (x.as_slice(), mask.as_slice(), y.as_mut_slice())
            {
                for [ix, im, iy] in walk(n, strides, offsets) {
                    if ms[im] == 0 {
                        ys[iy] = f(xs[ix]);
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_m = resolve_getter(mask);
            let set = resolve_setter(&*y);
            for [ix, im, iy] in walk(n, strides, offsets) {
                if get_m(mask, im) == 0 {
                    set(y, iy, f(get_x(x, ix)));
                }
            }
        }
    }
    y
}

/// Masked binary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn mskbinary<'z, X, Y, M, Z, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    mask: &M,
    stride_mask: isize,
    z: &'z mut Z,
    stride_z: isize,
    f: F,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    M: Gettable<Elem = u8> + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem) -> Z::Elem,
{
    let count = visit_count(n);
    mskbinary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        y,
        stride_y,
        stride2offset(count, stride_y),
        mask,
        stride_mask,
        stride2offset(count, stride_mask),
        z,
        stride_z,
        stride2offset(count, stride_z),
        f,
    )
}

/// `z[iz] = f(x[ix], y[iy])` wherever `mask[im] == 0`.
#[allow(clippy::too_many_arguments)]
pub fn mskbinary_ndarray<'z, X, Y, M, Z, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
    mask: &M,
    stride_mask: isize,
    offset_mask: usize,
    z: &'z mut Z,
    stride_z: isize,
    offset_z: usize,
    mut f: F,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    M: Gettable<Elem = u8> + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem) -> Z::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return z;
    }
    let strides = [stride_x, stride_y, stride_mask, stride_z];
    let offsets = [offset_x, offset_y, offset_mask, offset_z];
    let probes = [
        is_indexed(x),
        is_indexed(y),
        is_indexed(mask),
        is_indexed_mut(z),
    ];
    match select("mskbinary", n, &probes) {
        Path::Indexed => {
            if let (Some(xs), Some(ys), Some(ms), Some(zs)) =
                (x.as_slice(), y.as_slice(), mask.as_slice(), z.as_mut_slice())
            {
                for [ix, iy, im, iz] in walk(n, strides, offsets) {
                    if ms[im] == 0 {
                        zs[iz] = f(xs[ix], ys[iy]);
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let get_m = resolve_getter(mask);
            let set = resolve_setter(&*z);
            for [ix, iy, im, iz] in walk(n, strides, offsets) {
                if get_m(mask, im) == 0 {
                    set(z, iz, f(get_x(x, ix), get_y(y, iy)));
                }
            }
        }
    }
    z
}

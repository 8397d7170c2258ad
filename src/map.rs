//! Element-wise map kernels.
//!
//! `nullary` fills, `unary` maps one input, `binary` through `quinary` zip
//! two to five inputs. Each reads through the resolved path (see
//! [`crate::dispatch`]) and writes one output per visited position.

use strided_accessors::{resolve_getter, resolve_setter, Gettable, Settable};

use crate::dispatch::{all_unit, is_indexed, is_indexed_mut, select, Path};
use crate::simd;
use crate::walker::{stride2offset, visit_count, walk};

// ============================================================================
// Nullary
// ============================================================================

/// Fill `y` with values produced by `f`, offsets implied by strides.
pub fn nullary<'y, Y, F>(n: isize, y: &'y mut Y, stride_y: isize, f: F) -> &'y mut Y
where
    Y: Settable + ?Sized,
    F: FnMut() -> Y::Elem,
{
    let offset_y = stride2offset(visit_count(n), stride_y);
    nullary_ndarray(n, y, stride_y, offset_y, f)
}

/// Fill `y[offset_y + i*stride_y]` with `f()` for `i = 0..n`.
pub fn nullary_ndarray<'y, Y, F>(
    n: isize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
    mut f: F,
) -> &'y mut Y
where
    Y: Settable + ?Sized,
    F: FnMut() -> Y::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return y;
    }
    match select("nullary", n, &[is_indexed_mut(y)]) {
        Path::Indexed => {
            if let Some(ys) = y.as_mut_slice() {
                if stride_y == 1 {
                    let ys = &mut ys[offset_y..offset_y + n];
                    simd::dispatch_if_large(n, || {
                        for d in ys.iter_mut() {
                            *d = f();
                        }
                    });
                } else {
                    for [iy] in walk(n, [stride_y], [offset_y]) {
                        ys[iy] = f();
                    }
                }
            }
        }
        Path::Accessor => {
            let set = resolve_setter(&*y);
            for [iy] in walk(n, [stride_y], [offset_y]) {
                set(y, iy, f());
            }
        }
    }
    y
}

// ============================================================================
// Unary
// ============================================================================

/// Apply `f` to `n` elements of `x`, writing into `y`; offsets implied by
/// strides.
pub fn unary<'y, X, Y, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &'y mut Y,
    stride_y: isize,
    f: F,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let count = visit_count(n);
    let offset_x = stride2offset(count, stride_x);
    let offset_y = stride2offset(count, stride_y);
    unary_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, f)
}

/// `y[iy] = f(x[ix])` with `ix = offset_x + i*stride_x`,
/// `iy = offset_y + i*stride_y`, `i = 0..n`.
///
/// `n <= 0` leaves `y` untouched. Returns `y`.
///
/// # Panics
/// Panics if a visited index is outside its buffer.
#[allow(clippy::too_many_arguments)]
pub fn unary_ndarray<'y, X, Y, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
    mut f: F,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return y;
    }
    match select("unary", n, &[is_indexed(x), is_indexed_mut(y)]) {
        Path::Indexed => {
            if let (Some(xs), Some(ys)) = (x.as_slice(), y.as_mut_slice()) {
                if all_unit(&[stride_x, stride_y]) {
                    let xs = &xs[offset_x..offset_x + n];
                    let ys = &mut ys[offset_y..offset_y + n];
                    simd::dispatch_if_large(n, || {
                        for (d, &s) in ys.iter_mut().zip(xs) {
                            *d = f(s);
                        }
                    });
                } else {
                    for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                        ys[iy] = f(xs[ix]);
                    }
                }
            }
        }
        Path::Accessor => {
            let get = resolve_getter(x);
            let set = resolve_setter(&*y);
            for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                let v = get(x, ix);
                set(y, iy, f(v));
            }
        }
    }
    y
}

/// Unary map whose input and output traversals share one buffer.
///
/// Each position is read at `offset_x + i*stride_x` and then written at
/// `offset_y + i*stride_y`, in order. Overlapping traversals observe earlier
/// writes; no aliasing detection is performed.
#[allow(clippy::too_many_arguments)]
pub fn unary_within_ndarray<'b, B, F>(
    n: isize,
    buf: &'b mut B,
    stride_x: isize,
    offset_x: usize,
    stride_y: isize,
    offset_y: usize,
    mut f: F,
) -> &'b mut B
where
    B: Settable + ?Sized,
    F: FnMut(B::Elem) -> B::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return buf;
    }
    match select("unary_within", n, &[is_indexed_mut(buf)]) {
        Path::Indexed => {
            if let Some(s) = buf.as_mut_slice() {
                for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                    s[iy] = f(s[ix]);
                }
            }
        }
        Path::Accessor => {
            let get = resolve_getter(&*buf);
            let set = resolve_setter(&*buf);
            for [ix, iy] in walk(n, [stride_x, stride_y], [offset_x, offset_y]) {
                let v = get(buf, ix);
                set(buf, iy, f(v));
            }
        }
    }
    buf
}

// ============================================================================
// Binary
// ============================================================================

/// Binary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn binary<'z, X, Y, Z, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &'z mut Z,
    stride_z: isize,
    f: F,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem) -> Z::Elem,
{
    let count = visit_count(n);
    binary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        y,
        stride_y,
        stride2offset(count, stride_y),
        z,
        stride_z,
        stride2offset(count, stride_z),
        f,
    )
}

/// `z[iz] = f(x[ix], y[iy])` for `n` lockstep positions.
#[allow(clippy::too_many_arguments)]
pub fn binary_ndarray<'z, X, Y, Z, F>(
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
    mut f: F,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem) -> Z::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return z;
    }
    let strides = [stride_x, stride_y, stride_z];
    let offsets = [offset_x, offset_y, offset_z];
    match select(
        "binary",
        n,
        &[is_indexed(x), is_indexed(y), is_indexed_mut(z)],
    ) {
        Path::Indexed => {
            if let (Some(xs), Some(ys), Some(zs)) = (x.as_slice(), y.as_slice(), z.as_mut_slice())
            {
                if all_unit(&strides) {
                    let xs = &xs[offset_x..offset_x + n];
                    let ys = &ys[offset_y..offset_y + n];
                    let zs = &mut zs[offset_z..offset_z + n];
                    simd::dispatch_if_large(n, || {
                        for ((d, &a), &b) in zs.iter_mut().zip(xs).zip(ys) {
                            *d = f(a, b);
                        }
                    });
                } else {
                    for [ix, iy, iz] in walk(n, strides, offsets) {
                        zs[iz] = f(xs[ix], ys[iy]);
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let set = resolve_setter(&*z);
            for [ix, iy, iz] in walk(n, strides, offsets) {
                let v = f(get_x(x, ix), get_y(y, iy));
                set(z, iz, v);
            }
        }
    }
    z
}

// ============================================================================
// Ternary / Quaternary / Quinary
// ============================================================================

/// Ternary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn ternary<'w, X, Y, Z, W, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &Z,
    stride_z: isize,
    w: &'w mut W,
    stride_w: isize,
    f: F,
) -> &'w mut W
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let count = visit_count(n);
    ternary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        y,
        stride_y,
        stride2offset(count, stride_y),
        z,
        stride_z,
        stride2offset(count, stride_z),
        w,
        stride_w,
        stride2offset(count, stride_w),
        f,
    )
}

/// `w[iw] = f(x[ix], y[iy], z[iz])` for `n` lockstep positions.
#[allow(clippy::too_many_arguments)]
pub fn ternary_ndarray<'w, X, Y, Z, W, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
    z: &Z,
    stride_z: isize,
    offset_z: usize,
    w: &'w mut W,
    stride_w: isize,
    offset_w: usize,
    mut f: F,
) -> &'w mut W
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem) -> W::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return w;
    }
    let strides = [stride_x, stride_y, stride_z, stride_w];
    let offsets = [offset_x, offset_y, offset_z, offset_w];
    let probes = [is_indexed(x), is_indexed(y), is_indexed(z), is_indexed_mut(w)];
    match select("ternary", n, &probes) {
        Path::Indexed => {
            if let (Some(xs), Some(ys), Some(zs), Some(ws)) =
                (x.as_slice(), y.as_slice(), z.as_slice(), w.as_mut_slice())
            {
                for [ix, iy, iz, iw] in walk(n, strides, offsets) {
                    ws[iw] = f(xs[ix], ys[iy], zs[iz]);
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let get_z = resolve_getter(z);
            let set = resolve_setter(&*w);
            for [ix, iy, iz, iw] in walk(n, strides, offsets) {
                let v = f(get_x(x, ix), get_y(y, iy), get_z(z, iz));
                set(w, iw, v);
            }
        }
    }
    w
}

/// Quaternary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn quaternary<'u, X, Y, Z, W, U, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &Z,
    stride_z: isize,
    w: &W,
    stride_w: isize,
    u: &'u mut U,
    stride_u: isize,
    f: F,
) -> &'u mut U
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Gettable + ?Sized,
    U: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem, W::Elem) -> U::Elem,
{
    let count = visit_count(n);
    quaternary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        y,
        stride_y,
        stride2offset(count, stride_y),
        z,
        stride_z,
        stride2offset(count, stride_z),
        w,
        stride_w,
        stride2offset(count, stride_w),
        u,
        stride_u,
        stride2offset(count, stride_u),
        f,
    )
}

/// `u[iu] = f(x[ix], y[iy], z[iz], w[iw])` for `n` lockstep positions.
#[allow(clippy::too_many_arguments)]
pub fn quaternary_ndarray<'u, X, Y, Z, W, U, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
    z: &Z,
    stride_z: isize,
    offset_z: usize,
    w: &W,
    stride_w: isize,
    offset_w: usize,
    u: &'u mut U,
    stride_u: isize,
    offset_u: usize,
    mut f: F,
) -> &'u mut U
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Gettable + ?Sized,
    U: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem, W::Elem) -> U::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return u;
    }
    let strides = [stride_x, stride_y, stride_z, stride_w, stride_u];
    let offsets = [offset_x, offset_y, offset_z, offset_w, offset_u];
    let probes = [
        is_indexed(x),
        is_indexed(y),
        is_indexed(z),
        is_indexed(w),
        is_indexed_mut(u),
    ];
    match select("quaternary", n, &probes) {
        Path::Indexed => {
            if let (Some(xs), Some(ys), Some(zs), Some(ws), Some(us)) = (
                x.as_slice(),
                y.as_slice(),
                z.as_slice(),
                w.as_slice(),
                u.as_mut_slice(),
            ) {
                for [ix, iy, iz, iw, iu] in walk(n, strides, offsets) {
                    us[iu] = f(xs[ix], ys[iy], zs[iz], ws[iw]);
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let get_z = resolve_getter(z);
            let get_w = resolve_getter(w);
            let set = resolve_setter(&*u);
            for [ix, iy, iz, iw, iu] in walk(n, strides, offsets) {
                let v = f(get_x(x, ix), get_y(y, iy), get_z(z, iz), get_w(w, iw));
                set(u, iu, v);
            }
        }
    }
    u
}

/// Quinary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn quinary<'v, X, Y, Z, W, U, V, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &Z,
    stride_z: isize,
    w: &W,
    stride_w: isize,
    u: &U,
    stride_u: isize,
    v: &'v mut V,
    stride_v: isize,
    f: F,
) -> &'v mut V
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Gettable + ?Sized,
    U: Gettable + ?Sized,
    V: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem, W::Elem, U::Elem) -> V::Elem,
{
    let count = visit_count(n);
    quinary_ndarray(
        n,
        x,
        stride_x,
        stride2offset(count, stride_x),
        y,
        stride_y,
        stride2offset(count, stride_y),
        z,
        stride_z,
        stride2offset(count, stride_z),
        w,
        stride_w,
        stride2offset(count, stride_w),
        u,
        stride_u,
        stride2offset(count, stride_u),
        v,
        stride_v,
        stride2offset(count, stride_v),
        f,
    )
}

/// `v[iv] = f(x[ix], y[iy], z[iz], w[iw], u[iu])` for `n` lockstep positions.
#[allow(clippy::too_many_arguments)]
pub fn quinary_ndarray<'v, X, Y, Z, W, U, V, F>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &Y,
    stride_y: isize,
    offset_y: usize,
    z: &Z,
    stride_z: isize,
    offset_z: usize,
    w: &W,
    stride_w: isize,
    offset_w: usize,
    u: &U,
    stride_u: isize,
    offset_u: usize,
    v: &'v mut V,
    stride_v: isize,
    offset_v: usize,
    mut f: F,
) -> &'v mut V
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Gettable + ?Sized,
    W: Gettable + ?Sized,
    U: Gettable + ?Sized,
    V: Settable + ?Sized,
    F: FnMut(X::Elem, Y::Elem, Z::Elem, W::Elem, U::Elem) -> V::Elem,
{
    let n = visit_count(n);
    if n == 0 {
        return v;
    }
    let strides = [stride_x, stride_y, stride_z, stride_w, stride_u, stride_v];
    let offsets = [offset_x, offset_y, offset_z, offset_w, offset_u, offset_v];
    let probes = [
        is_indexed(x),
        is_indexed(y),
        is_indexed(z),
        is_indexed(w),
        is_indexed(u),
        is_indexed_mut(v),
    ];
    match select("quinary", n, &probes) {
        Path::Indexed => {
            if let (Some(xs), Some(ys), Some(zs), Some(ws), Some(us), Some(vs)) = (
                x.as_slice(),
                y.as_slice(),
                z.as_slice(),
                w.as_slice(),
                u.as_slice(),
                v.as_mut_slice(),
            ) {
                for [ix, iy, iz, iw, iu, iv] in walk(n, strides, offsets) {
                    vs[iv] = f(xs[ix], ys[iy], zs[iz], ws[iw], us[iu]);
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let get_z = resolve_getter(z);
            let get_w = resolve_getter(w);
            let get_u = resolve_getter(u);
            let set = resolve_setter(&*v);
            for [ix, iy, iz, iw, iu, iv] in walk(n, strides, offsets) {
                let out = f(
                    get_x(x, ix),
                    get_y(y, iy),
                    get_z(z, iz),
                    get_w(w, iw),
                    get_u(u, iu),
                );
                set(v, iv, out);
            }
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex32;
    use strided_accessors::{Complex64Array, FnAccessor};

    #[test]
    fn test_unary_contiguous() {
        let x = [1.0, -2.0, 3.0, -4.0, 5.0];
        let mut y = [0.0; 5];
        unary_ndarray(5, &x[..], 1, 0, &mut y[..], 1, 0, f64::abs);
        assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_unary_nonpositive_n_is_noop() {
        let x = [1.0, -2.0, 3.0];
        let mut y = [9.0, 9.0, 9.0];
        unary(0, &x[..], 1, &mut y[..], 1, f64::abs);
        unary(-1, &x[..], 1, &mut y[..], 1, f64::abs);
        assert_eq!(y, [9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_unary_x_stride() {
        let x = [-1.0, -2.0, -3.0, -4.0, -5.0];
        let mut y = [0.0; 5];
        unary(3, &x[..], 2, &mut y[..], 1, f64::abs);
        assert_eq!(y, [1.0, 3.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unary_negative_strides() {
        let x = [-1.0, -2.0, -3.0, -4.0, -5.0];
        let mut y = [0.0; 5];
        // Same logical elements as a positive traversal, reversed physically.
        unary_ndarray(3, &x[..], -2, 4, &mut y[..], -1, 3, f64::abs);
        assert_eq!(y, [0.0, 1.0, 3.0, 5.0, 0.0]);

        let mut y = [0.0; 5];
        unary(3, &x[..], -2, &mut y[..], -1, f64::abs);
        assert_eq!(y, [1.0, 3.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unary_offsets() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut y = [0.0; 5];
        unary_ndarray(3, &x[..], 1, 2, &mut y[..], 1, 1, |v| v * 10.0);
        assert_eq!(y, [0.0, 30.0, 40.0, 50.0, 0.0]);
    }

    #[test]
    fn test_unary_returns_same_buffer() {
        let x = vec![1.0f64, 2.0];
        let mut y = vec![0.0f64; 2];
        let expected: *const Vec<f64> = &y;
        let out = unary(2, &x, 1, &mut y, 1, |v| v);
        assert!(std::ptr::eq(out, expected));
    }

    #[test]
    fn test_unary_complex_accessors() {
        let xbuf = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = Complex64Array::new(&xbuf[..]).unwrap();
        let mut ybuf = [0.0f32; 6];
        let mut y = Complex64Array::new(&mut ybuf[..]).unwrap();
        unary(3, &x, 1, &mut y, 1, |c: Complex32| c * 2.0);
        assert_eq!(ybuf, [2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn test_unary_accessor_input_plain_output() {
        let xbuf = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = Complex64Array::new(&xbuf[..]).unwrap();
        let mut y = [0.0f32; 3];
        unary(3, &x, 1, &mut y[..], 1, |c: Complex32| c.re);
        assert_eq!(y, [1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_unary_custom_output_accessor() {
        let x = [1.0f32, 2.0, 3.0];
        let mut y = FnAccessor::new(
            vec![0.0f32; 3],
            |b: &Vec<f32>, i| b[i],
            |b: &mut Vec<f32>, i, v: f32| b[i] = v * 2.0,
        );
        unary(3, &x[..], 1, &mut y, 1, |v| v);
        assert_eq!(y.into_inner(), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_unary_within_shift() {
        let mut buf = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // Read forward from index 1, write forward from index 0.
        unary_within_ndarray(4, &mut buf, 1, 1, 1, 0, |v| v * 10.0);
        assert_eq!(buf, vec![20.0, 30.0, 40.0, 50.0, 5.0]);
    }

    #[test]
    fn test_unary_within_accessor_matches_indexed() {
        // Reads run backwards over the positions being written forwards,
        // so later reads observe earlier writes.
        let values: Vec<Complex32> = (1..=4)
            .map(|k| Complex32::new(k as f32, -(k as f32)))
            .collect();
        let mut plain = values.clone();
        unary_within_ndarray(4, &mut plain[..], -1, 3, 1, 0, |c: Complex32| c);
        assert_eq!(plain, vec![values[3], values[2], values[2], values[3]]);

        let mut boxed = values;
        {
            let mut arr = Complex64Array::from_complex_mut(&mut boxed);
            unary_within_ndarray(4, &mut arr, -1, 3, 1, 0, |c: Complex32| c);
        }
        assert_eq!(boxed, plain);
    }

    #[test]
    fn test_unary_within_fn_accessor_propagates() {
        let mut plain = vec![1.0f64, 0.0, 0.0, 0.0];
        unary_within_ndarray(3, &mut plain, 1, 0, 1, 1, |v| v + 1.0);
        assert_eq!(plain, vec![1.0, 2.0, 3.0, 4.0]);

        let mut acc = FnAccessor::new(
            vec![1.0f64, 0.0, 0.0, 0.0],
            |b: &Vec<f64>, i| b[i],
            |b: &mut Vec<f64>, i, v: f64| b[i] = v,
        );
        unary_within_ndarray(3, &mut acc, 1, 0, 1, 1, |v| v + 1.0);
        assert_eq!(acc.into_inner(), plain);
    }

    #[test]
    fn test_nullary() {
        let mut y = [0.0; 5];
        let mut k = 0.0;
        nullary(3, &mut y[..], 2, || {
            k += 1.0;
            k
        });
        assert_eq!(y, [1.0, 0.0, 2.0, 0.0, 3.0]);

        let mut y = [0.0; 3];
        let mut k = 0.0;
        nullary(3, &mut y[..], -1, || {
            k += 1.0;
            k
        });
        assert_eq!(y, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_binary_strides_and_accessors() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 20.0];
        let mut z = [0.0; 2];
        binary(2, &x[..], 2, &y[..], -1, &mut z[..], 1, |a, b| a + b);
        assert_eq!(z, [21.0, 13.0]);

        let xbuf = [1.0f32, 1.0, 2.0, 2.0];
        let x = Complex64Array::new(&xbuf[..]).unwrap();
        let y = [Complex32::new(0.5, 0.5); 2];
        let mut zbuf = [0.0f32; 4];
        let mut z = Complex64Array::new(&mut zbuf[..]).unwrap();
        binary(2, &x, 1, &y[..], 1, &mut z, 1, |a, b| a + b);
        assert_eq!(zbuf, [1.5, 1.5, 2.5, 2.5]);
    }

    #[test]
    fn test_ternary_and_quaternary() {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let z = [7.0, 8.0, 9.0];
        let mut w = [0.0; 3];
        ternary(3, &x[..], 1, &y[..], 1, &z[..], 1, &mut w[..], 1, |a, b, c| {
            a + b + c
        });
        assert_eq!(w, [12.0, 15.0, 18.0]);

        let v = [1.0, 1.0, 1.0];
        let mut u = [0.0; 3];
        quaternary(
            3,
            &x[..],
            1,
            &y[..],
            1,
            &z[..],
            1,
            &v[..],
            -1,
            &mut u[..],
            -1,
            |a, b, c, d| a * b - c + d,
        );
        assert_eq!(u, [10.0, 3.0, -2.0]);
    }

    #[test]
    fn test_quinary_strides_and_offsets() {
        let x = [1.0, 2.0, 3.0];
        let y = [0.0, 10.0, 0.0, 20.0];
        let z = [100.0, 200.0];
        let w = [5.0, 6.0, 7.0];
        let u = [2.0, 3.0];
        let mut v = [0.0; 4];
        quinary_ndarray(
            2,
            &x[..],
            1,
            1,
            &y[..],
            2,
            1,
            &z[..],
            -1,
            1,
            &w[..],
            1,
            0,
            &u[..],
            1,
            0,
            &mut v[..],
            -2,
            3,
            |a, b, c, d, e| (a + b + c - d) * e,
        );
        // i=0: (2 + 10 + 200 - 5) * 2; i=1: (3 + 20 + 100 - 6) * 3
        assert_eq!(v, [0.0, 351.0, 0.0, 414.0]);

        let xbuf = [1.0f32, 0.0, 2.0, 0.0];
        let x = Complex64Array::new(&xbuf[..]).unwrap();
        let ones = [Complex32::new(1.0, 0.0); 2];
        let mut out = [Complex32::default(); 2];
        quinary(
            2,
            &x,
            1,
            &ones[..],
            1,
            &ones[..],
            1,
            &ones[..],
            1,
            &ones[..],
            1,
            &mut out[..],
            -1,
            |a, b, c, d, e| a + b + c + d + e,
        );
        assert_eq!(out, [Complex32::new(6.0, 0.0), Complex32::new(5.0, 0.0)]);

        let mut untouched = [9.0];
        let one = [1.0];
        quinary(
            0,
            &one[..],
            1,
            &one[..],
            1,
            &one[..],
            1,
            &one[..],
            1,
            &one[..],
            1,
            &mut untouched[..],
            1,
            |a, b, c, d, e| a + b + c + d + e,
        );
        assert_eq!(untouched, [9.0]);
    }
}

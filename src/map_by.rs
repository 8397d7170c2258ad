//! Map kernels with a per-element callback.
//!
//! The callback sees each input value together with a [`Visit`] describing
//! where the traversal is. Returning `None` skips the write at that
//! position; the output element is left as it was and all cursors still
//! advance. Returning `Some(v)` stores `f(v)`.

use strided_accessors::{resolve_getter, resolve_setter, Gettable, Settable};

use crate::dispatch::{is_indexed, is_indexed_mut, select, Path};
use crate::walker::{stride2offset, visit_count, walk};

/// Traversal position handed to `*_by` callbacks.
///
/// `arrays` holds shared references to every buffer of the call (inputs
/// first, output last), so a callback may look at neighbouring elements.
#[derive(Debug, Clone, Copy)]
pub struct Visit<A, const K: usize> {
    /// Logical iteration index, `0..n`.
    pub index: usize,
    /// Physical index into each buffer, in argument order.
    pub indices: [usize; K],
    pub arrays: A,
}

// ============================================================================
// Unary
// ============================================================================

/// Callback unary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn unary_by<'y, X, Y, V, F, C>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &'y mut Y,
    stride_y: isize,
    f: F,
    clbk: C,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(V) -> Y::Elem,
    C: FnMut(X::Elem, Visit<(&X, &Y), 2>) -> Option<V>,
{
    let count = visit_count(n);
    let offset_x = stride2offset(count, stride_x);
    let offset_y = stride2offset(count, stride_y);
    unary_by_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, f, clbk)
}

/// For each position, `v = clbk(x[ix], visit)`; on `Some(v)` store
/// `y[iy] = f(v)`, on `None` leave `y[iy]` untouched.
#[allow(clippy::too_many_arguments)]
pub fn unary_by_ndarray<'y, X, Y, V, F, C>(
    n: isize,
    x: &X,
    stride_x: isize,
    offset_x: usize,
    y: &'y mut Y,
    stride_y: isize,
    offset_y: usize,
    mut f: F,
    mut clbk: C,
) -> &'y mut Y
where
    X: Gettable + ?Sized,
    Y: Settable + ?Sized,
    F: FnMut(V) -> Y::Elem,
    C: FnMut(X::Elem, Visit<(&X, &Y), 2>) -> Option<V>,
{
    let n = visit_count(n);
    if n == 0 {
        return y;
    }
    let positions = walk(n, [stride_x, stride_y], [offset_x, offset_y]).enumerate();
    match select("unary_by", n, &[is_indexed(x), is_indexed_mut(y)]) {
        Path::Indexed => {
            if let Some(xs) = x.as_slice() {
                for (index, indices @ [ix, iy]) in positions {
                    let visit = Visit {
                        index,
                        indices,
                        arrays: (x, &*y),
                    };
                    if let Some(v) = clbk(xs[ix], visit) {
                        y.set(iy, f(v));
                    }
                }
            }
        }
        Path::Accessor => {
            let get = resolve_getter(x);
            let set = resolve_setter(&*y);
            for (index, indices @ [ix, iy]) in positions {
                let visit = Visit {
                    index,
                    indices,
                    arrays: (x, &*y),
                };
                if let Some(v) = clbk(get(x, ix), visit) {
                    set(y, iy, f(v));
                }
            }
        }
    }
    y
}

// ============================================================================
// Binary
// ============================================================================

/// Callback binary map with offsets implied by strides.
#[allow(clippy::too_many_arguments)]
pub fn binary_by<'z, X, Y, Z, A, B, F, C>(
    n: isize,
    x: &X,
    stride_x: isize,
    y: &Y,
    stride_y: isize,
    z: &'z mut Z,
    stride_z: isize,
    f: F,
    clbk: C,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(A, B) -> Z::Elem,
    C: FnMut((X::Elem, Y::Elem), Visit<(&X, &Y, &Z), 3>) -> Option<(A, B)>,
{
    let count = visit_count(n);
    binary_by_ndarray(
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
        clbk,
    )
}

/// For each position, `(a, b) = clbk((x[ix], y[iy]), visit)`; on `Some`
/// store `z[iz] = f(a, b)`, on `None` leave `z[iz]` untouched.
#[allow(clippy::too_many_arguments)]
pub fn binary_by_ndarray<'z, X, Y, Z, A, B, F, C>(
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
    mut clbk: C,
) -> &'z mut Z
where
    X: Gettable + ?Sized,
    Y: Gettable + ?Sized,
    Z: Settable + ?Sized,
    F: FnMut(A, B) -> Z::Elem,
    C: FnMut((X::Elem, Y::Elem), Visit<(&X, &Y, &Z), 3>) -> Option<(A, B)>,
{
    let n = visit_count(n);
    if n == 0 {
        return z;
    }
    let positions = walk(
        n,
        [stride_x, stride_y, stride_z],
        [offset_x, offset_y, offset_z],
    )
    .enumerate();
    match select(
        "binary_by",
        n,
        &[is_indexed(x), is_indexed(y), is_indexed_mut(z)],
    ) {
        Path::Indexed => {
            if let (Some(xs), Some(ys)) = (x.as_slice(), y.as_slice()) {
                for (index, indices @ [ix, iy, iz]) in positions {
                    let visit = Visit {
                        index,
                        indices,
                        arrays: (x, y, &*z),
                    };
                    if let Some((a, b)) = clbk((xs[ix], ys[iy]), visit) {
                        z.set(iz, f(a, b));
                    }
                }
            }
        }
        Path::Accessor => {
            let get_x = resolve_getter(x);
            let get_y = resolve_getter(y);
            let set = resolve_setter(&*z);
            for (index, indices @ [ix, iy, iz]) in positions {
                let visit = Visit {
                    index,
                    indices,
                    arrays: (x, y, &*z),
                };
                if let Some((a, b)) = clbk((get_x(x, ix), get_y(y, iy)), visit) {
                    set(z, iz, f(a, b));
                }
            }
        }
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use strided_accessors::Complex128Array;

    #[test]
    fn test_unary_by_skips_none() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [-1.0; 4];
        unary_by(4, &x[..], 1, &mut y[..], 1, |v: f64| v * 10.0, |v, visit| {
            if visit.index % 2 == 1 {
                None
            } else {
                Some(v)
            }
        });
        assert_eq!(y, [10.0, -1.0, 30.0, -1.0]);
    }

    #[test]
    fn test_unary_by_visit_indices() {
        let x = [0.0; 5];
        let mut y = [0.0; 3];
        let mut seen = Vec::new();
        unary_by_ndarray(
            3,
            &x[..],
            -2,
            4,
            &mut y[..],
            1,
            0,
            |v: f64| v,
            |v, visit| {
                seen.push((visit.index, visit.indices));
                Some(v)
            },
        );
        assert_eq!(seen, vec![(0, [4, 0]), (1, [2, 1]), (2, [0, 2])]);
    }

    #[test]
    fn test_unary_by_sees_output_buffer() {
        // Running sum: each callback reads the previously written output.
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut y = [0.0; 4];
        unary_by(4, &x[..], 1, &mut y[..], 1, |v: f64| v, |v, visit| {
            let (_, out) = visit.arrays;
            let prev = if visit.index == 0 {
                0.0
            } else {
                out[visit.indices[1] - 1]
            };
            Some(prev + v)
        });
        assert_eq!(y, [1.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn test_unary_by_accessor_path() {
        let xbuf = [1.0, 1.0, 2.0, -2.0, 3.0, 0.5];
        let x = Complex128Array::new(&xbuf[..]).unwrap();
        let mut y = [0.0f64; 3];
        unary_by(3, &x, 1, &mut y[..], -1, |c: Complex64| c.norm_sqr(), |c, visit| {
            (visit.index != 1).then_some(c)
        });
        assert_eq!(y, [9.25, 0.0, 2.0]);
    }

    #[test]
    fn test_unary_by_nonpositive_n() {
        let x = [1.0];
        let mut y = [5.0];
        let mut calls = 0;
        unary_by(0, &x[..], 1, &mut y[..], 1, |v: f64| v, |v, _| {
            calls += 1;
            Some(v)
        });
        assert_eq!(calls, 0);
        assert_eq!(y, [5.0]);
    }

    #[test]
    fn test_binary_by() {
        let x = [1.0, 2.0, 3.0];
        let y = [10.0, 20.0, 30.0];
        let mut z = [0.0; 3];
        binary_by(
            3,
            &x[..],
            1,
            &y[..],
            -1,
            &mut z[..],
            1,
            |a: f64, b: f64| a + b,
            |(a, b), visit| {
                assert_eq!(visit.indices[1], 2 - visit.index);
                (a < 3.0).then_some((a, b))
            },
        );
        assert_eq!(z, [31.0, 22.0, 0.0]);
    }

    #[test]
    fn test_binary_by_accessor_output() {
        let x = [1.0, 2.0];
        let y = [3.0, 4.0];
        let mut zbuf = [0.0; 4];
        let mut z = Complex128Array::new(&mut zbuf[..]).unwrap();
        binary_by(
            2,
            &x[..],
            1,
            &y[..],
            1,
            &mut z,
            1,
            |re: f64, im: f64| Complex64::new(re, im),
            |pair, _| Some(pair),
        );
        assert_eq!(zbuf, [1.0, 3.0, 2.0, 4.0]);
    }
}

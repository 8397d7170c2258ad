//! Dispatch between direct indexing and accessor functions.
//!
//! Each kernel probes its buffers once per call. If every buffer can lend a
//! contiguous slice, the kernel indexes the slices directly (and, when all
//! strides are `1`, iterates subslices so the loop can vectorize).
//! Otherwise it resolves a get/set function pair per buffer and walks
//! through those.
//!
//! The choice depends only on the buffer types; it performs no computation
//! of its own.

use strided_accessors::{Gettable, Settable};

/// Traversal strategy chosen for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Every buffer is indexed directly.
    Indexed,
    /// At least one buffer requires accessor functions.
    Accessor,
}

impl Path {
    /// `Indexed` iff every probe succeeded.
    #[inline]
    pub fn resolve(indexable: &[bool]) -> Path {
        if indexable.iter().all(|&ok| ok) {
            Path::Indexed
        } else {
            Path::Accessor
        }
    }
}

/// Whether `buf` supports direct indexed reads.
#[inline]
pub fn is_indexed<B: Gettable + ?Sized>(buf: &B) -> bool {
    buf.as_slice().is_some()
}

/// Whether `buf` supports direct indexed writes.
#[inline]
pub fn is_indexed_mut<B: Settable + ?Sized>(buf: &mut B) -> bool {
    buf.as_mut_slice().is_some()
}

/// Resolve the path for a kernel call and record the decision.
#[inline]
pub(crate) fn select(kernel: &'static str, n: usize, indexable: &[bool]) -> Path {
    let path = Path::resolve(indexable);
    tracing::trace!(
        target: "strided_base::dispatch",
        kernel,
        n,
        ?path,
        "strided kernel dispatch"
    );
    path
}

/// Whether every stride is `1`, so the indexed path may iterate subslices.
#[inline]
pub(crate) fn all_unit(strides: &[isize]) -> bool {
    strides.iter().all(|&s| s == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strided_accessors::Complex128Array;

    #[test]
    fn test_resolve() {
        assert_eq!(Path::resolve(&[true, true]), Path::Indexed);
        assert_eq!(Path::resolve(&[true, false]), Path::Accessor);
        assert_eq!(Path::resolve(&[false]), Path::Accessor);
        assert_eq!(Path::resolve(&[]), Path::Indexed);
    }

    #[test]
    fn test_probes() {
        let mut plain = vec![1.0f64, 2.0];
        let mut parts = vec![0.0f64; 4];
        let mut complex = Complex128Array::new(&mut parts[..]).unwrap();
        assert!(is_indexed(&plain));
        assert!(is_indexed_mut(&mut plain));
        assert!(!is_indexed(&complex));
        assert!(!is_indexed_mut(&mut complex));
    }

    #[test]
    fn test_select_is_pure() {
        for _ in 0..3 {
            assert_eq!(select("test", 4, &[true, false]), Path::Accessor);
            assert_eq!(select("test", 4, &[true, true]), Path::Indexed);
        }
    }

    #[test]
    fn test_all_unit() {
        assert!(all_unit(&[1, 1, 1]));
        assert!(!all_unit(&[1, -1]));
        assert!(!all_unit(&[2]));
    }
}

//! Runtime target-feature dispatch for the contiguous kernel loops.
//!
//! With the `simd` feature, unit-stride loops run inside
//! `pulp::Arch::dispatch` so the compiler may vectorize them for the best
//! instruction set detected at run time. Without it the closure is called
//! directly. Results are identical either way.

use crate::SIMD_MIN_LEN;

/// Run `f` under the detected architecture.
#[inline(always)]
pub(crate) fn dispatch<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "simd")]
    {
        pulp::Arch::new().dispatch(f)
    }
    #[cfg(not(feature = "simd"))]
    {
        f()
    }
}

/// Run `f` under SIMD runtime dispatch when the loop is long enough to pay
/// for the dispatch overhead.
#[inline(always)]
pub(crate) fn dispatch_if_large<R>(len: usize, f: impl FnOnce() -> R) -> R {
    if len >= SIMD_MIN_LEN {
        dispatch(f)
    } else {
        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_closure() {
        let mut hits = 0;
        dispatch_if_large(4, || hits += 1);
        dispatch_if_large(SIMD_MIN_LEN, || hits += 1);
        assert_eq!(hits, 2);
        assert_eq!(dispatch(|| 7), 7);
    }
}

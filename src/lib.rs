//! Strided traversal engine for one-dimensional numeric buffers.
//!
//! Every kernel in this crate is a thin instantiation of one pattern: walk
//! `N` logical positions across one or more buffers, each with its own
//! stride (positive or negative) and starting offset, read inputs, apply a
//! function, and write the result.
//!
//! # Core Pieces
//!
//! - Element accessors ([`Gettable`] / [`Settable`], from `strided-accessors`):
//!   uniform access to plain buffers and accessor arrays such as
//!   [`Complex128Array`]
//! - [`walker`]: physical index sequences `offset + i*stride`
//! - [`dispatch`]: per-call choice between direct indexing and accessor
//!   functions
//! - [`map`], [`map_by`], [`mask`]: the kernel appliers
//!
//! # Kernels
//!
//! - [`blas`]: AXPY, SCAL, COPY, SWAP and DOT over generic and typed buffers
//! - [`math`]: element-wise arithmetic and special functions
//! - [`view`]: validated strided vectors for call sites that want errors
//!   instead of panics
//!
//! # Calling Conventions
//!
//! Each kernel comes in two forms:
//!
//! - `kernel(n, x, stride_x, y, stride_y, ..)`: offsets are implied; a
//!   negative stride starts from the tail (`(1 - n) * stride`)
//! - `kernel_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, ..)`:
//!   offsets are explicit
//!
//! `n <= 0` is a no-op. Both forms return the output buffer they were given.
//!
//! # Example
//!
//! ```rust
//! use strided_base::{daxpy_ndarray, unary};
//!
//! let x = [1.0, -2.0, 3.0, -4.0, 5.0];
//! let mut y = [0.0; 5];
//! unary(5, &x[..], 1, &mut y[..], 1, f64::abs);
//! assert_eq!(y, [1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! // Reverse traversal of every other element of `x`.
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let mut y = [6.0, 7.0, 8.0, 9.0, 10.0];
//! daxpy_ndarray(3, 3.0, &x, -2, 4, &mut y, -1, 3);
//! assert_eq!(y, [6.0, 10.0, 17.0, 24.0, 10.0]);
//! ```

pub mod blas;
pub mod dispatch;
pub mod iter;
pub mod map;
pub mod map_by;
pub mod mask;
pub mod math;
mod simd;
pub mod view;
pub mod walker;

pub use strided_accessors::{
    accessors, is_accessor_array, reinterpret, reinterpret_mut, resolve_getter, resolve_setter,
    AccessorError, AccessorInfo, Complex128Array, Complex64Array, ComplexArray, DType, Element,
    FnAccessor, Gettable, Settable,
};

// ============================================================================
// Kernel appliers
// ============================================================================
pub use map::{
    binary, binary_ndarray, nullary, nullary_ndarray, quaternary, quaternary_ndarray, quinary,
    quinary_ndarray, ternary, ternary_ndarray, unary, unary_ndarray, unary_within_ndarray,
};
pub use map_by::{binary_by, binary_by_ndarray, unary_by, unary_by_ndarray, Visit};
pub use mask::{mskbinary, mskbinary_ndarray, mskunary, mskunary_ndarray};

// ============================================================================
// BLAS-style kernels
// ============================================================================
pub use blas::{
    caxpy, caxpy_ndarray, cscal, cscal_ndarray, daxpy, daxpy_ndarray, dcopy, dcopy_ndarray, ddot,
    ddot_ndarray, dscal, dscal_ndarray, dswap, dswap_ndarray, gaxpy, gaxpy_ndarray,
    gaxpy_within_ndarray, gcopy, gcopy_ndarray, gdot, gdot_ndarray, gscal, gscal_ndarray, gswap,
    gswap_ndarray, saxpy, saxpy_ndarray, scopy, scopy_ndarray, sdot, sdot_ndarray, sscal,
    sscal_ndarray, sswap, sswap_ndarray, zaxpy, zaxpy_ndarray, zscal, zscal_ndarray, Scalar,
};

// ============================================================================
// Traversal utilities
// ============================================================================
pub use dispatch::Path;
pub use iter::{strided_values, StridedValues};
pub use view::{StridedVector, StridedVectorMut};
pub use walker::{checked_stride2offset, indices, stride2offset, walk, StridedWalk};

/// Minimum traversal length for which contiguous loops go through SIMD
/// runtime dispatch (with the `simd` feature).
pub const SIMD_MIN_LEN: usize = 64;

// ============================================================================
// Error types
// ============================================================================

/// Errors raised by validated entry points.
///
/// The traversal engine itself never fails; these are produced only where a
/// call site asks for validation (see [`view`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// A zero stride cannot traverse more than `n` > 1 elements.
    #[error("invalid stride 0 for traversal of {n} elements")]
    ZeroStride { n: usize },

    /// The traversal visits an index outside a buffer of `len` elements.
    #[error("index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },

    /// Integer overflow while computing a traversal index.
    #[error("offset overflow while computing traversal indices")]
    OffsetOverflow,

    /// Two traversals have different logical lengths.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error(transparent)]
    Accessor(#[from] AccessorError),
}

/// Result type for validated strided operations.
pub type Result<T> = std::result::Result<T, StridedError>;

//! Element accessor traits shared across the strided-base ecosystem.
//!
//! Strided kernels read and write buffers through two capabilities:
//!
//! - [`Gettable`] / [`Settable`]: indexed element access, implemented both by
//!   plain contiguous buffers (`[T]`, `Vec<T>`) and by accessor arrays whose
//!   elements must be boxed/unboxed on access (e.g. [`Complex128Array`]).
//! - [`DType`]: a runtime tag describing the element representation, backed
//!   by a static metadata table indexed by the enum.
//!
//! Downstream crates can depend on `strided-accessors` to implement these
//! traits for their own buffer types without orphan rule violations.

pub mod accessor;
pub mod complex;
pub mod dtype;
pub mod element;

pub use accessor::{
    accessors, is_accessor_array, resolve_getter, resolve_setter, AccessorInfo, FnAccessor,
    GetFn, Gettable, SetFn, Settable,
};
pub use complex::{
    reinterpret, reinterpret_mut, Complex128Array, Complex64Array, ComplexArray, ComplexPart,
};
pub use dtype::{DType, DTypeInfo, DTypeKind};
pub use element::Element;

/// Errors raised while constructing accessors or parsing dtype tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessorError {
    /// The dtype tag is not one of the supported names.
    #[error("unknown dtype: {0:?}")]
    UnknownDType(String),

    /// Interleaved complex storage needs an even number of real slots.
    #[error("interleaved complex buffer has odd length {0}")]
    OddLength(usize),
}

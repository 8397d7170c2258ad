//! Element dtype tags.
//!
//! Every buffer reports a [`DType`]. The tag is used solely to describe
//! the element representation; accessor functions themselves are bound per
//! buffer type at compile time (see [`crate::accessor`]).

use std::fmt;
use std::str::FromStr;

use crate::AccessorError;

/// Supported element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DType {
    Float64 = 0,
    Float32,
    Int32,
    Int16,
    Int8,
    Uint32,
    Uint16,
    Uint8,
    Complex128,
    Complex64,
    Bool,
    /// Anything else: accessed through plain indexing, no boxing.
    Generic,
}

/// Broad classification of a dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DTypeKind {
    Float,
    SignedInt,
    UnsignedInt,
    Complex,
    Bool,
    Generic,
}

/// Static metadata for a [`DType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DTypeInfo {
    pub name: &'static str,
    /// Size of one logical element, `None` for [`DType::Generic`].
    pub bytes_per_element: Option<usize>,
    pub kind: DTypeKind,
}

const fn info(name: &'static str, bytes: Option<usize>, kind: DTypeKind) -> DTypeInfo {
    DTypeInfo {
        name,
        bytes_per_element: bytes,
        kind,
    }
}

// Indexed by `DType as usize`; order must match the enum declaration.
static DTYPES: [DTypeInfo; 12] = [
    info("float64", Some(8), DTypeKind::Float),
    info("float32", Some(4), DTypeKind::Float),
    info("int32", Some(4), DTypeKind::SignedInt),
    info("int16", Some(2), DTypeKind::SignedInt),
    info("int8", Some(1), DTypeKind::SignedInt),
    info("uint32", Some(4), DTypeKind::UnsignedInt),
    info("uint16", Some(2), DTypeKind::UnsignedInt),
    info("uint8", Some(1), DTypeKind::UnsignedInt),
    info("complex128", Some(16), DTypeKind::Complex),
    info("complex64", Some(8), DTypeKind::Complex),
    info("bool", Some(1), DTypeKind::Bool),
    info("generic", None, DTypeKind::Generic),
];

impl DType {
    /// All tags, in table order.
    pub const ALL: [DType; 12] = [
        DType::Float64,
        DType::Float32,
        DType::Int32,
        DType::Int16,
        DType::Int8,
        DType::Uint32,
        DType::Uint16,
        DType::Uint8,
        DType::Complex128,
        DType::Complex64,
        DType::Bool,
        DType::Generic,
    ];

    #[inline]
    pub fn info(self) -> &'static DTypeInfo {
        &DTYPES[self as usize]
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[inline]
    pub fn bytes_per_element(self) -> Option<usize> {
        self.info().bytes_per_element
    }

    #[inline]
    pub fn kind(self) -> DTypeKind {
        self.info().kind
    }

    #[inline]
    pub fn is_complex(self) -> bool {
        self.kind() == DTypeKind::Complex
    }

    #[inline]
    pub fn is_floating_point(self) -> bool {
        matches!(self.kind(), DTypeKind::Float | DTypeKind::Complex)
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self.kind(), DTypeKind::SignedInt | DTypeKind::UnsignedInt)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = AccessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dt| dt.name() == s)
            .ok_or_else(|| AccessorError::UnknownDType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, dt) in DType::ALL.iter().enumerate() {
            assert_eq!(*dt as usize, i);
            assert_eq!(dt.info(), &DTYPES[i]);
        }
    }

    #[test]
    fn test_parse_roundtrip_names() {
        for dt in DType::ALL {
            assert_eq!(dt.name().parse::<DType>().unwrap(), dt);
            assert_eq!(dt.to_string(), dt.name());
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "float16".parse::<DType>().unwrap_err();
        assert_eq!(err, AccessorError::UnknownDType("float16".into()));
    }

    #[test]
    fn test_predicates() {
        assert!(DType::Complex64.is_complex());
        assert!(DType::Complex128.is_floating_point());
        assert!(DType::Float32.is_floating_point());
        assert!(!DType::Float32.is_complex());
        assert!(DType::Uint8.is_integer());
        assert!(!DType::Bool.is_integer());
        assert_eq!(DType::Complex128.bytes_per_element(), Some(16));
        assert_eq!(DType::Generic.bytes_per_element(), None);
    }
}

//! Error types for simdvec operations.
//!
//! Every fallible vector operation fails synchronously at the call site and
//! never leaves a partially written destination behind.

use std::fmt;

use crate::simd::ElementKind;

/// Errors that can occur during simdvec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdError {
    /// The element type is outside the closed set of supported primitives.
    UnsupportedElementType {
        /// Name of the offending type, as reported by `std::any::type_name`.
        type_name: &'static str,
    },
    /// Indexed element access outside `[0, count)`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of elements in the vector.
        count: usize,
    },
    /// A source or destination sequence is shorter than the operation needs.
    InsufficientLength {
        /// Number of elements the operation needs.
        required: usize,
        /// Number of elements that were available.
        actual: usize,
    },
    /// An aligned access was attempted on memory that does not meet the
    /// vector alignment.
    Misaligned {
        /// Address of the first element.
        address: usize,
        /// Required alignment in bytes.
        alignment: usize,
    },
    /// Two runtime-tagged vectors (or a vector and a requested type) have
    /// different element kinds.
    ElementKindMismatch {
        /// The element kind that was expected.
        expected: ElementKind,
        /// The element kind that was found.
        actual: ElementKind,
    },
    /// Two input slices of a slice-level algorithm differ in length.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
}

impl fmt::Display for SimdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdError::UnsupportedElementType { type_name } => {
                write!(f, "Unsupported element type: {type_name} is not a vector element")
            }
            SimdError::IndexOutOfRange { index, count } => write!(
                f,
                "Index out of range: {index} (vector has {count} elements)"
            ),
            SimdError::InsufficientLength { required, actual } => write!(
                f,
                "Insufficient length: {required} elements required, {actual} available"
            ),
            SimdError::Misaligned { address, alignment } => write!(
                f,
                "Misaligned access: address {address:#x} is not {alignment}-byte aligned"
            ),
            SimdError::ElementKindMismatch { expected, actual } => write!(
                f,
                "Element kind mismatch: expected {expected}, found {actual}"
            ),
            SimdError::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: left has {left} elements, right has {right}")
            }
        }
    }
}

impl std::error::Error for SimdError {}

/// Result type alias for simdvec operations.
pub type Result<T> = std::result::Result<T, SimdError>;

/// Creates an unsupported element type error for `T`.
pub fn unsupported_element_type<T: ?Sized>() -> SimdError {
    SimdError::UnsupportedElementType {
        type_name: std::any::type_name::<T>(),
    }
}

/// Creates an index out of range error.
pub fn index_out_of_range(index: usize, count: usize) -> SimdError {
    SimdError::IndexOutOfRange { index, count }
}

/// Creates an insufficient length error.
pub fn insufficient_length(required: usize, actual: usize) -> SimdError {
    SimdError::InsufficientLength { required, actual }
}

/// Creates a misaligned access error.
pub fn misaligned(address: usize, alignment: usize) -> SimdError {
    SimdError::Misaligned { address, alignment }
}

/// Creates an element kind mismatch error.
pub fn element_kind_mismatch(expected: ElementKind, actual: ElementKind) -> SimdError {
    SimdError::ElementKindMismatch { expected, actual }
}

/// Creates a length mismatch error.
pub fn length_mismatch(left: usize, right: usize) -> SimdError {
    SimdError::LengthMismatch { left, right }
}

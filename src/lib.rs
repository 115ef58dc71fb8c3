//! Generic fixed-width SIMD vectors.
//!
//! [`Vector128<T>`](simd::Vector128) holds `16 / size_of::<T>()` elements of
//! one of twelve primitive types and is defined as a pair of
//! [`Vector64<T>`](simd::Vector64) halves. Every operation on the wide vector
//! is the half-width operation applied to both halves. When the build script
//! detects SSE2 or NEON on the host, some operators run a native instruction
//! instead, with bit-identical results.

pub mod error;
pub mod platform;
pub mod simd;

pub use error::{Result, SimdError};
pub use simd::{
    DynVector128, ElementKind, SimdAdd, SimdCmp, SimdElement, SimdSearch, SimdSum, SimdVector,
    Vector128, Vector64,
};

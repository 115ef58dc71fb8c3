//! Generic 128-bit vectors and their 64-bit halves.

mod accel;
pub mod dynamic;
pub mod element;
mod memory;
mod ops;
pub mod slice;
pub mod traits;
pub mod vector128;
pub mod vector64;

pub use dynamic::DynVector128;
pub use element::{count_of, is_supported, ElementKind, SimdElement};
pub use traits::{SimdAdd, SimdCmp, SimdSearch, SimdSum, SimdVector};
pub use vector128::Vector128;
pub use vector64::Vector64;

//! `Vector128` over an element type chosen at runtime.
//!
//! [`DynVector128`] holds one variant per [`ElementKind`]. Constructors accept
//! any `'static` type and check it against the supported set before building
//! anything, so a caller that only knows `T` at runtime gets
//! `UnsupportedElementType` instead of a compile error.

use std::any::Any;
use std::fmt;
use std::ops::{Neg, Not};

use crate::error::{element_kind_mismatch, Result, SimdError};
use crate::simd::element::{ElementKind, SimdElement, VECTOR128_BYTES};
use crate::simd::Vector128;

/// A 128-bit vector tagged with its element kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DynVector128 {
    U8(Vector128<u8>),
    I8(Vector128<i8>),
    U16(Vector128<u16>),
    I16(Vector128<i16>),
    U32(Vector128<u32>),
    I32(Vector128<i32>),
    U64(Vector128<u64>),
    I64(Vector128<i64>),
    Usize(Vector128<usize>),
    Isize(Vector128<isize>),
    F32(Vector128<f32>),
    F64(Vector128<f64>),
}

/// Runs `$body` with `$e` aliased to the element type named by `$kind`.
macro_rules! with_kind {
    ($kind:expr, $e:ident => $body:expr) => {
        match $kind {
            ElementKind::U8 => { type $e = u8; $body }
            ElementKind::I8 => { type $e = i8; $body }
            ElementKind::U16 => { type $e = u16; $body }
            ElementKind::I16 => { type $e = i16; $body }
            ElementKind::U32 => { type $e = u32; $body }
            ElementKind::I32 => { type $e = i32; $body }
            ElementKind::U64 => { type $e = u64; $body }
            ElementKind::I64 => { type $e = i64; $body }
            ElementKind::Usize => { type $e = usize; $body }
            ElementKind::Isize => { type $e = isize; $body }
            ElementKind::F32 => { type $e = f32; $body }
            ElementKind::F64 => { type $e = f64; $body }
        }
    };
}

/// Runs `$body` on the inner vector, whatever its element type.
macro_rules! dispatch {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            DynVector128::U8($v) => $body,
            DynVector128::I8($v) => $body,
            DynVector128::U16($v) => $body,
            DynVector128::I16($v) => $body,
            DynVector128::U32($v) => $body,
            DynVector128::I32($v) => $body,
            DynVector128::U64($v) => $body,
            DynVector128::I64($v) => $body,
            DynVector128::Usize($v) => $body,
            DynVector128::Isize($v) => $body,
            DynVector128::F32($v) => $body,
            DynVector128::F64($v) => $body,
        }
    };
}

/// Like `dispatch!`, but rewraps the resulting vector in the same variant.
macro_rules! dispatch_map {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            DynVector128::U8($v) => DynVector128::U8($body),
            DynVector128::I8($v) => DynVector128::I8($body),
            DynVector128::U16($v) => DynVector128::U16($body),
            DynVector128::I16($v) => DynVector128::I16($body),
            DynVector128::U32($v) => DynVector128::U32($body),
            DynVector128::I32($v) => DynVector128::I32($body),
            DynVector128::U64($v) => DynVector128::U64($body),
            DynVector128::I64($v) => DynVector128::I64($body),
            DynVector128::Usize($v) => DynVector128::Usize($body),
            DynVector128::Isize($v) => DynVector128::Isize($body),
            DynVector128::F32($v) => DynVector128::F32($body),
            DynVector128::F64($v) => DynVector128::F64($body),
        }
    };
}

/// Applies `$body` to two vectors of the same kind.
macro_rules! dispatch_binary {
    ($lhs:expr, $rhs:expr, $a:ident, $b:ident => $body:expr) => {
        match ($lhs, $rhs) {
            (DynVector128::U8($a), DynVector128::U8($b)) => Ok(DynVector128::U8($body)),
            (DynVector128::I8($a), DynVector128::I8($b)) => Ok(DynVector128::I8($body)),
            (DynVector128::U16($a), DynVector128::U16($b)) => Ok(DynVector128::U16($body)),
            (DynVector128::I16($a), DynVector128::I16($b)) => Ok(DynVector128::I16($body)),
            (DynVector128::U32($a), DynVector128::U32($b)) => Ok(DynVector128::U32($body)),
            (DynVector128::I32($a), DynVector128::I32($b)) => Ok(DynVector128::I32($body)),
            (DynVector128::U64($a), DynVector128::U64($b)) => Ok(DynVector128::U64($body)),
            (DynVector128::I64($a), DynVector128::I64($b)) => Ok(DynVector128::I64($body)),
            (DynVector128::Usize($a), DynVector128::Usize($b)) => Ok(DynVector128::Usize($body)),
            (DynVector128::Isize($a), DynVector128::Isize($b)) => Ok(DynVector128::Isize($body)),
            (DynVector128::F32($a), DynVector128::F32($b)) => Ok(DynVector128::F32($body)),
            (DynVector128::F64($a), DynVector128::F64($b)) => Ok(DynVector128::F64($body)),
            (lhs, rhs) => Err(element_kind_mismatch(lhs.kind(), rhs.kind())),
        }
    };
}

/// Reads `value` as `U`. Only called once the kinds are known to agree.
fn cast<T: Any, U: Any + Copy>(value: &T, expected: ElementKind, actual: ElementKind) -> Result<U> {
    (value as &dyn Any)
        .downcast_ref::<U>()
        .copied()
        .ok_or_else(|| element_kind_mismatch(expected, actual))
}

#[allow(clippy::should_implement_trait)]
impl DynVector128 {
    pub fn kind(&self) -> ElementKind {
        match self {
            DynVector128::U8(_) => ElementKind::U8,
            DynVector128::I8(_) => ElementKind::I8,
            DynVector128::U16(_) => ElementKind::U16,
            DynVector128::I16(_) => ElementKind::I16,
            DynVector128::U32(_) => ElementKind::U32,
            DynVector128::I32(_) => ElementKind::I32,
            DynVector128::U64(_) => ElementKind::U64,
            DynVector128::I64(_) => ElementKind::I64,
            DynVector128::Usize(_) => ElementKind::Usize,
            DynVector128::Isize(_) => ElementKind::Isize,
            DynVector128::F32(_) => ElementKind::F32,
            DynVector128::F64(_) => ElementKind::F64,
        }
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.kind().lanes_per_vector128()
    }

    /// All-zero vector of the given kind.
    pub fn zero(kind: ElementKind) -> Self {
        with_kind!(kind, E => Self::from(Vector128::<E>::zero()))
    }

    /// Broadcasts `value` to every element.
    ///
    /// # Errors
    ///
    /// `UnsupportedElementType` when `T` is not a supported primitive.
    pub fn splat<T: Any + Copy>(value: T) -> Result<Self> {
        let kind = ElementKind::of::<T>()?;

        with_kind!(kind, E => {
            let lane: E = cast(&value, kind, kind)?;
            Ok(Self::from(Vector128::<E>::splat(lane)))
        })
    }

    /// Creates a vector from the first `count()` elements of `values`.
    ///
    /// # Errors
    ///
    /// `UnsupportedElementType` when `T` is not a supported primitive, checked
    /// first. `InsufficientLength` when `values` is too short.
    pub fn from_slice<T: Any + Copy>(values: &[T]) -> Result<Self> {
        let kind = ElementKind::of::<T>()?;

        with_kind!(kind, E => {
            let lanes = values
                .iter()
                .take(Vector128::<E>::COUNT)
                .map(|value| cast::<T, E>(value, kind, kind))
                .collect::<Result<Vec<E>>>()?;
            Vector128::<E>::from_slice(&lanes).map(Self::from)
        })
    }

    /// Builds a vector of `kind` from its native-endian bytes.
    pub fn from_bytes(kind: ElementKind, bytes: [u8; VECTOR128_BYTES]) -> Self {
        with_kind!(kind, E => Self::from(Vector128::<E>::from_bytes(bytes)))
    }

    pub fn to_bytes(&self) -> [u8; VECTOR128_BYTES] {
        dispatch!(*self, v => v.to_bytes())
    }

    /// Returns the element at `index` as `T`.
    ///
    /// # Errors
    ///
    /// `UnsupportedElementType` for an unsupported `T`, `ElementKindMismatch`
    /// when `T` is not this vector's element type, `IndexOutOfRange` when
    /// `index >= count()`.
    pub fn get_element<T: Any + Copy>(&self, index: usize) -> Result<T> {
        let requested = ElementKind::of::<T>()?;
        let kind = self.kind();
        if requested != kind {
            return Err(element_kind_mismatch(requested, kind));
        }

        dispatch!(*self, v => cast(&v.get_element(index)?, requested, kind))
    }

    /// Unwraps the typed vector.
    ///
    /// # Errors
    ///
    /// `ElementKindMismatch` when `T` is not this vector's element type.
    pub fn downcast<T: SimdElement>(self) -> Result<Vector128<T>> {
        let kind = self.kind();
        dispatch!(self, v => cast(&v, T::KIND, kind))
    }

    /// Element-wise wrapping addition.
    ///
    /// # Errors
    ///
    /// `ElementKindMismatch` when the operands hold different element kinds.
    pub fn add(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a + b)
    }

    pub fn sub(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a - b)
    }

    pub fn mul(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a * b)
    }

    pub fn bitand(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a & b)
    }

    pub fn bitor(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a | b)
    }

    pub fn xor(self, other: Self) -> Result<Self> {
        dispatch_binary!(self, other, a, b => a ^ b)
    }

    /// `true` when both vectors hold the same kind and every element compares
    /// equal. A NaN element makes the result `false`.
    ///
    /// # Errors
    ///
    /// `ElementKindMismatch` when the operands hold different element kinds.
    pub fn equals_all(self, other: Self) -> Result<bool> {
        let (lhs, rhs) = (self.kind(), other.kind());
        if lhs != rhs {
            return Err(element_kind_mismatch(lhs, rhs));
        }
        Ok(self == other)
    }
}

impl Not for DynVector128 {
    type Output = Self;

    fn not(self) -> Self {
        dispatch_map!(self, v => !v)
    }
}

impl Neg for DynVector128 {
    type Output = Self;

    fn neg(self) -> Self {
        dispatch_map!(self, v => -v)
    }
}

impl fmt::Display for DynVector128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, v => fmt::Display::fmt(v, f))
    }
}

macro_rules! impl_conversions {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<Vector128<$t>> for DynVector128 {
                #[inline]
                fn from(vector: Vector128<$t>) -> Self {
                    DynVector128::$variant(vector)
                }
            }

            impl TryFrom<DynVector128> for Vector128<$t> {
                type Error = SimdError;

                #[inline]
                fn try_from(value: DynVector128) -> Result<Self> {
                    value.downcast::<$t>()
                }
            }
        )*
    };
}

impl_conversions!(
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Usize(usize),
    Isize(isize),
    F32(f32),
    F64(f64),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Rgb(u8, u8, u8);

    #[test]
    fn test_unsupported_type_is_rejected() {
        let err = DynVector128::splat(Rgb(1, 2, 3)).unwrap_err();
        assert!(matches!(err, SimdError::UnsupportedElementType { .. }));

        let err = DynVector128::from_slice(&[true; 16]).unwrap_err();
        assert!(matches!(err, SimdError::UnsupportedElementType { .. }));
    }

    #[test]
    fn test_runtime_kind_round_trip() {
        let v = DynVector128::from_slice(&[1i32, 2, 3, 4, 5]).unwrap();
        assert_eq!(v.kind(), ElementKind::I32);
        assert_eq!(v.count(), 4);
        assert_eq!(v.get_element::<i32>(2), Ok(3));
        assert_eq!(
            v.get_element::<u32>(2),
            Err(SimdError::ElementKindMismatch {
                expected: ElementKind::U32,
                actual: ElementKind::I32
            })
        );
        assert_eq!(
            v.get_element::<i32>(4),
            Err(SimdError::IndexOutOfRange { index: 4, count: 4 })
        );
        assert_eq!(v.downcast::<i32>(), Ok(Vector128::from([1, 2, 3, 4])));
        assert_eq!(v.to_string(), "<1, 2, 3, 4>");
    }

    #[test]
    fn test_short_slice_fails() {
        assert_eq!(
            DynVector128::from_slice(&[1.0f64]),
            Err(SimdError::InsufficientLength {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_binary_ops_require_same_kind() {
        let a = DynVector128::splat(5i32).unwrap();
        let b = DynVector128::splat(3i32).unwrap();
        let sum = a.add(b).unwrap();
        assert_eq!(sum.downcast::<i32>().map(|v| v.to_vec()), Ok(vec![8, 8, 8, 8]));

        let c = DynVector128::splat(3u32).unwrap();
        assert!(matches!(
            a.sub(c),
            Err(SimdError::ElementKindMismatch { .. })
        ));
        assert!(a.equals_all(c).is_err());
        assert_eq!(a.equals_all(a), Ok(true));
    }

    #[test]
    fn test_unary_ops_and_bytes() {
        let v = DynVector128::splat(f32::NAN).unwrap();
        assert_eq!(v.equals_all(v), Ok(false));

        let negated = -DynVector128::splat(0.0f64).unwrap();
        let bytes = negated.to_bytes();
        assert_eq!(
            DynVector128::from_bytes(ElementKind::F64, bytes).get_element::<f64>(1).map(f64::to_bits),
            Ok((-0.0f64).to_bits())
        );

        let inverted = !DynVector128::zero(ElementKind::U16);
        assert_eq!(inverted.get_element::<u16>(7), Ok(u16::MAX));
    }
}

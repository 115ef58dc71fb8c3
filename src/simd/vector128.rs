//! 128-bit vector composed of two 64-bit halves.
//!
//! `Vector128<T>` is exactly a pair of [`Vector64<T>`]: elements
//! `[0, COUNT / 2)` live in `lower` and `[COUNT / 2, COUNT)` in `upper`. Every
//! operation is defined by applying the half-width operation to each half and
//! recomposing:
//!
//! ```text
//! op(a, b) = from_halves(op(a.lower, b.lower), op(a.upper, b.upper))
//! ```
//!
//! That definition is the contract. On hosts where the build script selected
//! a native backend, a few binary operators run a single native instruction
//! instead (see `accel`); those paths are required to produce the same bits.
//!
//! # Usage
//!
//! ```rust
//! use simdvec::simd::Vector128;
//!
//! let a = Vector128::<i32>::splat(5);
//! let b = Vector128::<i32>::splat(3);
//! assert_eq!((a + b).to_vec(), vec![8, 8, 8, 8]);
//!
//! let v = Vector128::<i32>::from([1, 2, 3, 4]);
//! assert_eq!(v.get_element(2), Ok(3));
//! assert_eq!(Vector128::<i32>::indices().to_vec(), vec![0, 1, 2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{index_out_of_range, Result};
use crate::platform;
use crate::simd::accel::{self, BinaryOp};
use crate::simd::element::{SimdElement, VECTOR128_BYTES};
use crate::simd::vector64::{write_elements, Vector64, VECTOR64_BYTES};

/// A 128-bit vector of `16 / size_of::<T>()` elements of type `T`.
///
/// The layout is ABI-stable: 16 bytes, elements in index order, native byte
/// order, `lower` in bytes `[0, 8)` and `upper` in bytes `[8, 16)`.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C, align(16))]
pub struct Vector128<T: SimdElement> {
    lower: Vector64<T>,
    upper: Vector64<T>,
}

/// Unary operations defined by halves.
macro_rules! by_halves_unary {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self) -> Self {
                Self::from_halves(self.lower.$name(), self.upper.$name())
            }
        )*
    };
}

/// Binary operations defined by halves.
macro_rules! by_halves_binary {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self, other: Self) -> Self {
                Self::from_halves(self.lower.$name(other.lower), self.upper.$name(other.upper))
            }
        )*
    };
}

/// Boolean reductions that hold when they hold for both halves.
macro_rules! by_halves_all {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(self, other: Self) -> bool {
                self.lower.$name(other.lower) && self.upper.$name(other.upper)
            }
        )*
    };
}

/// Boolean reductions that hold when they hold for either half.
macro_rules! by_halves_any {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(self, other: Self) -> bool {
                self.lower.$name(other.lower) || self.upper.$name(other.upper)
            }
        )*
    };
}

impl<T: SimdElement> Vector128<T> {
    /// Number of elements in the vector: `128 / bit-width(T)`.
    pub const COUNT: usize = VECTOR128_BYTES / std::mem::size_of::<T>();

    const HALF_COUNT: usize = Vector64::<T>::COUNT;

    #[inline(always)]
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// Required alignment for the `*_aligned` memory operations, in bytes.
    #[inline(always)]
    pub const fn alignment() -> usize {
        platform::ALIGNMENT
    }

    #[inline(always)]
    pub const fn is_hardware_accelerated() -> bool {
        platform::is_hardware_accelerated()
    }

    /// Always `true`: a `Vector128<T>` can only be named for supported `T`.
    /// Use [`crate::simd::is_supported`] to test an arbitrary type.
    #[inline(always)]
    pub const fn is_supported() -> bool {
        true
    }

    #[inline(always)]
    pub const fn from_halves(lower: Vector64<T>, upper: Vector64<T>) -> Self {
        Self { lower, upper }
    }

    /// Elements `[0, COUNT / 2)`.
    #[inline(always)]
    pub const fn lower(self) -> Vector64<T> {
        self.lower
    }

    /// Elements `[COUNT / 2, COUNT)`.
    #[inline(always)]
    pub const fn upper(self) -> Vector64<T> {
        self.upper
    }

    #[inline(always)]
    pub const fn with_lower(self, lower: Vector64<T>) -> Self {
        Self::from_halves(lower, self.upper)
    }

    #[inline(always)]
    pub const fn with_upper(self, upper: Vector64<T>) -> Self {
        Self::from_halves(self.lower, upper)
    }

    /// Vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_halves(Vector64::splat(value), Vector64::splat(value))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline]
    pub fn one() -> Self {
        Self::splat(T::ONE)
    }

    #[inline]
    pub fn all_bits_set() -> Self {
        Self::splat(T::all_bits_set())
    }

    /// Vector whose element `i` is `i` converted to `T`.
    #[inline]
    pub fn indices() -> Self {
        let mut result = Self::zero();
        for index in 0..Self::COUNT {
            result = result.with_lane(index, T::from_index(index));
        }
        result
    }

    /// Vector with element 0 set to `value` and every other element zero.
    #[inline]
    pub fn create_scalar(value: T) -> Self {
        Self::zero().with_lane(0, value)
    }

    #[inline(always)]
    fn lane(self, index: usize) -> T {
        if index < Self::HALF_COUNT {
            self.lower.lane(index)
        } else {
            self.upper.lane(index - Self::HALF_COUNT)
        }
    }

    #[inline(always)]
    fn with_lane(self, index: usize, value: T) -> Self {
        if index < Self::HALF_COUNT {
            self.with_lower(self.lower.with_lane(index, value))
        } else {
            self.with_upper(self.upper.with_lane(index - Self::HALF_COUNT, value))
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= COUNT`.
    #[inline]
    pub fn get_element(self, index: usize) -> Result<T> {
        if index >= Self::COUNT {
            return Err(index_out_of_range(index, Self::COUNT));
        }
        Ok(self.lane(index))
    }

    /// Returns a copy of the vector with the element at `index` replaced.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= COUNT`.
    #[inline]
    pub fn with_element(self, index: usize, value: T) -> Result<Self> {
        if index >= Self::COUNT {
            return Err(index_out_of_range(index, Self::COUNT));
        }
        Ok(self.with_lane(index, value))
    }

    #[inline(always)]
    pub fn to_scalar(self) -> T {
        self.lower.to_scalar()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.lower.iter().chain(self.upper.iter())
    }

    /// The elements as a slice of length `COUNT`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `repr(C)` places the two 8-byte halves back to back, so the
        // vector is exactly COUNT contiguous, initialized elements.
        unsafe { std::slice::from_raw_parts(self as *const Self as *const T, Self::COUNT) }
    }

    /// Native-endian bytes of the vector: `lower` then `upper`.
    pub fn to_bytes(self) -> [u8; VECTOR128_BYTES] {
        let mut bytes = [0u8; VECTOR128_BYTES];
        bytes[..VECTOR64_BYTES].copy_from_slice(&self.lower.to_bytes());
        bytes[VECTOR64_BYTES..].copy_from_slice(&self.upper.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: [u8; VECTOR128_BYTES]) -> Self {
        let mut lower = [0u8; VECTOR64_BYTES];
        let mut upper = [0u8; VECTOR64_BYTES];
        lower.copy_from_slice(&bytes[..VECTOR64_BYTES]);
        upper.copy_from_slice(&bytes[VECTOR64_BYTES..]);
        Self::from_halves(Vector64::from_bytes(lower), Vector64::from_bytes(upper))
    }

    /// Reinterprets the bits of the vector as elements of type `U`.
    #[inline]
    pub fn reinterpret<U: SimdElement>(self) -> Vector128<U> {
        Vector128::from_halves(self.lower.reinterpret(), self.upper.reinterpret())
    }

    by_halves_unary! {
        abs,
        ceil,
        floor,
        /// Rounds each element to the nearest integer, ties to even.
        round,
        trunc,
        /// Integer elements take the floor of the exact root; negative ones give zero.
        sqrt,
        is_nan,
        is_finite,
        is_infinity,
        is_positive_infinity,
        is_negative_infinity,
        is_normal,
        is_subnormal,
        is_zero,
        /// Sign bit set for floats (including `-0.0` and negative NaN).
        is_negative,
        is_positive,
        is_integer,
        is_even_integer,
        is_odd_integer,
    }

    by_halves_binary! {
        /// `self & !other`
        and_not,
        copy_sign,
        /// IEEE 754:2019 `maximum`: NaN propagates and `+0.0 > -0.0`.
        max,
        /// IEEE 754:2019 `minimum`: NaN propagates and `-0.0 < +0.0`.
        min,
        /// IEEE 754:2019 `maximumNumber`: a NaN element loses to a number.
        max_number,
        min_number,
        max_magnitude,
        min_magnitude,
        max_magnitude_number,
        min_magnitude_number,
        /// `self > other ? self : other`, matching the native instruction.
        max_native,
        min_native,
        greater_than,
        greater_than_or_equal,
        less_than,
        less_than_or_equal,
    }

    by_halves_all! {
        greater_than_all,
        greater_than_or_equal_all,
        less_than_all,
        less_than_or_equal_all,
    }

    by_halves_any! {
        equals_any,
        greater_than_any,
        greater_than_or_equal_any,
        less_than_any,
        less_than_or_equal_any,
    }

    /// Element-wise equality mask. Follows IEEE rules: a NaN lane is zero.
    #[inline]
    pub fn equals(self, other: Self) -> Self {
        accel::binary(BinaryOp::Equals, self, other).unwrap_or_else(|| {
            Self::from_halves(
                self.lower.equals(other.lower),
                self.upper.equals(other.upper),
            )
        })
    }

    /// `true` when every pair of elements compares equal; same as `==`.
    #[inline]
    pub fn equals_all(self, other: Self) -> bool {
        self == other
    }

    /// Shifts each element right by `count` bits, shifting in zeros.
    #[inline]
    pub fn shift_right_logical(self, count: u32) -> Self {
        Self::from_halves(
            self.lower.shift_right_logical(count),
            self.upper.shift_right_logical(count),
        )
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_halves(
            self.lower.clamp(min.lower, max.lower),
            self.upper.clamp(min.upper, max.upper),
        )
    }

    #[inline]
    pub fn clamp_native(self, min: Self, max: Self) -> Self {
        Self::from_halves(
            self.lower.clamp_native(min.lower, max.lower),
            self.upper.clamp_native(min.upper, max.upper),
        )
    }

    /// Bitwise select: bits of `left` where `condition` is set, `right` elsewhere.
    #[inline]
    pub fn conditional_select(condition: Self, left: Self, right: Self) -> Self {
        Self::from_halves(
            Vector64::conditional_select(condition.lower, left.lower, right.lower),
            Vector64::conditional_select(condition.upper, left.upper, right.upper),
        )
    }

    /// `self * right + addend`. Float lanes may round once or twice.
    #[inline]
    pub fn mul_add_estimate(self, right: Self, addend: Self) -> Self {
        Self::from_halves(
            self.lower.mul_add_estimate(right.lower, addend.lower),
            self.upper.mul_add_estimate(right.upper, addend.upper),
        )
    }

    #[inline]
    pub fn all(self, value: T) -> bool {
        self.lower.all(value) && self.upper.all(value)
    }

    #[inline]
    pub fn any(self, value: T) -> bool {
        self.lower.any(value) || self.upper.any(value)
    }

    #[inline]
    pub fn none(self, value: T) -> bool {
        !self.any(value)
    }

    /// Number of elements equal to `value`.
    #[inline]
    pub fn count_matches(self, value: T) -> usize {
        self.lower.count_matches(value) + self.upper.count_matches(value)
    }

    #[inline]
    pub fn all_where_all_bits_set(self) -> bool {
        self.lower.all_where_all_bits_set() && self.upper.all_where_all_bits_set()
    }

    #[inline]
    pub fn any_where_all_bits_set(self) -> bool {
        self.lower.any_where_all_bits_set() || self.upper.any_where_all_bits_set()
    }

    #[inline]
    pub fn none_where_all_bits_set(self) -> bool {
        !self.any_where_all_bits_set()
    }

    #[inline]
    pub fn count_where_all_bits_set(self) -> usize {
        self.lower.count_where_all_bits_set() + self.upper.count_where_all_bits_set()
    }

    #[inline]
    pub fn index_of(self, value: T) -> Option<usize> {
        self.lower
            .index_of(value)
            .or_else(|| self.upper.index_of(value).map(|i| i + Self::HALF_COUNT))
    }

    #[inline]
    pub fn last_index_of(self, value: T) -> Option<usize> {
        self.upper
            .last_index_of(value)
            .map(|i| i + Self::HALF_COUNT)
            .or_else(|| self.lower.last_index_of(value))
    }

    #[inline]
    pub fn index_of_where_all_bits_set(self) -> Option<usize> {
        self.lower.index_of_where_all_bits_set().or_else(|| {
            self.upper
                .index_of_where_all_bits_set()
                .map(|i| i + Self::HALF_COUNT)
        })
    }

    #[inline]
    pub fn last_index_of_where_all_bits_set(self) -> Option<usize> {
        self.upper
            .last_index_of_where_all_bits_set()
            .map(|i| i + Self::HALF_COUNT)
            .or_else(|| self.lower.last_index_of_where_all_bits_set())
    }

    /// Sum of the lower half plus sum of the upper half. Integer sums wrap.
    #[inline]
    pub fn sum(self) -> T {
        self.lower.sum().lane_add(self.upper.sum())
    }

    /// Dot product of the lower halves plus that of the upper halves.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.lower
            .dot(other.lower)
            .lane_add(self.upper.dot(other.upper))
    }

    /// Mask-based equality for float elements.
    ///
    /// `equals(l, r) | !(equals(l, l) | equals(r, r))` is all-ones in every lane
    /// that either matches or holds a NaN on some side. The vectors are equal
    /// when that mask is all-ones and no lane holds a NaN.
    fn equals_floating_point(lhs: Self, rhs: Self) -> bool {
        let combined = lhs.equals(rhs) | !(lhs.equals(lhs) | rhs.equals(rhs));
        let has_nan = (lhs.is_nan() | rhs.is_nan()).any_where_all_bits_set();

        combined.all_where_all_bits_set() && !has_nan
    }

    /// The software definition: both halves must be equal.
    fn equals_by_halves(lhs: Self, rhs: Self) -> bool {
        lhs.lower == rhs.lower && lhs.upper == rhs.upper
    }
}

impl<T: SimdElement> PartialEq for Vector128<T> {
    /// `true` when every pair of elements compares equal. Float elements follow
    /// IEEE rules, so a vector holding a NaN is not equal to anything,
    /// itself included.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if platform::is_hardware_accelerated() {
            if T::IS_FLOATING_POINT {
                Self::equals_floating_point(*self, *other)
            } else {
                self.equals(*other).all_where_all_bits_set()
            }
        } else {
            Self::equals_by_halves(*self, *other)
        }
    }
}

impl<T: SimdElement> Hash for Vector128<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for index in 0..Self::COUNT {
            self.lane(index).hash_lane(state);
        }
    }
}

/// Integer vectors have a total equality and can be used as map keys.
macro_rules! impl_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl Eq for Vector64<$t> {}
            impl Eq for Vector128<$t> {}
        )*
    };
}

impl_eq!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

impl<T: SimdElement> fmt::Display for Vector128<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

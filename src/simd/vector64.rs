//! 64-bit vector: the leaf of the width-halving composition.
//!
//! `Vector64<T>` stores its lanes as a plain array and implements every
//! operation with a per-lane loop over the scalar operations of
//! [`SimdElement`]. This loop is the reference definition that
//! [`Vector128`](super::Vector128) inherits by applying it to both halves.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{index_out_of_range, Result};
use crate::simd::element::SimdElement;

/// Size of a 64-bit vector in bytes.
pub const VECTOR64_BYTES: usize = 8;

/// A 64-bit vector of `8 / size_of::<T>()` elements of type `T`.
///
/// Elements are laid out in index order in native byte order, exactly like
/// `[T; COUNT]`.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C, align(8))]
pub struct Vector64<T: SimdElement> {
    lanes: T::Lanes64,
}

/// Per-lane unary operations mapped through a scalar lane function.
macro_rules! lanewise_unary {
    ($($(#[$meta:meta])* $name:ident => $lane:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self) -> Self {
                self.map(T::$lane)
            }
        )*
    };
}

/// Per-lane binary operations mapped through a scalar lane function.
macro_rules! lanewise_binary {
    ($($(#[$meta:meta])* $name:ident => $lane:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self, other: Self) -> Self {
                self.zip_map(other, T::$lane)
            }
        )*
    };
}

/// Per-lane classification producing an all-bits-set / zero mask.
macro_rules! lanewise_predicate {
    ($($(#[$meta:meta])* $name:ident => $lane:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(self) -> Self {
                self.map(|x| T::mask(x.$lane()))
            }
        )*
    };
}

/// Comparison masks with their `all`/`any` reductions.
macro_rules! lanewise_compare {
    ($($name:ident, $all:ident, $any:ident => |$a:ident, $b:ident| $test:expr;)*) => {
        $(
            #[inline]
            pub fn $name(self, other: Self) -> Self {
                self.zip_map(other, |$a, $b| T::mask($test))
            }

            #[inline]
            pub fn $all(self, other: Self) -> bool {
                self.iter().zip(other.iter()).all(|($a, $b)| $test)
            }

            #[inline]
            pub fn $any(self, other: Self) -> bool {
                self.iter().zip(other.iter()).any(|($a, $b)| $test)
            }
        )*
    };
}

impl<T: SimdElement> Vector64<T> {
    /// Number of elements in the vector.
    pub const COUNT: usize = VECTOR64_BYTES / std::mem::size_of::<T>();

    #[inline(always)]
    pub const fn count() -> usize {
        Self::COUNT
    }

    /// Required alignment for the `*_aligned` memory operations, in bytes.
    #[inline(always)]
    pub const fn alignment() -> usize {
        std::mem::align_of::<Self>()
    }

    /// The leaf always runs the per-lane loop.
    #[inline(always)]
    pub const fn is_hardware_accelerated() -> bool {
        false
    }

    #[inline(always)]
    pub const fn is_supported() -> bool {
        true
    }

    #[inline(always)]
    pub const fn from_lanes(lanes: T::Lanes64) -> Self {
        Self { lanes }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.lanes.as_ref()
    }

    /// Vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        let mut lanes = T::Lanes64::default();
        lanes.as_mut().fill(value);
        Self { lanes }
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
        let mut lanes = T::Lanes64::default();
        for (index, lane) in lanes.as_mut().iter_mut().enumerate() {
            *lane = T::from_index(index);
        }
        Self { lanes }
    }

    /// Vector with element 0 set to `value` and every other element zero.
    #[inline]
    pub fn create_scalar(value: T) -> Self {
        Self::zero().with_lane(0, value)
    }

    #[inline(always)]
    pub(crate) fn lane(self, index: usize) -> T {
        self.lanes.as_ref()[index]
    }

    #[inline(always)]
    pub(crate) fn with_lane(mut self, index: usize, value: T) -> Self {
        self.lanes.as_mut()[index] = value;
        self
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
        self.lane(0)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().iter().copied()
    }

    /// Native-endian bytes of the vector, elements in index order.
    pub fn to_bytes(self) -> [u8; VECTOR64_BYTES] {
        let mut bytes = [0u8; VECTOR64_BYTES];
        for (chunk, lane) in bytes
            .chunks_exact_mut(std::mem::size_of::<T>())
            .zip(self.iter())
        {
            lane.write_ne_bytes(chunk);
        }
        bytes
    }

    pub fn from_bytes(bytes: [u8; VECTOR64_BYTES]) -> Self {
        let mut lanes = T::Lanes64::default();
        for (lane, chunk) in lanes
            .as_mut()
            .iter_mut()
            .zip(bytes.chunks_exact(std::mem::size_of::<T>()))
        {
            *lane = T::read_ne_bytes(chunk);
        }
        Self { lanes }
    }

    /// Reinterprets the bits of the vector as elements of type `U`.
    #[inline]
    pub fn reinterpret<U: SimdElement>(self) -> Vector64<U> {
        Vector64::from_bytes(self.to_bytes())
    }

    #[inline(always)]
    pub(crate) fn map(self, f: impl Fn(T) -> T) -> Self {
        let mut lanes = self.lanes;
        for lane in lanes.as_mut() {
            *lane = f(*lane);
        }
        Self { lanes }
    }

    #[inline(always)]
    pub(crate) fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut lanes = self.lanes;
        for (lane, &rhs) in lanes.as_mut().iter_mut().zip(other.as_slice()) {
            *lane = f(*lane, rhs);
        }
        Self { lanes }
    }

    lanewise_unary! {
        abs => lane_abs;
        ceil => lane_ceil;
        floor => lane_floor;
        /// Rounds each element to the nearest integer, ties to even.
        round => lane_round;
        trunc => lane_trunc;
        sqrt => lane_sqrt;
    }

    lanewise_binary! {
        /// `self & !other`
        and_not => lane_and_not;
        copy_sign => lane_copy_sign;
        max => lane_max;
        min => lane_min;
        max_number => lane_max_number;
        min_number => lane_min_number;
        max_magnitude => lane_max_magnitude;
        min_magnitude => lane_min_magnitude;
        max_magnitude_number => lane_max_magnitude_number;
        min_magnitude_number => lane_min_magnitude_number;
        max_native => lane_max_native;
        min_native => lane_min_native;
    }

    lanewise_predicate! {
        is_nan => lane_is_nan;
        is_finite => lane_is_finite;
        is_infinity => lane_is_infinity;
        is_positive_infinity => lane_is_positive_infinity;
        is_negative_infinity => lane_is_negative_infinity;
        is_normal => lane_is_normal;
        is_subnormal => lane_is_subnormal;
        is_zero => lane_is_zero;
        is_negative => lane_is_negative;
        is_positive => lane_is_positive;
        is_integer => lane_is_integer;
        is_even_integer => lane_is_even_integer;
        is_odd_integer => lane_is_odd_integer;
    }

    lanewise_compare! {
        equals, equals_all, equals_any => |a, b| a == b;
        greater_than, greater_than_all, greater_than_any => |a, b| a > b;
        greater_than_or_equal, greater_than_or_equal_all, greater_than_or_equal_any => |a, b| a >= b;
        less_than, less_than_all, less_than_any => |a, b| a < b;
        less_than_or_equal, less_than_or_equal_all, less_than_or_equal_any => |a, b| a <= b;
    }

    #[inline]
    pub fn shift_right_logical(self, count: u32) -> Self {
        self.map(|x| x.lane_shift_right_logical(count))
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn clamp_native(self, min: Self, max: Self) -> Self {
        self.max_native(min).min_native(max)
    }

    /// Bitwise select: bits of `left` where `condition` is set, `right` elsewhere.
    #[inline]
    pub fn conditional_select(condition: Self, left: Self, right: Self) -> Self {
        let mut lanes = condition.lanes;
        for ((lane, &l), &r) in lanes
            .as_mut()
            .iter_mut()
            .zip(left.as_slice())
            .zip(right.as_slice())
        {
            *lane = l.lane_and(*lane).lane_or(r.lane_and_not(*lane));
        }
        Self { lanes }
    }

    #[inline]
    pub fn mul_add_estimate(self, right: Self, addend: Self) -> Self {
        let mut lanes = self.lanes;
        for ((lane, &r), &a) in lanes
            .as_mut()
            .iter_mut()
            .zip(right.as_slice())
            .zip(addend.as_slice())
        {
            *lane = lane.lane_mul_add_estimate(r, a);
        }
        Self { lanes }
    }

    #[inline]
    pub fn all(self, value: T) -> bool {
        self.iter().all(|x| x == value)
    }

    #[inline]
    pub fn any(self, value: T) -> bool {
        self.iter().any(|x| x == value)
    }

    #[inline]
    pub fn none(self, value: T) -> bool {
        !self.any(value)
    }

    /// Number of elements equal to `value`.
    #[inline]
    pub fn count_matches(self, value: T) -> usize {
        self.iter().filter(|&x| x == value).count()
    }

    #[inline]
    pub fn all_where_all_bits_set(self) -> bool {
        self.iter().all(T::lane_is_all_bits_set)
    }

    #[inline]
    pub fn any_where_all_bits_set(self) -> bool {
        self.iter().any(T::lane_is_all_bits_set)
    }

    #[inline]
    pub fn none_where_all_bits_set(self) -> bool {
        !self.any_where_all_bits_set()
    }

    #[inline]
    pub fn count_where_all_bits_set(self) -> usize {
        self.iter().filter(|&x| x.lane_is_all_bits_set()).count()
    }

    #[inline]
    pub fn index_of(self, value: T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }

    #[inline]
    pub fn last_index_of(self, value: T) -> Option<usize> {
        self.as_slice().iter().rposition(|&x| x == value)
    }

    #[inline]
    pub fn index_of_where_all_bits_set(self) -> Option<usize> {
        self.iter().position(T::lane_is_all_bits_set)
    }

    #[inline]
    pub fn last_index_of_where_all_bits_set(self) -> Option<usize> {
        self.as_slice()
            .iter()
            .rposition(|&x| x.lane_is_all_bits_set())
    }

    /// Sum of all elements, in index order. Integer sums wrap.
    #[inline]
    pub fn sum(self) -> T {
        self.iter().fold(T::ZERO, T::lane_add)
    }

    /// Dot product, accumulated in index order. Integer products and sums wrap.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.iter()
            .zip(other.iter())
            .fold(T::ZERO, |acc, (a, b)| acc.lane_add(a.lane_mul(b)))
    }
}

impl<T: SimdElement> PartialEq for Vector64<T> {
    /// `true` when every pair of elements compares equal. A NaN element makes
    /// the vectors unequal, even to themselves.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals_all(*other)
    }
}

impl<T: SimdElement> Hash for Vector64<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for lane in self.iter() {
            lane.hash_lane(state);
        }
    }
}

/// Writes `<e0, e1, ...>`, forwarding the formatter options to each element.
pub(crate) fn write_elements<T: SimdElement>(
    f: &mut fmt::Formatter<'_>,
    elements: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str("<")?;
    for (index, element) in elements.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&element, f)?;
    }
    f.write_str(">")
}

impl<T: SimdElement> fmt::Display for Vector64<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(f, self.iter())
    }
}

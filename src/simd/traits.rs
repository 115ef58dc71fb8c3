use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, Mul, MulAssign, Neg, Not, Shl, Shr, Sub, SubAssign,
};

use crate::error::Result;
use crate::simd::element::SimdElement;
use crate::simd::{Vector128, Vector64};

/// A fixed-width vector of `T`, usable by generic algorithms.
///
/// Every method forwards to the inherent method of the same name on the
/// implementing type, so code written against this trait and code written
/// against [`Vector128`] directly behave identically. The halves accessors
/// (`from_halves`, `lower`, `upper`) are specific to `Vector128` and are not
/// part of the trait.
pub trait SimdVector<T: SimdElement>:
    Copy
    + Default
    + Debug
    + Display
    + PartialEq
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Neg<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Index<usize, Output = T>
{
    const COUNT: usize;

    /// The same vector width holding elements of type `U`.
    type Rebind<U: SimdElement>: SimdVector<U>;

    /// `[u8; N]` with `N` the vector size in bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    fn count() -> usize;
    fn alignment() -> usize;
    fn is_hardware_accelerated() -> bool;
    fn is_supported() -> bool;

    fn splat(value: T) -> Self;
    fn zero() -> Self;
    fn one() -> Self;
    fn all_bits_set() -> Self;
    fn indices() -> Self;
    fn create_scalar(value: T) -> Self;

    fn from_slice(values: &[T]) -> Result<Self>;
    fn from_slice_at(values: &[T], index: usize) -> Result<Self>;
    fn try_load_aligned(values: &[T]) -> Result<Self>;

    /// # Safety
    ///
    /// `source` must be valid for reads of `COUNT` elements.
    unsafe fn load(source: *const T) -> Self;

    /// # Safety
    ///
    /// `source` must be valid for reads of `COUNT` elements.
    unsafe fn load_aligned(source: *const T) -> Self;

    /// # Safety
    ///
    /// `source` must be valid for reads of `COUNT` elements.
    unsafe fn load_aligned_non_temporal(source: *const T) -> Self;

    /// # Safety
    ///
    /// `destination` must be valid for writes of `COUNT` elements.
    unsafe fn store(self, destination: *mut T);

    /// # Safety
    ///
    /// `destination` must be valid for writes of `COUNT` elements.
    unsafe fn store_aligned(self, destination: *mut T);

    /// # Safety
    ///
    /// `destination` must be valid for writes of `COUNT` elements.
    unsafe fn store_aligned_non_temporal(self, destination: *mut T);

    fn copy_to(self, destination: &mut [T]) -> Result<()>;
    fn copy_to_at(self, destination: &mut [T], start: usize) -> Result<()>;
    fn try_copy_to(self, destination: &mut [T]) -> bool;
    fn to_vec(self) -> Vec<T>;

    fn to_bytes(self) -> Self::Bytes;
    fn from_bytes(bytes: Self::Bytes) -> Self;
    fn reinterpret<U: SimdElement>(self) -> Self::Rebind<U>;

    fn get_element(self, index: usize) -> Result<T>;
    fn with_element(self, index: usize, value: T) -> Result<Self>;
    fn to_scalar(self) -> T;

    fn abs(self) -> Self;
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    fn sqrt(self) -> Self;

    fn is_nan(self) -> Self;
    fn is_finite(self) -> Self;
    fn is_infinity(self) -> Self;
    fn is_positive_infinity(self) -> Self;
    fn is_negative_infinity(self) -> Self;
    fn is_normal(self) -> Self;
    fn is_subnormal(self) -> Self;
    fn is_zero(self) -> Self;
    fn is_negative(self) -> Self;
    fn is_positive(self) -> Self;
    fn is_integer(self) -> Self;
    fn is_even_integer(self) -> Self;
    fn is_odd_integer(self) -> Self;

    fn and_not(self, other: Self) -> Self;
    fn copy_sign(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max_number(self, other: Self) -> Self;
    fn min_number(self, other: Self) -> Self;
    fn max_magnitude(self, other: Self) -> Self;
    fn min_magnitude(self, other: Self) -> Self;
    fn max_magnitude_number(self, other: Self) -> Self;
    fn min_magnitude_number(self, other: Self) -> Self;
    fn max_native(self, other: Self) -> Self;
    fn min_native(self, other: Self) -> Self;

    fn equals(self, other: Self) -> Self;
    fn greater_than(self, other: Self) -> Self;
    fn greater_than_or_equal(self, other: Self) -> Self;
    fn less_than(self, other: Self) -> Self;
    fn less_than_or_equal(self, other: Self) -> Self;

    fn equals_all(self, other: Self) -> bool;
    fn equals_any(self, other: Self) -> bool;
    fn greater_than_all(self, other: Self) -> bool;
    fn greater_than_any(self, other: Self) -> bool;
    fn greater_than_or_equal_all(self, other: Self) -> bool;
    fn greater_than_or_equal_any(self, other: Self) -> bool;
    fn less_than_all(self, other: Self) -> bool;
    fn less_than_any(self, other: Self) -> bool;
    fn less_than_or_equal_all(self, other: Self) -> bool;
    fn less_than_or_equal_any(self, other: Self) -> bool;

    fn shift_right_logical(self, count: u32) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self;
    fn clamp_native(self, min: Self, max: Self) -> Self;
    fn conditional_select(condition: Self, left: Self, right: Self) -> Self;
    fn mul_add_estimate(self, right: Self, addend: Self) -> Self;

    fn all(self, value: T) -> bool;
    fn any(self, value: T) -> bool;
    fn none(self, value: T) -> bool;
    fn count_matches(self, value: T) -> usize;
    fn index_of(self, value: T) -> Option<usize>;
    fn last_index_of(self, value: T) -> Option<usize>;

    fn all_where_all_bits_set(self) -> bool;
    fn any_where_all_bits_set(self) -> bool;
    fn none_where_all_bits_set(self) -> bool;
    fn count_where_all_bits_set(self) -> usize;
    fn index_of_where_all_bits_set(self) -> Option<usize>;
    fn last_index_of_where_all_bits_set(self) -> Option<usize>;

    fn sum(self) -> T;
    fn dot(self, other: Self) -> T;
}

/// Implements [`SimdVector`] for `$vector` by calling its inherent methods.
macro_rules! forward_simd_vector {
    ($vector:ident, $bytes:expr) => {
        impl<T: SimdElement> SimdVector<T> for $vector<T> {
            const COUNT: usize = $vector::<T>::COUNT;

            type Rebind<U: SimdElement> = $vector<U>;
            type Bytes = [u8; $bytes];

            forward_simd_vector!(@static $vector;
                count -> usize,
                alignment -> usize,
                is_hardware_accelerated -> bool,
                is_supported -> bool,
                zero -> Self,
                one -> Self,
                all_bits_set -> Self,
                indices -> Self,
            );

            forward_simd_vector!(@unary $vector;
                abs, ceil, floor, round, trunc, sqrt,
                is_nan, is_finite, is_infinity, is_positive_infinity, is_negative_infinity,
                is_normal, is_subnormal, is_zero, is_negative, is_positive,
                is_integer, is_even_integer, is_odd_integer,
            );

            forward_simd_vector!(@binary $vector;
                and_not, copy_sign, max, min, max_number, min_number,
                max_magnitude, min_magnitude, max_magnitude_number, min_magnitude_number,
                max_native, min_native,
                equals, greater_than, greater_than_or_equal, less_than, less_than_or_equal,
            );

            forward_simd_vector!(@binary_bool $vector;
                equals_all, equals_any, greater_than_all, greater_than_any,
                greater_than_or_equal_all, greater_than_or_equal_any,
                less_than_all, less_than_any, less_than_or_equal_all, less_than_or_equal_any,
            );

            forward_simd_vector!(@value $vector;
                all -> bool,
                any -> bool,
                none -> bool,
                count_matches -> usize,
                index_of -> Option<usize>,
                last_index_of -> Option<usize>,
            );

            forward_simd_vector!(@mask $vector;
                all_where_all_bits_set -> bool,
                any_where_all_bits_set -> bool,
                none_where_all_bits_set -> bool,
                count_where_all_bits_set -> usize,
                index_of_where_all_bits_set -> Option<usize>,
                last_index_of_where_all_bits_set -> Option<usize>,
            );

            #[inline(always)]
            fn splat(value: T) -> Self {
                $vector::<T>::splat(value)
            }

            #[inline(always)]
            fn create_scalar(value: T) -> Self {
                $vector::<T>::create_scalar(value)
            }

            #[inline(always)]
            fn from_slice(values: &[T]) -> Result<Self> {
                $vector::<T>::from_slice(values)
            }

            #[inline(always)]
            fn from_slice_at(values: &[T], index: usize) -> Result<Self> {
                $vector::<T>::from_slice_at(values, index)
            }

            #[inline(always)]
            fn try_load_aligned(values: &[T]) -> Result<Self> {
                $vector::<T>::try_load_aligned(values)
            }

            #[inline(always)]
            unsafe fn load(source: *const T) -> Self {
                $vector::<T>::load(source)
            }

            #[inline(always)]
            unsafe fn load_aligned(source: *const T) -> Self {
                $vector::<T>::load_aligned(source)
            }

            #[inline(always)]
            unsafe fn load_aligned_non_temporal(source: *const T) -> Self {
                $vector::<T>::load_aligned_non_temporal(source)
            }

            #[inline(always)]
            unsafe fn store(self, destination: *mut T) {
                $vector::<T>::store(self, destination)
            }

            #[inline(always)]
            unsafe fn store_aligned(self, destination: *mut T) {
                $vector::<T>::store_aligned(self, destination)
            }

            #[inline(always)]
            unsafe fn store_aligned_non_temporal(self, destination: *mut T) {
                $vector::<T>::store_aligned_non_temporal(self, destination)
            }

            #[inline(always)]
            fn copy_to(self, destination: &mut [T]) -> Result<()> {
                $vector::<T>::copy_to(self, destination)
            }

            #[inline(always)]
            fn copy_to_at(self, destination: &mut [T], start: usize) -> Result<()> {
                $vector::<T>::copy_to_at(self, destination, start)
            }

            #[inline(always)]
            fn try_copy_to(self, destination: &mut [T]) -> bool {
                $vector::<T>::try_copy_to(self, destination)
            }

            #[inline(always)]
            fn to_vec(self) -> Vec<T> {
                $vector::<T>::to_vec(self)
            }

            #[inline(always)]
            fn to_bytes(self) -> Self::Bytes {
                $vector::<T>::to_bytes(self)
            }

            #[inline(always)]
            fn from_bytes(bytes: Self::Bytes) -> Self {
                $vector::<T>::from_bytes(bytes)
            }

            #[inline(always)]
            fn reinterpret<U: SimdElement>(self) -> Self::Rebind<U> {
                $vector::<T>::reinterpret::<U>(self)
            }

            #[inline(always)]
            fn get_element(self, index: usize) -> Result<T> {
                $vector::<T>::get_element(self, index)
            }

            #[inline(always)]
            fn with_element(self, index: usize, value: T) -> Result<Self> {
                $vector::<T>::with_element(self, index, value)
            }

            #[inline(always)]
            fn to_scalar(self) -> T {
                $vector::<T>::to_scalar(self)
            }

            #[inline(always)]
            fn shift_right_logical(self, count: u32) -> Self {
                $vector::<T>::shift_right_logical(self, count)
            }

            #[inline(always)]
            fn clamp(self, min: Self, max: Self) -> Self {
                $vector::<T>::clamp(self, min, max)
            }

            #[inline(always)]
            fn clamp_native(self, min: Self, max: Self) -> Self {
                $vector::<T>::clamp_native(self, min, max)
            }

            #[inline(always)]
            fn conditional_select(condition: Self, left: Self, right: Self) -> Self {
                $vector::<T>::conditional_select(condition, left, right)
            }

            #[inline(always)]
            fn mul_add_estimate(self, right: Self, addend: Self) -> Self {
                $vector::<T>::mul_add_estimate(self, right, addend)
            }

            #[inline(always)]
            fn sum(self) -> T {
                $vector::<T>::sum(self)
            }

            #[inline(always)]
            fn dot(self, other: Self) -> T {
                $vector::<T>::dot(self, other)
            }
        }
    };

    (@static $vector:ident; $($name:ident -> $ret:ty),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name() -> $ret {
                $vector::<T>::$name()
            }
        )*
    };

    (@unary $vector:ident; $($name:ident),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name(self) -> Self {
                $vector::<T>::$name(self)
            }
        )*
    };

    (@binary $vector:ident; $($name:ident),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name(self, other: Self) -> Self {
                $vector::<T>::$name(self, other)
            }
        )*
    };

    (@binary_bool $vector:ident; $($name:ident),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name(self, other: Self) -> bool {
                $vector::<T>::$name(self, other)
            }
        )*
    };

    (@value $vector:ident; $($name:ident -> $ret:ty),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name(self, value: T) -> $ret {
                $vector::<T>::$name(self, value)
            }
        )*
    };

    (@mask $vector:ident; $($name:ident -> $ret:ty),* $(,)?) => {
        $(
            #[inline(always)]
            fn $name(self) -> $ret {
                $vector::<T>::$name(self)
            }
        )*
    };
}

forward_simd_vector!(Vector64, 8);
forward_simd_vector!(Vector128, 16);

/// Element-wise addition of two slices.
pub trait SimdAdd<Rhs = Self> {
    type Output;

    fn simd_add(self, rhs: Rhs) -> Self::Output;
    fn par_simd_add(self, rhs: Rhs) -> Self::Output;
    fn scalar_add(self, rhs: Rhs) -> Self::Output;
}

/// Sum of all elements of a slice. Integer sums wrap.
pub trait SimdSum {
    type Output;

    fn simd_sum(self) -> Self::Output;
    fn par_simd_sum(self) -> Self::Output;
    fn scalar_sum(self) -> Self::Output;
}

/// Whether two slices are equal element by element, with IEEE float rules.
pub trait SimdCmp<Rhs = Self> {
    type Output;

    fn simd_eq(self, rhs: Rhs) -> Self::Output;
    fn par_simd_eq(self, rhs: Rhs) -> Self::Output;
    fn scalar_eq(self, rhs: Rhs) -> Self::Output;
}

/// Position of the first element equal to a value.
pub trait SimdSearch<T> {
    type Output;

    fn simd_index_of(self, value: T) -> Self::Output;
    fn par_simd_index_of(self, value: T) -> Self::Output;
    fn scalar_index_of(self, value: T) -> Self::Output;
}

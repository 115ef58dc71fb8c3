//! The closed set of vector element types.
//!
//! Vectors are only defined over the primitives listed in [`ElementKind`]:
//! 8/16/32/64-bit and pointer-sized integers (signed and unsigned) and IEEE-754
//! single and double precision floats. The set is enforced twice:
//!
//! - statically, through the sealed [`SimdElement`] trait that every vector type
//!   requires of its element parameter, and
//! - at runtime, through [`ElementKind::of`], [`is_supported`] and [`count_of`],
//!   which accept any `'static` type and report whether it belongs to the set.
//!
//! [`SimdElement`] also carries the scalar lane operations that the leaf vector
//! applies element by element. Integer arithmetic wraps; floating-point lanes
//! follow IEEE-754.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::FpCategory;

use num::integer::Roots;
use num::traits::{WrappingAdd, WrappingMul, WrappingSub};
use num::{Bounded, Float, Integer, Num};

use crate::error::{unsupported_element_type, Result};

/// Size in bytes of the full-width vector.
pub(crate) const VECTOR128_BYTES: usize = 16;

/// Tag naming each supported element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    Usize,
    Isize,
    F32,
    F64,
}

impl ElementKind {
    /// Every supported element kind.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::U8,
        ElementKind::I8,
        ElementKind::U16,
        ElementKind::I16,
        ElementKind::U32,
        ElementKind::I32,
        ElementKind::U64,
        ElementKind::I64,
        ElementKind::Usize,
        ElementKind::Isize,
        ElementKind::F32,
        ElementKind::F64,
    ];

    /// Resolves the element kind of `T` with a runtime type check.
    ///
    /// # Errors
    ///
    /// Returns [`SimdError::UnsupportedElementType`](crate::error::SimdError::UnsupportedElementType)
    /// when `T` is not one of the supported primitives.
    pub fn of<T: ?Sized + 'static>() -> Result<Self> {
        let id = TypeId::of::<T>();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.type_id() == id)
            .ok_or_else(unsupported_element_type::<T>)
    }

    fn type_id(self) -> TypeId {
        match self {
            ElementKind::U8 => TypeId::of::<u8>(),
            ElementKind::I8 => TypeId::of::<i8>(),
            ElementKind::U16 => TypeId::of::<u16>(),
            ElementKind::I16 => TypeId::of::<i16>(),
            ElementKind::U32 => TypeId::of::<u32>(),
            ElementKind::I32 => TypeId::of::<i32>(),
            ElementKind::U64 => TypeId::of::<u64>(),
            ElementKind::I64 => TypeId::of::<i64>(),
            ElementKind::Usize => TypeId::of::<usize>(),
            ElementKind::Isize => TypeId::of::<isize>(),
            ElementKind::F32 => TypeId::of::<f32>(),
            ElementKind::F64 => TypeId::of::<f64>(),
        }
    }

    /// Size of one element in bytes.
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementKind::U8 | ElementKind::I8 => 1,
            ElementKind::U16 | ElementKind::I16 => 2,
            ElementKind::U32 | ElementKind::I32 | ElementKind::F32 => 4,
            ElementKind::U64 | ElementKind::I64 | ElementKind::F64 => 8,
            ElementKind::Usize | ElementKind::Isize => std::mem::size_of::<usize>(),
        }
    }

    /// Width of one element in bits.
    pub const fn bits(self) -> u32 {
        (self.size_bytes() * 8) as u32
    }

    /// Number of elements of this kind held by a 128-bit vector.
    pub const fn lanes_per_vector128(self) -> usize {
        VECTOR128_BYTES / self.size_bytes()
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// `true` for signed integers and floats.
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            ElementKind::U8
                | ElementKind::U16
                | ElementKind::U32
                | ElementKind::U64
                | ElementKind::Usize
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::U8 => "u8",
            ElementKind::I8 => "i8",
            ElementKind::U16 => "u16",
            ElementKind::I16 => "i16",
            ElementKind::U32 => "u32",
            ElementKind::I32 => "i32",
            ElementKind::U64 => "u64",
            ElementKind::I64 => "i64",
            ElementKind::Usize => "usize",
            ElementKind::Isize => "isize",
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `T` can be used as a vector element.
///
/// Never fails: this is the one query that stays callable for unsupported
/// types.
pub fn is_supported<T: ?Sized + 'static>() -> bool {
    ElementKind::of::<T>().is_ok()
}

/// Number of `T` elements in a 128-bit vector, checked at runtime.
///
/// # Errors
///
/// Fails with `UnsupportedElementType` when `T` is outside the supported set.
pub fn count_of<T: ?Sized + 'static>() -> Result<usize> {
    ElementKind::of::<T>().map(ElementKind::lanes_per_vector128)
}

mod private {
    pub trait Sealed {}
}

/// A primitive that can be stored in a vector lane.
///
/// This trait is sealed: it is implemented exactly for the types listed in
/// [`ElementKind`] and cannot be implemented outside this crate.
///
/// Bitwise and shift operations act on the lane's bit pattern, including for
/// floating-point lanes. Shift counts are masked to the lane width.
pub trait SimdElement:
    private::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Num
    + Bounded
    + Send
    + Sync
    + 'static
{
    /// Lane storage of a 64-bit vector, `[Self; 8 / size_of::<Self>()]`.
    type Lanes64: Copy
        + Default
        + fmt::Debug
        + Send
        + Sync
        + AsRef<[Self]>
        + AsMut<[Self]>
        + 'static;

    const KIND: ElementKind;
    const BITS: u32;
    const IS_FLOATING_POINT: bool;
    /// `true` when `>>` replicates the sign bit.
    const IS_SIGNED: bool;
    const ZERO: Self;
    const ONE: Self;
    /// `-0.0` for floats (only the sign bit set), zero for integers.
    const NEGATIVE_ZERO: Self;

    /// Converts a lane index into an element value.
    fn from_index(index: usize) -> Self;

    /// Bit pattern of the element, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Element from the low `BITS` bits of `bits`.
    fn from_bits(bits: u64) -> Self;

    /// Writes the native-endian bytes of the element into `out`, which must be
    /// exactly `size_of::<Self>()` long.
    fn write_ne_bytes(self, out: &mut [u8]);

    /// Reads an element from exactly `size_of::<Self>()` native-endian bytes.
    fn read_ne_bytes(bytes: &[u8]) -> Self;

    /// Feeds the element into `state`. Float lanes hash `-0.0` and `0.0` alike.
    fn hash_lane<H: Hasher>(self, state: &mut H);

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;

    /// # Panics
    ///
    /// Integer lanes panic when `rhs` is zero, like scalar division.
    fn lane_div(self, rhs: Self) -> Self;

    fn lane_abs(self) -> Self;
    fn lane_ceil(self) -> Self;
    fn lane_floor(self) -> Self;
    /// Rounds half-way cases to even.
    fn lane_round(self) -> Self;
    fn lane_trunc(self) -> Self;
    fn lane_sqrt(self) -> Self;
    fn lane_copy_sign(self, sign: Self) -> Self;

    fn lane_max(self, other: Self) -> Self;
    fn lane_min(self, other: Self) -> Self;
    fn lane_max_number(self, other: Self) -> Self;
    fn lane_min_number(self, other: Self) -> Self;
    fn lane_max_magnitude(self, other: Self) -> Self;
    fn lane_min_magnitude(self, other: Self) -> Self;
    fn lane_max_magnitude_number(self, other: Self) -> Self;
    fn lane_min_magnitude_number(self, other: Self) -> Self;

    fn lane_is_nan(self) -> bool;
    fn lane_is_finite(self) -> bool;
    fn lane_is_infinity(self) -> bool;
    fn lane_is_positive_infinity(self) -> bool;
    fn lane_is_negative_infinity(self) -> bool;
    fn lane_is_normal(self) -> bool;
    fn lane_is_subnormal(self) -> bool;
    fn lane_is_negative(self) -> bool;
    fn lane_is_positive(self) -> bool;
    fn lane_is_integer(self) -> bool;
    fn lane_is_even_integer(self) -> bool;
    fn lane_is_odd_integer(self) -> bool;

    /// An element with every bit set. For floats this is a NaN.
    #[inline(always)]
    fn all_bits_set() -> Self {
        Self::from_bits(u64::MAX)
    }

    /// Comparison result lane: all bits set when `condition` holds, zero otherwise.
    #[inline(always)]
    fn mask(condition: bool) -> Self {
        if condition {
            Self::all_bits_set()
        } else {
            Self::ZERO
        }
    }

    #[inline(always)]
    fn lane_is_all_bits_set(self) -> bool {
        self.to_bits() == Self::all_bits_set().to_bits()
    }

    #[inline(always)]
    fn lane_is_zero(self) -> bool {
        self == Self::ZERO
    }

    #[inline(always)]
    fn lane_max_native(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    #[inline(always)]
    fn lane_min_native(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// `self * right + addend`, rounded twice for floats.
    #[inline(always)]
    fn lane_mul_add_estimate(self, right: Self, addend: Self) -> Self {
        self.lane_mul(right).lane_add(addend)
    }

    #[inline(always)]
    fn lane_and(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & rhs.to_bits())
    }

    #[inline(always)]
    fn lane_or(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() | rhs.to_bits())
    }

    #[inline(always)]
    fn lane_xor(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() ^ rhs.to_bits())
    }

    #[inline(always)]
    fn lane_not(self) -> Self {
        Self::from_bits(!self.to_bits())
    }

    /// `self & !rhs`
    #[inline(always)]
    fn lane_and_not(self, rhs: Self) -> Self {
        Self::from_bits(self.to_bits() & !rhs.to_bits())
    }

    #[inline(always)]
    fn lane_shift_left(self, count: u32) -> Self {
        Self::from_bits(self.to_bits() << (count & (Self::BITS - 1)))
    }

    #[inline(always)]
    fn lane_shift_right_logical(self, count: u32) -> Self {
        Self::from_bits(self.to_bits() >> (count & (Self::BITS - 1)))
    }

    #[inline(always)]
    fn lane_shift_right_arithmetic(self, count: u32) -> Self {
        if !Self::IS_SIGNED {
            return self.lane_shift_right_logical(count);
        }

        // sign-extend the lane to 64 bits before shifting
        let unused = 64 - Self::BITS;
        let extended = ((self.to_bits() << unused) as i64) >> unused;

        Self::from_bits((extended >> (count & (Self::BITS - 1))) as u64)
    }
}

/// Items shared by every integer element implementation.
macro_rules! int_lane_ops {
    ($t:ty, $unsigned:ty) => {
        const IS_FLOATING_POINT: bool = false;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const NEGATIVE_ZERO: Self = 0;

        #[inline(always)]
        fn from_index(index: usize) -> Self {
            index as $t
        }

        #[inline(always)]
        fn to_bits(self) -> u64 {
            self as $unsigned as u64
        }

        #[inline(always)]
        fn from_bits(bits: u64) -> Self {
            bits as $unsigned as $t
        }

        #[inline(always)]
        fn write_ne_bytes(self, out: &mut [u8]) {
            out.copy_from_slice(&self.to_ne_bytes());
        }

        #[inline(always)]
        fn read_ne_bytes(bytes: &[u8]) -> Self {
            let mut raw = [0u8; std::mem::size_of::<$t>()];
            raw.copy_from_slice(bytes);
            <$t>::from_ne_bytes(raw)
        }

        #[inline(always)]
        fn hash_lane<H: Hasher>(self, state: &mut H) {
            self.hash(state);
        }

        #[inline(always)]
        fn lane_add(self, rhs: Self) -> Self {
            WrappingAdd::wrapping_add(&self, &rhs)
        }

        #[inline(always)]
        fn lane_sub(self, rhs: Self) -> Self {
            WrappingSub::wrapping_sub(&self, &rhs)
        }

        #[inline(always)]
        fn lane_mul(self, rhs: Self) -> Self {
            WrappingMul::wrapping_mul(&self, &rhs)
        }

        #[inline(always)]
        fn lane_div(self, rhs: Self) -> Self {
            self.wrapping_div(rhs)
        }

        #[inline(always)]
        fn lane_ceil(self) -> Self {
            self
        }

        #[inline(always)]
        fn lane_floor(self) -> Self {
            self
        }

        #[inline(always)]
        fn lane_round(self) -> Self {
            self
        }

        #[inline(always)]
        fn lane_trunc(self) -> Self {
            self
        }

        #[inline(always)]
        fn lane_max(self, other: Self) -> Self {
            Ord::max(self, other)
        }

        #[inline(always)]
        fn lane_min(self, other: Self) -> Self {
            Ord::min(self, other)
        }

        #[inline(always)]
        fn lane_max_number(self, other: Self) -> Self {
            Ord::max(self, other)
        }

        #[inline(always)]
        fn lane_min_number(self, other: Self) -> Self {
            Ord::min(self, other)
        }

        #[inline(always)]
        fn lane_max_magnitude_number(self, other: Self) -> Self {
            self.lane_max_magnitude(other)
        }

        #[inline(always)]
        fn lane_min_magnitude_number(self, other: Self) -> Self {
            self.lane_min_magnitude(other)
        }

        #[inline(always)]
        fn lane_is_nan(self) -> bool {
            false
        }

        #[inline(always)]
        fn lane_is_finite(self) -> bool {
            true
        }

        #[inline(always)]
        fn lane_is_infinity(self) -> bool {
            false
        }

        #[inline(always)]
        fn lane_is_positive_infinity(self) -> bool {
            false
        }

        #[inline(always)]
        fn lane_is_negative_infinity(self) -> bool {
            false
        }

        #[inline(always)]
        fn lane_is_normal(self) -> bool {
            self != 0
        }

        #[inline(always)]
        fn lane_is_subnormal(self) -> bool {
            false
        }

        #[inline(always)]
        fn lane_is_integer(self) -> bool {
            true
        }

        #[inline(always)]
        fn lane_is_even_integer(self) -> bool {
            Integer::is_even(&self)
        }

        #[inline(always)]
        fn lane_is_odd_integer(self) -> bool {
            Integer::is_odd(&self)
        }
    };
}

macro_rules! impl_unsigned_element {
    ($($t:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl SimdElement for $t {
                type Lanes64 = [$t; 8 / std::mem::size_of::<$t>()];

                const KIND: ElementKind = ElementKind::$kind;
                const BITS: u32 = <$t>::BITS;
                const IS_SIGNED: bool = false;

                int_lane_ops!($t, $t);

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    self
                }

                #[inline(always)]
                fn lane_sqrt(self) -> Self {
                    Roots::sqrt(&self)
                }

                #[inline(always)]
                fn lane_copy_sign(self, _sign: Self) -> Self {
                    self
                }

                #[inline(always)]
                fn lane_max_magnitude(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                #[inline(always)]
                fn lane_min_magnitude(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline(always)]
                fn lane_is_negative(self) -> bool {
                    false
                }

                #[inline(always)]
                fn lane_is_positive(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_signed_element {
    ($($t:ty : $unsigned:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl SimdElement for $t {
                type Lanes64 = [$t; 8 / std::mem::size_of::<$t>()];

                const KIND: ElementKind = ElementKind::$kind;
                const BITS: u32 = <$t>::BITS;
                const IS_SIGNED: bool = true;

                int_lane_ops!($t, $unsigned);

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }

                /// Negative lanes have no real root and yield zero.
                #[inline(always)]
                fn lane_sqrt(self) -> Self {
                    if self < 0 {
                        0
                    } else {
                        Roots::sqrt(&self)
                    }
                }

                #[inline(always)]
                fn lane_copy_sign(self, sign: Self) -> Self {
                    let magnitude = self.wrapping_abs();
                    if sign < 0 {
                        magnitude.wrapping_neg()
                    } else {
                        magnitude
                    }
                }

                #[inline(always)]
                fn lane_max_magnitude(self, other: Self) -> Self {
                    let (x, y) = (self.unsigned_abs(), other.unsigned_abs());
                    if x > y {
                        self
                    } else if x == y {
                        if self < 0 { other } else { self }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_min_magnitude(self, other: Self) -> Self {
                    let (x, y) = (self.unsigned_abs(), other.unsigned_abs());
                    if x < y {
                        self
                    } else if x == y {
                        if self < 0 { self } else { other }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_is_negative(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn lane_is_positive(self) -> bool {
                    self >= 0
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty : $bits:ty => $kind:ident),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl SimdElement for $t {
                type Lanes64 = [$t; 8 / std::mem::size_of::<$t>()];

                const KIND: ElementKind = ElementKind::$kind;
                const BITS: u32 = <$bits>::BITS;
                const IS_FLOATING_POINT: bool = true;
                const IS_SIGNED: bool = true;
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const NEGATIVE_ZERO: Self = -0.0;

                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    index as $t
                }

                #[inline(always)]
                fn to_bits(self) -> u64 {
                    <$t>::to_bits(self) as u64
                }

                #[inline(always)]
                fn from_bits(bits: u64) -> Self {
                    <$t>::from_bits(bits as $bits)
                }

                #[inline(always)]
                fn write_ne_bytes(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline(always)]
                fn read_ne_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(raw)
                }

                #[inline(always)]
                fn hash_lane<H: Hasher>(self, state: &mut H) {
                    // 0.0 == -0.0, so both must hash alike
                    let canonical = if self == 0.0 { 0.0 } else { self };
                    <$t>::to_bits(canonical).hash(state);
                }

                #[inline(always)]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline(always)]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline(always)]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline(always)]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline(always)]
                fn lane_abs(self) -> Self {
                    Float::abs(self)
                }

                #[inline(always)]
                fn lane_ceil(self) -> Self {
                    Float::ceil(self)
                }

                #[inline(always)]
                fn lane_floor(self) -> Self {
                    Float::floor(self)
                }

                #[inline(always)]
                fn lane_round(self) -> Self {
                    self.round_ties_even()
                }

                #[inline(always)]
                fn lane_trunc(self) -> Self {
                    Float::trunc(self)
                }

                #[inline(always)]
                fn lane_sqrt(self) -> Self {
                    Float::sqrt(self)
                }

                #[inline(always)]
                fn lane_copy_sign(self, sign: Self) -> Self {
                    self.copysign(sign)
                }

                // IEEE 754:2019 maximum: NaN propagates, +0 is greater than -0
                #[inline(always)]
                fn lane_max(self, other: Self) -> Self {
                    if self != other {
                        if !self.is_nan() {
                            if other < self { self } else { other }
                        } else {
                            self
                        }
                    } else if other.is_sign_negative() {
                        self
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_min(self, other: Self) -> Self {
                    if self != other {
                        if !self.is_nan() {
                            if self < other { self } else { other }
                        } else {
                            self
                        }
                    } else if self.is_sign_negative() {
                        self
                    } else {
                        other
                    }
                }

                // IEEE 754:2019 maximumNumber: a NaN operand is ignored
                #[inline(always)]
                fn lane_max_number(self, other: Self) -> Self {
                    if self != other {
                        if !other.is_nan() {
                            if other < self { self } else { other }
                        } else {
                            self
                        }
                    } else if other.is_sign_negative() {
                        self
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_min_number(self, other: Self) -> Self {
                    if self != other {
                        if !other.is_nan() {
                            if self < other { self } else { other }
                        } else {
                            self
                        }
                    } else if self.is_sign_negative() {
                        self
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_max_magnitude(self, other: Self) -> Self {
                    let (x, y) = (self.abs(), other.abs());
                    if x > y || x.is_nan() {
                        self
                    } else if x == y {
                        if self.is_sign_negative() { other } else { self }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_min_magnitude(self, other: Self) -> Self {
                    let (x, y) = (self.abs(), other.abs());
                    if x < y || x.is_nan() {
                        self
                    } else if x == y {
                        if self.is_sign_negative() { self } else { other }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_max_magnitude_number(self, other: Self) -> Self {
                    let (x, y) = (self.abs(), other.abs());
                    if x > y || y.is_nan() {
                        self
                    } else if x == y {
                        if self.is_sign_negative() { other } else { self }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_min_magnitude_number(self, other: Self) -> Self {
                    let (x, y) = (self.abs(), other.abs());
                    if x < y || y.is_nan() {
                        self
                    } else if x == y {
                        if self.is_sign_negative() { self } else { other }
                    } else {
                        other
                    }
                }

                #[inline(always)]
                fn lane_is_nan(self) -> bool {
                    self.is_nan()
                }

                #[inline(always)]
                fn lane_is_finite(self) -> bool {
                    self.is_finite()
                }

                #[inline(always)]
                fn lane_is_infinity(self) -> bool {
                    self.is_infinite()
                }

                #[inline(always)]
                fn lane_is_positive_infinity(self) -> bool {
                    self == <$t>::INFINITY
                }

                #[inline(always)]
                fn lane_is_negative_infinity(self) -> bool {
                    self == <$t>::NEG_INFINITY
                }

                #[inline(always)]
                fn lane_is_normal(self) -> bool {
                    self.is_normal()
                }

                #[inline(always)]
                fn lane_is_subnormal(self) -> bool {
                    Float::classify(self) == FpCategory::Subnormal
                }

                #[inline(always)]
                fn lane_is_negative(self) -> bool {
                    self.is_sign_negative()
                }

                #[inline(always)]
                fn lane_is_positive(self) -> bool {
                    self.is_sign_positive()
                }

                #[inline(always)]
                fn lane_is_integer(self) -> bool {
                    self.is_finite() && self == self.trunc()
                }

                #[inline(always)]
                fn lane_is_even_integer(self) -> bool {
                    self.is_finite() && self % 2.0 == 0.0
                }

                #[inline(always)]
                fn lane_is_odd_integer(self) -> bool {
                    self.is_finite() && (self % 2.0).abs() == 1.0
                }
            }
        )*
    };
}

impl_unsigned_element!(u8 => U8, u16 => U16, u32 => U32, u64 => U64, usize => Usize);

impl_signed_element!(
    i8: u8 => I8,
    i16: u16 => I16,
    i32: u32 => I32,
    i64: u64 => I64,
    isize: usize => Isize,
);

impl_float_element!(f32: u32 => F32, f64: u64 => F64);

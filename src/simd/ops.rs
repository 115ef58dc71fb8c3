//! `std::ops` operators for both vector widths.
//!
//! `Vector64` applies the scalar lane operation to every element.
//! `Vector128` first offers the operation to the native backend and otherwise
//! applies the `Vector64` operator to each half.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, Mul, MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::simd::accel::{self, BinaryOp};
use crate::simd::element::SimdElement;
use crate::simd::{Vector128, Vector64};

macro_rules! impl_binary_op {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $lane:ident, $op:ident;)*) => {
        $(
            impl<T: SimdElement> $trait for Vector64<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip_map(rhs, T::$lane)
                }
            }

            impl<T: SimdElement> $trait for Vector128<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    accel::binary(BinaryOp::$op, self, rhs).unwrap_or_else(|| {
                        Self::from_halves(
                            self.lower().$method(rhs.lower()),
                            self.upper().$method(rhs.upper()),
                        )
                    })
                }
            }

            impl<T: SimdElement> $assign_trait for Vector64<T> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }

            impl<T: SimdElement> $assign_trait for Vector128<T> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }
        )*
    };
}

impl_binary_op! {
    Add, add, AddAssign, add_assign, lane_add, Add;
    Sub, sub, SubAssign, sub_assign, lane_sub, Sub;
    Mul, mul, MulAssign, mul_assign, lane_mul, Mul;
    Div, div, DivAssign, div_assign, lane_div, Div;
    BitAnd, bitand, BitAndAssign, bitand_assign, lane_and, And;
    BitOr, bitor, BitOrAssign, bitor_assign, lane_or, Or;
    BitXor, bitxor, BitXorAssign, bitxor_assign, lane_xor, Xor;
}

/// `vector OP scalar`: the scalar is broadcast first.
macro_rules! impl_scalar_op {
    ($vector:ident: $($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident;)*) => {
        $(
            impl<T: SimdElement> $trait<T> for $vector<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.$method(Self::splat(rhs))
                }
            }

            impl<T: SimdElement> $assign_trait<T> for $vector<T> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = (*self).$method(Self::splat(rhs));
                }
            }
        )*
    };
}

impl_scalar_op! {
    Vector64:
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
}

impl_scalar_op! {
    Vector128:
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
}

/// `scalar * vector` for each concrete element type.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Vector64<$t>> for $t {
                type Output = Vector64<$t>;

                #[inline]
                fn mul(self, rhs: Vector64<$t>) -> Vector64<$t> {
                    Vector64::splat(self) * rhs
                }
            }

            impl Mul<Vector128<$t>> for $t {
                type Output = Vector128<$t>;

                #[inline]
                fn mul(self, rhs: Vector128<$t>) -> Vector128<$t> {
                    Vector128::splat(self) * rhs
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize, f32, f64);

impl<T: SimdElement> Not for Vector64<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(T::lane_not)
    }
}

impl<T: SimdElement> Not for Vector128<T> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_halves(!self.lower(), !self.upper())
    }
}

impl<T: SimdElement> Neg for Vector64<T> {
    type Output = Self;

    /// Float lanes flip only the sign bit, so NaN payloads and signed zeros
    /// survive. Integer lanes compute `0 - x` with wrapping.
    #[inline]
    fn neg(self) -> Self {
        if T::IS_FLOATING_POINT {
            self ^ Self::splat(T::NEGATIVE_ZERO)
        } else {
            Self::zero() - self
        }
    }
}

impl<T: SimdElement> Neg for Vector128<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_halves(-self.lower(), -self.upper())
    }
}

impl<T: SimdElement> Shl<u32> for Vector64<T> {
    type Output = Self;

    #[inline]
    fn shl(self, count: u32) -> Self {
        self.map(|x| x.lane_shift_left(count))
    }
}

impl<T: SimdElement> Shr<u32> for Vector64<T> {
    type Output = Self;

    /// Arithmetic for signed integer and float lanes, logical for unsigned.
    #[inline]
    fn shr(self, count: u32) -> Self {
        if T::IS_SIGNED {
            self.map(|x| x.lane_shift_right_arithmetic(count))
        } else {
            self.map(|x| x.lane_shift_right_logical(count))
        }
    }
}

impl<T: SimdElement> Shl<u32> for Vector128<T> {
    type Output = Self;

    #[inline]
    fn shl(self, count: u32) -> Self {
        Self::from_halves(self.lower() << count, self.upper() << count)
    }
}

impl<T: SimdElement> Shr<u32> for Vector128<T> {
    type Output = Self;

    #[inline]
    fn shr(self, count: u32) -> Self {
        Self::from_halves(self.lower() >> count, self.upper() >> count)
    }
}

macro_rules! impl_shift_assign_and_index {
    ($($vector:ident),*) => {
        $(
            impl<T: SimdElement> ShlAssign<u32> for $vector<T> {
                #[inline]
                fn shl_assign(&mut self, count: u32) {
                    *self = *self << count;
                }
            }

            impl<T: SimdElement> ShrAssign<u32> for $vector<T> {
                #[inline]
                fn shr_assign(&mut self, count: u32) {
                    *self = *self >> count;
                }
            }

            impl<T: SimdElement> Index<usize> for $vector<T> {
                type Output = T;

                /// # Panics
                ///
                /// Panics if `index >= COUNT`.
                #[inline]
                fn index(&self, index: usize) -> &T {
                    &self.as_slice()[index]
                }
            }
        )*
    };
}

impl_shift_assign_and_index!(Vector64, Vector128);

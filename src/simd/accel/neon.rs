use std::arch::aarch64::*;

use super::BinaryOp;
use crate::simd::element::{ElementKind, SimdElement};
use crate::simd::Vector128;

#[inline(always)]
unsafe fn load<T: SimdElement>(vector: &Vector128<T>) -> uint8x16_t {
    vld1q_u8(vector as *const Vector128<T> as *const u8)
}

#[inline(always)]
unsafe fn store<T: SimdElement>(value: uint8x16_t) -> Vector128<T> {
    let mut result = Vector128::<T>::default();
    vst1q_u8(&mut result as *mut Vector128<T> as *mut u8, value);
    result
}

/// Reinterprets both operands, applies `$intrinsic` and reinterprets the
/// result back to bytes.
macro_rules! lanes {
    ($intrinsic:ident, $from:ident, $to:ident, $a:expr, $b:expr) => {
        $to($intrinsic($from($a), $from($b)))
    };
}

#[inline(always)]
pub(super) fn binary<T: SimdElement>(
    op: BinaryOp,
    lhs: &Vector128<T>,
    rhs: &Vector128<T>,
) -> Option<Vector128<T>> {
    let kind = T::KIND;
    let width = kind.size_bytes();

    // SAFETY: NEON is mandatory on aarch64 and the build script only selects
    // this backend on little-endian targets, where byte loads preserve lanes.
    unsafe {
        let a = load(lhs);
        let b = load(rhs);

        let result = match (op, kind) {
            (BinaryOp::And, _) => vandq_u8(a, b),
            (BinaryOp::Or, _) => vorrq_u8(a, b),
            (BinaryOp::Xor, _) => veorq_u8(a, b),

            (BinaryOp::Add, ElementKind::F32) => {
                lanes!(vaddq_f32, vreinterpretq_f32_u8, vreinterpretq_u8_f32, a, b)
            }
            (BinaryOp::Add, ElementKind::F64) => {
                lanes!(vaddq_f64, vreinterpretq_f64_u8, vreinterpretq_u8_f64, a, b)
            }
            (BinaryOp::Add, _) => match width {
                1 => vaddq_u8(a, b),
                2 => lanes!(vaddq_u16, vreinterpretq_u16_u8, vreinterpretq_u8_u16, a, b),
                4 => lanes!(vaddq_u32, vreinterpretq_u32_u8, vreinterpretq_u8_u32, a, b),
                _ => lanes!(vaddq_u64, vreinterpretq_u64_u8, vreinterpretq_u8_u64, a, b),
            },

            (BinaryOp::Sub, ElementKind::F32) => {
                lanes!(vsubq_f32, vreinterpretq_f32_u8, vreinterpretq_u8_f32, a, b)
            }
            (BinaryOp::Sub, ElementKind::F64) => {
                lanes!(vsubq_f64, vreinterpretq_f64_u8, vreinterpretq_u8_f64, a, b)
            }
            (BinaryOp::Sub, _) => match width {
                1 => vsubq_u8(a, b),
                2 => lanes!(vsubq_u16, vreinterpretq_u16_u8, vreinterpretq_u8_u16, a, b),
                4 => lanes!(vsubq_u32, vreinterpretq_u32_u8, vreinterpretq_u8_u32, a, b),
                _ => lanes!(vsubq_u64, vreinterpretq_u64_u8, vreinterpretq_u8_u64, a, b),
            },

            (BinaryOp::Mul, ElementKind::F32) => {
                lanes!(vmulq_f32, vreinterpretq_f32_u8, vreinterpretq_u8_f32, a, b)
            }
            (BinaryOp::Mul, ElementKind::F64) => {
                lanes!(vmulq_f64, vreinterpretq_f64_u8, vreinterpretq_u8_f64, a, b)
            }
            (BinaryOp::Mul, _) => match width {
                1 => vmulq_u8(a, b),
                2 => lanes!(vmulq_u16, vreinterpretq_u16_u8, vreinterpretq_u8_u16, a, b),
                4 => lanes!(vmulq_u32, vreinterpretq_u32_u8, vreinterpretq_u8_u32, a, b),
                // no 64-bit lane multiply
                _ => return None,
            },

            (BinaryOp::Div, ElementKind::F32) => {
                lanes!(vdivq_f32, vreinterpretq_f32_u8, vreinterpretq_u8_f32, a, b)
            }
            (BinaryOp::Div, ElementKind::F64) => {
                lanes!(vdivq_f64, vreinterpretq_f64_u8, vreinterpretq_u8_f64, a, b)
            }

            (BinaryOp::Equals, ElementKind::F32) => {
                lanes!(vceqq_f32, vreinterpretq_f32_u8, vreinterpretq_u8_u32, a, b)
            }
            (BinaryOp::Equals, ElementKind::F64) => {
                lanes!(vceqq_f64, vreinterpretq_f64_u8, vreinterpretq_u8_u64, a, b)
            }
            (BinaryOp::Equals, _) => match width {
                1 => vceqq_u8(a, b),
                2 => lanes!(vceqq_u16, vreinterpretq_u16_u8, vreinterpretq_u8_u16, a, b),
                4 => lanes!(vceqq_u32, vreinterpretq_u32_u8, vreinterpretq_u8_u32, a, b),
                _ => lanes!(vceqq_u64, vreinterpretq_u64_u8, vreinterpretq_u8_u64, a, b),
            },

            _ => return None,
        };

        Some(store(result))
    }
}

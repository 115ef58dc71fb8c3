use std::arch::x86_64::*;

use super::BinaryOp;
use crate::simd::element::{ElementKind, SimdElement};
use crate::simd::Vector128;

#[inline(always)]
unsafe fn load<T: SimdElement>(vector: &Vector128<T>) -> __m128i {
    _mm_load_si128(vector as *const Vector128<T> as *const __m128i)
}

#[inline(always)]
unsafe fn store<T: SimdElement>(value: __m128i) -> Vector128<T> {
    let mut result = Vector128::<T>::default();
    _mm_store_si128(&mut result as *mut Vector128<T> as *mut __m128i, value);
    result
}

/// Applies a `_ps` intrinsic to integer registers.
macro_rules! on_ps {
    ($intrinsic:ident, $a:expr, $b:expr) => {
        _mm_castps_si128($intrinsic(_mm_castsi128_ps($a), _mm_castsi128_ps($b)))
    };
}

/// Applies a `_pd` intrinsic to integer registers.
macro_rules! on_pd {
    ($intrinsic:ident, $a:expr, $b:expr) => {
        _mm_castpd_si128($intrinsic(_mm_castsi128_pd($a), _mm_castsi128_pd($b)))
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

    // SAFETY: SSE2 is part of the x86_64 baseline and `Vector128` is 16-byte
    // aligned, which is what the aligned load and store require.
    unsafe {
        let a = load(lhs);
        let b = load(rhs);

        let result = match (op, kind) {
            (BinaryOp::And, _) => _mm_and_si128(a, b),
            (BinaryOp::Or, _) => _mm_or_si128(a, b),
            (BinaryOp::Xor, _) => _mm_xor_si128(a, b),

            (BinaryOp::Add, ElementKind::F32) => on_ps!(_mm_add_ps, a, b),
            (BinaryOp::Add, ElementKind::F64) => on_pd!(_mm_add_pd, a, b),
            (BinaryOp::Add, _) => match width {
                1 => _mm_add_epi8(a, b),
                2 => _mm_add_epi16(a, b),
                4 => _mm_add_epi32(a, b),
                _ => _mm_add_epi64(a, b),
            },

            (BinaryOp::Sub, ElementKind::F32) => on_ps!(_mm_sub_ps, a, b),
            (BinaryOp::Sub, ElementKind::F64) => on_pd!(_mm_sub_pd, a, b),
            (BinaryOp::Sub, _) => match width {
                1 => _mm_sub_epi8(a, b),
                2 => _mm_sub_epi16(a, b),
                4 => _mm_sub_epi32(a, b),
                _ => _mm_sub_epi64(a, b),
            },

            (BinaryOp::Mul, ElementKind::F32) => on_ps!(_mm_mul_ps, a, b),
            (BinaryOp::Mul, ElementKind::F64) => on_pd!(_mm_mul_pd, a, b),
            // low half of the product is the same for signed and unsigned
            (BinaryOp::Mul, ElementKind::U16 | ElementKind::I16) => _mm_mullo_epi16(a, b),

            (BinaryOp::Div, ElementKind::F32) => on_ps!(_mm_div_ps, a, b),
            (BinaryOp::Div, ElementKind::F64) => on_pd!(_mm_div_pd, a, b),

            (BinaryOp::Equals, ElementKind::F32) => on_ps!(_mm_cmpeq_ps, a, b),
            (BinaryOp::Equals, ElementKind::F64) => on_pd!(_mm_cmpeq_pd, a, b),
            (BinaryOp::Equals, _) => match width {
                1 => _mm_cmpeq_epi8(a, b),
                2 => _mm_cmpeq_epi16(a, b),
                4 => _mm_cmpeq_epi32(a, b),
                // 64-bit compare needs SSE4.1
                _ => return None,
            },

            _ => return None,
        };

        Some(store(result))
    }
}

//! Native substitutions for a subset of `Vector128` binary operations.
//!
//! The build script selects at most one backend through `cfg(sse2)` or
//! `cfg(neon)`. A backend returns `None` for any element type or operation it
//! has no single instruction for, and the caller then applies the operation by
//! halves. Every `Some` result is bit-identical to the halves result.

use crate::simd::element::SimdElement;
use crate::simd::Vector128;

#[cfg(all(target_arch = "x86_64", sse2))]
mod sse2;

#[cfg(all(target_arch = "aarch64", neon, target_endian = "little"))]
mod neon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Xor,
    /// Element-wise equality mask.
    Equals,
}

#[cfg(all(target_arch = "x86_64", sse2))]
#[inline(always)]
pub(crate) fn binary<T: SimdElement>(
    op: BinaryOp,
    lhs: Vector128<T>,
    rhs: Vector128<T>,
) -> Option<Vector128<T>> {
    sse2::binary(op, &lhs, &rhs)
}

#[cfg(all(target_arch = "aarch64", neon, target_endian = "little"))]
#[inline(always)]
pub(crate) fn binary<T: SimdElement>(
    op: BinaryOp,
    lhs: Vector128<T>,
    rhs: Vector128<T>,
) -> Option<Vector128<T>> {
    neon::binary(op, &lhs, &rhs)
}

#[cfg(not(any(
    all(target_arch = "x86_64", sse2),
    all(target_arch = "aarch64", neon, target_endian = "little")
)))]
#[inline(always)]
pub(crate) fn binary<T: SimdElement>(
    _op: BinaryOp,
    _lhs: Vector128<T>,
    _rhs: Vector128<T>,
) -> Option<Vector128<T>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const OPS: [BinaryOp; 8] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Equals,
    ];

    fn by_halves<T: SimdElement>(op: BinaryOp, a: Vector128<T>, b: Vector128<T>) -> Vector128<T> {
        let (l, u) = match op {
            BinaryOp::Add => (a.lower() + b.lower(), a.upper() + b.upper()),
            BinaryOp::Sub => (a.lower() - b.lower(), a.upper() - b.upper()),
            BinaryOp::Mul => (a.lower() * b.lower(), a.upper() * b.upper()),
            BinaryOp::Div => (a.lower() / b.lower(), a.upper() / b.upper()),
            BinaryOp::And => (a.lower() & b.lower(), a.upper() & b.upper()),
            BinaryOp::Or => (a.lower() | b.lower(), a.upper() | b.upper()),
            BinaryOp::Xor => (a.lower() ^ b.lower(), a.upper() ^ b.upper()),
            BinaryOp::Equals => (a.lower().equals(b.lower()), a.upper().equals(b.upper())),
        };
        Vector128::from_halves(l, u)
    }

    fn check<T: SimdElement>(a: Vector128<T>, b: Vector128<T>) {
        for op in OPS {
            if let Some(native) = binary(op, a, b) {
                assert_eq!(
                    native.to_bytes(),
                    by_halves(op, a, b).to_bytes(),
                    "{op:?} on {a} and {b}"
                );
            }
        }
    }

    #[test]
    fn test_native_matches_halves_for_integers() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            // nonzero divisors keep integer division defined
            let a = Vector128::<i32>::from([rng.random(), rng.random(), rng.random(), rng.random()]);
            let b = Vector128::<i32>::from([
                rng.random_range(1..1000),
                rng.random_range(-1000..-1),
                rng.random_range(1..i32::MAX),
                1,
            ]);
            check(a, b);

            let a = Vector128::<u16>::from_bytes(rng.random());
            let b = Vector128::<u16>::splat(rng.random_range(1..=u16::MAX));
            check(a, b);

            let a = Vector128::<u8>::from_bytes(rng.random());
            check(a, Vector128::splat(rng.random_range(1..=u8::MAX)));

            let a = Vector128::<i64>::from([rng.random(), rng.random()]);
            check(a, Vector128::from([rng.random_range(1..i64::MAX), -3]));
        }
    }

    #[test]
    fn test_native_matches_halves_for_floats() {
        let mut rng = StdRng::seed_from_u64(11);
        let specials = [0.0f32, -0.0, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE / 4.0];
        for _ in 0..200 {
            let a = Vector128::<f32>::from([
                rng.random_range(-1e6..1e6),
                specials[rng.random_range(0..specials.len())],
                rng.random(),
                rng.random_range(-1.0..1.0),
            ]);
            let b = Vector128::<f32>::from([
                rng.random_range(-1e6..1e6),
                specials[rng.random_range(0..specials.len())],
                a.get_element(2).unwrap_or_default(),
                rng.random_range(0.5..2.0),
            ]);
            check(a, b);

            let a = Vector128::<f64>::from([rng.random_range(-1e12..1e12), rng.random()]);
            check(a, Vector128::from([rng.random_range(1.0..3.0), -0.0]));
        }
    }
}

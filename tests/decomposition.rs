//! Every `Vector128` operator must equal the `Vector64` operator applied to
//! each half, bit for bit, whichever backend the build selected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdvec::{SimdElement, Vector128, Vector64};

const ITERATIONS: usize = 500;

fn assert_same_bits<T: SimdElement>(actual: Vector128<T>, expected: Vector128<T>, what: &str) {
    assert_eq!(
        actual.to_bytes(),
        expected.to_bytes(),
        "{what}: {actual:?} != {expected:?}"
    );
}

fn by_halves<T: SimdElement>(
    a: Vector128<T>,
    b: Vector128<T>,
    op: fn(Vector64<T>, Vector64<T>) -> Vector64<T>,
) -> Vector128<T> {
    Vector128::from_halves(op(a.lower(), b.lower()), op(a.upper(), b.upper()))
}

fn check_decomposition<T: SimdElement>(a: Vector128<T>, b: Vector128<T>, shift: u32) {
    assert_same_bits(a + b, by_halves(a, b, |x, y| x + y), "add");
    assert_same_bits(a - b, by_halves(a, b, |x, y| x - y), "sub");
    assert_same_bits(a * b, by_halves(a, b, |x, y| x * y), "mul");
    assert_same_bits(a & b, by_halves(a, b, |x, y| x & y), "and");
    assert_same_bits(a | b, by_halves(a, b, |x, y| x | y), "or");
    assert_same_bits(a ^ b, by_halves(a, b, |x, y| x ^ y), "xor");
    assert_same_bits(a.and_not(b), by_halves(a, b, Vector64::and_not), "and_not");
    assert_same_bits(a.equals(b), by_halves(a, b, Vector64::equals), "equals");
    assert_same_bits(a.less_than(b), by_halves(a, b, Vector64::less_than), "less_than");
    assert_same_bits(a.max(b), by_halves(a, b, Vector64::max), "max");
    assert_same_bits(a.min_number(b), by_halves(a, b, Vector64::min_number), "min_number");

    assert_same_bits(!a, Vector128::from_halves(!a.lower(), !a.upper()), "not");
    assert_same_bits(-a, Vector128::from_halves(-a.lower(), -a.upper()), "neg");
    assert_same_bits(
        a << shift,
        Vector128::from_halves(a.lower() << shift, a.upper() << shift),
        "shl",
    );
    assert_same_bits(
        a >> shift,
        Vector128::from_halves(a.lower() >> shift, a.upper() >> shift),
        "shr",
    );
    assert_same_bits(
        a.shift_right_logical(shift),
        Vector128::from_halves(
            a.lower().shift_right_logical(shift),
            a.upper().shift_right_logical(shift),
        ),
        "shift_right_logical",
    );

    assert_eq!(a == b, a.lower() == b.lower() && a.upper() == b.upper());
    assert_eq!(a == a, a.lower() == a.lower() && a.upper() == a.upper());
}

/// Integer division is checked separately with divisors forced odd (nonzero).
fn check_integer_division<T: SimdElement>(a: Vector128<T>, b: Vector128<T>) {
    let divisor = b | Vector128::one();
    assert_same_bits(a / divisor, by_halves(a, divisor, |x, y| x / y), "div");
}

fn random_bits<T: SimdElement>(rng: &mut StdRng) -> Vector128<T> {
    Vector128::from_bytes(rng.random())
}

macro_rules! integer_decomposition_tests {
    ($($name:ident: $t:ty),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let mut rng = StdRng::seed_from_u64(42);
                for _ in 0..ITERATIONS {
                    let a = random_bits::<$t>(&mut rng);
                    let b = random_bits::<$t>(&mut rng);
                    let shift = rng.random_range(0..2 * <$t as SimdElement>::BITS);
                    check_decomposition(a, b, shift);
                    check_integer_division(a, b);
                }
            }
        )*
    };
}

integer_decomposition_tests! {
    test_decomposition_u8: u8,
    test_decomposition_i8: i8,
    test_decomposition_u16: u16,
    test_decomposition_i16: i16,
    test_decomposition_u32: u32,
    test_decomposition_i32: i32,
    test_decomposition_u64: u64,
    test_decomposition_i64: i64,
    test_decomposition_usize: usize,
    test_decomposition_isize: isize,
}

const F32_SPECIALS: [f32; 6] = [0.0, -0.0, 1.0, f32::INFINITY, f32::NEG_INFINITY, f32::MIN_POSITIVE];
const F64_SPECIALS: [f64; 6] = [0.0, -0.0, 1.0, f64::INFINITY, f64::NEG_INFINITY, f64::MIN_POSITIVE];

fn random_f32(rng: &mut StdRng) -> f32 {
    if rng.random_bool(0.2) {
        F32_SPECIALS[rng.random_range(0..F32_SPECIALS.len())]
    } else {
        rng.random_range(-1e4..1e4)
    }
}

fn random_f64(rng: &mut StdRng) -> f64 {
    if rng.random_bool(0.2) {
        F64_SPECIALS[rng.random_range(0..F64_SPECIALS.len())]
    } else {
        rng.random_range(-1e9..1e9)
    }
}

#[test]
fn test_decomposition_f32() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ITERATIONS {
        let a = Vector128::<f32>::from(std::array::from_fn(|_| random_f32(&mut rng)));
        let b = Vector128::<f32>::from(std::array::from_fn(|_| random_f32(&mut rng)));
        check_decomposition(a, b, rng.random_range(0..32));
        assert_same_bits(a / b, by_halves(a, b, |x, y| x / y), "div");
    }
}

#[test]
fn test_decomposition_f64() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..ITERATIONS {
        let a = Vector128::<f64>::from(std::array::from_fn(|_| random_f64(&mut rng)));
        let b = Vector128::<f64>::from(std::array::from_fn(|_| random_f64(&mut rng)));
        check_decomposition(a, b, rng.random_range(0..64));
        assert_same_bits(a / b, by_halves(a, b, |x, y| x / y), "div");
    }
}

#[test]
fn test_bitwise_decomposition_with_nan_payloads() {
    // bitwise ops never look at the float value, so random bits are fine here
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..ITERATIONS {
        let a = random_bits::<f32>(&mut rng);
        let b = random_bits::<f32>(&mut rng);
        assert_same_bits(a ^ b, by_halves(a, b, |x, y| x ^ y), "xor");
        assert_same_bits(a & b, by_halves(a, b, |x, y| x & y), "and");
        assert_same_bits(-a, Vector128::from_halves(-a.lower(), -a.upper()), "neg");
        assert_eq!(a == b, a.lower() == b.lower() && a.upper() == b.upper());
    }
}

//! Element-wise results checked against the scalar operations of the standard
//! library.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdvec::{SimdElement, Vector128};

const F64_CASES: [f64; 12] = [
    0.0,
    -0.0,
    0.5,
    -1.5,
    2.5,
    3.5,
    f64::MIN_POSITIVE / 4.0,
    f64::MAX,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
    -7.0,
];

fn pairs() -> impl Iterator<Item = (f64, f64)> {
    F64_CASES
        .iter()
        .flat_map(|&a| F64_CASES.iter().map(move |&b| (a, b)))
}

fn mask_lanes<T: SimdElement>(mask: Vector128<T>) -> Vec<bool> {
    mask.iter()
        .map(|lane| {
            assert!(
                lane.to_bits() == 0 || lane.to_bits() == T::all_bits_set().to_bits(),
                "mask lane is neither zero nor all ones: {lane:?}"
            );
            lane.to_bits() != 0
        })
        .collect()
}

fn same_f64(actual: f64, expected: f64) -> bool {
    actual.to_bits() == expected.to_bits() || (actual.is_nan() && expected.is_nan())
}

#[test]
fn test_unary_float_ops_match_std() {
    for chunk in F64_CASES.chunks(2) {
        let v = Vector128::<f64>::from([chunk[0], chunk[1]]);
        for (i, &x) in chunk.iter().enumerate() {
            assert!(same_f64(v.abs()[i], x.abs()), "abs {x}");
            assert!(same_f64(v.ceil()[i], x.ceil()), "ceil {x}");
            assert!(same_f64(v.floor()[i], x.floor()), "floor {x}");
            assert!(same_f64(v.trunc()[i], x.trunc()), "trunc {x}");
            assert!(same_f64(v.round()[i], x.round_ties_even()), "round {x}");
            assert!(same_f64(v.sqrt()[i], x.sqrt()), "sqrt {x}");
        }
    }
}

#[test]
fn test_round_ties_to_even() {
    let v = Vector128::<f32>::from([0.5, 1.5, 2.5, -2.5]);
    assert_eq!(v.round().to_vec(), vec![0.0, 2.0, 2.0, -2.0]);
}

#[test]
fn test_float_classification_masks() {
    for chunk in F64_CASES.chunks(2) {
        let v = Vector128::<f64>::from([chunk[0], chunk[1]]);
        let expect = |f: fn(f64) -> bool| chunk.iter().map(|&x| f(x)).collect::<Vec<_>>();

        assert_eq!(mask_lanes(v.is_nan()), expect(f64::is_nan));
        assert_eq!(mask_lanes(v.is_finite()), expect(f64::is_finite));
        assert_eq!(mask_lanes(v.is_infinity()), expect(f64::is_infinite));
        assert_eq!(mask_lanes(v.is_positive_infinity()), expect(|x| x == f64::INFINITY));
        assert_eq!(mask_lanes(v.is_negative_infinity()), expect(|x| x == f64::NEG_INFINITY));
        assert_eq!(mask_lanes(v.is_normal()), expect(f64::is_normal));
        assert_eq!(mask_lanes(v.is_subnormal()), expect(f64::is_subnormal));
        assert_eq!(mask_lanes(v.is_zero()), expect(|x| x == 0.0));
        assert_eq!(mask_lanes(v.is_negative()), expect(f64::is_sign_negative));
        assert_eq!(mask_lanes(v.is_positive()), expect(f64::is_sign_positive));
        assert_eq!(
            mask_lanes(v.is_integer()),
            expect(|x| x.is_finite() && x == x.trunc())
        );
        assert_eq!(
            mask_lanes(v.is_even_integer()),
            expect(|x| x.is_finite() && x % 2.0 == 0.0)
        );
        assert_eq!(
            mask_lanes(v.is_odd_integer()),
            expect(|x| x.is_finite() && (x % 2.0).abs() == 1.0)
        );
    }
}

#[test]
fn test_integer_classification() {
    let v = Vector128::<i32>::from([-3, 0, 4, i32::MIN]);
    assert_eq!(mask_lanes(v.is_negative()), vec![true, false, false, true]);
    assert_eq!(mask_lanes(v.is_positive()), vec![false, true, true, false]);
    assert_eq!(mask_lanes(v.is_zero()), vec![false, true, false, false]);
    assert_eq!(mask_lanes(v.is_even_integer()), vec![false, true, true, true]);
    assert_eq!(mask_lanes(v.is_odd_integer()), vec![true, false, false, false]);
    assert!(v.is_nan().none_where_all_bits_set());
    assert!(v.is_finite().all_where_all_bits_set());
    assert!(v.is_integer().all_where_all_bits_set());
}

#[test]
fn test_max_min_follow_ieee() {
    for (a, b) in pairs() {
        let v = Vector128::<f64>::splat(a);
        let w = Vector128::<f64>::splat(b);

        let max = v.max(w)[0];
        let min = v.min(w)[0];
        if a.is_nan() || b.is_nan() {
            assert!(max.is_nan() && min.is_nan(), "max/min({a}, {b})");
        } else if a == b {
            assert!(same_f64(max, if a.is_sign_negative() { b } else { a }));
            assert!(same_f64(min, if a.is_sign_negative() { a } else { b }));
        } else {
            assert!(same_f64(max, a.max(b)), "max({a}, {b})");
            assert!(same_f64(min, a.min(b)), "min({a}, {b})");
        }

        let max_number = v.max_number(w)[0];
        let min_number = v.min_number(w)[0];
        if a.is_nan() && b.is_nan() {
            assert!(max_number.is_nan() && min_number.is_nan());
        } else if a != b {
            // std's max/min already ignore a single NaN
            assert!(same_f64(max_number, a.max(b)), "max_number({a}, {b})");
            assert!(same_f64(min_number, a.min(b)), "min_number({a}, {b})");
        }
    }
}

#[test]
fn test_signed_zero_ordering() {
    let pos = Vector128::<f32>::splat(0.0);
    let neg = Vector128::<f32>::splat(-0.0);

    assert!(pos.max(neg).is_positive().all_where_all_bits_set());
    assert!(neg.max(pos).is_positive().all_where_all_bits_set());
    assert!(pos.min(neg).is_negative().all_where_all_bits_set());
    assert!(neg.min(pos).is_negative().all_where_all_bits_set());
    assert!(pos.max_number(neg).is_positive().all_where_all_bits_set());
    assert!(neg.min_number(pos).is_negative().all_where_all_bits_set());
}

#[test]
fn test_magnitude_selection() {
    let a = Vector128::<f32>::from([-3.0, 2.0, -2.0, f32::NAN]);
    let b = Vector128::<f32>::from([2.0, -3.0, 2.0, 1.0]);

    let max = a.max_magnitude(b).to_vec();
    assert_eq!(&max[..3], &[-3.0, -3.0, 2.0]);
    assert!(max[3].is_nan());
    assert_eq!(a.max_magnitude_number(b)[3], 1.0);

    let min = a.min_magnitude(b).to_vec();
    assert_eq!(&min[..3], &[2.0, 2.0, -2.0]);
    assert!(min[3].is_nan());
    assert_eq!(a.min_magnitude_number(b)[3], 1.0);

    let ints = Vector128::<i8>::splat(-5).max_magnitude(Vector128::splat(4));
    assert!(ints.all(-5));
}

#[test]
fn test_native_variants_on_ordered_inputs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let a: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let b: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0..100.0));
        let (va, vb) = (Vector128::from(a), Vector128::from(b));
        assert_eq!(va.max_native(vb), va.max(vb));
        assert_eq!(va.min_native(vb), va.min(vb));
    }
}

#[test]
fn test_copy_sign() {
    let magnitude = Vector128::<f64>::from([3.0, -3.0]);
    assert_eq!(
        magnitude.copy_sign(Vector128::from([-0.0, 1.0])).to_vec(),
        vec![-3.0, 3.0]
    );

    let ints = Vector128::<i16>::from([5, -5, 7, -7, 0, 1, i16::MIN, 9]);
    let signs = Vector128::<i16>::from([-1, 1, 1, -1, -1, -1, 1, 0]);
    assert_eq!(
        ints.copy_sign(signs).to_vec(),
        vec![-5, 5, 7, -7, 0, -1, i16::MIN, 9]
    );

    let unsigned = Vector128::<u32>::splat(8);
    assert_eq!(unsigned.copy_sign(Vector128::splat(u32::MAX)), unsigned);
}

#[test]
fn test_clamp() {
    let v = Vector128::<i32>::from([-10, 0, 5, 100]);
    let clamped = v.clamp(Vector128::splat(-1), Vector128::splat(10));
    assert_eq!(clamped.to_vec(), vec![-1, 0, 5, 10]);
    assert_eq!(
        v.clamp_native(Vector128::splat(-1), Vector128::splat(10)),
        clamped
    );

    let f = Vector128::<f32>::from([f32::NAN, -5.0, 0.5, 9.0]);
    let clamped = f.clamp(Vector128::zero(), Vector128::one()).to_vec();
    assert!(clamped[0].is_nan());
    assert_eq!(&clamped[1..], &[0.0, 0.5, 1.0]);
}

#[test]
fn test_integer_sqrt_floors() {
    let v = Vector128::<i32>::from([-4, 0, 15, 16]);
    assert_eq!(v.sqrt().to_vec(), vec![0, 0, 3, 4]);
    assert_eq!(Vector128::<u8>::splat(255).sqrt(), Vector128::splat(15));
}

#[test]
fn test_integer_abs_wraps_at_min() {
    let v = Vector128::<i8>::from([i8::MIN, -1, 0, 1, -128, 127, -127, 5, 0, 0, 0, 0, 0, 0, 0, 0]);
    let abs = v.abs().to_vec();
    assert_eq!(&abs[..8], &[i8::MIN, 1, 0, 1, i8::MIN, 127, 127, 5]);
}

#[test]
fn test_sum_and_dot_wrap() {
    let v = Vector128::<u8>::splat(200);
    assert_eq!(v.sum(), (200u32 * 16 % 256) as u8);
    assert_eq!(
        Vector128::<i32>::from([i32::MAX, 1, 0, 0]).sum(),
        i32::MIN
    );

    let a = Vector128::<i64>::from([3, -4]);
    let b = Vector128::<i64>::from([5, 6]);
    assert_eq!(a.dot(b), -9);
    assert_eq!(Vector128::<f32>::from([1.0, 2.0, 3.0, 4.0]).sum(), 10.0);
}

#[test]
fn test_arithmetic_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..500 {
        let a: [i16; 8] = rng.random();
        let b: [i16; 8] = rng.random();
        let (va, vb) = (Vector128::from(a), Vector128::from(b));
        for i in 0..8 {
            assert_eq!((va + vb)[i], a[i].wrapping_add(b[i]));
            assert_eq!((va - vb)[i], a[i].wrapping_sub(b[i]));
            assert_eq!((va * vb)[i], a[i].wrapping_mul(b[i]));
            assert_eq!((-va)[i], a[i].wrapping_neg());
            assert_eq!((va >> 3)[i], a[i] >> 3);
            assert_eq!(va.shift_right_logical(3)[i], ((a[i] as u16) >> 3) as i16);
            assert_eq!((va << 17)[i], a[i] << 1);
        }
    }
}

#[test]
fn test_comparisons_and_reductions() {
    let a = Vector128::<u16>::from([1, 2, 3, 4, 5, 6, 7, 8]);
    let b = Vector128::<u16>::splat(4);

    assert_eq!(
        mask_lanes(a.greater_than(b)),
        vec![false, false, false, false, true, true, true, true]
    );
    assert_eq!(mask_lanes(a.less_than_or_equal(b)).iter().filter(|&&m| m).count(), 4);
    assert!(a.greater_than_any(b));
    assert!(!a.greater_than_all(b));
    assert!(a.greater_than_or_equal_all(Vector128::one()));
    assert!(a.less_than_all(Vector128::splat(9)));
    assert!(!a.less_than_or_equal_any(Vector128::zero()));
    assert!(a.equals_any(b));

    assert_eq!(a.count_matches(4), 1);
    assert_eq!(a.index_of(6), Some(5));
    assert_eq!(a.last_index_of(9), None);
    assert_eq!(a.greater_than(b).index_of_where_all_bits_set(), Some(4));
    assert_eq!(a.less_than(b).last_index_of_where_all_bits_set(), Some(2));
    assert_eq!(a.greater_than(b).count_where_all_bits_set(), 4);

    let nan = Vector128::<f64>::from([f64::NAN, 1.0]);
    assert!(!nan.greater_than_any(Vector128::splat(f64::NEG_INFINITY).with_element(1, 2.0).unwrap()));
    assert_eq!(nan.index_of(f64::NAN), None);
}

#[test]
fn test_conditional_select_is_bitwise() {
    let condition = Vector128::<u32>::from([u32::MAX, 0, 0xFFFF_0000, 0]);
    let left = Vector128::<u32>::splat(0x1234_5678);
    let right = Vector128::<u32>::splat(0xABCD_EF01);
    assert_eq!(
        Vector128::conditional_select(condition, left, right).to_vec(),
        vec![0x1234_5678, 0xABCD_EF01, 0x1234_EF01, 0xABCD_EF01]
    );

    let a = Vector128::<f32>::from([1.0, 5.0, -2.0, 0.0]);
    let b = Vector128::<f32>::splat(2.0);
    let larger = Vector128::conditional_select(a.greater_than(b), a, b);
    assert_eq!(larger.to_vec(), vec![2.0, 5.0, 2.0, 2.0]);
}

#[test]
fn test_mul_add_estimate() {
    let a = Vector128::<i32>::from([1, 2, 3, 4]);
    assert_eq!(
        a.mul_add_estimate(Vector128::splat(3), Vector128::one()).to_vec(),
        vec![4, 7, 10, 13]
    );

    let f = Vector128::<f64>::from([0.5, -1.5]);
    let r = f.mul_add_estimate(Vector128::splat(2.0), Vector128::splat(0.25));
    assert_eq!(r.to_vec(), vec![1.25, -2.75]);
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdvec::{ElementKind, SimdError, SimdVector, Vector128, Vector64};

macro_rules! layout_tests {
    ($($name:ident: $t:ty => $count:expr),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(Vector128::<$t>::COUNT, $count);
                assert_eq!(Vector128::<$t>::count(), 128 / (8 * std::mem::size_of::<$t>()));
                assert_eq!(Vector64::<$t>::COUNT * 2, $count);
                assert_eq!(std::mem::size_of::<Vector128<$t>>(), 16);
                assert_eq!(std::mem::size_of::<Vector64<$t>>(), 8);
                assert_eq!(std::mem::align_of::<Vector128<$t>>(), 16);
                assert_eq!(ElementKind::of::<$t>().map(ElementKind::lanes_per_vector128), Ok($count));

                let mut rng = StdRng::seed_from_u64($count as u64);
                let values: Vec<$t> = (0..$count).map(|_| rng.random()).collect();
                let vector = Vector128::<$t>::from_slice(&values).unwrap();
                assert_eq!(vector.to_vec().iter().map(|x| x.to_ne_bytes()).collect::<Vec<_>>(),
                           values.iter().map(|x| x.to_ne_bytes()).collect::<Vec<_>>());

                let mut out = vec![<$t>::default(); $count];
                vector.copy_to(&mut out).unwrap();
                assert_eq!(Vector128::<$t>::from_slice(&out).map(|v| v.to_bytes()), Ok(vector.to_bytes()));
            }
        )*
    };
}

layout_tests! {
    test_layout_u8: u8 => 16,
    test_layout_i8: i8 => 16,
    test_layout_u16: u16 => 8,
    test_layout_i16: i16 => 8,
    test_layout_u32: u32 => 4,
    test_layout_i32: i32 => 4,
    test_layout_u64: u64 => 2,
    test_layout_i64: i64 => 2,
    test_layout_f32: f32 => 4,
    test_layout_f64: f64 => 2,
}

#[test]
fn test_pointer_sized_layout() {
    let count = 16 / std::mem::size_of::<usize>();
    assert_eq!(Vector128::<usize>::COUNT, count);
    assert_eq!(Vector128::<isize>::COUNT, count);
    assert_eq!(std::mem::size_of::<Vector128<isize>>(), 16);
    assert_eq!(Vector128::<usize>::indices().to_vec(), (0..count).collect::<Vec<_>>());
}

#[test]
fn test_scenario() {
    assert_eq!(Vector128::<i32>::indices().to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(Vector128::<i32>::splat(5).to_vec(), vec![5, 5, 5, 5]);
    assert_eq!(
        (Vector128::<i32>::splat(5) + Vector128::splat(3)).to_vec(),
        vec![8, 8, 8, 8]
    );
    assert_eq!(Vector128::<i32>::from([1, 2, 3, 4]).get_element(2), Ok(3));
}

#[test]
fn test_constants() {
    assert!(Vector128::<f64>::zero().all(0.0));
    assert!(Vector128::<u16>::one().all(1));
    assert!(Vector128::<i8>::all_bits_set().all(-1));
    assert!(Vector128::<f32>::all_bits_set()
        .reinterpret::<u32>()
        .all(u32::MAX));
    assert_eq!(Vector128::<f32>::indices().to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(Vector128::<u8>::indices().get_element(15), Ok(15));
    assert_eq!(Vector128::<i16>::create_scalar(-7).to_vec(), vec![-7, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(Vector128::<f64>::create_scalar(2.5).to_scalar(), 2.5);
}

#[test]
fn test_halves_partition_and_byte_layout() {
    let v = Vector128::<u32>::from([0x0101_0101, 0x0202_0202, 0x0303_0303, 0x0404_0404]);
    assert_eq!(v.lower().as_slice(), &[0x0101_0101, 0x0202_0202]);
    assert_eq!(v.upper().as_slice(), &[0x0303_0303, 0x0404_0404]);

    let bytes = v.to_bytes();
    assert_eq!(&bytes[..8], &v.lower().to_bytes()[..]);
    assert_eq!(&bytes[8..], &v.upper().to_bytes()[..]);
    assert_eq!(Vector128::<u32>::from_bytes(bytes), v);

    let swapped = v.with_lower(v.upper()).with_upper(v.lower());
    assert_eq!(swapped.to_vec(), vec![0x0303_0303, 0x0404_0404, 0x0101_0101, 0x0202_0202]);
}

#[test]
fn test_element_access_bounds() {
    let v = Vector128::<u64>::from([10, 20]);
    assert_eq!(v.get_element(1), Ok(20));
    assert_eq!(v[0], 10);
    assert_eq!(
        v.get_element(2),
        Err(SimdError::IndexOutOfRange { index: 2, count: 2 })
    );
    assert_eq!(
        v.with_element(usize::MAX, 0),
        Err(SimdError::IndexOutOfRange {
            index: usize::MAX,
            count: 2
        })
    );

    let updated = v.with_element(0, 99).unwrap();
    assert_eq!(updated.to_vec(), vec![99, 20]);
    assert_eq!(v.to_vec(), vec![10, 20]);

    let half = Vector64::<u8>::splat(1);
    assert!(matches!(
        half.get_element(8),
        Err(SimdError::IndexOutOfRange { index: 8, count: 8 })
    ));
}

#[test]
fn test_short_sequences_fail_before_writing() {
    let short = [1.0f32, 2.0, 3.0];
    assert_eq!(
        Vector128::<f32>::from_slice(&short),
        Err(SimdError::InsufficientLength {
            required: 4,
            actual: 3
        })
    );

    let mut destination = [0.0f32; 3];
    assert!(Vector128::<f32>::one().copy_to(&mut destination).is_err());
    assert_eq!(destination, [0.0; 3]);

    let mut destination = [0.0f32; 6];
    assert!(Vector128::<f32>::one().copy_to_at(&mut destination, 3).is_err());
    assert_eq!(destination, [0.0; 6]);
    assert!(Vector128::<f32>::one().copy_to_at(&mut destination, 2).is_ok());
    assert_eq!(destination, [0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_generic_round_trip() {
    fn round_trip<V: SimdVector<i32>>(values: &[i32]) -> Vec<i32> {
        V::from_slice(values).map(V::to_vec).unwrap_or_default()
    }

    let values = [9, -8, 7, -6, 5];
    assert_eq!(round_trip::<Vector128<i32>>(&values), vec![9, -8, 7, -6]);
    assert_eq!(round_trip::<Vector64<i32>>(&values), vec![9, -8]);
}

#[test]
fn test_reinterpret_keeps_bits() {
    let v = Vector128::<f64>::from([1.0, -0.0]);
    let bits = v.reinterpret::<u64>();
    assert_eq!(bits.to_vec(), vec![1.0f64.to_bits(), (-0.0f64).to_bits()]);
    assert_eq!(bits.reinterpret::<f64>().to_bytes(), v.to_bytes());
    assert_eq!(v.reinterpret::<u8>().to_bytes(), v.to_bytes());
}

#[test]
fn test_display_forwards_format_options() {
    let v = Vector128::<f32>::from([1.0, 2.5, -3.0, 0.126]);
    assert_eq!(v.to_string(), "<1, 2.5, -3, 0.126>");
    assert_eq!(format!("{v:.2}"), "<1.00, 2.50, -3.00, 0.13>");
    assert_eq!(Vector64::<u8>::splat(7).to_string(), "<7, 7, 7, 7, 7, 7, 7, 7>");
}

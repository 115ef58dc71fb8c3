//! Prints which backend this build selected and the shape of `Vector128<T>`
//! for every supported element type.

use simdvec::platform;
use simdvec::simd::{count_of, is_supported, DynVector128, ElementKind, Vector128};

fn print_element_table() {
    println!("{:<8} {:>6} {:>6} {:>8}", "element", "bits", "count", "signed");
    for kind in ElementKind::ALL {
        println!(
            "{:<8} {:>6} {:>6} {:>8}",
            kind.name(),
            kind.bits(),
            kind.lanes_per_vector128(),
            kind.is_signed()
        );
    }
}

fn main() {
    println!("backend:               {}", platform::backend_name());
    println!(
        "hardware accelerated:  {}",
        platform::is_hardware_accelerated()
    );
    println!("alignment:             {} bytes", platform::ALIGNMENT);
    println!(
        "size of Vector128<T>:  {} bytes",
        std::mem::size_of::<Vector128<u8>>()
    );
    println!();

    print_element_table();
    println!();

    println!("is_supported::<bool>() = {}", is_supported::<bool>());
    match count_of::<char>() {
        Ok(count) => println!("count_of::<char>() = {count}"),
        Err(err) => println!("count_of::<char>() failed: {err}"),
    }
    println!();

    let indices = Vector128::<i32>::indices();
    let sum = Vector128::<i32>::splat(5) + Vector128::splat(3);
    println!("Vector128::<i32>::indices()     = {indices}");
    println!("splat(5) + splat(3)             = {sum}");
    println!(
        "-splat(0.0f32)                  = {:?}",
        (-Vector128::<f32>::zero()).to_vec()
    );
    println!(
        "splat(NaN) == splat(NaN)        = {}",
        Vector128::<f64>::splat(f64::NAN) == Vector128::splat(f64::NAN)
    );

    match DynVector128::from_slice(&[1.5f64, -2.25]) {
        Ok(vector) => println!("DynVector128 ({})          = {vector}", vector.kind()),
        Err(err) => println!("DynVector128 failed: {err}"),
    }
}

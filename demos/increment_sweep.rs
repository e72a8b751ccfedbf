// ============================================================================
// Increment Sweep Example
// ============================================================================

use mixed_radix::prelude::*;

fn main() -> Result<(), RadixError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let mut a = MixedRadixNumber::new(-5, [2, 1, 3, 2])?;

    println!("=== Mixed-Radix Increment Sweep ===\n");
    println!("Radix        : {:?}", a.radix());
    println!("Place values : {:?}", a.place_values().as_slice());
    println!("Max value    : {}", a.max_val());

    println!("\n  value    digits");
    for _ in 0..=20 {
        println!("{:>7} :  {}{:?}", a.to_string(), a.sign_char(), a.digits().as_slice());
        a += 1;
    }

    Ok(())
}

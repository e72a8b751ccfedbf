// ============================================================================
// Mixed-Radix Library
// Positional numeral systems with independently-sized digit positions
// ============================================================================

//! # Mixed Radix
//!
//! A mixed-radix integer representation: one signed value readable and
//! writable either as a single integer or as a sequence of per-position
//! digits, each position with its own base. Generalizes binary, decimal,
//! time-of-day and odometer-style counters to arbitrary digit positions.
//!
//! ## Features
//!
//! - **Two views, one value** - digits and integer stay consistent because
//!   only the integer is stored; digits are derived on demand
//! - **Overflow policies** - Relaxed truncation, Modular wrap-around with
//!   loop counting, Warning diagnostics, or Halt rejection
//! - **Checked arithmetic** - `checked_*` methods returning `Result`, with
//!   operator sugar for `+`, `-`, `*`, `+=`
//! - **Validating digit assignment** - digits at or above their radix are
//!   rejected instead of silently composing a value that would not
//!   round-trip
//!
//! ## Example
//!
//! ```rust
//! use mixed_radix::prelude::*;
//!
//! // An odometer with positions of size 2, 1, 3, 2
//! let mut n = MixedRadixNumber::new(-5, [2, 1, 3, 2])?;
//! assert_eq!(n.place_values().as_slice(), &[6, 6, 2, 1]);
//! assert_eq!(n.max_val(), 12);
//! assert_eq!(n.digits().as_slice(), &[0, 0, 2, 1]); // from |−5|
//! assert_eq!(n.to_string(), "-5");
//!
//! // The digit view writes back through the same underlying value
//! n.set_digits(&[1, 0, 2, 1])?;
//! assert_eq!(n.value(), 11);
//!
//! // Policies govern what happens past the representable range
//! let mut clock = MixedRadixBuilder::new([24, 60, 60])
//!     .overflow_policy(OverflowPolicy::Modular)
//!     .build()?;
//! clock.set_value(25 * 3600)?;
//! assert_eq!(clock.digits().as_slice(), &[1, 0, 0]); // wrapped past midnight
//! assert_eq!(clock.loop_count(), Some(1));
//! # Ok::<(), mixed_radix::numeric::RadixError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        DigitVec, MixedRadixBuilder, MixedRadixNumber, OverflowPolicy, ProductVec, RadixError,
        RadixResult, DEFAULT_RADIX_LEN,
    };
}

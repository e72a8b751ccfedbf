// ============================================================================
// Mixed-Radix Builder
// Fluent construction covering value-or-digits initialization
// ============================================================================

use super::conversion::DigitVec;
use super::errors::RadixResult;
use super::mixed_radix::MixedRadixNumber;
use super::policy::OverflowPolicy;

/// Number of positions a uniform radix is repeated to when no explicit
/// length is configured.
pub const DEFAULT_RADIX_LEN: usize = 8;

enum RadixSource {
    Explicit(DigitVec),
    Uniform(u64),
}

/// Builder for [`MixedRadixNumber`] with fluent API.
///
/// Covers the full construction surface: an explicit radix list or a single
/// radix repeated to a configurable length, initialization by value or by
/// digit sequence, and the overflow policy (Relaxed when not configured).
///
/// # Example
/// ```ignore
/// use mixed_radix::numeric::{MixedRadixBuilder, OverflowPolicy};
///
/// // 13:45:07 on a 24-hour clock
/// let clock = MixedRadixBuilder::new([24, 60, 60])
///     .digits([13, 45, 7])
///     .overflow_policy(OverflowPolicy::Modular)
///     .build()?;
///
/// // Eight octal positions
/// let octal = MixedRadixBuilder::uniform(8).value(0o644).build()?;
/// ```
pub struct MixedRadixBuilder {
    value: i64,
    digits: Option<DigitVec>,
    radix: RadixSource,
    radix_length: usize,
    policy: OverflowPolicy,
}

impl MixedRadixBuilder {
    /// Create a builder with an explicit radix list, most-significant
    /// position first.
    pub fn new(radix: impl IntoIterator<Item = u64>) -> Self {
        Self {
            value: 0,
            digits: None,
            radix: RadixSource::Explicit(radix.into_iter().collect()),
            radix_length: DEFAULT_RADIX_LEN,
            policy: OverflowPolicy::default(),
        }
    }

    /// Create a builder with a single radix repeated to the configured
    /// length ([`DEFAULT_RADIX_LEN`] unless [`radix_length`] changes it).
    ///
    /// [`radix_length`]: Self::radix_length
    pub fn uniform(radix: u64) -> Self {
        Self {
            value: 0,
            digits: None,
            radix: RadixSource::Uniform(radix),
            radix_length: DEFAULT_RADIX_LEN,
            policy: OverflowPolicy::default(),
        }
    }

    /// Set the initial value (default 0).
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Set the initial digit sequence, most-significant first.
    ///
    /// Digits, when given, take precedence over [`value`](Self::value): they
    /// are composed and assigned after construction, so the overflow policy
    /// and per-digit validation both apply at build time.
    pub fn digits(mut self, digits: impl IntoIterator<Item = u64>) -> Self {
        self.digits = Some(digits.into_iter().collect());
        self
    }

    /// Set how many positions a uniform radix is repeated to.
    ///
    /// Has no effect on an explicit radix list.
    pub fn radix_length(mut self, length: usize) -> Self {
        self.radix_length = length;
        self
    }

    /// Set the overflow policy (default Relaxed).
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the number.
    ///
    /// # Errors
    /// - `ZeroRadix` if any radix entry is 0
    /// - `LengthMismatch` / `DigitOutOfRange` / `Overflow` from an initial
    ///   digit sequence
    /// - `OutOfRange` under Halt when the initial value is out of range
    pub fn build(self) -> RadixResult<MixedRadixNumber> {
        let radix: DigitVec = match self.radix {
            RadixSource::Explicit(radix) => radix,
            RadixSource::Uniform(radix) => {
                std::iter::repeat(radix).take(self.radix_length).collect()
            },
        };

        let mut number = MixedRadixNumber::with_policy(self.value, radix, self.policy)?;
        if let Some(digits) = self.digits {
            number.set_digits(&digits)?;
        }
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::RadixError;

    #[test]
    fn test_explicit_radix() {
        let n = MixedRadixBuilder::new([24, 60, 60]).value(3661).build().unwrap();
        assert_eq!(n.radix(), &[24, 60, 60]);
        assert_eq!(n.digits().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_uniform_radix_default_length() {
        let n = MixedRadixBuilder::uniform(10).value(42).build().unwrap();
        assert_eq!(n.radix(), &[10, 10, 10, 10, 10, 10, 10, 10]);
        assert_eq!(n.max_val(), 100_000_000);
    }

    #[test]
    fn test_uniform_radix_custom_length() {
        let n = MixedRadixBuilder::uniform(2).radix_length(3).value(5).build().unwrap();
        assert_eq!(n.radix(), &[2, 2, 2]);
        assert_eq!(n.digits().as_slice(), &[1, 0, 1]);
    }

    #[test]
    fn test_digits_initialization() {
        let n = MixedRadixBuilder::new([24, 60, 60])
            .digits([13, 45, 7])
            .build()
            .unwrap();
        assert_eq!(n.value(), 13 * 3600 + 45 * 60 + 7);
    }

    #[test]
    fn test_digits_take_precedence_over_value() {
        let n = MixedRadixBuilder::new([10, 10])
            .value(99)
            .digits([1, 2])
            .build()
            .unwrap();
        assert_eq!(n.value(), 12);
    }

    #[test]
    fn test_policy_applies_at_build() {
        let n = MixedRadixBuilder::new([2, 1, 3, 2])
            .value(27)
            .overflow_policy(OverflowPolicy::Modular)
            .build()
            .unwrap();
        assert_eq!(n.value(), 3);
        assert_eq!(n.loop_count(), Some(2));

        let result = MixedRadixBuilder::new([2, 1, 3, 2])
            .value(12)
            .overflow_policy(OverflowPolicy::Halt)
            .build();
        assert_eq!(result, Err(RadixError::OutOfRange));
    }

    #[test]
    fn test_parsed_policy() {
        let policy: OverflowPolicy = "modular".parse().unwrap();
        let n = MixedRadixBuilder::uniform(16)
            .radix_length(2)
            .value(300)
            .overflow_policy(policy)
            .build()
            .unwrap();
        assert_eq!(n.value(), 44); // 300 mod 256
        assert_eq!(n.loop_count(), Some(1));
    }

    #[test]
    fn test_build_errors() {
        assert_eq!(
            MixedRadixBuilder::new([2, 0, 2]).build(),
            Err(RadixError::ZeroRadix)
        );
        assert_eq!(
            MixedRadixBuilder::new([10, 10]).digits([1, 2, 3]).build(),
            Err(RadixError::LengthMismatch)
        );
        assert_eq!(
            MixedRadixBuilder::new([10, 10]).digits([10, 0]).build(),
            Err(RadixError::DigitOutOfRange)
        );
    }
}

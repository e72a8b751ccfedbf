// ============================================================================
// Mixed-Radix Number
// A signed integer viewable as per-position digits with independent bases
// ============================================================================

use super::conversion::{compose, decompose, radix_products, DigitVec, ProductVec};
use super::errors::{RadixError, RadixResult};
use super::policy::OverflowPolicy;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed integer with a mixed-radix positional view.
///
/// The canonical representation is a single `i64`; the digit sequence, the
/// place values and the maximum representable value are derived from it and
/// from the per-position radix list (most-significant position first). The
/// value and digit views stay consistent because only the value is stored:
/// assigning digits composes them and routes the result through the value
/// setter, so the configured [`OverflowPolicy`] applies on every assignment.
///
/// Digits are always computed from the magnitude; the sign is carried by the
/// value itself and exposed through [`sign`](Self::sign) and
/// [`sign_char`](Self::sign_char).
///
/// # Example
/// ```ignore
/// use mixed_radix::numeric::MixedRadixNumber;
///
/// let n = MixedRadixNumber::new(-5, [2, 1, 3, 2])?;
/// assert_eq!(n.digits().as_slice(), &[0, 0, 2, 1]); // |−5| = 2*2 + 1*1
/// assert_eq!(n.sign(), -1);
/// assert_eq!(n.to_string(), "-5");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MixedRadixNumber {
    value: i64,
    radix: DigitVec,
    policy: OverflowPolicy,
    loop_count: Option<i64>,
}

fn validate_radix(radix: &[u64]) -> RadixResult<()> {
    if radix.contains(&0) {
        return Err(RadixError::ZeroRadix);
    }
    Ok(())
}

impl MixedRadixNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a number with the default (Relaxed) overflow policy.
    ///
    /// # Errors
    /// Returns `ZeroRadix` if any radix entry is 0.
    pub fn new(value: i64, radix: impl IntoIterator<Item = u64>) -> RadixResult<Self> {
        Self::with_policy(value, radix, OverflowPolicy::default())
    }

    /// Create a number with an explicit overflow policy.
    ///
    /// The initial value is routed through the value setter, so the policy
    /// applies from the start (Halt rejects an out-of-range initial value,
    /// Modular wraps it).
    ///
    /// # Errors
    /// Returns `ZeroRadix` if any radix entry is 0, or `OutOfRange` under
    /// Halt when the initial magnitude reaches `max_val`.
    pub fn with_policy(
        value: i64,
        radix: impl IntoIterator<Item = u64>,
        policy: OverflowPolicy,
    ) -> RadixResult<Self> {
        let radix: DigitVec = radix.into_iter().collect();
        validate_radix(&radix)?;

        let mut number = Self {
            value: 0,
            radix,
            policy,
            loop_count: None,
        };
        number.set_value(value)?;
        Ok(number)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The canonical integer value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The radix list, most-significant position first.
    #[inline]
    pub fn radix(&self) -> &[u64] {
        &self.radix
    }

    /// The radix list, least-significant position first.
    pub fn radix_reversed(&self) -> DigitVec {
        self.radix.iter().rev().copied().collect()
    }

    /// The per-position digits of the magnitude, most-significant first.
    ///
    /// Always has exactly as many entries as the radix list; magnitudes at
    /// or above [`max_val`](Self::max_val) are truncated to the configured
    /// positions.
    pub fn digits(&self) -> DigitVec {
        decompose(self.value.unsigned_abs(), &self.radix)
    }

    /// The digits, least-significant position first.
    pub fn digits_reversed(&self) -> DigitVec {
        let mut digits = self.digits();
        digits.reverse();
        digits
    }

    /// The per-position multipliers: `place_values[i]` is the product of
    /// every radix to the right of position `i`, and the last entry is 1.
    pub fn place_values(&self) -> ProductVec {
        let mut products = radix_products(&self.radix);
        products.remove(0);
        products
    }

    /// One past the largest representable magnitude: the product of every
    /// radix entry.
    pub fn max_val(&self) -> u128 {
        radix_products(&self.radix)[0]
    }

    /// The configured overflow policy.
    #[inline]
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Quotient recorded by the last Modular assignment, `None` before one
    /// has happened. Never folded into the value itself.
    #[inline]
    pub fn loop_count(&self) -> Option<i64> {
        self.loop_count
    }

    /// -1, 0 or +1 per the sign of the value.
    #[inline]
    pub const fn sign(&self) -> i64 {
        self.value.signum()
    }

    /// '+', '-' or ' ' (for zero); the prefix used by the `Display` output.
    #[inline]
    pub const fn sign_char(&self) -> char {
        if self.value > 0 {
            '+'
        } else if self.value < 0 {
            '-'
        } else {
            ' '
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Assign a new value, applying the configured overflow policy.
    ///
    /// - Relaxed: stored unchanged, no range check.
    /// - Modular: stores `value mod max_val` (euclidean, in `[0, max_val)`)
    ///   and records the quotient as the loop count.
    /// - Warning: stored unchanged; emits a `tracing` warning when the
    ///   magnitude reaches `max_val`.
    /// - Halt: rejected with `OutOfRange` when the magnitude reaches
    ///   `max_val`, otherwise stored unchanged.
    ///
    /// # Errors
    /// Returns `OutOfRange` only under Halt.
    pub fn set_value(&mut self, value: i64) -> RadixResult<()> {
        match self.policy {
            OverflowPolicy::Relaxed => {
                self.value = value;
            },
            OverflowPolicy::Modular => {
                let max_val = self.max_val();
                if max_val > i64::MAX as u128 {
                    // Every i64 is in range; nothing to wrap.
                    self.value = value;
                    self.loop_count = Some(0);
                } else {
                    let max_val = max_val as i64;
                    self.value = value.rem_euclid(max_val);
                    self.loop_count = Some(value.div_euclid(max_val));
                }
            },
            OverflowPolicy::Warning => {
                if self.exceeds_range(value) {
                    tracing::warn!(
                        value,
                        max_val = %self.max_val(),
                        "value magnitude at or above the maximum representable value"
                    );
                }
                self.value = value;
            },
            OverflowPolicy::Halt => {
                if self.exceeds_range(value) {
                    return Err(RadixError::OutOfRange);
                }
                self.value = value;
            },
        }
        Ok(())
    }

    /// Assign the value through its digit view, most-significant first.
    ///
    /// A sequence shorter than the radix list is zero-extended on the
    /// most-significant side, so the given digits align to the
    /// least-significant end. The composed value is assigned through
    /// [`set_value`](Self::set_value), so the overflow policy applies.
    ///
    /// Each digit must be below the radix of its position; out-of-range
    /// digits would compose a value that no longer decomposes back to the
    /// same sequence, so they are rejected instead of silently summed.
    ///
    /// # Errors
    /// - `LengthMismatch` if more digits than radix positions are given
    /// - `DigitOutOfRange` if any digit reaches the radix of its position
    /// - `Overflow` if the composed value exceeds the i64 range
    /// - `OutOfRange` under Halt, as for any value assignment
    pub fn set_digits(&mut self, digits: &[u64]) -> RadixResult<()> {
        if digits.len() > self.radix.len() {
            return Err(RadixError::LengthMismatch);
        }

        let offset = self.radix.len() - digits.len();
        for (digit, radix) in digits.iter().zip(&self.radix[offset..]) {
            if digit >= radix {
                return Err(RadixError::DigitOutOfRange);
            }
        }

        let products = radix_products(&self.radix);
        let value = compose(digits, &products[1..])?;
        self.set_value(value)
    }

    /// Assign the value through its digit view, least-significant first.
    pub fn set_digits_reversed(&mut self, digits_reversed: &[u64]) -> RadixResult<()> {
        let digits: DigitVec = digits_reversed.iter().rev().copied().collect();
        self.set_digits(&digits)
    }

    /// Replace the radix list, most-significant position first.
    ///
    /// The stored value is NOT re-validated against the new `max_val`, under
    /// any policy; the next explicit value assignment is where the policy
    /// sees it again. Re-validation in between is the caller's
    /// responsibility.
    ///
    /// # Errors
    /// Returns `ZeroRadix` if any entry is 0.
    pub fn set_radix(&mut self, radix: impl IntoIterator<Item = u64>) -> RadixResult<()> {
        let radix: DigitVec = radix.into_iter().collect();
        validate_radix(&radix)?;
        self.radix = radix;
        Ok(())
    }

    /// Replace the radix list, least-significant position first.
    pub fn set_radix_reversed(
        &mut self,
        radix_reversed: impl IntoIterator<Item = u64>,
    ) -> RadixResult<()> {
        let mut radix: DigitVec = radix_reversed.into_iter().collect();
        radix.reverse();
        self.set_radix(radix)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Build a new number with this one's radix and policy around a computed
    /// value. The policy applies to the value on the way in.
    fn derived(&self, value: i128) -> RadixResult<Self> {
        if value > i64::MAX as i128 || value < i64::MIN as i128 {
            return Err(RadixError::Overflow);
        }

        let mut out = Self {
            value: 0,
            radix: self.radix.clone(),
            policy: self.policy,
            loop_count: None,
        };
        out.set_value(value as i64)?;
        Ok(out)
    }

    /// Checked addition of another mixed-radix number.
    ///
    /// The result shares this number's radix and policy; the policy applies
    /// to the sum.
    ///
    /// # Errors
    /// Returns `Overflow` past the i64 range, or `OutOfRange` under Halt.
    #[inline]
    pub fn checked_add(&self, other: &Self) -> RadixResult<Self> {
        self.derived(self.value as i128 + other.value as i128)
    }

    /// Checked addition of a plain integer.
    #[inline]
    pub fn checked_add_int(&self, rhs: i64) -> RadixResult<Self> {
        self.derived(self.value as i128 + rhs as i128)
    }

    /// Checked subtraction of another mixed-radix number.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> RadixResult<Self> {
        self.derived(self.value as i128 - other.value as i128)
    }

    /// Checked subtraction of a plain integer.
    #[inline]
    pub fn checked_sub_int(&self, rhs: i64) -> RadixResult<Self> {
        self.derived(self.value as i128 - rhs as i128)
    }

    /// Checked multiplication by another mixed-radix number.
    #[inline]
    pub fn checked_mul(&self, other: &Self) -> RadixResult<Self> {
        self.derived(self.value as i128 * other.value as i128)
    }

    /// Checked multiplication by a plain integer.
    #[inline]
    pub fn checked_mul_int(&self, rhs: i64) -> RadixResult<Self> {
        self.derived(self.value as i128 * rhs as i128)
    }

    #[inline]
    fn exceeds_range(&self, value: i64) -> bool {
        value.unsigned_abs() as u128 >= self.max_val()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

// Numeric identity is the value alone; the radix list is a view on the
// integer, not part of what the number *is*.
impl PartialEq for MixedRadixNumber {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for MixedRadixNumber {}

impl PartialOrd for MixedRadixNumber {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value.cmp(&other.value))
    }
}

impl Ord for MixedRadixNumber {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for MixedRadixNumber {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Infallible operators for ergonomics (panic when the policy rejects or the
// i64 range overflows - use checked_* in production)
impl Add for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).expect("mixed-radix addition out of range")
    }
}

impl Add<i64> for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        self.checked_add_int(rhs).expect("mixed-radix addition out of range")
    }
}

impl Add<MixedRadixNumber> for i64 {
    type Output = MixedRadixNumber;

    #[inline]
    fn add(self, rhs: MixedRadixNumber) -> Self::Output {
        rhs.checked_add_int(self).expect("mixed-radix addition out of range")
    }
}

impl Sub for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect("mixed-radix subtraction out of range")
    }
}

impl Sub<i64> for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        self.checked_sub_int(rhs).expect("mixed-radix subtraction out of range")
    }
}

// lhs - rhs.value, with the radix and policy taken from the right operand
impl Sub<MixedRadixNumber> for i64 {
    type Output = MixedRadixNumber;

    #[inline]
    fn sub(self, rhs: MixedRadixNumber) -> Self::Output {
        rhs.derived(self as i128 - rhs.value as i128)
            .expect("mixed-radix subtraction out of range")
    }
}

impl Mul for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).expect("mixed-radix multiplication out of range")
    }
}

impl Mul<i64> for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul_int(rhs).expect("mixed-radix multiplication out of range")
    }
}

impl Mul<MixedRadixNumber> for i64 {
    type Output = MixedRadixNumber;

    #[inline]
    fn mul(self, rhs: MixedRadixNumber) -> Self::Output {
        rhs.checked_mul_int(self).expect("mixed-radix multiplication out of range")
    }
}

impl AddAssign for MixedRadixNumber {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self += rhs.value;
    }
}

impl AddAssign<i64> for MixedRadixNumber {
    fn add_assign(&mut self, rhs: i64) {
        let value = self
            .value
            .checked_add(rhs)
            .expect("mixed-radix addition out of range");
        self.set_value(value).expect("mixed-radix addition out of range");
    }
}

impl Neg for MixedRadixNumber {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.derived(-(self.value as i128)).expect("mixed-radix negation out of range")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for MixedRadixNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MixedRadixNumber({}, radix={:?}, policy={})",
            self.value,
            self.radix.as_slice(),
            self.policy
        )
    }
}

impl fmt::Display for MixedRadixNumber {
    /// Sign prefix ('+', '-' or ' ' for zero) followed by the magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign_char(), self.value.unsigned_abs())
    }
}

// ============================================================================
// Tests
// ============================================================================

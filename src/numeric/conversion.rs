// ============================================================================
// Mixed-Radix Conversion Core
// Pure digit decomposition, composition and place-value computation
// ============================================================================

use super::errors::{RadixError, RadixResult};
use smallvec::SmallVec;

/// Digit or radix sequence, most-significant position first.
///
/// Sequences are typically a handful of positions, so they live inline.
pub type DigitVec = SmallVec<[u64; 8]>;

/// Place-value products; one extra slot for the leading max-val entry.
pub type ProductVec = SmallVec<[u128; 9]>;

/// Compute the running radix products, traditional order.
///
/// Entry 0 is `max_val` (the product of every radix); entries `1..` are the
/// place values, ending with the trailing sentinel of 1. The scan is a
/// single right-to-left pass accumulating the product before each multiply.
///
/// Products saturate at `u128::MAX`; saturation is unreachable for any
/// value an i64 can hold, so composition still range-checks correctly.
pub fn radix_products(radix: &[u64]) -> ProductVec {
    let mut products: ProductVec = SmallVec::with_capacity(radix.len() + 1);
    let mut running: u128 = 1;
    products.push(running);
    for &r in radix.iter().rev() {
        running = running.saturating_mul(r as u128);
        products.push(running);
    }
    products.reverse();
    products
}

/// Decompose a non-negative magnitude into one digit per radix position,
/// most-significant first.
///
/// Standard base conversion generalized to per-position bases: repeated
/// div/mod from the least significant position, collected digits reversed
/// back to traditional order. Anything left over past the most significant
/// position is dropped.
///
/// Radix entries must be >= 1; every radix-accepting entry point validates
/// this before the list can reach here.
pub fn decompose(magnitude: u64, radix: &[u64]) -> DigitVec {
    let mut rest = magnitude;
    let mut digits: DigitVec = radix
        .iter()
        .rev()
        .map(|&r| {
            let digit = rest % r;
            rest /= r;
            digit
        })
        .collect();
    digits.reverse();
    digits
}

/// Compose a digit sequence back into a value using the given place values.
///
/// `digits` is most-significant first and may be shorter than
/// `place_values`; a shorter sequence is implicitly zero-extended on the
/// most-significant side, so digits align to the least-significant end.
///
/// # Errors
/// - `LengthMismatch` if `digits` is longer than `place_values`
/// - `Overflow` if the sum exceeds the i64 range
pub fn compose(digits: &[u64], place_values: &[u128]) -> RadixResult<i64> {
    if digits.len() > place_values.len() {
        return Err(RadixError::LengthMismatch);
    }

    let offset = place_values.len() - digits.len();
    let mut sum: u128 = 0;
    for (digit, place_value) in digits.iter().zip(&place_values[offset..]) {
        let term = (*digit as u128)
            .checked_mul(*place_value)
            .ok_or(RadixError::Overflow)?;
        sum = sum.checked_add(term).ok_or(RadixError::Overflow)?;
    }

    if sum > i64::MAX as u128 {
        return Err(RadixError::Overflow);
    }
    Ok(sum as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix_products() {
        let products = radix_products(&[2, 1, 3, 2]);
        assert_eq!(products.as_slice(), &[12, 6, 6, 2, 1]);
    }

    #[test]
    fn test_radix_products_empty() {
        let products = radix_products(&[]);
        assert_eq!(products.as_slice(), &[1]);
    }

    #[test]
    fn test_place_value_recurrence() {
        let radix = [24u64, 60, 60];
        let products = radix_products(&radix);
        let place_values = &products[1..];

        assert_eq!(*place_values.last().unwrap(), 1);
        for i in 0..place_values.len() - 1 {
            assert_eq!(place_values[i], radix[i + 1] as u128 * place_values[i + 1]);
        }
        // max_val == product(radix) == radix[0] * place_values[0]
        assert_eq!(products[0], 24 * 60 * 60);
        assert_eq!(products[0], radix[0] as u128 * place_values[0]);
    }

    #[test]
    fn test_decompose_concrete() {
        // 5 = 0*6 + 0*6 + 2*2 + 1*1 under radix [2, 1, 3, 2]
        let digits = decompose(5, &[2, 1, 3, 2]);
        assert_eq!(digits.as_slice(), &[0, 0, 2, 1]);
    }

    #[test]
    fn test_decompose_truncates_overflow() {
        // max_val is 12; the excess is silently dropped
        let digits = decompose(12, &[2, 1, 3, 2]);
        assert_eq!(digits.as_slice(), &[0, 0, 0, 0]);

        let digits = decompose(15, &[2, 1, 3, 2]);
        assert_eq!(digits.as_slice(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_compose_full_length() {
        let products = radix_products(&[2, 1, 3, 2]);
        let value = compose(&[0, 0, 2, 1], &products[1..]).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_compose_zero_extends_most_significant() {
        let products = radix_products(&[2, 1, 3, 2]);
        // [2, 1] aligns to the least-significant end: 2*2 + 1*1
        let value = compose(&[2, 1], &products[1..]).unwrap();
        assert_eq!(value, 5);

        let value = compose(&[], &products[1..]).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn test_compose_length_mismatch() {
        let products = radix_products(&[2, 3]);
        let result = compose(&[1, 1, 1], &products[1..]);
        assert_eq!(result, Err(RadixError::LengthMismatch));
    }

    #[test]
    fn test_compose_overflow() {
        let products = radix_products(&[u64::MAX, u64::MAX, u64::MAX]);
        let result = compose(&[u64::MAX - 1, u64::MAX - 1, u64::MAX - 1], &products[1..]);
        assert_eq!(result, Err(RadixError::Overflow));
    }

    #[test]
    fn test_round_trip_time_of_day() {
        // 13:45:07 as seconds since midnight
        let radix = [24u64, 60, 60];
        let seconds = 13 * 3600 + 45 * 60 + 7;
        let digits = decompose(seconds, &radix);
        assert_eq!(digits.as_slice(), &[13, 45, 7]);

        let products = radix_products(&radix);
        assert_eq!(compose(&digits, &products[1..]).unwrap(), seconds as i64);
    }
}

//! Overflow-safety bounds for the operands of the evaluator.

use num_traits::PrimInt;

/// Largest value whose square still fits in an `i64`,
/// i.e. `floor(sqrt(i64::MAX))`.
///
/// Both the base `a` and the modulus `n` must stay at or below this bound:
/// the evaluator squares values reduced modulo `n` and multiplies them by
/// `a mod n`, so every intermediate product is below `n^2`.
pub const OVERFLOW_SAFE_MAX: i64 = 3_037_000_499;

/// Maximum number of decimal digits accepted for a single operand: the digit
/// length of `i64::MAX`. Inputs of that length may still exceed `i64::MAX`.
pub const MAX_INPUT_DIGITS: usize = decimal_digits(i64::MAX as u64);

/// Returns true if `x * x` does not fit in `T`.
pub fn square_overflows<T: PrimInt>(x: T) -> bool {
    x.checked_mul(&x).is_none()
}

/// Number of decimal digits needed to print `x`.
pub const fn decimal_digits(mut x: u64) -> usize {
    let mut digits = 1;
    while x >= 10 {
        x /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_safe_max_is_tight() {
        assert!(!square_overflows(OVERFLOW_SAFE_MAX));
        assert!(square_overflows(OVERFLOW_SAFE_MAX + 1));
        assert!(OVERFLOW_SAFE_MAX as i128 * OVERFLOW_SAFE_MAX as i128 <= i64::MAX as i128);
        assert!((OVERFLOW_SAFE_MAX as i128 + 1).pow(2) > i64::MAX as i128);
    }

    #[test]
    fn test_square_overflows_other_widths() {
        assert!(!square_overflows(0i32));
        assert!(!square_overflows(46_340i32));
        assert!(square_overflows(46_341i32));
        assert!(square_overflows(u8::MAX));
        assert!(!square_overflows(15u8));
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), 1);
        assert_eq!(decimal_digits(9), 1);
        assert_eq!(decimal_digits(10), 2);
        assert_eq!(decimal_digits(99_999), 5);
        assert_eq!(decimal_digits(100_000), 6);
        assert_eq!(decimal_digits(i64::MAX as u64), 19);
        assert_eq!(decimal_digits(u64::MAX), 20);
    }

    #[test]
    fn test_max_input_digits() {
        assert_eq!(MAX_INPUT_DIGITS, 19);
    }
}

//! Big-integer product primitive.
//!
//! Thin helpers over [`num_bigint::BigUint`]: every operation takes its
//! inputs by reference (or as machine integers) and returns a freshly owned
//! value, so results can be moved between pipeline stages without sharing.

use num_bigint::BigUint;
use num_traits::{Pow, Zero};

/// log₁₀ 2, used to bound the decimal length from the bit length.
const LOG10_2: f64 = core::f64::consts::LOG10_2;

/// Exact product of two machine integers.
///
/// Both operands are promoted before multiplying, so the product never
/// overflows.
///
/// # Example
///
/// ```
/// use bigfact::bigint::mul_u64;
///
/// let p = mul_u64(u64::MAX, 2);
/// assert_eq!(p.to_string(), "36893488147419103230");
/// ```
#[inline]
pub fn mul_u64(x: u64, y: u64) -> BigUint {
    BigUint::from(x) * y
}

/// 10^exp.
pub fn pow10(exp: u64) -> BigUint {
    Pow::pow(BigUint::from(10u32), exp)
}

/// ⌊value / 10^exp⌋.
pub fn div_pow10(value: &BigUint, exp: u64) -> BigUint {
    if exp == 0 {
        return value.clone();
    }
    value / pow10(exp)
}

/// value mod 10^exp.
pub fn rem_pow10(value: &BigUint, exp: u64) -> BigUint {
    if exp == 0 {
        return BigUint::zero();
    }
    value % pow10(exp)
}

/// Exact number of decimal digits of `value` (zero has one digit).
///
/// Estimates ⌊bits·log₁₀2⌋ + 1, which is either exact or one too high,
/// then settles it with a single comparison against a power of ten. The
/// comparison materializes 10^(digits-1), so this is linear-ish in the size
/// of `value`; [`crate::digits::digits_of`] is the constant-time estimate.
///
/// # Example
///
/// ```
/// use bigfact::bigint::decimal_digits;
/// use num_bigint::BigUint;
///
/// assert_eq!(decimal_digits(&BigUint::from(0u32)), 1);
/// assert_eq!(decimal_digits(&BigUint::from(999u32)), 3);
/// assert_eq!(decimal_digits(&BigUint::from(1000u32)), 4);
/// ```
pub fn decimal_digits(value: &BigUint) -> u64 {
    if value.is_zero() {
        return 1;
    }
    let estimate = (LOG10_2 * value.bits() as f64) as u64 + 1;
    if pow10(estimate - 1) > *value {
        estimate - 1
    } else {
        estimate
    }
}

/// Sum of the decimal digits of `value`.
pub fn digit_sum(value: &BigUint) -> u64 {
    digit_sum_str(&value.to_str_radix(10))
}

/// Sum of the ASCII decimal digits in `digits`; other characters are ignored.
pub(crate) fn digit_sum_str(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|c| u64::from(c - b'0'))
        .sum()
}

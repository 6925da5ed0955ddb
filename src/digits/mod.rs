//! Digit counts of n! from the log-gamma function.
//!
//! The number of decimal digits of n! is ⌊log₁₀ n!⌋ + 1, and
//! log₁₀ n! = ln Γ(n+1) / ln 10. With [`lgamma`] this is constant time for
//! any n, including values like 3·10¹² where the factorial itself could
//! never be materialized.
//!
//! # Numerical risk
//!
//! The floor is taken of a floating-point estimate. If log₁₀ n! sits within
//! rounding distance of an integer, the count can be off by one. This does
//! not happen for any n up to 10⁵ (checked against exact values), but it is
//! not ruled out in general. [`verify_digits`] settles the count exactly when
//! the factorial is available.

use num_bigint::BigUint;

use crate::bigint::decimal_digits;
use crate::special::lgamma;
use crate::FactorialError;

#[cfg(test)]
mod tests;

/// Estimate of log₁₀ n!, i.e. ln Γ(n+1) / ln 10.
///
/// Exact at n = 0 and n = 1, where the Lanczos sum would otherwise return
/// a tiny negative rounding residue.
pub fn log10_factorial(n: u64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    lgamma(n as f64 + 1.0) / core::f64::consts::LN_10
}

/// Number of decimal digits of n!.
///
/// # Errors
///
/// Returns [`FactorialError::NegativeInput`] for n < 0,
/// [`FactorialError::NotFinite`] if the estimate is not a finite number and
/// [`FactorialError::DigitCountOverflow`] if the count exceeds `u64::MAX`.
///
/// # Example
///
/// ```
/// use bigfact::digits::digits_of;
///
/// assert_eq!(digits_of(0).unwrap(), 1);
/// assert_eq!(digits_of(10).unwrap(), 7); // 3628800
/// assert_eq!(digits_of(3_000_000_000_000).unwrap(), 36_128_480_318_456);
/// assert!(digits_of(-1).is_err());
/// ```
pub fn digits_of(n: i64) -> Result<u64, FactorialError> {
    let m = u64::try_from(n).map_err(|_| FactorialError::NegativeInput(n))?;
    if m < 2 {
        return Ok(1);
    }

    let log10 = log10_factorial(m);
    if !log10.is_finite() || log10 < 0.0 {
        return Err(FactorialError::NotFinite);
    }
    if log10 >= u64::MAX as f64 {
        return Err(FactorialError::DigitCountOverflow(n));
    }
    Ok(log10.floor() as u64 + 1)
}

/// Exact digit count of `value`, checked against a prior `estimate`.
///
/// Logs a warning when the estimate was wrong. Always returns the exact
/// count.
pub fn verify_digits(value: &BigUint, estimate: u64) -> u64 {
    let exact = decimal_digits(value);
    if exact != estimate {
        log::warn!("digit count estimate {estimate} corrected to exact count {exact}");
    }
    exact
}

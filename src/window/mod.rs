//! Leading and trailing digit windows of a large integer.

use num_bigint::BigUint;

use crate::bigint::{div_pow10, rem_pow10};
use crate::FactorialError;

/// The leading `width` digits of `value`, as an integer.
///
/// Computes ⌊value / 10^(total_digits − width)⌋. `total_digits` is trusted
/// to be the digit count of `value`; it normally comes from
/// [`crate::digits::digits_of`] so the huge value never has to be measured.
/// If it is off by one, so is the window.
///
/// `width == total_digits` returns `value` unchanged and `width == 0`
/// returns 0.
///
/// # Errors
///
/// Returns [`FactorialError::WindowTooWide`] if `width > total_digits`.
///
/// # Example
///
/// ```
/// use bigfact::window::select_leading_digits;
/// use num_bigint::BigUint;
///
/// let v = BigUint::from(3628800u32);
/// assert_eq!(select_leading_digits(&v, 7, 3).unwrap(), BigUint::from(362u32));
/// ```
pub fn select_leading_digits(
    value: &BigUint,
    total_digits: u64,
    width: u64,
) -> Result<BigUint, FactorialError> {
    if width > total_digits {
        return Err(FactorialError::WindowTooWide {
            width,
            total: total_digits,
        });
    }
    Ok(div_pow10(value, total_digits - width))
}

/// The trailing `width` digits of `value`, i.e. value mod 10^width.
///
/// Leading zeros of the window are lost in the integer form; for a
/// factorial the trailing window is mostly zeros.
pub fn select_trailing_digits(value: &BigUint, width: u64) -> BigUint {
    rem_pow10(value, width)
}

//! Log-gamma via the Lanczos approximation.

use super::{lanczos_sum, LANCZOS_G};
use crate::FloatScalar;

/// Natural logarithm of the gamma function, ln Γ(x), for real x > 0.
///
/// Evaluated entirely in log space, so it stays finite for arguments far
/// beyond where Γ(x) itself overflows (ln Γ(3·10¹²) is about 8·10¹³).
/// Relative error is close to machine precision for x > 0.
///
/// Returns NaN for NaN input and for x ≤ 0. There is no reflection formula:
/// callers are expected to check for NaN before using the result.
///
/// # Example
///
/// ```
/// use bigfact::special::lgamma;
///
/// // ln Γ(1) = 0
/// assert!(lgamma(1.0_f64).abs() < 1e-14);
///
/// // ln Γ(100) — large argument, no overflow
/// let val = lgamma(100.0_f64);
/// assert!((val - 359.1342053695754).abs() < 1e-9);
///
/// assert!(lgamma(-2.5_f64).is_nan());
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() || x <= T::zero() {
        return T::nan();
    }

    let half = T::cst(0.5);
    let a = x + half;
    let b = x + T::cst(LANCZOS_G) + half;
    let half_ln_2pi = T::cst(0.5 * core::f64::consts::TAU.ln());

    a * b.ln() - b + half_ln_2pi + (lanczos_sum(x) / x).ln()
}

//! Special mathematical functions.
//!
//! Only the log-gamma function is provided: it is what turns the question
//! "how many digits does n! have?" into a constant-time computation for any
//! n that fits in an `i64`. Generic over [`FloatScalar`] (f32/f64).
//!
//! # Example
//!
//! ```
//! use bigfact::special::lgamma;
//!
//! // ln Γ(5) = ln 4! = ln 24
//! assert!((lgamma(5.0_f64) - 24.0_f64.ln()).abs() < 1e-13);
//!
//! // Undefined for x ≤ 0
//! assert!(lgamma(0.0_f64).is_nan());
//! ```

use crate::FloatScalar;

mod gamma_fn;


pub use gamma_fn::lgamma;

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 607/128, n = 15)
// Coefficients from Paul Godfrey, as used by Boost and Apache Commons Math.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub const LANCZOS_G: f64 = 607.0 / 128.0;

/// Lanczos series coefficients (n = 15).
pub const LANCZOS_COEFFS: [f64; 15] = [
    0.999_999_999_999_997_091_82,
    57.156_235_665_862_923_517,
    -59.597_960_355_475_491_248,
    14.136_097_974_741_747_174,
    -0.491_913_816_097_620_199_78,
    0.339_946_499_848_118_886_99e-4,
    0.465_236_289_270_485_756_65e-4,
    -0.983_744_753_048_795_646_77e-4,
    0.158_088_703_224_912_488_84e-3,
    -0.210_264_441_724_104_883_19e-3,
    0.217_439_618_115_212_643_20e-3,
    -0.164_318_106_536_763_890_22e-3,
    0.844_182_239_838_527_432_93e-4,
    -0.261_908_384_015_814_086_70e-4,
    0.368_991_826_595_316_227_04e-5,
];

/// Evaluate the Lanczos series c0 + c1/(x+1) + c2/(x+2) + ... + c14/(x+14).
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(x: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(T::cst(LANCZOS_COEFFS[0]), |sum, (i, &c)| {
            sum + T::cst(c) / (x + T::cst((i + 1) as f64))
        })
}

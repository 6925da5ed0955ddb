//! End-to-end run: digit count of a!, a leading window of b!, and a digit sum.
//!
//! `a` may be astronomically large since only its digit count is estimated.
//! `b` must be small enough for b! to be computed exactly (tens of millions
//! at most). The window taken from b! is as wide as the decimal
//! representation of the digit count of a!.

use core::fmt;
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use crate::bigint::digit_sum_str;
use crate::digits::{digits_of, verify_digits};
use crate::product::{factorial_with, ProductSettings};
use crate::window::select_leading_digits;
use crate::FactorialError;

/// Inputs for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// Magnitude whose factorial's digit count is estimated.
    pub a: i64,
    /// Magnitude whose factorial is computed exactly.
    pub b: i64,
    /// Replace the estimated digit count of b! by the exact one before
    /// slicing the window.
    pub verify: bool,
    /// Scheduling of the exact product.
    pub product: ProductSettings,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            a: 3_000_000_000_000,
            b: 10_000_000,
            verify: false,
            product: ProductSettings::default(),
        }
    }
}

/// Wall-clock time spent in each stage of [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub estimate: Duration,
    pub product: Duration,
    pub window: Duration,
    pub total: Duration,
}

/// Outputs of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub a: i64,
    pub b: i64,
    /// Digit count of a!.
    pub digits_a: u64,
    /// Digit count of b! used for slicing (estimated, or exact if verified).
    pub digits_b: u64,
    /// Decimal length of `digits_a`, the width of the window.
    pub width: u64,
    /// Leading `width` digits of b!.
    pub window: BigUint,
    /// Sum of the digits of `digits_a` followed by `window`.
    pub digit_sum: u64,
    pub timings: Timings,
}

/// Run the full pipeline.
///
/// # Errors
///
/// Returns [`FactorialError::NegativeInput`] if `a` or `b` is negative and
/// [`FactorialError::WindowTooWide`] if b! has fewer digits than the digit
/// count of a! has characters.
///
/// # Example
///
/// ```
/// use bigfact::report::{run, ReportSettings};
///
/// let report = run(&ReportSettings { a: 100, b: 20, ..Default::default() }).unwrap();
/// assert_eq!(report.digits_a, 158);
/// assert_eq!(report.window.to_string(), "243");
/// assert_eq!(report.digit_sum, 1 + 5 + 8 + 2 + 4 + 3);
/// ```
pub fn run(settings: &ReportSettings) -> Result<Report, FactorialError> {
    let started = Instant::now();

    let digits_a = digits_of(settings.a)?;
    let estimated_b = digits_of(settings.b)?;
    let width = digits_a.to_string().len() as u64;
    let estimate = started.elapsed();
    log::debug!("digits({}!) = {digits_a}, digits({}!) ~ {estimated_b}", settings.a, settings.b);

    log::info!("{}! is being calculated", settings.b);
    let mark = Instant::now();
    let value = factorial_with(settings.b, &settings.product)?;
    let product = mark.elapsed();
    log::debug!("{}! computed in {product:?}", settings.b);

    let mark = Instant::now();
    let digits_b = if settings.verify {
        verify_digits(&value, estimated_b)
    } else {
        estimated_b
    };
    let window = select_leading_digits(&value, digits_b, width)?;
    let digit_sum = digit_sum_str(&format!("{digits_a}{window}"));
    let window_time = mark.elapsed();

    Ok(Report {
        a: settings.a,
        b: settings.b,
        digits_a,
        digits_b,
        width,
        window,
        digit_sum,
        timings: Timings {
            estimate,
            product,
            window: window_time,
            total: started.elapsed(),
        },
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "numberOfDigits({}!) = {}", self.a, self.digits_a)?;
        writeln!(f, "selectDigits({}!, 0, {}) = {}", self.b, self.width, self.window)?;
        writeln!(f, "sumOfDigits({}{}) = {}", self.digits_a, self.window, self.digit_sum)?;
        write!(f, "time = {:?}", self.timings.total)
    }
}

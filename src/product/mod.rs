//! Exact factorials by parallel divide-and-conquer multiplication.
//!
//! The product of a range `[start, end]` is split at its midpoint, both
//! halves are evaluated concurrently with [`rayon::join`], and the two
//! partial products are combined with a single multiplication. Splitting by
//! index count keeps the two operands of every multiply roughly the same
//! size, which is where subquadratic big-integer multiplication pays off;
//! the final combine at the root is the largest multiply and is inherently
//! serial.
//!
//! Each branch owns a disjoint range and its own result, so there is no
//! shared mutable state. The only synchronization is the join at every
//! split.
//!
//! # Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `parallel` | yes     | Fork both halves on the rayon pool. Without it the same tree is evaluated on the calling thread. |
//!
//! # Example
//!
//! ```
//! use bigfact::product::{factorial, range_product};
//!
//! assert_eq!(factorial(10).unwrap().to_string(), "3628800");
//! assert_eq!(range_product(5, 7).unwrap().to_string(), "210");
//! ```

use num_bigint::BigUint;
use num_traits::One;

use crate::bigint::mul_u64;
use crate::FactorialError;


/// Tuning for the range-product engine.
///
/// Neither field affects the result, only how the work is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSettings {
    /// Ranges holding at most this many integers are still split at the
    /// midpoint, but both halves run on the current thread instead of being
    /// forked. Keeps task overhead away from the cheap leaves.
    pub parallel_threshold: u64,
    /// Worker count of a dedicated pool. `None` uses the global rayon pool.
    pub num_threads: Option<usize>,
}

impl Default for ProductSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: 512,
            num_threads: None,
        }
    }
}

/// Product of all integers in `[start, end]`, with default settings.
///
/// # Errors
///
/// Returns [`FactorialError::InvalidRange`] unless `1 <= start <= end`.
pub fn range_product(start: u64, end: u64) -> Result<BigUint, FactorialError> {
    range_product_with(start, end, &ProductSettings::default())
}

/// Product of all integers in `[start, end]`.
///
/// # Errors
///
/// Returns [`FactorialError::InvalidRange`] unless `1 <= start <= end`, and
/// [`FactorialError::ThreadPool`] if a dedicated pool was requested and
/// could not be built.
pub fn range_product_with(
    start: u64,
    end: u64,
    settings: &ProductSettings,
) -> Result<BigUint, FactorialError> {
    if start == 0 || start > end {
        return Err(FactorialError::InvalidRange { start, end });
    }

    log::debug!(
        "multiplying [{start}, {end}]: parallel threshold {}, threads {:?}",
        settings.parallel_threshold,
        settings.num_threads
    );
    let threshold = settings.parallel_threshold;
    install(settings, move || product_tree(start, end, threshold))
}

/// n!, with default settings.
///
/// # Errors
///
/// Returns [`FactorialError::NegativeInput`] for n < 0.
///
/// # Example
///
/// ```
/// use bigfact::product::factorial;
///
/// assert_eq!(factorial(0).unwrap().to_string(), "1");
/// assert_eq!(factorial(20).unwrap().to_string(), "2432902008176640000");
/// assert!(factorial(-5).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint, FactorialError> {
    factorial_with(n, &ProductSettings::default())
}

/// n!.
///
/// # Errors
///
/// Returns [`FactorialError::NegativeInput`] for n < 0, and
/// [`FactorialError::ThreadPool`] if the dedicated pool could not be built.
pub fn factorial_with(n: i64, settings: &ProductSettings) -> Result<BigUint, FactorialError> {
    let n = u64::try_from(n).map_err(|_| FactorialError::NegativeInput(n))?;
    if n < 2 {
        return Ok(BigUint::one());
    }
    range_product_with(1, n, settings)
}

/// Left-to-right product of `[start, end]` on the current thread.
///
/// Reference implementation for cross-checking the tree. An empty range
/// (`start > end`) gives 1.
pub fn sequential_product(start: u64, end: u64) -> BigUint {
    (start..=end).fold(BigUint::one(), |acc, k| acc * k)
}

/// Midpoint product tree over a non-empty range with `start >= 1`.
fn product_tree(start: u64, end: u64, threshold: u64) -> BigUint {
    match end - start {
        0 => BigUint::from(start),
        1 => mul_u64(start, end),
        2 => mul_u64(start, start + 1) * end,
        span => {
            // floor((start + end) / 2) without overflowing near u64::MAX
            let mid = start + span / 2;
            let (lo, hi) = if span < threshold {
                (
                    product_tree(start, mid, threshold),
                    product_tree(mid + 1, end, threshold),
                )
            } else {
                fork(
                    || product_tree(start, mid, threshold),
                    || product_tree(mid + 1, end, threshold),
                )
            };
            lo * hi
        }
    }
}

#[cfg(feature = "parallel")]
#[inline]
fn fork<A, B>(a: A, b: B) -> (BigUint, BigUint)
where
    A: FnOnce() -> BigUint + Send,
    B: FnOnce() -> BigUint + Send,
{
    rayon::join(a, b)
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn fork<A, B>(a: A, b: B) -> (BigUint, BigUint)
where
    A: FnOnce() -> BigUint + Send,
    B: FnOnce() -> BigUint + Send,
{
    (a(), b())
}

/// Run `f` on the pool described by `settings`.
#[cfg(feature = "parallel")]
fn install<F>(settings: &ProductSettings, f: F) -> Result<BigUint, FactorialError>
where
    F: FnOnce() -> BigUint + Send,
{
    match settings.num_threads {
        None => Ok(f()),
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("bigfact-{i}"))
                .build()
                .map_err(|e| FactorialError::ThreadPool(e.to_string()))?;
            log::debug!("dedicated pool with {} threads", pool.current_num_threads());
            Ok(pool.install(f))
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn install<F>(_settings: &ProductSettings, f: F) -> Result<BigUint, FactorialError>
where
    F: FnOnce() -> BigUint + Send,
{
    Ok(f())
}

//! # bigfact
//!
//! Properties of very large factorials without materializing more than is
//! needed: the digit count of n! for any `i64` n (via a Lanczos log-gamma
//! estimate), and leading or trailing digit windows of an exact n! computed
//! by parallel divide-and-conquer multiplication.
//!
//! ## Quick start
//!
//! ```
//! use bigfact::{digits_of, factorial, select_leading_digits};
//!
//! // 3·10¹²! has 36,128,480,318,456 digits; no need to compute it
//! assert_eq!(digits_of(3_000_000_000_000).unwrap(), 36_128_480_318_456);
//!
//! // 20! = 2432902008176640000
//! let f = factorial(20).unwrap();
//! let lead = select_leading_digits(&f, digits_of(20).unwrap(), 5).unwrap();
//! assert_eq!(lead.to_string(), "24329");
//! ```
//!
//! ## Modules
//!
//! - [`special`] — ln Γ(x) by the Lanczos approximation (g = 607/128, 15 terms).
//! - [`digits`] — digit count of n! from ln Γ(n+1), plus an exact check.
//! - [`product`] — exact range products and n! on a fork-join tree.
//! - [`window`] — leading/trailing digit windows by division by 10^k.
//! - [`bigint`] — the handful of [`num_bigint::BigUint`] helpers the above need.
//! - [`report`] — the whole pipeline for a pair of magnitudes, with timings.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `parallel` | yes     | Fork-join multiplication on rayon |
//! | `cli`      | yes     | The `bigfact` binary (clap, tracing) |

pub mod bigint;
pub mod digits;
mod error;
pub mod product;
pub mod report;
pub mod special;
pub mod traits;
pub mod window;

pub use digits::{digits_of, log10_factorial, verify_digits};
pub use error::FactorialError;
pub use product::{factorial, factorial_with, range_product, range_product_with, ProductSettings};
pub use report::{run, Report, ReportSettings};
pub use special::lgamma;
pub use traits::FloatScalar;
pub use window::{select_leading_digits, select_trailing_digits};

pub use num_bigint::BigUint;

use core::fmt::Debug;
use num_traits::{Float, NumCast};

/// Trait for floating-point arguments of the special functions.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Float + Debug {
    /// Convert an `f64` constant into `Self`.
    ///
    /// Falls back to NaN if the value cannot be represented, which keeps
    /// the special functions total.
    #[inline]
    fn cst(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + Debug> FloatScalar for T {}

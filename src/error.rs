use core::fmt;

/// Errors from factorial evaluation and digit-window extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorialError {
    /// Factorial of a negative number was requested.
    NegativeInput(i64),
    /// Range is empty (`start > end`) or starts at zero.
    InvalidRange { start: u64, end: u64 },
    /// Requested digit window is wider than the value it is taken from.
    WindowTooWide { width: u64, total: u64 },
    /// The log-gamma estimate was NaN or infinity.
    NotFinite,
    /// Digit count of n! does not fit in a `u64`.
    DigitCountOverflow(i64),
    /// The dedicated worker pool could not be created.
    ThreadPool(String),
}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInput(n) => write!(f, "factorial of negative number {n} is undefined"),
            Self::InvalidRange { start, end } => {
                write!(f, "invalid product range [{start}, {end}]: need 1 <= start <= end")
            }
            Self::WindowTooWide { width, total } => {
                write!(f, "digit window of width {width} exceeds value with {total} digits")
            }
            Self::NotFinite => write!(f, "log-gamma estimate is NaN or infinity"),
            Self::DigitCountOverflow(n) => write!(f, "digit count of {n}! does not fit in 64 bits"),
            Self::ThreadPool(msg) => write!(f, "failed to build worker pool: {msg}"),
        }
    }
}

impl std::error::Error for FactorialError {}

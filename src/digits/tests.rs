#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::bigint::pow10;

    #[test]
    fn small_factorials() {
        // 0! = 1! = 1, 2! = 2, 3! = 6, 4! = 24, 5! = 120
        assert_eq!(digits_of(0).unwrap(), 1);
        assert_eq!(digits_of(1).unwrap(), 1);
        assert_eq!(digits_of(2).unwrap(), 1);
        assert_eq!(digits_of(3).unwrap(), 1);
        assert_eq!(digits_of(4).unwrap(), 2);
        assert_eq!(digits_of(5).unwrap(), 3);
        assert_eq!(digits_of(10).unwrap(), 7);
        assert_eq!(digits_of(20).unwrap(), 19);
    }

    #[test]
    fn known_large_counts() {
        assert_eq!(digits_of(100).unwrap(), 158);
        assert_eq!(digits_of(1_000).unwrap(), 2_568);
        assert_eq!(digits_of(10_000).unwrap(), 35_660);
        assert_eq!(digits_of(100_000).unwrap(), 456_574);
        assert_eq!(digits_of(1_000_000).unwrap(), 5_565_709);
        assert_eq!(digits_of(10_000_000).unwrap(), 65_657_060);
    }

    #[test]
    fn astronomical_input() {
        assert_eq!(digits_of(3_000_000_000_000).unwrap(), 36_128_480_318_456);
        assert!(digits_of(1_000_000_000_000_000).unwrap() > 1_000_000_000_000_000);
        assert_eq!(
            digits_of(i64::MAX),
            Err(FactorialError::DigitCountOverflow(i64::MAX))
        );
    }

    #[test]
    fn negative_input() {
        assert_eq!(digits_of(-1), Err(FactorialError::NegativeInput(-1)));
        assert_eq!(digits_of(i64::MIN), Err(FactorialError::NegativeInput(i64::MIN)));
    }

    #[test]
    fn matches_exact_counts() {
        // Running product; the digit count is tracked against the next
        // power of ten instead of formatting every factorial.
        let mut fact = BigUint::from(1u32);
        let mut digits = 1u64;
        let mut next_pow = pow10(1);
        for n in 0..=3000i64 {
            if n > 1 {
                fact *= n as u64;
            }
            while fact >= next_pow {
                digits += 1;
                next_pow *= 10u32;
            }
            assert_eq!(digits_of(n).unwrap(), digits, "digits of {n}!");
        }
    }

    #[test]
    fn log10_factorial_values() {
        assert_eq!(log10_factorial(0), 0.0);
        assert_eq!(log10_factorial(1), 0.0);
        assert!((log10_factorial(10) - 3628800.0_f64.log10()).abs() < 1e-13);
    }

    #[test]
    fn idempotent() {
        for &n in &[0, 7, 12345, 3_000_000_000_000] {
            assert_eq!(digits_of(n), digits_of(n));
        }
    }

    #[test]
    fn verify_digits_corrects_estimate() {
        let v = BigUint::from(3628800u32);
        assert_eq!(verify_digits(&v, 7), 7);
        assert_eq!(verify_digits(&v, 8), 7);
        assert_eq!(verify_digits(&v, 6), 7);
    }
}

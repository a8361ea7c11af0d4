//! Numeric property predicates.
//!
//! All functions here are pure and deterministic. They operate on `u64`;
//! the validation layer in [`crate::classify`] rejects negative input
//! before these are reached.

/// Returns `true` if `n` is prime.
///
/// Trial division by every integer up to ⌊√n⌋. Numbers below 2 are
/// never prime.
///
/// # Example
///
/// ```rust
/// use numclass_core::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `n` equals the sum of its proper divisors.
///
/// Numbers below 2 short-circuit to `false`. The divisor scan is O(n),
/// which is fine for the modest inputs this service sees; very large
/// values pay for the full scan.
///
/// # Example
///
/// ```rust
/// use numclass_core::is_perfect;
///
/// assert!(is_perfect(6));
/// assert!(is_perfect(28));
/// assert!(!is_perfect(5));
/// ```
#[must_use]
pub fn is_perfect(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let divisor_sum: u64 = (1..n).filter(|i| n % i == 0).sum();
    divisor_sum == n
}

/// Returns `true` if `n` is an Armstrong (narcissistic) number.
///
/// An Armstrong number equals the sum of its decimal digits each raised
/// to the power of the digit count. Every single-digit number qualifies
/// trivially (d¹ = d).
///
/// The power sum is accumulated in `u128`: the widest `u64` input has
/// 20 digits, and 20 · 9²⁰ overflows `u64`.
///
/// # Example
///
/// ```rust
/// use numclass_core::is_armstrong;
///
/// assert!(is_armstrong(153));
/// assert!(is_armstrong(9474));
/// assert!(!is_armstrong(123));
/// ```
#[must_use]
pub fn is_armstrong(n: u64) -> bool {
    let digits = decimal_digits(n);
    let count = u32::try_from(digits.len()).unwrap_or(u32::MAX);
    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(count)).sum();
    sum == u128::from(n)
}

/// Returns the sum of the decimal digits of `n`.
///
/// # Example
///
/// ```rust
/// use numclass_core::digit_sum;
///
/// assert_eq!(digit_sum(16), 7);
/// assert_eq!(digit_sum(0), 0);
/// ```
#[must_use]
pub fn digit_sum(n: u64) -> u32 {
    decimal_digits(n)
        .iter()
        .map(|&d| u32::from(d))
        .sum()
}

/// Decomposes `n` into its decimal digits, most significant first.
///
/// Zero decomposes to a single `0` digit.
fn decimal_digits(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        // Remainder of division by 10 always fits in u8.
        #[allow(clippy::cast_possible_truncation)]
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
    }

    #[test]
    fn test_is_prime_known_primes() {
        for p in [7, 11, 13, 97, 101, 7919] {
            assert!(is_prime(p), "{p} should be prime");
        }
    }

    #[test]
    fn test_is_prime_known_composites() {
        for c in [9, 15, 21, 91, 7917, 1_000_000] {
            assert!(!is_prime(c), "{c} should be composite");
        }
    }

    #[test]
    fn test_is_prime_square_of_prime() {
        // 49 = 7 * 7 exercises the i <= n / i loop bound exactly.
        assert!(!is_prime(49));
        assert!(!is_prime(169));
    }

    #[test]
    fn test_is_perfect_known_values() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
    }

    #[test]
    fn test_is_perfect_non_perfect() {
        assert!(!is_perfect(5));
        assert!(!is_perfect(12));
        assert!(!is_perfect(27));
    }

    #[test]
    fn test_is_perfect_below_two() {
        assert!(!is_perfect(0));
        assert!(!is_perfect(1));
    }

    #[test]
    fn test_is_armstrong_known_values() {
        assert!(is_armstrong(153));
        assert!(is_armstrong(370));
        assert!(is_armstrong(371));
        assert!(is_armstrong(407));
        assert!(is_armstrong(9474));
    }

    #[test]
    fn test_is_armstrong_single_digits() {
        for d in 0..=9 {
            assert!(is_armstrong(d), "{d} should be trivially Armstrong");
        }
    }

    #[test]
    fn test_is_armstrong_non_armstrong() {
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(123));
        assert!(!is_armstrong(9475));
    }

    #[test]
    fn test_is_armstrong_largest_inputs_no_overflow() {
        // 20 digits of 9 raised to the 20th power overflows u64; the
        // u128 accumulator must still produce a correct (false) answer.
        assert!(!is_armstrong(u64::MAX));
        assert!(!is_armstrong(9_999_999_999_999_999_999));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(16), 7);
        assert_eq!(digit_sum(371), 11);
        assert_eq!(digit_sum(9474), 24);
    }

    #[test]
    fn test_decimal_digits_ordering() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(9474), vec![9, 4, 7, 4]);
    }
}

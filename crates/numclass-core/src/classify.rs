//! Input validation and classification assembly.
//!
//! [`classify`] takes the raw `number` query value and either produces a
//! [`Classification`] or a [`ClassifyError`] the HTTP layer can map to a
//! 4xx response. [`classify_value`] is the pure half: it assumes a valid
//! non-negative integer and never fails.

use serde::{Deserialize, Serialize};

use crate::error::{ClassifyError, ClassifyResult, MISSING_INPUT};
use crate::props::{digit_sum, is_armstrong, is_perfect, is_prime};

/// The computed properties of one number.
///
/// `properties` is ordered: "prime", "perfect", "armstrong" (each only
/// when its predicate holds), then exactly one of "even"/"odd" as the
/// final element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The classified number.
    pub number: u64,

    /// Whether the number is prime.
    pub is_prime: bool,

    /// Whether the number equals the sum of its proper divisors.
    pub is_perfect: bool,

    /// Ordered property names; parity is always present and last.
    pub properties: Vec<String>,

    /// Sum of the decimal digits.
    pub digit_sum: u32,
}

/// Validates raw input and classifies it.
///
/// `raw` is the value of the `number` query parameter, or `None` when
/// the parameter was absent. Missing input is echoed back as the literal
/// [`MISSING_INPUT`] placeholder.
///
/// # Errors
///
/// - [`ClassifyError::InvalidNumber`] when the input is absent or does
///   not parse as an integer (fractional text included).
/// - [`ClassifyError::NegativeNumber`] when it parses but is negative.
///
/// # Example
///
/// ```rust
/// use numclass_core::{classify, ClassifyError};
///
/// let c = classify(Some("28")).unwrap();
/// assert!(c.is_perfect);
/// assert_eq!(c.properties.last().map(String::as_str), Some("even"));
///
/// assert!(matches!(
///     classify(Some("-5")),
///     Err(ClassifyError::NegativeNumber(-5))
/// ));
/// ```
pub fn classify(raw: Option<&str>) -> ClassifyResult<Classification> {
    let raw = raw.ok_or_else(|| ClassifyError::InvalidNumber(MISSING_INPUT.to_string()))?;

    let value: i64 = raw
        .parse()
        .map_err(|_| ClassifyError::InvalidNumber(raw.to_string()))?;

    if value < 0 {
        return Err(ClassifyError::NegativeNumber(value));
    }

    // value is non-negative here.
    #[allow(clippy::cast_sign_loss)]
    let n = value as u64;
    Ok(classify_value(n))
}

/// Classifies a validated non-negative integer.
///
/// Pure and deterministic: the same input always yields the same
/// classification.
#[must_use]
pub fn classify_value(n: u64) -> Classification {
    let prime = is_prime(n);
    let perfect = is_perfect(n);
    let armstrong = is_armstrong(n);

    let mut properties = Vec::with_capacity(4);
    if prime {
        properties.push("prime".to_string());
    }
    if perfect {
        properties.push("perfect".to_string());
    }
    if armstrong {
        properties.push("armstrong".to_string());
    }
    properties.push(if n % 2 == 0 { "even" } else { "odd" }.to_string());

    Classification {
        number: n,
        is_prime: prime,
        is_perfect: perfect,
        properties,
        digit_sum: digit_sum(n),
    }
}

//! Validation error taxonomy for classification input.
//!
//! Only validation-class errors ever reach the client; the HTTP layer
//! maps each variant to a status code and the `{"number": ..., "error": true}`
//! payload via [`ClassifyError::status_code`] and [`ClassifyError::error_body`].

use http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias using [`ClassifyError`].
pub type ClassifyResult<T> = Result<T, ClassifyError>;

/// Placeholder echoed when the `number` parameter is absent entirely.
pub const MISSING_INPUT: &str = "invalid_input";

/// Errors produced while validating raw classification input.
///
/// # Example
///
/// ```rust
/// use numclass_core::{classify, ClassifyError};
///
/// let err = classify(Some("abc")).unwrap_err();
/// assert_eq!(err, ClassifyError::InvalidNumber("abc".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The input was missing, non-numeric, or fractional.
    ///
    /// Carries the raw input text so the error payload can echo it back.
    #[error("input `{0}` is not a well-formed integer")]
    InvalidNumber(String),

    /// The input parsed to a negative integer, which is out of domain.
    #[error("number {0} is negative")]
    NegativeNumber(i64),
}

impl ClassifyError {
    /// Returns the HTTP status code for this error.
    ///
    /// Both variants are validation failures and map to 400. The
    /// observed upstream service never uses 422, and this keeps the
    /// two error shapes behind a single status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidNumber(_) | Self::NegativeNumber(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Builds the JSON error payload for this error.
    ///
    /// Unparsable input is echoed as a JSON string; a negative number is
    /// echoed as a JSON integer.
    #[must_use]
    pub fn error_body(&self) -> Value {
        match self {
            Self::InvalidNumber(raw) => json!({ "number": raw, "error": true }),
            Self::NegativeNumber(n) => json!({ "number": n, "error": true }),
        }
    }
}

//! Pure classification domain for the numclass service.
//!
//! This crate computes the numeric properties the service reports
//! (primality, perfection, Armstrong-ness, parity, digit sum) and
//! validates raw query input into a [`Classification`]. It performs
//! no I/O; the HTTP layer and the fun-fact client live in the
//! `numclass-server` and `numclass-facts` crates.
//!
//! # Example
//!
//! ```rust
//! use numclass_core::classify;
//!
//! let c = classify(Some("371")).unwrap();
//! assert!(!c.is_prime);
//! assert_eq!(c.digit_sum, 11);
//! assert!(c.properties.iter().any(|p| p == "armstrong"));
//! ```

pub mod classify;
pub mod error;
pub mod props;

pub use classify::{classify, classify_value, Classification};
pub use error::{ClassifyError, ClassifyResult, MISSING_INPUT};
pub use props::{digit_sum, is_armstrong, is_perfect, is_prime};

//! Fun-fact retrieval for the numclass service.
//!
//! The fact service is an uncontrolled network dependency that returns a
//! plain-text trivia fact for a given integer. The client here makes a
//! single bounded-time attempt per request and degrades to a fallback
//! string on any failure, so a flaky or slow fact service can never turn
//! a successful classification into an error.

pub mod client;

pub use client::{FactClient, FactClientBuilder, FactError, NO_FACT_FALLBACK};

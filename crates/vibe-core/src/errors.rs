//! Error types for the match engine.
//!
//! A participant who has not finished answering is not an error: the
//! validator reports it as [`ValidationVerdict::Invalid`](crate::ValidationVerdict).
//! `CoreError` is reserved for caller contract violations.

use thiserror::Error;

/// Errors raised by `vibe-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The calculator was invoked without enough data to compute a result.
    #[error("Insufficient input: {0}")]
    InsufficientInput(String),

    /// A value failed validation (out-of-range answer, malformed record).
    #[error("Validation error: {0}")]
    Validation(String),
}

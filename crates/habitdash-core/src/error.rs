//! Core error types for habitdash-core.
//!
//! The engine raises in exactly one situation: a date string that is not a
//! real calendar day. Missing data never errors; every operation has a
//! defined zero/neutral result for an empty or unmatched entry set.

use thiserror::Error;

/// Core error type for habitdash-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date string that does not name a valid `YYYY-MM-DD` calendar day.
    #[error("Malformed date '{input}': expected YYYY-MM-DD")]
    MalformedDate { input: String },

    /// Score weights that cannot form a valid blend.
    #[error("Invalid score weights: {reason}")]
    InvalidWeights { reason: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

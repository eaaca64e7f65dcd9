//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier {
        /// Which identifier kind was rejected.
        kind: &'static str,
    },

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The expected start lies after the expected end.
    #[error("expected start {start} is after expected end {end}")]
    InvertedExpectedWindow {
        /// Expected start timestamp (RFC 3339).
        start: String,
        /// Expected end timestamp (RFC 3339).
        end: String,
    },
}

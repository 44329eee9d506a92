//! Error types for segment recognition
//!
//! Provides a unified error type for all dynseg crates.
//!
//! Only usage errors live here. Geometric rejection, reaching the end of a
//! sequence and retracting a one-point window are ordinary outcomes and are
//! reported through `bool`/`Option` results instead.

use thiserror::Error;

/// Core error type for segment computers and decomposers
#[derive(Error, Debug)]
pub enum Error {
    /// Operation called in a state that violates its precondition
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Cursor moved past either end of a linear sequence
    #[error("Out of range: position {position} in a sequence of {len} points")]
    OutOfRange { position: usize, len: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an operation invoked on an uninitialized computer
    pub fn uninitialized(operation: &str) -> Self {
        Self::PreconditionViolation(format!(
            "{operation} called on an uninitialized segment computer"
        ))
    }

    /// Create an error for initialization at an exhausted cursor
    pub fn exhausted_cursor(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a cursor that is not at end"))
    }

    /// Create an error for probing past the end of a linear sequence
    pub fn no_next_point(operation: &str) -> Self {
        Self::PreconditionViolation(format!(
            "{operation}: the window already ends at the last point of a linear sequence"
        ))
    }

    /// Create an error for an empty point sequence
    pub fn empty_sequence(context: &str) -> Self {
        Self::InvalidInput(format!("{context} requires at least one point"))
    }

    /// Whether this error is a usage error (precondition or input)
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::PreconditionViolation(_) | Self::InvalidInput(_) | Self::OutOfRange { .. }
        )
    }
}

//! Error type for duration operations
//!
//! Every failure in this crate is a [`DurationError`]: one enum, one
//! variant per violated rule, each carrying the name of the failing
//! operation and its rendered inputs so the message alone is enough to
//! diagnose a bad call.

use thiserror::Error;

/// Duration operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A duration input failed the validity check
    #[error("operation `{op}` failed for input [{inputs}]: duration {offending} is invalid; hours must be >= 0 and minutes and seconds must be in 0..=59")]
    InvalidDuration {
        op: &'static str,
        inputs: String,
        /// Rendering of the first input that failed validation
        offending: String,
    },

    /// A scalar second count was negative
    #[error("operation `{op}` failed for input [{inputs}]: seconds must be >= 0{advice}")]
    NegativeSeconds {
        op: &'static str,
        inputs: String,
        /// Pointer at the operation the caller probably wanted, or empty
        advice: &'static str,
    },

    /// Subtraction would produce a negative duration
    #[error("operation `{op}` failed for input [{inputs}]: seconds exceed the duration and a duration cannot be negative")]
    Underflow { op: &'static str, inputs: String },

    /// The end-to-end variadic difference would go negative
    #[error("operation `{op}` failed for input [{inputs}]: subtracting all durations would lead to a negative duration, which is invalid")]
    NegativeDifference { op: &'static str, inputs: String },

    /// A variadic operation was called with no durations
    #[error("operation `{op}` failed: at least one duration is required")]
    EmptyInput { op: &'static str },
}

impl DurationError {
    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            DurationError::InvalidDuration { op, .. }
            | DurationError::NegativeSeconds { op, .. }
            | DurationError::Underflow { op, .. }
            | DurationError::NegativeDifference { op, .. }
            | DurationError::EmptyInput { op } => op,
        }
    }
}

/// Result type for duration operations
pub type DurationResult<T> = Result<T, DurationError>;

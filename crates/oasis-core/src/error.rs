//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core types and conventions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An invalid calendar date was supplied or produced.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the invalid date.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

//! Error types for the Tenor core crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core domain operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid price value.
    #[error("Invalid price: {value} - {reason}")]
    InvalidPrice {
        /// The invalid price value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid work-out specification.
    #[error("Invalid work-out: {reason}")]
    InvalidWorkout {
        /// Description of what is invalid.
        reason: String,
    },

    /// Invalid cash flow.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },

    /// Day count calculation error.
    #[error("Day count error: {reason}")]
    DayCountError {
        /// Description of the error.
        reason: String,
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

    /// Creates an invalid work-out error.
    #[must_use]
    pub fn invalid_workout(reason: impl Into<String>) -> Self {
        Self::InvalidWorkout {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            value,
            reason: reason.into(),
        }
    }
}

//! Error types for bond construction and cash flow generation.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Error types for bond operations.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Schedule generation failed.
    #[error("Invalid schedule: {message}")]
    InvalidSchedule {
        /// Description of the problem.
        message: String,
    },

    /// Bond terms are inconsistent or incomplete.
    #[error("Invalid bond terms: {message}")]
    InvalidTerms {
        /// Description of the problem.
        message: String,
    },

    /// An exercise option is inconsistent with the bond terms.
    #[error("Invalid exercise option: {message}")]
    InvalidExercise {
        /// Description of the problem.
        message: String,
    },
}

impl BondError {
    /// Creates a schedule error.
    #[must_use]
    pub fn schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }

    /// Creates a terms error.
    #[must_use]
    pub fn terms(message: impl Into<String>) -> Self {
        Self::InvalidTerms {
            message: message.into(),
        }
    }

    /// Creates an exercise error.
    #[must_use]
    pub fn exercise(message: impl Into<String>) -> Self {
        Self::InvalidExercise {
            message: message.into(),
        }
    }
}

impl From<tenor_core::CoreError> for BondError {
    fn from(err: tenor_core::CoreError) -> Self {
        Self::InvalidTerms {
            message: err.to_string(),
        }
    }
}

//! Error types for curve operations.

use tenor_core::types::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Requested tenor is outside the curve's valid range.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor in years.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Curve construction failed.
    #[error("Curve construction failed: {reason}")]
    ConstructionFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Reference dates between curves don't match.
    #[error("Reference date mismatch: expected {expected}, got {got}")]
    ReferenceDateMismatch {
        /// Expected reference date.
        expected: Date,
        /// Actual reference date.
        got: Date,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },

    /// A required curve is missing from the market environment.
    #[error("Missing curve: {name}")]
    MissingCurve {
        /// Name of the missing curve.
        name: &'static str,
    },
}

impl CurveError {
    /// Creates a construction failure error.
    #[must_use]
    pub fn construction(reason: impl Into<String>) -> Self {
        Self::ConstructionFailed {
            reason: reason.into(),
        }
    }

    /// Creates a missing curve error.
    #[must_use]
    pub fn missing(name: &'static str) -> Self {
        Self::MissingCurve { name }
    }
}

impl From<tenor_math::MathError> for CurveError {
    fn from(err: tenor_math::MathError) -> Self {
        Self::InterpolationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = CurveError::TenorOutOfRange {
            requested: 31.0,
            min: 0.0,
            max: 30.0,
        };
        assert!(err.to_string().contains("31.0000"));
    }
}

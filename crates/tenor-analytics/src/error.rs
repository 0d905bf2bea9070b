//! Error types for analytics conversions.

use thiserror::Error;

use tenor_core::types::Date;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error types for pricing, yield and spread conversions.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// The root finder did not converge.
    #[error("Solver failed to converge after {iterations} iterations (residual {residual:.2e})")]
    SolverConvergenceFailed {
        /// Iterations consumed.
        iterations: u32,
        /// Final residual.
        residual: f64,
    },

    /// Settlement is invalid for the instrument.
    #[error("Invalid settlement {settlement}: {reason}")]
    InvalidSettlement {
        /// Settlement date.
        settlement: Date,
        /// Description of the problem.
        reason: String,
    },

    /// An input value is invalid for the requested conversion.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// A computed value was NaN or infinite.
    #[error("Non-finite result in {context}")]
    NonFinite {
        /// Where the non-finite value appeared.
        context: &'static str,
    },

    /// The measure cannot be computed with the supplied market data.
    #[error("Measure {measure} unavailable: {reason}")]
    MeasureUnavailable {
        /// Name of the measure.
        measure: &'static str,
        /// Why it cannot be computed.
        reason: String,
    },

    /// Curve lookup or construction failed.
    #[error(transparent)]
    Curve(#[from] tenor_curves::CurveError),

    /// Bond construction or cash flow generation failed.
    #[error(transparent)]
    Bond(#[from] tenor_bonds::BondError),
}

impl AnalyticsError {
    /// Creates an invalid-input error.
    #[must_use]
    pub fn input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid-settlement error.
    #[must_use]
    pub fn settlement(settlement: Date, reason: impl Into<String>) -> Self {
        Self::InvalidSettlement {
            settlement,
            reason: reason.into(),
        }
    }

    /// Creates a measure-unavailable error.
    #[must_use]
    pub fn unavailable(measure: &'static str, reason: impl Into<String>) -> Self {
        Self::MeasureUnavailable {
            measure,
            reason: reason.into(),
        }
    }
}

impl From<tenor_math::MathError> for AnalyticsError {
    fn from(err: tenor_math::MathError) -> Self {
        match err {
            tenor_math::MathError::ConvergenceFailed {
                iterations,
                residual,
            } => Self::SolverConvergenceFailed {
                iterations,
                residual,
            },
            other => Self::InvalidInput {
                reason: other.to_string(),
            },
        }
    }
}

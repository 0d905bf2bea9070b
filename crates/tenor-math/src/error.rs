//! Error types for numerical routines.

use thiserror::Error;

/// A specialized Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;

/// Error type for numerical routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The supplied bracket does not contain a sign change.
    #[error("Invalid bracket [{a}, {b}]: f(a)={fa}, f(b)={fb} (no sign change)")]
    InvalidBracket {
        /// Lower bound of the bracket.
        a: f64,
        /// Upper bound of the bracket.
        b: f64,
        /// Function value at the lower bound.
        fa: f64,
        /// Function value at the upper bound.
        fb: f64,
    },

    /// The solver did not converge within the iteration budget.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// A derivative vanished during Newton iteration.
    #[error("Zero derivative at x = {x}")]
    ZeroDerivative {
        /// The point where the derivative vanished.
        x: f64,
    },

    /// Input outside the routine's domain.
    #[error("Domain error: {reason}")]
    DomainError {
        /// Description of the domain violation.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failure error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }
}

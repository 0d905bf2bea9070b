//! Root-finding algorithms.
//!
//! The quoted-measure conversions all reduce to inverting a monotone (or
//! near-monotone) pricing functional, so the solvers here are the core of
//! the library:
//!
//! - [`newton_raphson`]: fast quadratic convergence when a derivative is
//!   available (yield solving)
//! - [`brent`]: robust bracketing method combining bisection, secant, and
//!   inverse quadratic interpolation (spread solving)
//! - [`bisection`]: simple guaranteed bracketing fallback
//! - [`expand_bracket`]: grows an interval outward until it straddles a root
//!
//! # Example: yield solving
//!
//! ```rust
//! use tenor_math::solvers::{brent, SolverConfig};
//!
//! // Bond: 5% annual coupon, 5 years, price 95
//! let f = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = brent(f, 0.0, 0.20, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // discount bond yields above coupon
//! ```

mod bisection;
mod brent;
mod newton;

pub use bisection::bisection;
pub use brent::brent;
pub use newton::{newton_raphson, newton_raphson_numerical};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Expands an interval geometrically until it brackets a sign change.
///
/// Starting from `[a, b]`, each failed attempt widens the interval by the
/// golden-ish factor 1.6 on the side whose function value is smaller in
/// magnitude. Used by the conversion engine to bracket spread solutions
/// whose magnitude is not known a priori.
///
/// # Errors
///
/// Returns `MathError::InvalidBracket` if no sign change is found within
/// `max_expansions` attempts.
pub fn expand_bracket<F>(f: F, a: f64, b: f64, max_expansions: u32) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(MathError::domain("bracket bounds must satisfy a < b"));
    }

    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    const FACTOR: f64 = 1.6;

    for _ in 0..max_expansions {
        if fa * fb <= 0.0 {
            return Ok((a, b));
        }
        if fa.abs() < fb.abs() {
            a += FACTOR * (a - b);
            fa = f(a);
        } else {
            b += FACTOR * (b - a);
            fb = f(b);
        }
    }

    Err(MathError::InvalidBracket { a, b, fa, fb })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config_builders() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);
        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_expand_bracket_finds_sign_change() {
        // Root at x = 10, initial interval nowhere near it
        let f = |x: f64| x - 10.0;
        let (a, b) = expand_bracket(f, 0.0, 1.0, 50).unwrap();
        assert!(f(a) * f(b) <= 0.0);
    }

    #[test]
    fn test_expand_bracket_no_root() {
        let f = |x: f64| x * x + 1.0;
        assert!(expand_bracket(f, -1.0, 1.0, 20).is_err());
    }

    #[test]
    fn test_expand_then_solve() {
        let f = |x: f64| x * x - 2.0;
        let (a, b) = expand_bracket(f, 1.3, 1.35, 50).unwrap();
        let result = brent(f, a, b, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-9);
    }
}

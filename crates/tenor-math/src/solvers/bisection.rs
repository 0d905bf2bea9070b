//! Bisection root finding.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root finding.
///
/// Linear convergence but guaranteed when the root is bracketed. Used as
/// the last-resort fallback when Brent rejects an ill-conditioned bracket.
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let fa = f(a);
    let fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    let mut fa = fa;

    for iteration in 0..config.max_iterations {
        let mid = (a + b) / 2.0;
        let fmid = f(mid);

        if fmid.abs() < config.tolerance || (b - a).abs() / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: fmid,
            });
        }

        if fa * fmid < 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fmid;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f((a + b) / 2.0).abs(),
    ))
}

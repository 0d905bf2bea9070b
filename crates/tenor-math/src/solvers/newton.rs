//! Newton-Raphson root finding.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson iteration with an analytic derivative.
///
/// Quadratic convergence near the root. Preferred for yield solving where
/// the derivative of the pricing functional (the dollar duration) is cheap
/// to evaluate alongside the price.
///
/// # Errors
///
/// Returns `MathError::ZeroDerivative` if the derivative vanishes, and
/// `MathError::ConvergenceFailed` if the iteration budget is exhausted.
pub fn newton_raphson<F, D>(
    f: F,
    derivative: D,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = derivative(x);
        if dfx.abs() < 1e-15 {
            return Err(MathError::ZeroDerivative { x });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::convergence_failed(iteration, fx.abs()));
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central finite-difference derivative.
///
/// Used when no analytic derivative is available. The step size is scaled
/// to the magnitude of `x`.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h_for = |x: f64| 1e-7 * x.abs().max(1.0);
    let df = |x: f64| {
        let h = h_for(x);
        (f(x + h) - f(x - h)) / (2.0 * h)
    };
    newton_raphson(&f, df, initial_guess, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_numerical_derivative() {
        let f = |x: f64| x.exp() - 2.0;
        let result = newton_raphson_numerical(f, 1.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 2.0_f64.ln(), epsilon = 1e-8);
    }

    #[test]
    fn test_zero_derivative() {
        let f = |_x: f64| 1.0;
        let df = |_x: f64| 0.0;
        let result = newton_raphson(f, df, 0.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::ZeroDerivative { .. })));
    }

    #[test]
    fn test_ytm_par_bond() {
        // Par bond: YTM equals the coupon rate
        let price = |y: f64| {
            let mut pv = 0.0;
            for t in 1..=20 {
                pv += 2.5 / (1.0 + y / 2.0).powi(t);
            }
            pv + 100.0 / (1.0 + y / 2.0).powi(20)
        };
        let f = |y: f64| price(y) - 100.0;
        let result = newton_raphson_numerical(f, 0.04, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 0.05, epsilon = 1e-8);
    }

    #[test]
    fn test_fewer_iterations_than_brent() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let config = SolverConfig::default();

        let newton = newton_raphson(f, df, 1.5, &config).unwrap();
        let brent = crate::solvers::brent(f, 1.0, 2.0, &config).unwrap();
        assert!(newton.iterations <= brent.iterations);
    }
}

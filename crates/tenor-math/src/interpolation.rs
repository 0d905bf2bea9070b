//! Interpolation kernels for curve construction.
//!
//! Pillar-based curves interpolate between sorted `(x, y)` nodes. Two
//! schemes are provided: linear on values (par yields, zero rates) and
//! log-linear (discount factors, survival probabilities — equivalent to
//! piecewise-constant forward rates).

use crate::error::{MathError, MathResult};

/// Locates the bracketing pillar pair for `x` in a sorted abscissa slice.
///
/// Returns the index `i` such that `xs[i] <= x <= xs[i + 1]`.
fn bracketing_index(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|v| v.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Less)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => i.saturating_sub(1).min(xs.len() - 2),
    }
}

/// Linear interpolation on sorted pillars, with flat extrapolation when
/// `extrapolate` is set.
///
/// # Errors
///
/// Returns `MathError::DomainError` when fewer than two pillars are given
/// or when `x` is out of range and extrapolation is disabled.
pub fn linear(xs: &[f64], ys: &[f64], x: f64, extrapolate: bool) -> MathResult<f64> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return Err(MathError::domain(
            "linear interpolation needs at least two pillars",
        ));
    }

    if x <= xs[0] {
        return if extrapolate || (x - xs[0]).abs() < 1e-12 {
            Ok(ys[0])
        } else {
            Err(MathError::domain(format!("x = {x} below first pillar")))
        };
    }
    if x >= xs[xs.len() - 1] {
        return if extrapolate || (x - xs[xs.len() - 1]).abs() < 1e-12 {
            Ok(ys[ys.len() - 1])
        } else {
            Err(MathError::domain(format!("x = {x} beyond last pillar")))
        };
    }

    let i = bracketing_index(xs, x);
    let w = (x - xs[i]) / (xs[i + 1] - xs[i]);
    Ok(ys[i] + w * (ys[i + 1] - ys[i]))
}

/// Log-linear interpolation on sorted pillars.
///
/// Interpolates linearly in `ln(y)`, which for discount factors corresponds
/// to piecewise-constant instantaneous forward rates. Values must be
/// strictly positive.
///
/// When `extrapolate` is set, values outside the pillar range continue the
/// boundary segment's slope in `ln(y)`, so a discount curve keeps its last
/// implied forward rate rather than freezing the discount factor.
pub fn log_linear(xs: &[f64], ys: &[f64], x: f64, extrapolate: bool) -> MathResult<f64> {
    if ys.iter().any(|&y| y <= 0.0) {
        return Err(MathError::domain(
            "log-linear interpolation requires positive values",
        ));
    }
    let log_ys: Vec<f64> = ys.iter().map(|y| y.ln()).collect();

    let n = xs.len();
    if extrapolate && n >= 2 {
        if x < xs[0] {
            let slope = (log_ys[1] - log_ys[0]) / (xs[1] - xs[0]);
            return Ok((log_ys[0] + slope * (x - xs[0])).exp());
        }
        if x > xs[n - 1] {
            let slope = (log_ys[n - 1] - log_ys[n - 2]) / (xs[n - 1] - xs[n - 2]);
            return Ok((log_ys[n - 1] + slope * (x - xs[n - 1])).exp());
        }
    }
    linear(xs, &log_ys, x, extrapolate).map(f64::exp)
}

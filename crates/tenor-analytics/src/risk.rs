//! Risk sensitivities: duration, convexity, Yield01.
//!
//! All analytic, from the periodic-compounding price function
//! `P(y) = Σ CF_i (1+y/f)^(-f·t_i)`.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;
use crate::pricing::{ensure_finite, ScheduledFlows};
use crate::yields::price_from_yield;

/// The standard sensitivity set for one bond position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskMeasures {
    /// Macaulay duration in years.
    pub macaulay_duration: f64,
    /// Modified duration in years.
    pub modified_duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
    /// Dirty price change for a one basis point yield drop, per 100 face.
    pub yield01: f64,
}

/// Computes the sensitivity set at a given yield.
///
/// `periods` is the quoting compounding frequency.
///
/// # Errors
///
/// Returns `NonFinite` when the flows produce a degenerate price.
pub fn risk_measures(
    flows: &ScheduledFlows,
    y: f64,
    periods: u32,
) -> AnalyticsResult<RiskMeasures> {
    let f = f64::from(periods.max(1));
    let base = 1.0 + y / f;
    let dirty = ensure_finite(price_from_yield(flows, y, periods), "risk price")?;

    // Macaulay: PV-weighted mean time; convexity from the second derivative
    let mut weighted_time = 0.0;
    let mut d2 = 0.0;
    for (t, amount) in flows.iter() {
        let pv = amount * base.powf(-f * t);
        weighted_time += t * pv;
        d2 += amount * t * (t + 1.0 / f) * base.powf(-f * t - 2.0);
    }

    let macaulay = weighted_time / dirty;
    let modified = macaulay / base;
    let convexity = d2 / dirty;
    let yield01 = modified * dirty * 1e-4;

    Ok(RiskMeasures {
        macaulay_duration: ensure_finite(macaulay, "Macaulay duration")?,
        modified_duration: ensure_finite(modified, "modified duration")?,
        convexity: ensure_finite(convexity, "convexity")?,
        yield01: ensure_finite(yield01, "Yield01")?,
    })
}

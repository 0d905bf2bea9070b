//! Curve-relative spreads: G-spread, I-spread, TSY spread, yield spread,
//! discount margin reference rates.
//!
//! These measures are arithmetic differences between the bond's yield and
//! a curve-implied reference rate at the work-out horizon, so converting
//! in either direction is closed-form once the reference rate is known:
//!
//! ```text
//! spread = y − reference      y = reference + spread
//! ```

use tenor_core::types::Compounding;
use tenor_curves::{Curve, MarketEnv};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::measure::Measure;

use super::discount_margin;

/// The reference rate a curve-relative measure nets against, at the
/// work-out time `t_workout`.
///
/// `quoting` is the yield quoting compounding (used for the discount-curve
/// zero rate and the index-rate restatement).
///
/// # Errors
///
/// Returns `MeasureUnavailable` when the needed curve is not in the
/// environment, and `InvalidInput` for a measure that is not
/// curve-relative.
pub fn reference_rate(
    measure: Measure,
    env: &MarketEnv,
    t_workout: f64,
    quoting: Compounding,
) -> AnalyticsResult<f64> {
    match measure {
        Measure::GSpread => env
            .government()
            .map_err(|e| AnalyticsError::unavailable("G-Spread", e.to_string()))?
            .yield_at(t_workout)
            .map_err(AnalyticsError::from),
        Measure::ISpread => env
            .swap()
            .map_err(|e| AnalyticsError::unavailable("I-Spread", e.to_string()))?
            .yield_at(t_workout)
            .map_err(AnalyticsError::from),
        Measure::TsySpread => env
            .government()
            .map_err(|e| AnalyticsError::unavailable("TSY Spread", e.to_string()))?
            .benchmark_yield(t_workout)
            .map_err(AnalyticsError::from),
        Measure::YieldSpread => env
            .discount()
            .zero_rate(t_workout, quoting)
            .map_err(AnalyticsError::from),
        Measure::DiscountMargin => discount_margin::index_rate(env, t_workout, quoting)
            .map_err(|e| match e {
                AnalyticsError::Curve(c) => {
                    AnalyticsError::unavailable("Discount Margin", c.to_string())
                }
                other => other,
            }),
        other => Err(AnalyticsError::input(format!(
            "{other} is not a curve-relative measure"
        ))),
    }
}

/// Returns true for the measures [`reference_rate`] handles.
#[must_use]
pub fn is_curve_relative(measure: Measure) -> bool {
    matches!(
        measure,
        Measure::GSpread
            | Measure::ISpread
            | Measure::TsySpread
            | Measure::YieldSpread
            | Measure::DiscountMargin
    )
}

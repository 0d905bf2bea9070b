//! Pillar-based discount factor curve.

use tenor_core::types::{Compounding, Date};

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A discount factor curve built from `(tenor, discount factor)` pillars.
///
/// Discount factors are interpolated log-linearly between pillars, which is
/// equivalent to piecewise-constant instantaneous forward rates. Beyond the
/// last pillar the curve either errors or, when extrapolation is enabled,
/// continues at the last log-linear slope.
///
/// # Example
///
/// ```rust
/// use tenor_curves::{Curve, DiscountCurveBuilder};
/// use tenor_core::types::Date;
///
/// let curve = DiscountCurveBuilder::new(Date::from_ymd(2025, 1, 15).unwrap())
///     .add_pillar(1.0, 0.96)
///     .add_pillar(5.0, 0.80)
///     .with_extrapolation()
///     .build()
///     .unwrap();
///
/// assert!(curve.discount_factor(3.0).unwrap() < 0.96);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    ref_date: Date,
    tenors: Vec<f64>,
    dfs: Vec<f64>,
    extrapolate: bool,
}

impl DiscountCurve {
    /// Builds a flat curve at a continuously-compounded rate, with pillars
    /// out to `max_years`.
    pub fn flat(ref_date: Date, rate: f64, max_years: u32) -> CurveResult<Self> {
        let mut builder = DiscountCurveBuilder::new(ref_date);
        for t in [0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0] {
            if t <= f64::from(max_years) {
                builder = builder.add_pillar(t, (-rate * t).exp());
            }
        }
        builder.with_extrapolation().build()
    }

    /// Returns the curve's pillar tenors in years.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }
}

impl Curve for DiscountCurve {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }

        let last = *self.tenors.last().unwrap_or(&0.0);
        if t > last && !self.extrapolate {
            return Err(CurveError::TenorOutOfRange {
                requested: t,
                min: 0.0,
                max: last,
            });
        }

        let df = tenor_math::interpolation::log_linear(&self.tenors, &self.dfs, t, true)?;
        Ok(df)
    }

    fn reference_date(&self) -> Date {
        self.ref_date
    }

    fn max_date(&self) -> Date {
        let last = *self.tenors.last().unwrap_or(&0.0);
        self.ref_date.add_days((last * 365.0).round() as i64)
    }
}

/// Builder for [`DiscountCurve`].
#[derive(Debug, Clone)]
pub struct DiscountCurveBuilder {
    ref_date: Date,
    pillars: Vec<(f64, f64)>,
    extrapolate: bool,
}

impl DiscountCurveBuilder {
    /// Creates a builder with the given reference date.
    #[must_use]
    pub fn new(ref_date: Date) -> Self {
        Self {
            ref_date,
            pillars: Vec::new(),
            extrapolate: false,
        }
    }

    /// Adds a `(tenor in years, discount factor)` pillar.
    #[must_use]
    pub fn add_pillar(mut self, tenor: f64, df: f64) -> Self {
        self.pillars.push((tenor, df));
        self
    }

    /// Adds a pillar from a zero rate under the given compounding.
    #[must_use]
    pub fn add_zero_rate(self, tenor: f64, rate: f64, compounding: Compounding) -> Self {
        let df = compounding.discount_factor(rate, tenor);
        self.add_pillar(tenor, df)
    }

    /// Enables extrapolation beyond the last pillar.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.extrapolate = true;
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ConstructionFailed` when fewer than two pillars
    /// are supplied, tenors are not strictly increasing and positive, or any
    /// discount factor is non-positive.
    pub fn build(mut self) -> CurveResult<DiscountCurve> {
        self.pillars
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if self.pillars.len() < 2 {
            return Err(CurveError::construction("need at least two pillars"));
        }

        let mut tenors = Vec::with_capacity(self.pillars.len());
        let mut dfs = Vec::with_capacity(self.pillars.len());

        for &(t, df) in &self.pillars {
            if t <= 0.0 {
                return Err(CurveError::construction(format!(
                    "pillar tenor {t} must be positive"
                )));
            }
            if let Some(&prev) = tenors.last() {
                if t <= prev {
                    return Err(CurveError::construction(format!(
                        "duplicate or non-increasing pillar tenor {t}"
                    )));
                }
            }
            if df <= 0.0 {
                return Err(CurveError::construction(format!(
                    "discount factor {df} at tenor {t} must be positive"
                )));
            }
            tenors.push(t);
            dfs.push(df);
        }

        log::debug!(
            "built discount curve: {} pillars, ref date {}",
            tenors.len(),
            self.ref_date
        );

        Ok(DiscountCurve {
            ref_date: self.ref_date,
            tenors,
            dfs,
            extrapolate: self.extrapolate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ref_date() -> Date {
        Date::from_ymd(2025, 1, 15).unwrap()
    }

    fn flat_5pct() -> DiscountCurve {
        DiscountCurve::flat(ref_date(), 0.05, 30).unwrap()
    }

    #[test]
    fn test_flat_curve_df() {
        let curve = flat_5pct();
        assert_relative_eq!(
            curve.discount_factor(3.0).unwrap(),
            (-0.05_f64 * 3.0).exp(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_t_zero_is_one() {
        assert_relative_eq!(flat_5pct().discount_factor(0.0).unwrap(), 1.0);
        assert_relative_eq!(flat_5pct().discount_factor(-1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_extrapolation_beyond_last_pillar() {
        let curve = flat_5pct();
        // Flat forward continuation of the 5% curve
        assert_relative_eq!(
            curve.discount_factor(40.0).unwrap(),
            (-0.05_f64 * 40.0).exp(),
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_no_extrapolation_errors() {
        let curve = DiscountCurveBuilder::new(ref_date())
            .add_pillar(1.0, 0.96)
            .add_pillar(2.0, 0.92)
            .build()
            .unwrap();
        assert!(curve.discount_factor(5.0).is_err());
    }

    #[test]
    fn test_build_rejects_bad_pillars() {
        assert!(DiscountCurveBuilder::new(ref_date())
            .add_pillar(1.0, 0.96)
            .build()
            .is_err());
        assert!(DiscountCurveBuilder::new(ref_date())
            .add_pillar(1.0, 0.96)
            .add_pillar(1.0, 0.95)
            .build()
            .is_err());
        assert!(DiscountCurveBuilder::new(ref_date())
            .add_pillar(1.0, 0.96)
            .add_pillar(2.0, -0.5)
            .build()
            .is_err());
    }

    #[test]
    fn test_add_zero_rate() {
        let curve = DiscountCurveBuilder::new(ref_date())
            .add_zero_rate(1.0, 0.05, Compounding::Continuous)
            .add_zero_rate(2.0, 0.05, Compounding::Continuous)
            .build()
            .unwrap();
        assert_relative_eq!(
            curve.discount_factor(1.0).unwrap(),
            (-0.05_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_max_date() {
        let curve = flat_5pct();
        assert_eq!(
            curve.max_date(),
            ref_date().add_days((30.0 * 365.0) as i64)
        );
    }
}

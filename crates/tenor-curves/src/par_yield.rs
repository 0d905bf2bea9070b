//! Par yield curve for government and swap benchmark rates.

use tenor_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// Standard on-the-run benchmark tenors in years.
pub const BENCHMARK_TENORS: [f64; 7] = [2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0];

/// A par yield curve: `(tenor, yield)` pillars with linear interpolation.
///
/// Used for the government curve (G-spread, TSY spread) and the swap curve
/// (I-spread, discount margin index). Yields are decimals (0.045 = 4.5%).
/// Flat extrapolation applies outside the pillar range, matching how
/// benchmark yields are quoted against the nearest on-the-run issue.
#[derive(Debug, Clone)]
pub struct ParYieldCurve {
    ref_date: Date,
    tenors: Vec<f64>,
    yields: Vec<f64>,
}

impl ParYieldCurve {
    /// Creates a par yield curve from `(tenor in years, yield)` pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ConstructionFailed` for fewer than two pillars
    /// or non-increasing tenors.
    pub fn new(ref_date: Date, mut pillars: Vec<(f64, f64)>) -> CurveResult<Self> {
        pillars.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        if pillars.len() < 2 {
            return Err(CurveError::construction("need at least two pillars"));
        }

        let mut tenors = Vec::with_capacity(pillars.len());
        let mut yields = Vec::with_capacity(pillars.len());
        for (t, y) in pillars {
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
            tenors.push(t);
            yields.push(y);
        }

        Ok(Self {
            ref_date,
            tenors,
            yields,
        })
    }

    /// Creates a flat par yield curve, for tests and simple environments.
    pub fn flat(ref_date: Date, rate: f64) -> CurveResult<Self> {
        Self::new(ref_date, vec![(1.0, rate), (30.0, rate)])
    }

    /// Returns the curve's reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.ref_date
    }

    /// Returns the interpolated yield at a tenor in years.
    pub fn yield_at(&self, t: f64) -> CurveResult<f64> {
        let y = tenor_math::interpolation::linear(&self.tenors, &self.yields, t, true)?;
        Ok(y)
    }

    /// Returns the interpolated yield at a date.
    pub fn yield_at_date(&self, date: Date) -> CurveResult<f64> {
        self.yield_at(self.ref_date.years_until(&date))
    }

    /// Snaps a tenor to the nearest standard benchmark tenor.
    ///
    /// TSY spreads are quoted against the nearest on-the-run treasury, not
    /// an interpolated point.
    #[must_use]
    pub fn benchmark_tenor(t: f64) -> f64 {
        let mut best = BENCHMARK_TENORS[0];
        let mut best_dist = (t - best).abs();
        for &cand in &BENCHMARK_TENORS[1..] {
            let dist = (t - cand).abs();
            if dist < best_dist {
                best = cand;
                best_dist = dist;
            }
        }
        best
    }

    /// Returns the yield of the nearest standard benchmark tenor.
    pub fn benchmark_yield(&self, t: f64) -> CurveResult<f64> {
        self.yield_at(Self::benchmark_tenor(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ref_date() -> Date {
        Date::from_ymd(2025, 1, 15).unwrap()
    }

    fn sample() -> ParYieldCurve {
        ParYieldCurve::new(
            ref_date(),
            vec![
                (2.0, 0.040),
                (5.0, 0.042),
                (10.0, 0.045),
                (30.0, 0.048),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_interpolated_yield() {
        let curve = sample();
        assert_relative_eq!(curve.yield_at(5.0).unwrap(), 0.042, epsilon = 1e-12);
        // Midpoint of 5y..10y pillars
        assert_relative_eq!(curve.yield_at(7.5).unwrap(), 0.0435, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample();
        assert_relative_eq!(curve.yield_at(1.0).unwrap(), 0.040, epsilon = 1e-12);
        assert_relative_eq!(curve.yield_at(40.0).unwrap(), 0.048, epsilon = 1e-12);
    }

    #[test]
    fn test_benchmark_snap() {
        assert_relative_eq!(ParYieldCurve::benchmark_tenor(4.3), 5.0);
        assert_relative_eq!(ParYieldCurve::benchmark_tenor(8.9), 10.0);
        assert_relative_eq!(ParYieldCurve::benchmark_tenor(50.0), 30.0);
        assert_relative_eq!(ParYieldCurve::benchmark_tenor(0.5), 2.0);
    }

    #[test]
    fn test_yield_at_date() {
        let curve = sample();
        let date = ref_date().add_years(5).unwrap();
        let y = curve.yield_at_date(date).unwrap();
        assert!((y - 0.042).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_single_pillar() {
        assert!(ParYieldCurve::new(ref_date(), vec![(5.0, 0.04)]).is_err());
    }
}

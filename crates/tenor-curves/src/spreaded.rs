//! Parallel spread over a base curve.
//!
//! The discounting kernel behind Z-spread and OAS: the base curve's
//! discount factors are scaled by a constant spread, applied either with
//! continuous compounding (Z-spread convention) or periodic compounding
//! (OAS convention).

use tenor_core::types::Date;

use crate::error::CurveResult;
use crate::traits::Curve;

/// How the parallel spread compounds when adjusting discount factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadCompounding {
    /// `DF_adj(t) = DF(t) * exp(-s * t)` — Z-spread convention.
    Continuous,
    /// `DF_adj(t) = DF(t) * (1 + s/n)^(-n * t)` — OAS convention.
    Periodic(u32),
}

/// A curve that applies a constant parallel spread to a base curve.
///
/// Borrows the base curve, so it is cheap to construct inside a solver
/// closure once per trial spread.
pub struct SpreadedCurve<'a> {
    base: &'a dyn Curve,
    spread: f64,
    compounding: SpreadCompounding,
}

impl<'a> SpreadedCurve<'a> {
    /// Creates a spreaded view over `base`.
    ///
    /// `spread` is a decimal rate (0.0050 = 50bp).
    #[must_use]
    pub fn new(base: &'a dyn Curve, spread: f64, compounding: SpreadCompounding) -> Self {
        Self {
            base,
            spread,
            compounding,
        }
    }

    /// Returns the spread adjustment factor at time `t`.
    fn adjustment(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        match self.compounding {
            SpreadCompounding::Continuous => (-self.spread * t).exp(),
            SpreadCompounding::Periodic(n) => {
                let n = f64::from(n.max(1));
                (1.0 + self.spread / n).powf(-n * t)
            }
        }
    }

    /// Returns the spread.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl Curve for SpreadedCurve<'_> {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        Ok(self.base.discount_factor(t)? * self.adjustment(t))
    }

    fn reference_date(&self) -> Date {
        self.base.reference_date()
    }

    fn max_date(&self) -> Date {
        self.base.max_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountCurve;
    use approx::assert_relative_eq;

    fn base() -> DiscountCurve {
        DiscountCurve::flat(Date::from_ymd(2025, 1, 15).unwrap(), 0.04, 30).unwrap()
    }

    #[test]
    fn test_continuous_spread() {
        let base = base();
        let spreaded = SpreadedCurve::new(&base, 0.0050, SpreadCompounding::Continuous);
        let expected = base.discount_factor(2.0).unwrap() * (-0.0050_f64 * 2.0).exp();
        assert_relative_eq!(
            spreaded.discount_factor(2.0).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_periodic_spread() {
        let base = base();
        let spreaded = SpreadedCurve::new(&base, 0.0050, SpreadCompounding::Periodic(2));
        let expected = base.discount_factor(2.0).unwrap() * (1.0 + 0.0025_f64).powf(-4.0);
        assert_relative_eq!(
            spreaded.discount_factor(2.0).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_spread_is_identity() {
        let base = base();
        let spreaded = SpreadedCurve::new(&base, 0.0, SpreadCompounding::Continuous);
        assert_relative_eq!(
            spreaded.discount_factor(5.0).unwrap(),
            base.discount_factor(5.0).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_positive_spread_lowers_df() {
        let base = base();
        let spreaded = SpreadedCurve::new(&base, 0.01, SpreadCompounding::Periodic(2));
        assert!(spreaded.discount_factor(5.0).unwrap() < base.discount_factor(5.0).unwrap());
    }
}

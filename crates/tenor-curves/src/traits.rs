//! Core trait for discounting curves.

use tenor_core::types::{Compounding, Date};

use crate::error::CurveResult;

/// The core trait for discounting curves.
///
/// A curve provides the operations needed to discount cash flows and derive
/// zero and forward rates. All curve types in the library implement this
/// trait, which lets the pricing functional stay generic over the
/// discounting source (base curve, spreaded curve, risky curve).
///
/// Times are year fractions from the curve's reference date on an ACT/365F
/// basis.
pub trait Curve: Send + Sync {
    /// Returns the discount factor from the reference date to time `t`.
    ///
    /// Returns 1.0 for `t <= 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside the curve's valid range and
    /// extrapolation is disabled, or if the curve data is unusable.
    fn discount_factor(&self, t: f64) -> CurveResult<f64>;

    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the maximum date for which the curve has market data.
    fn max_date(&self) -> Date;

    /// Returns the zero rate at time `t` with the specified compounding.
    ///
    /// Derived from the discount factor by default.
    fn zero_rate(&self, t: f64, compounding: Compounding) -> CurveResult<f64> {
        let df = self.discount_factor(t)?;
        Ok(compounding.zero_rate(df, t))
    }

    /// Returns the simply-compounded forward rate between times `t1` and
    /// `t2`.
    ///
    /// `F(t1, t2) = (DF(t1) / DF(t2) - 1) / (t2 - t1)`
    fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Ok(0.0);
        }

        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;

        if df2 <= 0.0 {
            return Ok(0.0);
        }

        Ok((df1 / df2 - 1.0) / (t2 - t1))
    }

    /// Returns the ACT/365F year fraction from the reference date to `date`.
    fn year_fraction(&self, date: Date) -> f64 {
        self.reference_date().years_until(&date)
    }

    /// Returns the discount factor for a specific date.
    fn discount_factor_at(&self, date: Date) -> CurveResult<f64> {
        self.discount_factor(self.year_fraction(date))
    }

    /// Returns the zero rate for a specific date.
    fn zero_rate_at(&self, date: Date, compounding: Compounding) -> CurveResult<f64> {
        self.zero_rate(self.year_fraction(date), compounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::types::Date;

    struct FlatCurve {
        rate: f64,
        ref_date: Date,
    }

    impl Curve for FlatCurve {
        fn discount_factor(&self, t: f64) -> CurveResult<f64> {
            Ok((-self.rate * t.max(0.0)).exp())
        }

        fn reference_date(&self) -> Date {
            self.ref_date
        }

        fn max_date(&self) -> Date {
            self.ref_date.add_years(100).unwrap()
        }
    }

    fn flat() -> FlatCurve {
        FlatCurve {
            rate: 0.05,
            ref_date: Date::from_ymd(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_zero_rate_from_df() {
        let rate = flat().zero_rate(1.0, Compounding::Continuous).unwrap();
        assert_relative_eq!(rate, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate() {
        let curve = flat();
        let fwd = curve.forward_rate(1.0, 2.0).unwrap();
        let df1 = curve.discount_factor(1.0).unwrap();
        let df2 = curve.discount_factor(2.0).unwrap();
        assert_relative_eq!(fwd, df1 / df2 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_degenerate() {
        assert_relative_eq!(flat().forward_rate(2.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_date_helpers() {
        let curve = flat();
        let date = Date::from_ymd(2026, 1, 1).unwrap();
        assert_relative_eq!(curve.year_fraction(date), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            curve.discount_factor_at(date).unwrap(),
            (-0.05_f64).exp(),
            epsilon = 1e-12
        );
    }
}

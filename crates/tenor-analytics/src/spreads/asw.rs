//! Par-par asset swap spread.
//!
//! In a par-par asset swap the investor pays par, receives the bond's
//! coupons, and receives index + spread on the floating leg. Netting the
//! package at inception gives the closed form
//!
//! ```text
//! asw = (c − s_par) + (100 − clean) / (100 · A)
//! ```
//!
//! where `A` is the fixed-leg annuity to the work-out on the discount
//! curve and `s_par = (1 − DF(t_w)) / A` the par swap rate off the same
//! annuity. Both conversion directions are closed-form; no solver is
//! involved.

use tenor_curves::Curve;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::ensure_finite;

/// Par-par asset swap calculator over a discount curve.
#[derive(Clone, Copy)]
pub struct AssetSwapCalculator<'a> {
    curve: &'a dyn Curve,
}

impl<'a> AssetSwapCalculator<'a> {
    /// Creates a calculator.
    #[must_use]
    pub fn new(curve: &'a dyn Curve) -> Self {
        Self { curve }
    }

    /// Fixed-leg annuity: `Σ Δ_i · DF(t_i)` over the coupon times.
    ///
    /// `periods` is the coupon frequency; accrual fractions are taken as
    /// `1/f` per period (the first period may be a stub, which the swap
    /// annuity convention ignores).
    pub fn annuity(&self, coupon_times: &[f64], periods: u32) -> AnalyticsResult<f64> {
        if coupon_times.is_empty() {
            return Err(AnalyticsError::input(
                "asset swap annuity needs at least one coupon period",
            ));
        }
        let delta = 1.0 / f64::from(periods.max(1));
        let mut a = 0.0;
        for &t in coupon_times {
            a += delta * self.curve.discount_factor(t)?;
        }
        ensure_finite(a, "asset swap annuity")
    }

    /// Par swap rate to the work-out: `(1 − DF(t_w)) / A`.
    pub fn par_swap_rate(
        &self,
        coupon_times: &[f64],
        periods: u32,
        t_workout: f64,
    ) -> AnalyticsResult<f64> {
        let a = self.annuity(coupon_times, periods)?;
        let df_w = self.curve.discount_factor(t_workout)?;
        ensure_finite((1.0 - df_w) / a, "par swap rate")
    }

    /// Asset swap spread (decimal) from the clean price.
    ///
    /// `coupon_rate` is the bond's annual coupon as a decimal.
    pub fn spread_from_price(
        &self,
        coupon_rate: f64,
        clean: f64,
        coupon_times: &[f64],
        periods: u32,
        t_workout: f64,
    ) -> AnalyticsResult<f64> {
        let a = self.annuity(coupon_times, periods)?;
        let s_par = self.par_swap_rate(coupon_times, periods, t_workout)?;
        let asw = (coupon_rate - s_par) + (100.0 - clean) / (100.0 * a);
        ensure_finite(asw, "asset swap spread")
    }

    /// Clean price from the asset swap spread (decimal).
    pub fn price_from_spread(
        &self,
        coupon_rate: f64,
        asw: f64,
        coupon_times: &[f64],
        periods: u32,
        t_workout: f64,
    ) -> AnalyticsResult<f64> {
        let a = self.annuity(coupon_times, periods)?;
        let s_par = self.par_swap_rate(coupon_times, periods, t_workout)?;
        let clean = 100.0 - 100.0 * a * (asw - (coupon_rate - s_par));
        ensure_finite(clean, "asset swap price")
    }
}

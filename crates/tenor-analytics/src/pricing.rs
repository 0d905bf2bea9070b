//! The pricing functional: present value of scheduled cash flows.
//!
//! Every conversion in this crate runs through the same kernel: bond cash
//! flows are reduced to `(time, amount)` pairs measured from settlement,
//! then present-valued on some [`Curve`]. Spread measures differ only in
//! which curve they discount on.

use rust_decimal::prelude::ToPrimitive;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CashFlow, Date};
use tenor_curves::Curve;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Cash flows reduced to year-fraction times and f64 amounts.
///
/// Times are ACT/365F from settlement. Amounts are per 100 face.
#[derive(Debug, Clone)]
pub struct ScheduledFlows {
    times: Vec<f64>,
    amounts: Vec<f64>,
}

impl ScheduledFlows {
    /// Reduces bond cash flows to the numeric schedule used by the pricing
    /// kernel, keeping only flows strictly after settlement.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettlement` when no future flows remain.
    pub fn from_cash_flows(flows: &[CashFlow], settlement: Date) -> AnalyticsResult<Self> {
        Self::build(flows, settlement, |d| settlement.years_until(&d))
    }

    /// Same reduction with flow times measured under an explicit day count
    /// convention, for yield quoting overrides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettlement` when no future flows remain.
    pub fn from_cash_flows_with(
        flows: &[CashFlow],
        settlement: Date,
        day_count: DayCountConvention,
    ) -> AnalyticsResult<Self> {
        Self::build(flows, settlement, |d| {
            day_count.year_fraction(settlement, d).to_f64().unwrap_or(0.0)
        })
    }

    fn build(
        flows: &[CashFlow],
        settlement: Date,
        time_of: impl Fn(Date) -> f64,
    ) -> AnalyticsResult<Self> {
        let mut times = Vec::with_capacity(flows.len());
        let mut amounts = Vec::with_capacity(flows.len());

        for cf in flows {
            if cf.date() <= settlement {
                continue;
            }
            times.push(time_of(cf.date()));
            amounts.push(cf.amount().to_f64().unwrap_or(0.0));
        }

        if times.is_empty() {
            return Err(AnalyticsError::settlement(
                settlement,
                "no cash flows after settlement",
            ));
        }

        Ok(Self { times, amounts })
    }

    /// Returns the flow times in years from settlement.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the flow amounts per 100 face.
    #[must_use]
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Returns the time of the final flow (the work-out time).
    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Iterates over `(time, amount)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.amounts.iter().copied())
    }

    /// Present value on a curve (a dirty price, per 100 face).
    pub fn pv_on_curve(&self, curve: &dyn Curve) -> AnalyticsResult<f64> {
        let mut pv = 0.0;
        for (t, amount) in self.iter() {
            pv += amount * curve.discount_factor(t)?;
        }
        ensure_finite(pv, "curve present value")
    }
}

/// Traps NaN/infinity, converting it to an error.
pub fn ensure_finite(value: f64, context: &'static str) -> AnalyticsResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticsError::NonFinite { context })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tenor_curves::DiscountCurve;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn flows() -> Vec<CashFlow> {
        vec![
            CashFlow::coupon(
                date(2026, 1, 15),
                dec!(2.5),
                date(2025, 7, 15),
                date(2026, 1, 15),
            ),
            CashFlow::principal(date(2026, 1, 15), dec!(100)),
        ]
    }

    #[test]
    fn test_drops_past_flows() {
        let mut all = flows();
        all.insert(
            0,
            CashFlow::coupon(
                date(2024, 7, 15),
                dec!(2.5),
                date(2024, 1, 15),
                date(2024, 7, 15),
            ),
        );
        let scheduled = ScheduledFlows::from_cash_flows(&all, date(2025, 1, 15)).unwrap();
        assert_eq!(scheduled.times().len(), 2);
    }

    #[test]
    fn test_no_future_flows_errors() {
        let result = ScheduledFlows::from_cash_flows(&flows(), date(2030, 1, 1));
        assert!(matches!(
            result,
            Err(AnalyticsError::InvalidSettlement { .. })
        ));
    }

    #[test]
    fn test_pv_on_flat_curve() {
        let settlement = date(2025, 1, 15);
        let scheduled = ScheduledFlows::from_cash_flows(&flows(), settlement).unwrap();
        let curve = DiscountCurve::flat(settlement, 0.04, 30).unwrap();

        let t = settlement.years_until(&date(2026, 1, 15));
        let expected = 102.5 * (-0.04 * t).exp();
        assert_relative_eq!(
            scheduled.pv_on_curve(&curve).unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(1.0, "x").is_ok());
        assert!(ensure_finite(f64::NAN, "x").is_err());
        assert!(ensure_finite(f64::INFINITY, "x").is_err());
    }
}

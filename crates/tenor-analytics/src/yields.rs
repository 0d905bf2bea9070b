//! Yield to work-out: closed-form pricing and the inverse solve.
//!
//! Street convention: periodic compounding at the quoting frequency over
//! ACT/365F times,
//!
//! ```text
//! dirty = Σ CF_i · (1 + y/f)^(-f·t_i)
//! ```

use tenor_math::solvers::{brent, expand_bracket, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{ensure_finite, ScheduledFlows};

/// Lowest admissible periodic yield factor. `1 + y/f` must stay positive.
const MIN_YIELD_FACTOR: f64 = 1e-6;

/// Dirty price for a given yield under periodic compounding.
///
/// `periods` is the quoting compounding frequency (2 for semi-annual).
#[must_use]
pub fn price_from_yield(flows: &ScheduledFlows, y: f64, periods: u32) -> f64 {
    let f = f64::from(periods.max(1));
    let base = (1.0 + y / f).max(MIN_YIELD_FACTOR);
    flows
        .iter()
        .map(|(t, amount)| amount * base.powf(-f * t))
        .sum()
}

/// Solves for the yield matching a dirty price.
///
/// Brackets around zero and expands geometrically before handing the root
/// to Brent's method.
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive target price and
/// `SolverConvergenceFailed` when no admissible yield reprices the flows.
pub fn yield_from_price(
    flows: &ScheduledFlows,
    dirty: f64,
    periods: u32,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    if dirty <= 0.0 || !dirty.is_finite() {
        return Err(AnalyticsError::input(format!(
            "dirty price {dirty} must be positive and finite"
        )));
    }

    let objective = |y: f64| price_from_yield(flows, y, periods) - dirty;
    let (a, b) = expand_bracket(objective, -0.15, 0.30, 60)?;
    let result = brent(objective, a, b, config)?;

    log::trace!(
        "yield solve: {} iterations, residual {:.2e}",
        result.iterations,
        result.residual
    );
    ensure_finite(result.root, "yield solve")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tenor_core::types::{CashFlow, Date};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn annual_flows(settlement: Date, coupon: f64, years: i64) -> ScheduledFlows {
        // 365-day coupon steps keep the ACT/365F flow times at whole years
        let mut flows = Vec::new();
        let rate = rust_decimal::Decimal::from_f64_retain(coupon).unwrap();
        for i in 1..=years {
            let d = settlement.add_days(i * 365);
            flows.push(CashFlow::coupon(d, rate, settlement, d));
        }
        flows.push(CashFlow::principal(settlement.add_days(years * 365), dec!(100)));
        ScheduledFlows::from_cash_flows(&flows, settlement).unwrap()
    }

    #[test]
    fn test_par_bond_prices_at_par() {
        // Annual 5% bond at 5% annual yield, whole-year times
        let settlement = date(2025, 1, 15);
        let flows = annual_flows(settlement, 5.0, 10);
        let price = price_from_yield(&flows, 0.05, 1);
        assert_relative_eq!(price, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_price_decreases_in_yield() {
        let settlement = date(2025, 1, 15);
        let flows = annual_flows(settlement, 5.0, 10);
        let p1 = price_from_yield(&flows, 0.04, 1);
        let p2 = price_from_yield(&flows, 0.06, 1);
        assert!(p1 > p2);
    }

    #[test]
    fn test_yield_round_trip() {
        let settlement = date(2025, 1, 15);
        let flows = annual_flows(settlement, 4.0, 7);
        let config = SolverConfig::default();

        for y in [-0.01, 0.0, 0.03, 0.08, 0.15] {
            let dirty = price_from_yield(&flows, y, 1);
            let solved = yield_from_price(&flows, dirty, 1, &config).unwrap();
            assert_relative_eq!(solved, y, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_rejects_bad_price() {
        let settlement = date(2025, 1, 15);
        let flows = annual_flows(settlement, 4.0, 7);
        let config = SolverConfig::default();
        assert!(yield_from_price(&flows, -5.0, 1, &config).is_err());
        assert!(yield_from_price(&flows, f64::NAN, 1, &config).is_err());
    }
}

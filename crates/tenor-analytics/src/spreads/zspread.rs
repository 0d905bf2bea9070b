//! Z-spread (zero-volatility spread).
//!
//! The constant continuously-compounded spread `z` satisfying
//!
//! ```text
//! dirty = Σ CF_i · DF(t_i) · e^(-z·t_i)
//! ```
//!
//! on the discount curve.

use tenor_curves::{Curve, SpreadCompounding};
use tenor_math::solvers::SolverConfig;

use crate::error::AnalyticsResult;
use crate::pricing::ScheduledFlows;

use super::{pv_with_spread, solve_discounting_spread};

/// Z-spread calculator over a discount curve.
#[derive(Clone, Copy)]
pub struct ZSpreadCalculator<'a> {
    curve: &'a dyn Curve,
    config: SolverConfig,
}

impl<'a> ZSpreadCalculator<'a> {
    /// Creates a calculator with default solver settings.
    #[must_use]
    pub fn new(curve: &'a dyn Curve) -> Self {
        Self {
            curve,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Dirty price for a given Z-spread (decimal, not bps).
    pub fn price(&self, flows: &ScheduledFlows, z: f64) -> AnalyticsResult<f64> {
        pv_with_spread(self.curve, flows, z, SpreadCompounding::Continuous)
    }

    /// Solves the Z-spread (decimal) matching a dirty price.
    pub fn solve(&self, flows: &ScheduledFlows, dirty: f64) -> AnalyticsResult<f64> {
        solve_discounting_spread(
            self.curve,
            flows,
            dirty,
            SpreadCompounding::Continuous,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tenor_core::types::{CashFlow, Date};
    use tenor_curves::DiscountCurve;

    #[test]
    fn test_par_bond_zero_spread() {
        // A bond repriced at its curve PV carries zero Z-spread
        let settlement = Date::from_ymd(2025, 1, 15).unwrap();
        let curve = DiscountCurve::flat(settlement, 0.04, 30).unwrap();
        let maturity = Date::from_ymd(2030, 1, 15).unwrap();
        let flows = ScheduledFlows::from_cash_flows(
            &[CashFlow::principal(maturity, dec!(100))],
            settlement,
        )
        .unwrap();

        let calc = ZSpreadCalculator::new(&curve);
        let dirty = calc.price(&flows, 0.0).unwrap();
        let z = calc.solve(&flows, dirty).unwrap();
        assert_relative_eq!(z, 0.0, epsilon = 1e-9);
    }
}

//! Spread measures: discounting spreads, curve-relative spreads, asset
//! swap, discount margin, and credit measures.
//!
//! The discounting spreads (Z-spread, OAS) share one kernel: overlay a
//! parallel spread on the discount curve and solve for the spread that
//! reprices the bond. The curve-relative spreads (G, I, TSY, yield spread,
//! bond basis, discount margin) are arithmetic differences against a
//! reference rate and invert in closed form.

pub mod asw;
pub mod credit;
pub mod curve_spreads;
pub mod discount_margin;
pub mod oas;
pub mod zspread;

pub use asw::AssetSwapCalculator;
pub use credit::RiskyBondPricer;
pub use oas::OasCalculator;
pub use zspread::ZSpreadCalculator;

use tenor_curves::{Curve, SpreadCompounding, SpreadedCurve};
use tenor_math::solvers::{brent, expand_bracket, SolverConfig};

use crate::error::AnalyticsResult;
use crate::pricing::{ensure_finite, ScheduledFlows};

/// Present value with a parallel spread overlaid on the curve.
pub fn pv_with_spread(
    curve: &dyn Curve,
    flows: &ScheduledFlows,
    spread: f64,
    compounding: SpreadCompounding,
) -> AnalyticsResult<f64> {
    let shifted = SpreadedCurve::new(curve, spread, compounding);
    flows.pv_on_curve(&shifted)
}

/// Solves for the parallel discounting spread matching a dirty price.
///
/// The bracket starts at `[-10%, +50%]` and expands if the solution lies
/// outside (deeply distressed or negative-spread bonds).
pub fn solve_discounting_spread(
    curve: &dyn Curve,
    flows: &ScheduledFlows,
    target_dirty: f64,
    compounding: SpreadCompounding,
    config: &SolverConfig,
) -> AnalyticsResult<f64> {
    let objective = |s: f64| {
        pv_with_spread(curve, flows, s, compounding)
            .map(|pv| pv - target_dirty)
            .unwrap_or(f64::NAN)
    };

    let (a, b) = expand_bracket(objective, -0.10, 0.50, 40)?;
    let result = brent(objective, a, b, config)?;

    log::trace!(
        "spread solve: {} iterations, residual {:.2e}",
        result.iterations,
        result.residual
    );
    ensure_finite(result.root, "discounting spread solve")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tenor_core::types::{CashFlow, Date};
    use tenor_curves::DiscountCurve;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn setup() -> (DiscountCurve, ScheduledFlows) {
        let settlement = date(2025, 1, 15);
        let curve = DiscountCurve::flat(settlement, 0.04, 30).unwrap();
        let flows = vec![
            CashFlow::coupon(
                date(2026, 1, 15),
                dec!(5),
                date(2025, 1, 15),
                date(2026, 1, 15),
            ),
            CashFlow::coupon(
                date(2027, 1, 15),
                dec!(5),
                date(2026, 1, 15),
                date(2027, 1, 15),
            ),
            CashFlow::principal(date(2027, 1, 15), dec!(100)),
        ];
        let scheduled = ScheduledFlows::from_cash_flows(&flows, settlement).unwrap();
        (curve, scheduled)
    }

    #[test]
    fn test_zero_spread_is_curve_pv() {
        let (curve, flows) = setup();
        let base = flows.pv_on_curve(&curve).unwrap();
        let spread0 = pv_with_spread(&curve, &flows, 0.0, SpreadCompounding::Continuous).unwrap();
        assert_relative_eq!(base, spread0, epsilon = 1e-12);
    }

    #[test]
    fn test_spread_round_trip() {
        let (curve, flows) = setup();
        let config = SolverConfig::default();

        for s in [-0.005, 0.0, 0.0125, 0.08] {
            let dirty = pv_with_spread(&curve, &flows, s, SpreadCompounding::Continuous).unwrap();
            let solved = solve_discounting_spread(
                &curve,
                &flows,
                dirty,
                SpreadCompounding::Continuous,
                &config,
            )
            .unwrap();
            assert_relative_eq!(solved, s, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_pv_decreases_in_spread() {
        let (curve, flows) = setup();
        let lo = pv_with_spread(&curve, &flows, 0.0, SpreadCompounding::Periodic(2)).unwrap();
        let hi = pv_with_spread(&curve, &flows, 0.01, SpreadCompounding::Periodic(2)).unwrap();
        assert!(lo > hi);
    }
}

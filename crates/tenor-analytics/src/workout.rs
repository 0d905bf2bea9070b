//! Work-out resolution: mapping a horizon to a concrete date and factor.
//!
//! The optimal-exercise scan evaluates every candidate work-out (each
//! call/put date after settlement, plus maturity) at the input quote:
//! the quote is first converted to a clean price at that candidate, then
//! to a yield. The issuer exercises against the holder, so calls take the
//! minimum yield; the holder keeps the best outcome, so puts take the
//! maximum.

use tenor_bonds::Bond;
use tenor_core::types::{Date, Horizon, WorkoutInfo, WorkoutKind};
use tenor_math::solvers::SolverConfig;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::ScheduledFlows;
use crate::yields::yield_from_price;

/// Resolves a horizon to a concrete work-out.
///
/// `clean_for` converts the conversion's input quote to a clean price
/// under a fixed candidate work-out; it is only invoked for the
/// optimal-exercise scan.
///
/// # Errors
///
/// Returns `InvalidSettlement` for an explicit work-out on or before
/// settlement, and propagates pricing errors from the scan.
pub fn resolve_workout<F>(
    bond: &dyn Bond,
    horizon: Horizon,
    settlement: Date,
    periods: u32,
    config: &SolverConfig,
    clean_for: F,
) -> AnalyticsResult<WorkoutInfo>
where
    F: Fn(&WorkoutInfo) -> AnalyticsResult<f64>,
{
    match horizon {
        Horizon::Maturity => Ok(bond.maturity_workout()),
        Horizon::Explicit(w) => {
            if w.date <= settlement {
                return Err(AnalyticsError::settlement(
                    settlement,
                    format!("explicit work-out {} is not after settlement", w.date),
                ));
            }
            if w.date > bond.maturity() {
                return Err(AnalyticsError::input(format!(
                    "explicit work-out {} is beyond maturity {}",
                    w.date,
                    bond.maturity()
                )));
            }
            Ok(w)
        }
        Horizon::OptimalExercise => {
            optimal_workout(bond, settlement, periods, config, clean_for)
        }
    }
}

fn optimal_workout<F>(
    bond: &dyn Bond,
    settlement: Date,
    periods: u32,
    config: &SolverConfig,
    clean_for: F,
) -> AnalyticsResult<WorkoutInfo>
where
    F: Fn(&WorkoutInfo) -> AnalyticsResult<f64>,
{
    let maturity = bond.maturity_workout();
    let candidates = bond
        .exercise_schedule()
        .workout_candidates(settlement, maturity);

    if candidates.len() == 1 {
        return Ok(maturity);
    }

    let accrued = rust_decimal::prelude::ToPrimitive::to_f64(&bond.accrued_interest(settlement))
        .unwrap_or(0.0);

    let mut resolved = None;
    let mut call_worst: Option<(f64, WorkoutInfo)> = None;
    let mut put_best: Option<(f64, WorkoutInfo)> = None;

    for candidate in candidates {
        let clean = clean_for(&candidate)?;
        let flows = ScheduledFlows::from_cash_flows(
            &bond.cash_flows_to_workout(settlement, &candidate),
            settlement,
        )?;
        let y = yield_from_price(&flows, clean + accrued, periods, config)?;

        log::debug!("work-out scan: {} yields {:.6}", candidate, y);

        match candidate.kind {
            WorkoutKind::Maturity => resolved = Some((y, candidate)),
            WorkoutKind::Call => {
                if call_worst.map_or(true, |(best, _)| y < best) {
                    call_worst = Some((y, candidate));
                }
            }
            WorkoutKind::Put => {
                if put_best.map_or(true, |(best, _)| y > best) {
                    put_best = Some((y, candidate));
                }
            }
        }
    }

    let mut chosen = resolved.ok_or_else(|| {
        AnalyticsError::input("optimal exercise scan produced no maturity candidate")
    })?;

    // Issuer takes the worst outcome for the holder, then the holder
    // takes the best remaining one
    if let Some((y, w)) = call_worst {
        if y < chosen.0 {
            chosen = (y, w);
        }
    }
    if let Some((y, w)) = put_best {
        if y > chosen.0 {
            chosen = (y, w);
        }
    }

    Ok(chosen.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tenor_bonds::FixedRateBond;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn callable_bond() -> FixedRateBond {
        FixedRateBond::builder()
            .coupon_rate(dec!(0.06))
            .dated_date(date(2020, 6, 15))
            .maturity(date(2030, 6, 15))
            .callable(date(2026, 6, 15), dec!(100))
            .build()
            .unwrap()
    }

    fn clean_at(clean: f64) -> impl Fn(&WorkoutInfo) -> AnalyticsResult<f64> {
        move |_| Ok(clean)
    }

    #[test]
    fn test_maturity_horizon_ignores_options() {
        let bond = callable_bond();
        let w = resolve_workout(
            &bond,
            Horizon::Maturity,
            date(2025, 6, 15),
            2,
            &SolverConfig::default(),
            clean_at(100.0),
        )
        .unwrap();
        assert_eq!(w.kind, WorkoutKind::Maturity);
        assert_eq!(w.date, date(2030, 6, 15));
    }

    #[test]
    fn test_premium_bond_called() {
        // Above par, the short call yields less: issuer refinances
        let bond = callable_bond();
        let w = resolve_workout(
            &bond,
            Horizon::OptimalExercise,
            date(2025, 6, 15),
            2,
            &SolverConfig::default(),
            clean_at(108.0),
        )
        .unwrap();
        assert_eq!(w.kind, WorkoutKind::Call);
        assert_eq!(w.date, date(2026, 6, 15));
    }

    #[test]
    fn test_discount_bond_survives_to_maturity() {
        let bond = callable_bond();
        let w = resolve_workout(
            &bond,
            Horizon::OptimalExercise,
            date(2025, 6, 15),
            2,
            &SolverConfig::default(),
            clean_at(92.0),
        )
        .unwrap();
        assert_eq!(w.kind, WorkoutKind::Maturity);
    }

    #[test]
    fn test_explicit_validation() {
        let bond = callable_bond();
        let past = WorkoutInfo::call(date(2024, 6, 15), 1.0);
        assert!(resolve_workout(
            &bond,
            Horizon::Explicit(past),
            date(2025, 6, 15),
            2,
            &SolverConfig::default(),
            clean_at(100.0),
        )
        .is_err());

        let beyond = WorkoutInfo::call(date(2031, 6, 15), 1.0);
        assert!(resolve_workout(
            &bond,
            Horizon::Explicit(beyond),
            date(2025, 6, 15),
            2,
            &SolverConfig::default(),
            clean_at(100.0),
        )
        .is_err());
    }
}

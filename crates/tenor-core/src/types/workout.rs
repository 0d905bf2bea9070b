//! Work-out horizon and valuation context types.
//!
//! A work-out identifies the exercise date and redemption factor a
//! price/yield computation targets: maturity, a specific call or put date,
//! or the economically optimal exercise.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// The event a work-out date corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Redemption at final maturity.
    Maturity,
    /// Issuer call exercise.
    Call,
    /// Holder put exercise.
    Put,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkoutKind::Maturity => "Maturity",
            WorkoutKind::Call => "Call",
            WorkoutKind::Put => "Put",
        };
        write!(f, "{name}")
    }
}

/// A resolved work-out: the date and redemption factor a computation
/// targets.
///
/// The factor is the redemption amount per unit face (1.0 = par).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInfo {
    /// Work-out date.
    pub date: Date,
    /// Redemption factor per unit face.
    pub factor: f64,
    /// The event this work-out corresponds to.
    pub kind: WorkoutKind,
}

impl WorkoutInfo {
    /// Creates a maturity work-out redeeming at the given factor.
    #[must_use]
    pub fn maturity(date: Date, factor: f64) -> Self {
        Self {
            date,
            factor,
            kind: WorkoutKind::Maturity,
        }
    }

    /// Creates a call work-out.
    #[must_use]
    pub fn call(date: Date, factor: f64) -> Self {
        Self {
            date,
            factor,
            kind: WorkoutKind::Call,
        }
    }

    /// Creates a put work-out.
    #[must_use]
    pub fn put(date: Date, factor: f64) -> Self {
        Self {
            date,
            factor,
            kind: WorkoutKind::Put,
        }
    }
}

impl fmt::Display for WorkoutInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} x{:.4}", self.kind, self.date, self.factor)
    }
}

/// The work-out horizon a conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Horizon {
    /// Cash flows run to final maturity.
    #[default]
    Maturity,
    /// The economically optimal exercise is chosen from the bond's
    /// exercise schedule (yield-to-worst for calls, yield-to-best for puts).
    OptimalExercise,
    /// An explicit caller-supplied work-out date/factor.
    Explicit(WorkoutInfo),
}

/// Valuation context: as-of date plus settlement lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationParams {
    /// Valuation (as-of) date.
    pub valuation_date: Date,
    /// Calendar days from valuation to settlement.
    pub settle_lag_days: u32,
}

impl ValuationParams {
    /// Creates a valuation context settling on the valuation date.
    #[must_use]
    pub fn spot(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            settle_lag_days: 0,
        }
    }

    /// Creates a valuation context with a settlement lag in calendar days.
    #[must_use]
    pub fn with_settle_lag(valuation_date: Date, settle_lag_days: u32) -> Self {
        Self {
            valuation_date,
            settle_lag_days,
        }
    }

    /// Returns the settlement date.
    #[must_use]
    pub fn settlement_date(&self) -> Date {
        self.valuation_date.add_days(i64::from(self.settle_lag_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_workout_constructors() {
        let w = WorkoutInfo::call(date(2027, 6, 15), 1.02);
        assert_eq!(w.kind, WorkoutKind::Call);
        assert!((w.factor - 1.02).abs() < 1e-15);
    }

    #[test]
    fn test_settlement_date() {
        let vp = ValuationParams::with_settle_lag(date(2025, 6, 13), 2);
        assert_eq!(vp.settlement_date(), date(2025, 6, 15));
    }

    #[test]
    fn test_default_horizon() {
        assert_eq!(Horizon::default(), Horizon::Maturity);
    }

    #[test]
    fn test_display() {
        let w = WorkoutInfo::maturity(date(2030, 1, 15), 1.0);
        assert_eq!(w.to_string(), "Maturity @ 2030-01-15 x1.0000");
    }
}

//! Embedded option (call/put) schedules.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tenor_core::types::{Date, WorkoutInfo, WorkoutKind};

use crate::error::{BondError, BondResult};

/// Side of an embedded option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Issuer's right to redeem early.
    Call,
    /// Holder's right to put the bond back.
    Put,
}

/// A single exercise opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOption {
    /// Exercise date.
    pub date: Date,
    /// Exercise price per 100 face (e.g. 102.5 for a premium call).
    pub price: Decimal,
    /// Call or put.
    pub exercise_type: ExerciseType,
}

impl ExerciseOption {
    /// Creates a call option.
    #[must_use]
    pub fn call(date: Date, price: Decimal) -> Self {
        Self {
            date,
            price,
            exercise_type: ExerciseType::Call,
        }
    }

    /// Creates a put option.
    #[must_use]
    pub fn put(date: Date, price: Decimal) -> Self {
        Self {
            date,
            price,
            exercise_type: ExerciseType::Put,
        }
    }

    /// Returns the exercise price as a redemption factor (1.0 = par).
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.price.to_f64().unwrap_or(100.0) / 100.0
    }

    /// Converts to a work-out descriptor.
    #[must_use]
    pub fn to_workout(&self) -> WorkoutInfo {
        match self.exercise_type {
            ExerciseType::Call => WorkoutInfo::call(self.date, self.factor()),
            ExerciseType::Put => WorkoutInfo::put(self.date, self.factor()),
        }
    }
}

/// The full set of embedded options on a bond.
///
/// Options are kept sorted by date. An empty schedule means a bullet bond.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseSchedule {
    options: Vec<ExerciseOption>,
}

impl ExerciseSchedule {
    /// Creates an empty (bullet) schedule.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a schedule from a list of options.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidExercise` for a non-positive exercise
    /// price.
    pub fn new(mut options: Vec<ExerciseOption>) -> BondResult<Self> {
        for opt in &options {
            if opt.price <= Decimal::ZERO {
                return Err(BondError::exercise(format!(
                    "exercise price {} on {} must be positive",
                    opt.price, opt.date
                )));
            }
        }
        options.sort_by_key(|o| o.date);
        Ok(Self { options })
    }

    /// Adds a call option, keeping the schedule sorted.
    #[must_use]
    pub fn with_call(mut self, date: Date, price: Decimal) -> Self {
        self.options.push(ExerciseOption::call(date, price));
        self.options.sort_by_key(|o| o.date);
        self
    }

    /// Adds a put option, keeping the schedule sorted.
    #[must_use]
    pub fn with_put(mut self, date: Date, price: Decimal) -> Self {
        self.options.push(ExerciseOption::put(date, price));
        self.options.sort_by_key(|o| o.date);
        self
    }

    /// Returns true when there are no embedded options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns all options, sorted by date.
    #[must_use]
    pub fn options(&self) -> &[ExerciseOption] {
        &self.options
    }

    /// Returns the options exercisable strictly after `date`.
    pub fn exercisable_after(&self, date: Date) -> impl Iterator<Item = &ExerciseOption> {
        self.options.iter().filter(move |o| o.date > date)
    }

    /// Returns true when any option falls strictly after `date`.
    #[must_use]
    pub fn has_exercisable_after(&self, date: Date) -> bool {
        self.exercisable_after(date).next().is_some()
    }

    /// Returns the candidate work-outs after `date`, options then maturity.
    #[must_use]
    pub fn workout_candidates(&self, date: Date, maturity: WorkoutInfo) -> Vec<WorkoutInfo> {
        let mut candidates: Vec<WorkoutInfo> = self
            .exercisable_after(date)
            .filter(|o| o.date < maturity.date)
            .map(ExerciseOption::to_workout)
            .collect();
        candidates.push(maturity);
        candidates
    }
}

/// Returns true when the work-out kind came from an issuer option.
#[must_use]
pub fn is_issuer_option(kind: WorkoutKind) -> bool {
    matches!(kind, WorkoutKind::Call)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_sorted_insertion() {
        let schedule = ExerciseSchedule::none()
            .with_call(date(2028, 6, 15), dec!(101))
            .with_call(date(2026, 6, 15), dec!(102));
        assert_eq!(schedule.options()[0].date, date(2026, 6, 15));
    }

    #[test]
    fn test_exercisable_after() {
        let schedule = ExerciseSchedule::none()
            .with_call(date(2026, 6, 15), dec!(102))
            .with_put(date(2027, 6, 15), dec!(100));

        let after: Vec<_> = schedule.exercisable_after(date(2026, 12, 31)).collect();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].exercise_type, ExerciseType::Put);
    }

    #[test]
    fn test_workout_candidates_include_maturity() {
        let schedule = ExerciseSchedule::none().with_call(date(2026, 6, 15), dec!(102));
        let maturity = WorkoutInfo::maturity(date(2030, 6, 15), 1.0);
        let candidates = schedule.workout_candidates(date(2025, 1, 1), maturity);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].kind, WorkoutKind::Call);
        assert!((candidates[0].factor - 1.02).abs() < 1e-12);
        assert_eq!(candidates[1].kind, WorkoutKind::Maturity);
    }

    #[test]
    fn test_rejects_nonpositive_price() {
        let result = ExerciseSchedule::new(vec![ExerciseOption::call(
            date(2026, 6, 15),
            dec!(0),
        )]);
        assert!(result.is_err());
    }
}

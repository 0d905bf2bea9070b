//! Fixed rate bond implementation.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CashFlow, Date, Frequency, WorkoutInfo};

use crate::error::{BondError, BondResult};
use crate::exercise::ExerciseSchedule;
use crate::schedule::Schedule;
use crate::traits::Bond;

/// A fixed rate (or zero-coupon) bond, optionally callable or putable.
///
/// Cash flows are expressed per 100 face. The coupon schedule is generated
/// backward from maturity at construction, so an off-cycle dated date
/// yields a short first coupon prorated by the day count.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::instruments::FixedRateBond;
/// use tenor_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let bond = FixedRateBond::builder()
///     .coupon_rate(dec!(0.05))
///     .dated_date(Date::from_ymd(2020, 6, 15).unwrap())
///     .maturity(Date::from_ymd(2030, 6, 15).unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FixedRateBond {
    coupon_rate: Decimal,
    maturity: Date,
    dated_date: Date,
    frequency: Frequency,
    day_count: DayCountConvention,
    face_value: Decimal,
    redemption_value: Decimal,
    exercise: ExerciseSchedule,
    schedule: Schedule,
}

impl FixedRateBond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> FixedRateBondBuilder {
        FixedRateBondBuilder::default()
    }

    /// Creates a zero-coupon bond redeeming at par.
    pub fn zero_coupon(dated_date: Date, maturity: Date) -> BondResult<Self> {
        Self::builder()
            .coupon_rate(Decimal::ZERO)
            .frequency(Frequency::Zero)
            .dated_date(dated_date)
            .maturity(maturity)
            .build()
    }

    /// Returns the coupon amount for a regular period, per 100 face.
    #[must_use]
    pub fn coupon_per_period(&self) -> Decimal {
        let periods = self.frequency.periods_per_year();
        if periods == 0 {
            Decimal::ZERO
        } else {
            self.coupon_rate * self.face_value / Decimal::from(periods)
        }
    }

    /// Returns the coupon schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Coupon amount for the period `(start, end)`, prorating stubs.
    fn period_coupon(&self, start: Date, end: Date) -> Decimal {
        if self.is_zero_coupon() {
            return Decimal::ZERO;
        }
        let regular = self.coupon_per_period();
        // First period off the regular cycle accrues by the day count
        if self.schedule.has_front_stub() && start == self.dated_date {
            self.coupon_rate * self.face_value * self.day_count.year_fraction(start, end)
        } else {
            regular
        }
    }

    /// Accrued coupon from `start` to `date`, per 100 face.
    fn accrued_to(&self, start: Date, date: Date) -> Decimal {
        self.coupon_rate * self.face_value * self.day_count.year_fraction(start, date)
    }
}

impl Bond for FixedRateBond {
    fn maturity(&self) -> Date {
        self.maturity
    }

    fn dated_date(&self) -> Date {
        self.dated_date
    }

    fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    fn frequency(&self) -> Frequency {
        self.frequency
    }

    fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    fn face_value(&self) -> Decimal {
        self.face_value
    }

    fn redemption_value(&self) -> Decimal {
        self.redemption_value
    }

    fn exercise_schedule(&self) -> &ExerciseSchedule {
        &self.exercise
    }

    fn cash_flows(&self, from: Date) -> Vec<CashFlow> {
        let mut flows = Vec::new();
        for (start, end) in self.schedule.periods() {
            if end <= from {
                continue;
            }
            let amount = self.period_coupon(start, end);
            if amount > Decimal::ZERO {
                flows.push(CashFlow::coupon(end, amount, start, end));
            }
        }
        flows.push(CashFlow::principal(self.maturity, self.redemption_value));
        flows
    }

    fn cash_flows_to_workout(&self, from: Date, workout: &WorkoutInfo) -> Vec<CashFlow> {
        if workout.date >= self.maturity {
            return self.cash_flows(from);
        }

        let mut flows = Vec::new();
        for (start, end) in self.schedule.periods() {
            if end <= from || end > workout.date {
                continue;
            }
            let amount = self.period_coupon(start, end);
            if amount > Decimal::ZERO {
                flows.push(CashFlow::coupon(end, amount, start, end));
            }
        }

        // Stub coupon when the work-out date falls inside a period
        if !self.is_zero_coupon() {
            if let Some((start, end)) = self.schedule.period_containing(workout.date) {
                if workout.date > start && workout.date < end && workout.date > from {
                    let stub = self.accrued_to(start, workout.date);
                    if stub > Decimal::ZERO {
                        flows.push(CashFlow::coupon(workout.date, stub, start, workout.date));
                    }
                }
            }
        }

        let redemption = self.face_value
            * Decimal::from_f64(workout.factor).unwrap_or(Decimal::ONE);
        flows.push(CashFlow::principal(workout.date, redemption));
        flows
    }

    fn accrued_interest(&self, settlement: Date) -> Decimal {
        if self.is_zero_coupon() || settlement <= self.dated_date || settlement >= self.maturity {
            return Decimal::ZERO;
        }
        match self.schedule.period_containing(settlement) {
            Some((start, _)) => self.accrued_to(start, settlement),
            None => Decimal::ZERO,
        }
    }

    fn next_coupon_date(&self, date: Date) -> Option<Date> {
        if self.is_zero_coupon() {
            return (date < self.maturity).then_some(self.maturity);
        }
        self.schedule.next_date_after(date)
    }

    fn previous_coupon_date(&self, date: Date) -> Option<Date> {
        self.schedule.previous_date(date)
    }
}

/// Builder for [`FixedRateBond`].
#[derive(Debug, Clone, Default)]
pub struct FixedRateBondBuilder {
    coupon_rate: Option<Decimal>,
    maturity: Option<Date>,
    dated_date: Option<Date>,
    frequency: Frequency,
    day_count: DayCountConvention,
    redemption_value: Option<Decimal>,
    exercise: ExerciseSchedule,
}

impl FixedRateBondBuilder {
    /// Sets the annual coupon rate as a decimal (0.05 for 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: Decimal) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the dated date (accrual start).
    #[must_use]
    pub fn dated_date(mut self, date: Date) -> Self {
        self.dated_date = Some(date);
        self
    }

    /// Sets the coupon frequency (default semi-annual).
    #[must_use]
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the accrual day count convention (default 30/360 US).
    #[must_use]
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the redemption value per 100 face (default 100).
    #[must_use]
    pub fn redemption_value(mut self, value: Decimal) -> Self {
        self.redemption_value = Some(value);
        self
    }

    /// Sets the embedded option schedule.
    #[must_use]
    pub fn exercise(mut self, exercise: ExerciseSchedule) -> Self {
        self.exercise = exercise;
        self
    }

    /// Adds a call option.
    #[must_use]
    pub fn callable(mut self, date: Date, price: Decimal) -> Self {
        self.exercise = self.exercise.with_call(date, price);
        self
    }

    /// Adds a put option.
    #[must_use]
    pub fn putable(mut self, date: Date, price: Decimal) -> Self {
        self.exercise = self.exercise.with_put(date, price);
        self
    }

    /// Builds the bond, generating its coupon schedule.
    ///
    /// # Errors
    ///
    /// Returns `BondError` when required terms are missing, the coupon is
    /// negative, or an exercise date falls outside `(dated, maturity)`.
    pub fn build(self) -> BondResult<FixedRateBond> {
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| BondError::terms("coupon rate is required"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::terms("maturity is required"))?;
        let dated_date = self
            .dated_date
            .ok_or_else(|| BondError::terms("dated date is required"))?;

        if coupon_rate < Decimal::ZERO {
            return Err(BondError::terms(format!(
                "coupon rate {coupon_rate} must be non-negative"
            )));
        }

        for opt in self.exercise.options() {
            if opt.date <= dated_date || opt.date >= maturity {
                return Err(BondError::exercise(format!(
                    "exercise date {} outside ({}, {})",
                    opt.date, dated_date, maturity
                )));
            }
        }

        let frequency = if coupon_rate == Decimal::ZERO {
            Frequency::Zero
        } else {
            self.frequency
        };
        let schedule = Schedule::generate(dated_date, maturity, frequency)?;

        log::debug!(
            "built fixed rate bond: {}% due {}, {} periods",
            coupon_rate * Decimal::ONE_HUNDRED,
            maturity,
            schedule.num_periods()
        );

        Ok(FixedRateBond {
            coupon_rate,
            maturity,
            dated_date,
            frequency,
            day_count: self.day_count,
            face_value: Decimal::ONE_HUNDRED,
            redemption_value: self.redemption_value.unwrap_or(Decimal::ONE_HUNDRED),
            exercise: self.exercise,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn five_percent_bond() -> FixedRateBond {
        FixedRateBond::builder()
            .coupon_rate(dec!(0.05))
            .dated_date(date(2020, 6, 15))
            .maturity(date(2030, 6, 15))
            .build()
            .unwrap()
    }

    #[test]
    fn test_coupon_per_period() {
        let bond = five_percent_bond();
        assert_eq!(bond.coupon_per_period(), dec!(2.5));
    }

    #[test]
    fn test_cash_flows() {
        let bond = five_percent_bond();
        let flows = bond.cash_flows(date(2025, 1, 2));
        // 11 remaining coupons (Jun 2025 .. Jun 2030) plus principal
        assert_eq!(flows.len(), 12);
        assert_eq!(flows[0].date(), date(2025, 6, 15));
        assert_eq!(flows[0].amount(), dec!(2.5));

        let principal = flows.last().unwrap();
        assert!(principal.is_principal());
        assert_eq!(principal.date(), date(2030, 6, 15));
        assert_eq!(principal.amount(), dec!(100));
    }

    #[test]
    fn test_accrued_interest_thirty360() {
        let bond = five_percent_bond();
        // 3 months into a semi-annual period: 90/360 of 5% on 100
        let accrued = bond.accrued_interest(date(2025, 9, 15));
        assert_eq!(accrued, dec!(1.25));
    }

    #[test]
    fn test_accrued_zero_on_coupon_date() {
        let bond = five_percent_bond();
        assert_eq!(bond.accrued_interest(date(2025, 6, 15)), Decimal::ZERO);
    }

    #[test]
    fn test_workout_cash_flows_call() {
        let bond = FixedRateBond::builder()
            .coupon_rate(dec!(0.05))
            .dated_date(date(2020, 6, 15))
            .maturity(date(2030, 6, 15))
            .callable(date(2026, 6, 15), dec!(102))
            .build()
            .unwrap();

        let workout = WorkoutInfo::call(date(2026, 6, 15), 1.02);
        let flows = bond.cash_flows_to_workout(date(2025, 1, 2), &workout);
        // Coupons Jun 2025, Dec 2025, Jun 2026 plus call redemption
        assert_eq!(flows.len(), 4);
        let redemption = flows.last().unwrap();
        assert_eq!(redemption.date(), date(2026, 6, 15));
        assert_eq!(redemption.amount(), dec!(102));
    }

    #[test]
    fn test_workout_mid_period_stub() {
        let bond = five_percent_bond();
        let workout = WorkoutInfo::call(date(2026, 9, 15), 1.0);
        let flows = bond.cash_flows_to_workout(date(2026, 1, 2), &workout);
        // Jun 2026 coupon, stub to Sep 15, principal
        assert_eq!(flows.len(), 3);
        assert_eq!(flows[1].amount(), dec!(1.25));
        assert_eq!(flows[1].date(), date(2026, 9, 15));
    }

    #[test]
    fn test_zero_coupon() {
        let bond = FixedRateBond::zero_coupon(date(2020, 1, 15), date(2030, 1, 15)).unwrap();
        assert!(bond.is_zero_coupon());
        assert_eq!(bond.accrued_interest(date(2025, 6, 1)), Decimal::ZERO);

        let flows = bond.cash_flows(date(2025, 1, 2));
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].amount(), dec!(100));
    }

    #[test]
    fn test_builder_validation() {
        assert!(FixedRateBond::builder()
            .coupon_rate(dec!(0.05))
            .dated_date(date(2020, 6, 15))
            .build()
            .is_err());

        assert!(FixedRateBond::builder()
            .coupon_rate(dec!(0.05))
            .dated_date(date(2020, 6, 15))
            .maturity(date(2030, 6, 15))
            .callable(date(2031, 1, 1), dec!(101))
            .build()
            .is_err());
    }
}

//! Coupon schedule generation.
//!
//! Schedules are generated backward from maturity in steps of the coupon
//! period, which places any short stub at the front. Dates are unadjusted;
//! business day calendars are out of scope for the analytics layer.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::schedule::Schedule;
//! use tenor_core::types::{Date, Frequency};
//!
//! let schedule = Schedule::generate(
//!     Date::from_ymd(2020, 1, 15).unwrap(),
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Frequency::SemiAnnual,
//! )
//! .unwrap();
//! assert_eq!(schedule.num_periods(), 10);
//! ```

use tenor_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// A coupon date schedule.
///
/// Holds the accrual boundary dates from the dated date through maturity,
/// inclusive. Consecutive pairs form the accrual periods.
#[derive(Debug, Clone)]
pub struct Schedule {
    dates: Vec<Date>,
    frequency: Frequency,
}

impl Schedule {
    /// Generates a schedule backward from `maturity` to `start`.
    ///
    /// A start date that does not lie on the regular coupon cycle produces
    /// a short first period.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` when `maturity` is not after
    /// `start` or when date arithmetic fails.
    pub fn generate(start: Date, maturity: Date, frequency: Frequency) -> BondResult<Self> {
        if maturity <= start {
            return Err(BondError::schedule(format!(
                "maturity {maturity} must be after start {start}"
            )));
        }

        if frequency.is_zero() {
            return Ok(Self {
                dates: vec![start, maturity],
                frequency,
            });
        }

        let step = i32::try_from(frequency.months_per_period())
            .map_err(|_| BondError::schedule("invalid coupon period"))?;
        let eom = maturity.is_end_of_month();

        let mut dates = vec![maturity];
        let mut periods_back = 1;
        loop {
            let mut date = maturity
                .add_months(-step * periods_back)
                .map_err(BondError::from)?;
            if eom {
                date = end_of_month(date);
            }
            if date <= start {
                break;
            }
            dates.push(date);
            periods_back += 1;
        }
        dates.push(start);
        dates.reverse();
        dates.dedup();

        Ok(Self { dates, frequency })
    }

    /// Returns the schedule dates, earliest first.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the coupon frequency the schedule was built with.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns an iterator over the accrual periods `(start, end)`.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the number of accrual periods.
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.dates.len().saturating_sub(1)
    }

    /// Returns the accrual period containing `date`, if any.
    ///
    /// A date on a period boundary belongs to the period it starts.
    #[must_use]
    pub fn period_containing(&self, date: Date) -> Option<(Date, Date)> {
        self.periods().find(|&(start, end)| date >= start && date < end)
    }

    /// Returns the next schedule date strictly after `date`.
    #[must_use]
    pub fn next_date_after(&self, date: Date) -> Option<Date> {
        self.dates.iter().copied().find(|&d| d > date)
    }

    /// Returns the latest schedule date on or before `date`.
    #[must_use]
    pub fn previous_date(&self, date: Date) -> Option<Date> {
        self.dates.iter().copied().rev().find(|&d| d <= date)
    }

    /// Returns true when the first period is shorter than a regular period.
    #[must_use]
    pub fn has_front_stub(&self) -> bool {
        if self.frequency.is_zero() || self.dates.len() < 3 {
            return false;
        }
        let (first_start, first_end) = (self.dates[0], self.dates[1]);
        let step = i32::try_from(self.frequency.months_per_period()).unwrap_or(6);
        match first_end.add_months(-step) {
            Ok(regular_start) => first_start > regular_start,
            Err(_) => false,
        }
    }
}

fn end_of_month(date: Date) -> Date {
    let last = date.days_in_month();
    Date::from_ymd(date.year(), date.month(), last).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_semiannual_regular() {
        let schedule =
            Schedule::generate(date(2020, 1, 15), date(2025, 1, 15), Frequency::SemiAnnual)
                .unwrap();
        assert_eq!(schedule.num_periods(), 10);
        assert_eq!(schedule.dates()[0], date(2020, 1, 15));
        assert_eq!(schedule.dates()[1], date(2020, 7, 15));
        assert!(!schedule.has_front_stub());
    }

    #[test]
    fn test_short_front_stub() {
        // Dated date off-cycle: first period Mar 1 to Jun 15
        let schedule =
            Schedule::generate(date(2020, 3, 1), date(2025, 6, 15), Frequency::SemiAnnual)
                .unwrap();
        let periods: Vec<_> = schedule.periods().collect();
        assert_eq!(periods[0], (date(2020, 3, 1), date(2020, 6, 15)));
        assert_eq!(periods[1], (date(2020, 6, 15), date(2020, 12, 15)));
        assert!(schedule.has_front_stub());
    }

    #[test]
    fn test_end_of_month_cycle() {
        let schedule =
            Schedule::generate(date(2023, 2, 28), date(2024, 2, 29), Frequency::SemiAnnual)
                .unwrap();
        // Aug 31 sits on the EOM cycle implied by the Feb 29 maturity
        assert!(schedule.dates().contains(&date(2023, 8, 31)));
    }

    #[test]
    fn test_zero_coupon() {
        let schedule =
            Schedule::generate(date(2020, 1, 15), date(2030, 1, 15), Frequency::Zero).unwrap();
        assert_eq!(schedule.num_periods(), 1);
    }

    #[test]
    fn test_period_containing() {
        let schedule =
            Schedule::generate(date(2020, 1, 15), date(2025, 1, 15), Frequency::SemiAnnual)
                .unwrap();
        let (start, end) = schedule.period_containing(date(2022, 3, 1)).unwrap();
        assert_eq!(start, date(2022, 1, 15));
        assert_eq!(end, date(2022, 7, 15));

        // Boundary date starts its own period
        let (start, _) = schedule.period_containing(date(2022, 7, 15)).unwrap();
        assert_eq!(start, date(2022, 7, 15));
    }

    #[test]
    fn test_invalid_range() {
        assert!(
            Schedule::generate(date(2025, 1, 15), date(2020, 1, 15), Frequency::SemiAnnual)
                .is_err()
        );
    }
}

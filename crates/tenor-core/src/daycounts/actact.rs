//! Actual/Actual ISDA day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the period into portions
/// that fall in leap years vs non-leap years:
///
/// ```text
/// YF = days in non-leap years / 365 + days in leap years / 366
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start >= end {
            if start == end {
                return Decimal::ZERO;
            }
            return -self.year_fraction(end, start);
        }

        let mut total = Decimal::ZERO;
        let mut current = start;

        // Process calendar year by calendar year
        while current.year() < end.year() {
            let year_end = Date::from_ymd(current.year(), 12, 31).unwrap();
            let days = current.days_between(&year_end) + 1; // include Dec 31
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
            current = Date::from_ymd(current.year() + 1, 1, 1).unwrap();
        }

        if current < end {
            let days = current.days_between(&end);
            total += Decimal::from(days) / Decimal::from(current.days_in_year());
        }

        total
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

//! 30/360 US day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Checks if a date is the last day of February.
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// 30/360 US day count convention (Bond Basis).
///
/// Used for US corporate, agency, and municipal bonds.
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February AND D1 was last day of February, change D2 to 30
/// 4. If D2 is 31 AND D1 is now >= 30, change D2 to 30
///
/// ```text
/// Days = 360 * (Y2 - Y1) + 30 * (M2 - M1) + (D2 - D1)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = i64::from(start.year());
        let y2 = i64::from(end.year());
        let m1 = i64::from(start.month());
        let m2 = i64::from(end.month());
        let mut d1 = i64::from(start.day());
        let mut d2 = i64::from(end.day());

        let d1_was_feb_eom = is_last_day_of_february(start);

        if d1_was_feb_eom || d1 == 31 {
            d1 = 30;
        }

        if is_last_day_of_february(end) && d1_was_feb_eom {
            d2 = 30;
        } else if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

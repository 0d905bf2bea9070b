//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date for financial calculations.
///
/// A newtype wrapper around `chrono::NaiveDate` providing financial-specific
/// operations and type safety.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Date;
///
/// let date = Date::from_ymd(2025, 6, 15).unwrap();
/// let next = date.add_months(6).unwrap();
/// assert_eq!(next.month(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Checks if this is the last day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g. Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    pub fn add_years(&self, years: i32) -> CoreResult<Self> {
        self.add_months(years * 12)
    }

    /// Returns the signed number of calendar days from `self` to `other`.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the ACT/365F year fraction from `self` to `other`.
    ///
    /// Convenience used throughout the curve and pricing layers for
    /// time-to-cashflow measurement.
    #[must_use]
    pub fn years_until(&self, other: &Date) -> f64 {
        self.days_between(other) as f64 / 365.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Returns the number of days in the given month of the given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year()) => 29,
        _ => 28,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2025-06-15").unwrap();
        assert_eq!(date, Date::from_ymd(2025, 6, 15).unwrap());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_add_months_rollback() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let next = date.add_months(1).unwrap();
        assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_add_months_negative() {
        let date = Date::from_ymd(2025, 3, 15).unwrap();
        let prev = date.add_months(-6).unwrap();
        assert_eq!(prev, Date::from_ymd(2024, 9, 15).unwrap());
    }

    #[test]
    fn test_days_between() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert_eq!(start.days_between(&end), 365);
        assert_eq!(end.days_between(&start), -365);
    }

    #[test]
    fn test_years_until() {
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();
        assert!((start.years_until(&end) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_end_of_month() {
        assert!(Date::from_ymd(2024, 2, 29).unwrap().is_end_of_month());
        assert!(!Date::from_ymd(2024, 2, 28).unwrap().is_end_of_month());
        assert!(Date::from_ymd(2025, 2, 28).unwrap().is_end_of_month());
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn test_ordering() {
        let a = Date::from_ymd(2025, 1, 1).unwrap();
        let b = Date::from_ymd(2025, 6, 1).unwrap();
        assert!(a < b);
    }
}

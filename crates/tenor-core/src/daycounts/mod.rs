//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest and discounting
//! times are computed by specifying how days are counted between two dates
//! and the year basis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`ActActIsda`]: Actual/Actual ISDA - year-based split
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//!
//! # Usage
//!
//! ```rust
//! use tenor_core::daycounts::{DayCount, Thirty360US};
//! use tenor_core::types::Date;
//!
//! let dc = Thirty360US;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! ```

mod act360;
mod act365;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use act365::Act365Fixed;
pub use actact::ActActIsda;
pub use thirty360::Thirty360US;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;
use rust_decimal::Decimal;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to specific market conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention (e.g. "ACT/360").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end` < `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates according to the
    /// convention. For ACT conventions this is actual calendar days.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumerated day count convention, usable as configuration.
///
/// Dispatches to the matching [`DayCount`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360.
    Act360,
    /// Actual/365 Fixed.
    Act365Fixed,
    /// Actual/Actual ISDA.
    ActActIsda,
    /// 30/360 US (Bond Basis).
    #[default]
    Thirty360US,
}

impl DayCountConvention {
    /// Returns the day count implementation for this convention.
    #[must_use]
    pub fn day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::Act365Fixed => &Act365Fixed,
            DayCountConvention::ActActIsda => &ActActIsda,
            DayCountConvention::Thirty360US => &Thirty360US,
        }
    }

    /// Calculates the year fraction between two dates.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.day_count().year_fraction(start, end)
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day_count().name())
    }
}

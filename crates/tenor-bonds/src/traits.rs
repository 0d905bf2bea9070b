//! Core Bond trait definition.

use rust_decimal::Decimal;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{CashFlow, Date, Frequency, WorkoutInfo};

use crate::exercise::ExerciseSchedule;

/// Common interface for bond instruments.
///
/// The analytics layer prices any `dyn Bond` from its cash flows, accrued
/// interest, and exercise schedule. Implementations generate flows per 100
/// face.
///
/// # Example
///
/// ```rust,ignore
/// fn describe(bond: &dyn Bond) {
///     println!("matures {}", bond.maturity());
///     for cf in bond.cash_flows(settlement) {
///         println!("  {} {}", cf.date(), cf.amount());
///     }
/// }
/// ```
pub trait Bond: Send + Sync {
    /// Returns the maturity date.
    fn maturity(&self) -> Date;

    /// Returns the dated date (when interest starts accruing).
    fn dated_date(&self) -> Date;

    /// Returns the annual coupon rate as a decimal (0.05 for 5%).
    fn coupon_rate(&self) -> Decimal;

    /// Returns the coupon payment frequency.
    fn frequency(&self) -> Frequency;

    /// Returns the accrual day count convention.
    fn day_count(&self) -> DayCountConvention;

    /// Returns the face value per unit (normally 100).
    fn face_value(&self) -> Decimal {
        Decimal::ONE_HUNDRED
    }

    /// Returns the redemption value per 100 face at maturity.
    fn redemption_value(&self) -> Decimal {
        Decimal::ONE_HUNDRED
    }

    /// Returns the embedded call/put schedule (empty for bullets).
    fn exercise_schedule(&self) -> &ExerciseSchedule;

    /// Generates the remaining cash flows strictly after `from`, sorted by
    /// date, assuming redemption at final maturity.
    fn cash_flows(&self, from: Date) -> Vec<CashFlow>;

    /// Generates the cash flows strictly after `from` assuming the bond
    /// works out at `workout` instead of maturity.
    ///
    /// Coupons up to and including the work-out date are kept; redemption
    /// is the work-out factor times face. A work-out date inside a coupon
    /// period produces a stub coupon accrued to that date.
    fn cash_flows_to_workout(&self, from: Date, workout: &WorkoutInfo) -> Vec<CashFlow>;

    /// Calculates accrued interest per 100 face as of `settlement`.
    fn accrued_interest(&self, settlement: Date) -> Decimal;

    /// Returns the next coupon date strictly after `date`.
    fn next_coupon_date(&self, date: Date) -> Option<Date>;

    /// Returns the latest coupon date on or before `date`.
    fn previous_coupon_date(&self, date: Date) -> Option<Date>;

    /// Returns true if the bond has matured as of `as_of`.
    fn has_matured(&self, as_of: Date) -> bool {
        as_of >= self.maturity()
    }

    /// Returns true for zero-coupon bonds.
    fn is_zero_coupon(&self) -> bool {
        self.frequency().is_zero() || self.coupon_rate() == Decimal::ZERO
    }

    /// Returns the maturity expressed as a work-out descriptor.
    fn maturity_workout(&self) -> WorkoutInfo {
        use rust_decimal::prelude::ToPrimitive;
        let factor = (self.redemption_value() / self.face_value())
            .to_f64()
            .unwrap_or(1.0);
        WorkoutInfo::maturity(self.maturity(), factor)
    }

    /// Returns the years to maturity from `from` (ACT/365F).
    fn years_to_maturity(&self, from: Date) -> f64 {
        from.years_until(&self.maturity())
    }
}

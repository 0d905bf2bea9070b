//! Domain types for fixed income analytics.

mod cashflow;
mod date;
mod frequency;
mod price;
mod workout;

pub use cashflow::{CashFlow, CashFlowType};
pub use date::Date;
pub use frequency::{Compounding, Frequency};
pub use price::Price;
pub use workout::{Horizon, ValuationParams, WorkoutInfo, WorkoutKind};

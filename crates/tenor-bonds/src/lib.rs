//! # Tenor Bonds
//!
//! Bond instruments and cash flow generation for the Tenor fixed income
//! analytics library:
//!
//! - [`Bond`]: the instrument interface the analytics layer prices against
//! - [`FixedRateBond`]: fixed coupon and zero-coupon bonds, optionally
//!   callable/putable
//! - [`Schedule`]: backward coupon schedule generation with stub handling
//! - [`ExerciseSchedule`]: embedded call/put options
//!
//! ## Example
//!
//! ```rust
//! use tenor_bonds::prelude::*;
//! use tenor_core::types::Date;
//! use rust_decimal_macros::dec;
//!
//! let bond = FixedRateBond::builder()
//!     .coupon_rate(dec!(0.045))
//!     .dated_date(Date::from_ymd(2023, 2, 15).unwrap())
//!     .maturity(Date::from_ymd(2033, 2, 15).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let settlement = Date::from_ymd(2025, 6, 16).unwrap();
//! assert!(bond.accrued_interest(settlement) > dec!(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod exercise;
pub mod instruments;
pub mod schedule;
pub mod traits;

pub use error::{BondError, BondResult};
pub use exercise::{ExerciseOption, ExerciseSchedule, ExerciseType};
pub use instruments::{FixedRateBond, FixedRateBondBuilder};
pub use schedule::Schedule;
pub use traits::Bond;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::exercise::{ExerciseOption, ExerciseSchedule, ExerciseType};
    pub use crate::instruments::{FixedRateBond, FixedRateBondBuilder};
    pub use crate::schedule::Schedule;
    pub use crate::traits::Bond;
}

//! # Tenor Core
//!
//! Core types and abstractions for the Tenor fixed income analytics library.
//!
//! This crate provides the foundational building blocks used throughout Tenor:
//!
//! - **Types**: Domain-specific types like `Date`, `Price`, `CashFlow`, `WorkoutInfo`
//! - **Day Count Conventions**: Industry-standard day count fraction calculations
//! - **Valuation Context**: Settlement and work-out horizon descriptors
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let settlement = Date::from_ymd(2025, 6, 17).unwrap();
//! let price = Price::new(dec!(98.50)).unwrap();
//! assert!(price.as_percentage() < dec!(100));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        CashFlow, CashFlowType, Compounding, Date, Frequency, Horizon, Price, ValuationParams,
        WorkoutInfo, WorkoutKind,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency, Horizon, Price, ValuationParams, WorkoutInfo};

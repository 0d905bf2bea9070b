//! # Tenor Analytics
//!
//! Price, yield, spread and risk conversions for the Tenor fixed income
//! analytics library.
//!
//! Thirteen quoting conventions ([`Measure`]) and three work-out horizons
//! ([`tenor_core::types::Horizon`]) convert pairwise through a single
//! engine: every input measure maps to a clean price, every clean price
//! maps to every output measure, with one shared root-finder underneath.
//!
//! ## Example
//!
//! ```rust
//! use tenor_analytics::prelude::*;
//! use tenor_bonds::FixedRateBond;
//! use tenor_core::types::{Date, Horizon, ValuationParams};
//! use tenor_curves::{DiscountCurve, MarketEnv};
//! use rust_decimal_macros::dec;
//!
//! let settlement = Date::from_ymd(2025, 6, 16).unwrap();
//! let bond = FixedRateBond::builder()
//!     .coupon_rate(dec!(0.05))
//!     .dated_date(Date::from_ymd(2020, 6, 15).unwrap())
//!     .maturity(Date::from_ymd(2030, 6, 15).unwrap())
//!     .build()
//!     .unwrap();
//! let market = MarketEnv::new(DiscountCurve::flat(settlement, 0.04, 30).unwrap());
//!
//! let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(settlement));
//! let z_bps = engine
//!     .convert(Quote::price(98.25), Measure::ZSpread, Horizon::Maturity)
//!     .unwrap();
//! assert!(z_bps.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod error;
pub mod measure;
pub mod pricing;
pub mod risk;
pub mod spreads;
pub mod workout;
pub mod yields;

pub use engine::{ConversionEngine, MeasureReport};
pub use error::{AnalyticsError, AnalyticsResult};
pub use measure::{Measure, PricerParams, Quote, QuoteConventions};
pub use pricing::ScheduledFlows;
pub use risk::{risk_measures, RiskMeasures};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{ConversionEngine, MeasureReport};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::measure::{Measure, PricerParams, Quote, QuoteConventions};
    pub use crate::risk::RiskMeasures;
}

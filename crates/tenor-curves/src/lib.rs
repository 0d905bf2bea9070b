//! # Tenor Curves
//!
//! Curve abstractions for the Tenor fixed income analytics library:
//!
//! - [`Curve`]: the core discounting trait
//! - [`DiscountCurve`]: pillar-based discount factor curve with log-linear
//!   interpolation
//! - [`SpreadedCurve`]: a parallel spread over any base curve (the Z-spread
//!   and OAS discounting kernel)
//! - [`ParYieldCurve`]: government/swap par yield pillars for G-spread,
//!   I-spread, and treasury benchmark lookups
//! - [`CreditCurve`]: piecewise-flat hazard curve with survival
//!   probabilities and recovery, for credit basis and PECS
//! - [`MarketEnv`]: the curve/quote container handed to every conversion

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod credit;
pub mod discount;
pub mod env;
pub mod error;
pub mod par_yield;
pub mod spreaded;
pub mod traits;

pub use credit::CreditCurve;
pub use discount::{DiscountCurve, DiscountCurveBuilder};
pub use env::MarketEnv;
pub use error::{CurveError, CurveResult};
pub use par_yield::ParYieldCurve;
pub use spreaded::{SpreadCompounding, SpreadedCurve};
pub use traits::Curve;

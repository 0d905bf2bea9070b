//! Bond instrument implementations.

mod fixed_rate;

pub use fixed_rate::{FixedRateBond, FixedRateBondBuilder};

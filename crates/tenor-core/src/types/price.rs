//! Price type for bond quotations.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A clean bond price quoted as a percentage of par (e.g. 98.50).
///
/// Dirty prices are derived by adding accrued interest at the point of use;
/// this type always carries the clean quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new price.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidPrice` if the price is not strictly
    /// positive. A zero or negative quote is out of domain for every
    /// conversion in the library.
    pub fn new(value: Decimal) -> CoreResult<Self> {
        if value <= Decimal::ZERO {
            return Err(CoreError::invalid_price(
                value,
                "price must be strictly positive",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a price from an `f64`, validating positivity and finiteness.
    pub fn from_f64(value: f64) -> CoreResult<Self> {
        if !value.is_finite() {
            return Err(CoreError::invalid_price(
                Decimal::ZERO,
                "price must be finite",
            ));
        }
        let value = Decimal::from_f64_retain(value).ok_or_else(|| {
            CoreError::invalid_price(Decimal::ZERO, "price not representable as decimal")
        })?;
        Self::new(value)
    }

    /// Par price (100).
    #[must_use]
    pub fn par() -> Self {
        Self(Decimal::ONE_HUNDRED)
    }

    /// Returns the price as a percentage of par.
    #[must_use]
    pub fn as_percentage(&self) -> Decimal {
        self.0
    }

    /// Returns the price as an `f64` percentage of par.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_price() {
        let p = Price::new(dec!(98.50)).unwrap();
        assert_eq!(p.as_percentage(), dec!(98.50));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(Price::new(Decimal::ZERO).is_err());
        assert!(Price::new(dec!(-1)).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Price::from_f64(f64::NAN).is_err());
        assert!(Price::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn test_par() {
        assert_eq!(Price::par().as_percentage(), dec!(100));
    }
}

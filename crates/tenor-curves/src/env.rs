//! Market environment: the bundle of curves a conversion runs against.

use tenor_core::types::Date;

use crate::credit::CreditCurve;
use crate::discount::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::par_yield::ParYieldCurve;
use crate::traits::Curve;

/// The market data container handed to every pricing and spread conversion.
///
/// Only the discount curve is mandatory. Measures that need a government
/// curve (G-spread, treasury spread), a swap curve (I-spread, discount
/// margin, asset swap spread), or a credit curve (credit basis, PECS) fail
/// with [`CurveError::MissingCurve`] when the relevant curve is absent.
///
/// # Example
///
/// ```ignore
/// let env = MarketEnv::new(discount)
///     .with_government(govt)
///     .with_swap(swap);
/// ```
#[derive(Debug, Clone)]
pub struct MarketEnv {
    discount: DiscountCurve,
    government: Option<ParYieldCurve>,
    swap: Option<ParYieldCurve>,
    credit: Option<CreditCurve>,
}

impl MarketEnv {
    /// Creates an environment holding only a discount curve.
    #[must_use]
    pub fn new(discount: DiscountCurve) -> Self {
        Self {
            discount,
            government: None,
            swap: None,
            credit: None,
        }
    }

    /// Attaches a government par yield curve.
    #[must_use]
    pub fn with_government(mut self, curve: ParYieldCurve) -> Self {
        self.government = Some(curve);
        self
    }

    /// Attaches a swap par yield curve.
    #[must_use]
    pub fn with_swap(mut self, curve: ParYieldCurve) -> Self {
        self.swap = Some(curve);
        self
    }

    /// Attaches a credit (hazard) curve.
    #[must_use]
    pub fn with_credit(mut self, curve: CreditCurve) -> Self {
        self.credit = Some(curve);
        self
    }

    /// Returns the environment's reference date (from the discount curve).
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.discount.reference_date()
    }

    /// Returns the discount curve.
    #[must_use]
    pub fn discount(&self) -> &DiscountCurve {
        &self.discount
    }

    /// Returns the government par yield curve, if attached.
    pub fn government(&self) -> CurveResult<&ParYieldCurve> {
        self.government
            .as_ref()
            .ok_or(CurveError::missing("government"))
    }

    /// Returns the swap par yield curve, if attached.
    pub fn swap(&self) -> CurveResult<&ParYieldCurve> {
        self.swap.as_ref().ok_or(CurveError::missing("swap"))
    }

    /// Returns the credit curve, if attached.
    pub fn credit(&self) -> CurveResult<&CreditCurve> {
        self.credit.as_ref().ok_or(CurveError::missing("credit"))
    }

    /// Returns true when a government curve is attached.
    #[must_use]
    pub fn has_government(&self) -> bool {
        self.government.is_some()
    }

    /// Returns true when a swap curve is attached.
    #[must_use]
    pub fn has_swap(&self) -> bool {
        self.swap.is_some()
    }

    /// Returns true when a credit curve is attached.
    #[must_use]
    pub fn has_credit(&self) -> bool {
        self.credit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ref_date() -> Date {
        Date::from_ymd(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_missing_curves_error() {
        let env = MarketEnv::new(DiscountCurve::flat(ref_date(), 0.04, 30).unwrap());
        assert!(env.government().is_err());
        assert!(env.swap().is_err());
        assert!(env.credit().is_err());
        assert!(matches!(
            env.swap().unwrap_err(),
            CurveError::MissingCurve { name: "swap" }
        ));
    }

    #[test]
    fn test_attached_curves() {
        let env = MarketEnv::new(DiscountCurve::flat(ref_date(), 0.04, 30).unwrap())
            .with_government(ParYieldCurve::flat(ref_date(), 0.035).unwrap())
            .with_swap(ParYieldCurve::flat(ref_date(), 0.04).unwrap())
            .with_credit(CreditCurve::flat_from_cds(ref_date(), 0.01, 0.4).unwrap());

        assert!(env.has_government());
        assert!(env.has_swap());
        assert!(env.has_credit());
        assert!(env.government().is_ok());
        assert_eq!(env.reference_date(), ref_date());
    }
}

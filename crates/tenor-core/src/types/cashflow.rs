//! Cash flow type for bond analytics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity
    Principal,
    /// Call redemption
    Call,
    /// Put redemption
    Put,
}

impl CashFlowType {
    /// Returns true for principal-like flows (maturity, call, put).
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(
            self,
            CashFlowType::Principal | CashFlowType::Call | CashFlowType::Put
        )
    }
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Principal => "Principal",
            CashFlowType::Call => "Call",
            CashFlowType::Put => "Put",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow with accrual metadata.
///
/// Represents a single cash flow occurring on a specific date, including
/// accrual period information for coupon payments. Amounts are expressed per
/// 100 face.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{CashFlow, CashFlowType, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(
///     Date::from_ymd(2025, 6, 15).unwrap(),
///     dec!(2.50),
///     CashFlowType::Coupon,
/// );
/// assert_eq!(cf.amount(), dec!(2.50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount (per 100 face)
    amount: Decimal,
    /// Type of cash flow
    cf_type: CashFlowType,
    /// Accrual period start date (for coupons)
    accrual_start: Option<Date>,
    /// Accrual period end date (for coupons)
    accrual_end: Option<Date>,
}

impl CashFlow {
    /// Creates a new cash flow with basic fields.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
            accrual_start: None,
            accrual_end: None,
        }
    }

    /// Creates a coupon cash flow with accrual period information.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal, accrual_start: Date, accrual_end: Date) -> Self {
        Self {
            date,
            amount,
            cf_type: CashFlowType::Coupon,
            accrual_start: Some(accrual_start),
            accrual_end: Some(accrual_end),
        }
    }

    /// Creates a principal redemption cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Principal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount per 100 face.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns the accrual period start date, if any.
    #[must_use]
    pub fn accrual_start(&self) -> Option<Date> {
        self.accrual_start
    }

    /// Returns the accrual period end date, if any.
    #[must_use]
    pub fn accrual_end(&self) -> Option<Date> {
        self.accrual_end
    }

    /// Returns true for principal-like flows.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        self.cf_type.is_principal()
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.cf_type, self.amount)
    }
}

//! Quoting conventions: the measure enum and quoted values.

use serde::{Deserialize, Serialize};
use std::fmt;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{Frequency, Price};

/// The quoting conventions a bond level can be expressed in.
///
/// Every measure converts to every other through the clean price hub, so
/// the full pairwise conversion surface is a single generic operation
/// instead of one method per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// Clean price, percent of par.
    Price,
    /// Yield to the work-out, periodic compounding at the quoting
    /// frequency, decimal.
    Yield,
    /// Zero-volatility spread over the discount curve, basis points.
    ZSpread,
    /// Spread over the interpolated government par yield, basis points.
    GSpread,
    /// Spread over the interpolated swap rate, basis points.
    ISpread,
    /// Option-adjusted spread over the discount curve, basis points.
    Oas,
    /// Margin over the curve-implied funding index, basis points.
    DiscountMargin,
    /// Par-par asset swap spread, basis points.
    AssetSwapSpread,
    /// Spread over the nearest standard treasury benchmark, basis points.
    TsySpread,
    /// Spread over the discount curve zero rate at the work-out, basis
    /// points.
    YieldSpread,
    /// Market yield minus the curve-implied yield, basis points.
    BondBasis,
    /// Parallel hazard bump (in spread terms) repricing the bond on the
    /// credit curve, basis points.
    CreditBasis,
    /// Flat CDS spread whose implied hazard reprices the bond, basis
    /// points.
    Pecs,
}

impl Measure {
    /// All thirteen measures, in display order.
    pub const ALL: [Measure; 13] = [
        Measure::Price,
        Measure::Yield,
        Measure::ZSpread,
        Measure::GSpread,
        Measure::ISpread,
        Measure::Oas,
        Measure::DiscountMargin,
        Measure::AssetSwapSpread,
        Measure::TsySpread,
        Measure::YieldSpread,
        Measure::BondBasis,
        Measure::CreditBasis,
        Measure::Pecs,
    ];

    /// Returns the measure's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Price => "Price",
            Measure::Yield => "Yield",
            Measure::ZSpread => "Z-Spread",
            Measure::GSpread => "G-Spread",
            Measure::ISpread => "I-Spread",
            Measure::Oas => "OAS",
            Measure::DiscountMargin => "Discount Margin",
            Measure::AssetSwapSpread => "Asset Swap Spread",
            Measure::TsySpread => "TSY Spread",
            Measure::YieldSpread => "Yield Spread",
            Measure::BondBasis => "Bond Basis",
            Measure::CreditBasis => "Credit Basis",
            Measure::Pecs => "PECS",
        }
    }

    /// Returns true for measures quoted in basis points.
    #[must_use]
    pub fn is_spread(&self) -> bool {
        !matches!(self, Measure::Price | Measure::Yield)
    }

    /// Returns true for measures needing a credit curve.
    #[must_use]
    pub fn needs_credit_curve(&self) -> bool {
        matches!(self, Measure::CreditBasis | Measure::Pecs)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value quoted in a particular measure.
///
/// Units follow the measure: percent of par for price, decimal for yield,
/// basis points for every spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The quoting convention.
    pub measure: Measure,
    /// The quoted value in the measure's units.
    pub value: f64,
}

impl Quote {
    /// Creates a quote.
    #[must_use]
    pub fn new(measure: Measure, value: f64) -> Self {
        Self { measure, value }
    }

    /// Creates a clean price quote (percent of par).
    #[must_use]
    pub fn price(value: f64) -> Self {
        Self::new(Measure::Price, value)
    }

    /// Creates a yield quote (decimal).
    #[must_use]
    pub fn yield_value(value: f64) -> Self {
        Self::new(Measure::Yield, value)
    }

    /// Creates a spread quote in basis points.
    #[must_use]
    pub fn spread_bps(measure: Measure, bps: f64) -> Self {
        Self::new(measure, bps)
    }

    /// Creates a clean price quote from a validated [`Price`].
    #[must_use]
    pub fn clean_price(price: Price) -> Self {
        Self::new(Measure::Price, price.as_f64())
    }
}

impl From<Price> for Quote {
    fn from(price: Price) -> Self {
        Self::clean_price(price)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.measure {
            Measure::Price => write!(f, "{:.6}", self.value),
            Measure::Yield => write!(f, "{:.6}%", self.value * 100.0),
            _ => write!(f, "{:.2}bp {}", self.value, self.measure),
        }
    }
}

/// Overrides for how yields are quoted in a conversion.
///
/// Defaults follow the bond's own conventions; a desk quoting an annual-pay
/// bond on a semi-annual basis overrides the frequency here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuoteConventions {
    /// Quoting compounding frequency override.
    pub frequency: Option<Frequency>,
    /// Day count override for yield time fractions.
    pub day_count: Option<DayCountConvention>,
}

impl QuoteConventions {
    /// Uses the bond's own conventions.
    #[must_use]
    pub fn bond_defaults() -> Self {
        Self::default()
    }

    /// Overrides the quoting frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Overrides the yield day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.day_count = Some(day_count);
        self
    }

    /// Resolves the quoting frequency for a bond frequency.
    #[must_use]
    pub fn quoting_frequency(&self, bond_frequency: Frequency) -> Frequency {
        self.frequency.unwrap_or(bond_frequency)
    }
}

/// Numerical parameters for defaultable pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricerParams {
    /// Quadrature steps per year for the default-loss integral.
    pub loss_steps: u32,
}

impl Default for PricerParams {
    fn default() -> Self {
        Self { loss_steps: 12 }
    }
}

impl PricerParams {
    /// Sets the loss-integration steps per year (floored at 1).
    #[must_use]
    pub fn with_loss_steps(mut self, loss_steps: u32) -> Self {
        self.loss_steps = loss_steps.max(1);
        self
    }
}

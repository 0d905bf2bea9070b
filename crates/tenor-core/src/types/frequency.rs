//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment frequency for coupon bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year) - most common for US bonds
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Zero coupon (no periodic payments)
    Zero,
}

impl Frequency {
    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Zero => 0,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
            Frequency::Zero => 0,
        }
    }

    /// Returns true if this is a zero coupon (no periodic payments).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Frequency::Zero)
    }

    /// Returns the compounding frequency used when quoting yields for
    /// bonds with this payment frequency.
    ///
    /// Zero coupon bonds quote with semi-annual compounding by market
    /// convention.
    #[must_use]
    pub fn quoting_periods(&self) -> u32 {
        match self {
            Frequency::Zero => 2,
            _ => self.periods_per_year(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Zero => "Zero Coupon",
        };
        write!(f, "{name}")
    }
}

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Annual compounding (1x per year)
    Annual,
    /// Semi-annual compounding (2x per year)
    #[default]
    SemiAnnual,
    /// Quarterly compounding (4x per year)
    Quarterly,
    /// Monthly compounding (12x per year)
    Monthly,
    /// Continuous compounding
    Continuous,
}

impl Compounding {
    /// Returns the number of compounding periods per year, or `None` for
    /// simple and continuous compounding.
    #[must_use]
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Compounding::Simple | Compounding::Continuous => None,
            Compounding::Annual => Some(1),
            Compounding::SemiAnnual => Some(2),
            Compounding::Quarterly => Some(4),
            Compounding::Monthly => Some(12),
        }
    }

    /// Returns the discount factor for the given rate over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        match self {
            Compounding::Simple => 1.0 / (1.0 + rate * t),
            Compounding::Continuous => (-rate * t).exp(),
            _ => {
                let n = f64::from(self.periods_per_year().unwrap_or(1));
                (1.0 + rate / n).powf(-n * t)
            }
        }
    }

    /// Returns the zero rate implied by a discount factor over `t` years.
    ///
    /// Returns 0.0 when `t` or the discount factor is non-positive.
    #[must_use]
    pub fn zero_rate(&self, df: f64, t: f64) -> f64 {
        if t <= 0.0 || df <= 0.0 {
            return 0.0;
        }
        match self {
            Compounding::Simple => (1.0 / df - 1.0) / t,
            Compounding::Continuous => -df.ln() / t,
            _ => {
                let n = f64::from(self.periods_per_year().unwrap_or(1));
                n * (df.powf(-1.0 / (n * t)) - 1.0)
            }
        }
    }

    /// Converts a rate quoted under `self` to the equivalent rate under
    /// `target`, matching discount factors at horizon `t`.
    #[must_use]
    pub fn convert_to(&self, rate: f64, target: Compounding, t: f64) -> f64 {
        let df = self.discount_factor(rate, t);
        target.zero_rate(df, t)
    }
}

impl From<Frequency> for Compounding {
    fn from(freq: Frequency) -> Self {
        match freq {
            Frequency::Annual => Compounding::Annual,
            Frequency::SemiAnnual | Frequency::Zero => Compounding::SemiAnnual,
            Frequency::Quarterly => Compounding::Quarterly,
            Frequency::Monthly => Compounding::Monthly,
        }
    }
}

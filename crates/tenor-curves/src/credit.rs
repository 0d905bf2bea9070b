//! Credit (hazard rate) curve for defaultable bond pricing.

use tenor_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// A piecewise-flat hazard rate curve with a recovery assumption.
///
/// The hazard pillar at tenor `t_i` applies over `(t_{i-1}, t_i]`; beyond
/// the last pillar the final hazard extends flat. Survival probabilities
/// follow from the integrated hazard:
///
/// ```text
/// Q(t) = exp(-∫₀ᵗ h(u) du)
/// ```
///
/// Used by the credit basis (parallel hazard bump) and PECS (flat CDS
/// replacement) conversions.
#[derive(Debug, Clone)]
pub struct CreditCurve {
    ref_date: Date,
    tenors: Vec<f64>,
    hazards: Vec<f64>,
    recovery: f64,
}

impl CreditCurve {
    /// Creates a credit curve from `(tenor in years, hazard rate)` pillars.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::ConstructionFailed` for an empty pillar set,
    /// non-increasing tenors, negative hazards, or recovery outside [0, 1).
    pub fn new(ref_date: Date, mut pillars: Vec<(f64, f64)>, recovery: f64) -> CurveResult<Self> {
        if !(0.0..1.0).contains(&recovery) {
            return Err(CurveError::construction(format!(
                "recovery {recovery} must be in [0, 1)"
            )));
        }
        if pillars.is_empty() {
            return Err(CurveError::construction("need at least one hazard pillar"));
        }

        pillars.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut tenors = Vec::with_capacity(pillars.len());
        let mut hazards = Vec::with_capacity(pillars.len());
        for (t, h) in pillars {
            if t <= 0.0 {
                return Err(CurveError::construction(format!(
                    "pillar tenor {t} must be positive"
                )));
            }
            if h < 0.0 {
                return Err(CurveError::construction(format!(
                    "hazard {h} at tenor {t} must be non-negative"
                )));
            }
            if let Some(&prev) = tenors.last() {
                if t <= prev {
                    return Err(CurveError::construction(format!(
                        "duplicate or non-increasing pillar tenor {t}"
                    )));
                }
            }
            tenors.push(t);
            hazards.push(h);
        }

        Ok(Self {
            ref_date,
            tenors,
            hazards,
            recovery,
        })
    }

    /// Creates a flat curve from a CDS spread quote.
    ///
    /// Under the credit-triangle approximation the flat hazard is
    /// `spread / (1 - recovery)`.
    pub fn flat_from_cds(ref_date: Date, cds_spread: f64, recovery: f64) -> CurveResult<Self> {
        let hazard = cds_spread / (1.0 - recovery);
        Self::new(ref_date, vec![(30.0, hazard.max(0.0))], recovery)
    }

    /// Returns the curve's reference date.
    #[must_use]
    pub fn reference_date(&self) -> Date {
        self.ref_date
    }

    /// Returns the recovery rate assumption.
    #[must_use]
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    /// Returns the integrated hazard `∫₀ᵗ h(u) du`.
    fn integrated_hazard(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut prev = 0.0;

        for (&pillar, &hazard) in self.tenors.iter().zip(&self.hazards) {
            if t <= pillar {
                total += hazard * (t - prev);
                return total;
            }
            total += hazard * (pillar - prev);
            prev = pillar;
        }

        // Flat continuation past the last pillar
        total + self.hazards.last().copied().unwrap_or(0.0) * (t - prev)
    }

    /// Returns the survival probability to time `t`.
    #[must_use]
    pub fn survival_probability(&self, t: f64) -> f64 {
        (-self.integrated_hazard(t)).exp()
    }

    /// Returns the probability of default within `(t1, t2]`.
    #[must_use]
    pub fn default_probability(&self, t1: f64, t2: f64) -> f64 {
        if t2 <= t1 {
            return 0.0;
        }
        (self.survival_probability(t1) - self.survival_probability(t2)).max(0.0)
    }

    /// Returns a copy with every hazard pillar shifted by `dh`.
    ///
    /// Bumped hazards are floored at zero. This is the kernel of the credit
    /// basis conversion, where the bump is expressed in spread terms as
    /// `dh = spread_shift / (1 - recovery)`.
    #[must_use]
    pub fn with_hazard_bump(&self, dh: f64) -> Self {
        let mut bumped = self.clone();
        for h in &mut bumped.hazards {
            *h = (*h + dh).max(0.0);
        }
        bumped
    }
}

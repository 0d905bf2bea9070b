//! Credit measures: defaultable pricing, credit basis, PECS.
//!
//! The defaultable PV survival-weights the promised flows and adds a
//! recovery leg integrated by discrete quadrature:
//!
//! ```text
//! PV = Σ CF_i · DF(t_i) · Q(t_i)
//!    + R · 100 · Σ_j DF(t_j^mid) · (Q(t_{j-1}) − Q(t_j))
//! ```
//!
//! with `PricerParams.loss_steps` quadrature steps per year out to the
//! work-out. Credit basis bumps the market hazard curve in parallel until
//! the defaultable PV matches the dirty price; PECS replaces the curve
//! with a flat one at hazard `s/(1−R)` instead.

use tenor_core::types::Date;
use tenor_curves::{CreditCurve, Curve};
use tenor_math::solvers::{brent, expand_bracket, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::measure::PricerParams;
use crate::pricing::{ensure_finite, ScheduledFlows};

/// Prices defaultable flows on a discount curve plus a credit curve.
#[derive(Clone, Copy)]
pub struct RiskyBondPricer<'a> {
    discount: &'a dyn Curve,
    params: PricerParams,
    config: SolverConfig,
}

impl<'a> RiskyBondPricer<'a> {
    /// Creates a pricer.
    #[must_use]
    pub fn new(discount: &'a dyn Curve, params: PricerParams) -> Self {
        Self {
            discount,
            params,
            config: SolverConfig::default(),
        }
    }

    /// Overrides the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Defaultable dirty PV of the flows under a credit curve.
    pub fn pv(&self, flows: &ScheduledFlows, credit: &CreditCurve) -> AnalyticsResult<f64> {
        let mut pv = 0.0;
        for (t, amount) in flows.iter() {
            pv += amount * self.discount.discount_factor(t)? * credit.survival_probability(t);
        }

        // Recovery leg via discrete quadrature over [0, t_workout]
        let horizon = flows.final_time();
        let steps = ((f64::from(self.params.loss_steps) * horizon).ceil() as usize).max(1);
        let dt = horizon / steps as f64;
        let recovery_amount = credit.recovery() * 100.0;

        for j in 1..=steps {
            let t0 = dt * (j - 1) as f64;
            let t1 = dt * j as f64;
            let mid = 0.5 * (t0 + t1);
            let dq = credit.default_probability(t0, t1);
            pv += recovery_amount * self.discount.discount_factor(mid)? * dq;
        }

        ensure_finite(pv, "defaultable present value")
    }

    /// Defaultable PV with a parallel bump (in spread terms, decimal)
    /// applied to the hazard curve.
    pub fn pv_with_basis(
        &self,
        flows: &ScheduledFlows,
        credit: &CreditCurve,
        basis: f64,
    ) -> AnalyticsResult<f64> {
        let dh = basis / (1.0 - credit.recovery());
        self.pv(flows, &credit.with_hazard_bump(dh))
    }

    /// Solves the credit basis (decimal) matching a dirty price.
    pub fn credit_basis(
        &self,
        flows: &ScheduledFlows,
        credit: &CreditCurve,
        dirty: f64,
    ) -> AnalyticsResult<f64> {
        let objective = |b: f64| {
            self.pv_with_basis(flows, credit, b)
                .map(|pv| pv - dirty)
                .unwrap_or(f64::NAN)
        };
        let (a, b) = expand_bracket(objective, -0.10, 0.30, 40)?;
        let result = brent(objective, a, b, &self.config)?;
        ensure_finite(result.root, "credit basis solve")
    }

    /// Defaultable PV under a flat CDS curve at spread `s` (decimal).
    pub fn pv_with_pecs(
        &self,
        flows: &ScheduledFlows,
        recovery: f64,
        ref_date: Date,
        s: f64,
    ) -> AnalyticsResult<f64> {
        let flat = CreditCurve::flat_from_cds(ref_date, s, recovery)?;
        self.pv(flows, &flat)
    }

    /// Solves the flat CDS spread (decimal, non-negative) repricing the
    /// bond.
    ///
    /// # Errors
    ///
    /// A dirty price above the default-free PV admits no non-negative
    /// spread and reports `InvalidInput`.
    pub fn pecs(
        &self,
        flows: &ScheduledFlows,
        recovery: f64,
        ref_date: Date,
        dirty: f64,
    ) -> AnalyticsResult<f64> {
        let risk_free = self.pv_with_pecs(flows, recovery, ref_date, 0.0)?;
        if dirty > risk_free {
            return Err(AnalyticsError::input(format!(
                "dirty price {dirty:.6} exceeds default-free value {risk_free:.6}; \
                 PECS is undefined"
            )));
        }

        let objective = |s: f64| {
            self.pv_with_pecs(flows, recovery, ref_date, s)
                .map(|pv| pv - dirty)
                .unwrap_or(f64::NAN)
        };
        let (a, b) = expand_bracket(objective, 0.0, 0.25, 40)?;
        let result = brent(objective, a, b, &self.config)?;
        ensure_finite(result.root.max(0.0), "PECS solve")
    }
}

//! Option-adjusted spread.
//!
//! The constant spread under periodic compounding at the quoting
//! frequency,
//!
//! ```text
//! dirty = Σ CF_i · DF(t_i) · (1 + oas/f)^(-f·t_i)
//! ```
//!
//! Cash flows are taken to the horizon's work-out, so the optionality
//! adjustment enters through exercise resolution rather than a lattice
//! model.

use tenor_curves::{Curve, SpreadCompounding};
use tenor_math::solvers::SolverConfig;

use crate::error::AnalyticsResult;
use crate::pricing::ScheduledFlows;

use super::{pv_with_spread, solve_discounting_spread};

/// OAS calculator over a discount curve.
#[derive(Clone, Copy)]
pub struct OasCalculator<'a> {
    curve: &'a dyn Curve,
    periods: u32,
    config: SolverConfig,
}

impl<'a> OasCalculator<'a> {
    /// Creates a calculator compounding at `periods` per year.
    #[must_use]
    pub fn new(curve: &'a dyn Curve, periods: u32) -> Self {
        Self {
            curve,
            periods: periods.max(1),
            config: SolverConfig::default(),
        }
    }

    /// Overrides the solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Dirty price for a given OAS (decimal, not bps).
    pub fn price(&self, flows: &ScheduledFlows, oas: f64) -> AnalyticsResult<f64> {
        pv_with_spread(
            self.curve,
            flows,
            oas,
            SpreadCompounding::Periodic(self.periods),
        )
    }

    /// Solves the OAS (decimal) matching a dirty price.
    pub fn solve(&self, flows: &ScheduledFlows, dirty: f64) -> AnalyticsResult<f64> {
        solve_discounting_spread(
            self.curve,
            flows,
            dirty,
            SpreadCompounding::Periodic(self.periods),
            &self.config,
        )
    }
}

//! The conversion engine: any measure to any measure through the clean
//! price hub.
//!
//! A conversion runs in three steps:
//!
//! 1. resolve the horizon to a concrete work-out,
//! 2. convert the input quote to a clean price under that work-out,
//! 3. convert the clean price to the target measure.
//!
//! Step 2 and 3 are each a per-measure mapping, so the full 13 × 13
//! conversion surface costs 13 forward maps and 13 inverse maps instead of
//! one method per pair.

use rust_decimal::prelude::ToPrimitive;

use tenor_bonds::Bond;
use tenor_core::types::{Compounding, Date, Horizon, ValuationParams, WorkoutInfo};
use tenor_curves::MarketEnv;
use tenor_math::solvers::SolverConfig;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::measure::{Measure, PricerParams, Quote, QuoteConventions};
use crate::pricing::{ensure_finite, ScheduledFlows};
use crate::risk::{risk_measures, RiskMeasures};
use crate::spreads::{
    curve_spreads, AssetSwapCalculator, OasCalculator, RiskyBondPricer, ZSpreadCalculator,
};
use crate::workout::resolve_workout;
use crate::yields::{price_from_yield, yield_from_price};

const BPS: f64 = 10_000.0;

/// Converts quotes between measures for one bond in one market
/// environment.
///
/// # Example
///
/// ```rust,ignore
/// let engine = ConversionEngine::new(&bond, &market, ValuationParams::spot(today));
/// let z = engine.convert(Quote::price(98.25), Measure::ZSpread, Horizon::Maturity)?;
/// ```
pub struct ConversionEngine<'a> {
    bond: &'a dyn Bond,
    market: &'a MarketEnv,
    params: ValuationParams,
    conventions: QuoteConventions,
    pricer: PricerParams,
    solver: SolverConfig,
}

impl<'a> ConversionEngine<'a> {
    /// Creates an engine with default conventions and solver settings.
    #[must_use]
    pub fn new(bond: &'a dyn Bond, market: &'a MarketEnv, params: ValuationParams) -> Self {
        Self {
            bond,
            market,
            params,
            conventions: QuoteConventions::default(),
            pricer: PricerParams::default(),
            solver: SolverConfig::default(),
        }
    }

    /// Overrides the yield quoting conventions.
    #[must_use]
    pub fn with_conventions(mut self, conventions: QuoteConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Overrides the defaultable-pricing parameters.
    #[must_use]
    pub fn with_pricer_params(mut self, pricer: PricerParams) -> Self {
        self.pricer = pricer;
        self
    }

    /// Overrides the solver configuration.
    #[must_use]
    pub fn with_solver_config(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the settlement date in effect.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.params.settlement_date()
    }

    fn quoting_periods(&self) -> u32 {
        self.conventions
            .quoting_frequency(self.bond.frequency())
            .quoting_periods()
    }

    fn quoting_compounding(&self) -> Compounding {
        Compounding::from(self.conventions.quoting_frequency(self.bond.frequency()))
    }

    fn accrued(&self) -> f64 {
        self.bond
            .accrued_interest(self.settlement())
            .to_f64()
            .unwrap_or(0.0)
    }

    fn check_settlement(&self) -> AnalyticsResult<()> {
        let settlement = self.settlement();
        if self.bond.has_matured(settlement) {
            return Err(AnalyticsError::settlement(
                settlement,
                format!("bond matured {}", self.bond.maturity()),
            ));
        }
        Ok(())
    }

    /// Converts a quote to the target measure at the given horizon.
    ///
    /// Returns the value in the target measure's units (percent of par,
    /// decimal yield, or basis points).
    ///
    /// # Errors
    ///
    /// Any pricing, solver, or missing-curve failure; the result is
    /// guaranteed finite.
    pub fn convert(&self, quote: Quote, to: Measure, horizon: Horizon) -> AnalyticsResult<f64> {
        self.check_settlement()?;

        let workout = self.resolve(quote, horizon)?;
        let clean = self.clean_for_workout(quote, &workout)?;
        let result = if to == Measure::Price {
            clean
        } else {
            self.measure_from_clean(clean, to, &workout)?
        };

        log::debug!(
            "convert {} -> {}: {:.6} (work-out {})",
            quote.measure,
            to,
            result,
            workout
        );
        ensure_finite(result, "conversion result")
    }

    /// Resolves the horizon for a quote (exposed for reporting).
    pub fn resolve(&self, quote: Quote, horizon: Horizon) -> AnalyticsResult<WorkoutInfo> {
        resolve_workout(
            self.bond,
            horizon,
            self.settlement(),
            self.quoting_periods(),
            &self.solver,
            |candidate| self.clean_for_workout(quote, candidate),
        )
    }

    /// Computes every measure from one input quote.
    ///
    /// Measures the market environment cannot support (e.g. credit
    /// measures without a credit curve) are reported as skipped rather
    /// than failing the whole report.
    pub fn full_report(&self, quote: Quote, horizon: Horizon) -> AnalyticsResult<MeasureReport> {
        self.check_settlement()?;

        let workout = self.resolve(quote, horizon)?;
        let clean = self.clean_for_workout(quote, &workout)?;

        let mut values = Vec::with_capacity(Measure::ALL.len());
        let mut skipped = Vec::new();
        for measure in Measure::ALL {
            let result = if measure == Measure::Price {
                Ok(clean)
            } else {
                self.measure_from_clean(clean, measure, &workout)
            };
            match result {
                Ok(v) if v.is_finite() => values.push(Quote::new(measure, v)),
                Ok(_) => skipped.push((measure, "non-finite result".to_string())),
                Err(e) => skipped.push((measure, e.to_string())),
            }
        }

        let flows = self.yield_flows(&workout)?;
        let y = yield_from_price(
            &flows,
            clean + self.accrued(),
            self.quoting_periods(),
            &self.solver,
        )?;
        let risk = risk_measures(&flows, y, self.quoting_periods())?;

        Ok(MeasureReport {
            workout,
            values,
            skipped,
            risk,
        })
    }

    /// Computes the risk sensitivities at the quote's implied yield.
    pub fn risk(&self, quote: Quote, horizon: Horizon) -> AnalyticsResult<RiskMeasures> {
        self.check_settlement()?;
        let workout = self.resolve(quote, horizon)?;
        let clean = self.clean_for_workout(quote, &workout)?;
        let flows = self.yield_flows(&workout)?;
        let y = yield_from_price(
            &flows,
            clean + self.accrued(),
            self.quoting_periods(),
            &self.solver,
        )?;
        risk_measures(&flows, y, self.quoting_periods())
    }

    fn workout_flows(&self, workout: &WorkoutInfo) -> AnalyticsResult<ScheduledFlows> {
        ScheduledFlows::from_cash_flows(
            &self.bond.cash_flows_to_workout(self.settlement(), workout),
            self.settlement(),
        )
    }

    /// Flows with times on the yield quoting basis. Only differs from
    /// [`Self::workout_flows`] when a day count override is set.
    fn yield_flows(&self, workout: &WorkoutInfo) -> AnalyticsResult<ScheduledFlows> {
        let flows = self.bond.cash_flows_to_workout(self.settlement(), workout);
        match self.conventions.day_count {
            Some(day_count) => {
                ScheduledFlows::from_cash_flows_with(&flows, self.settlement(), day_count)
            }
            None => ScheduledFlows::from_cash_flows(&flows, self.settlement()),
        }
    }

    fn coupon_times(&self, flows: &ScheduledFlows) -> Vec<f64> {
        // The redemption flow shares the final coupon time, so the coupon
        // time grid is every distinct flow time
        let mut times: Vec<f64> = flows.times().to_vec();
        times.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
        times
    }

    fn t_workout(&self, workout: &WorkoutInfo) -> f64 {
        self.settlement().years_until(&workout.date)
    }

    fn curve_implied_yield(&self, workout: &WorkoutInfo) -> AnalyticsResult<f64> {
        let model_dirty = self
            .workout_flows(workout)?
            .pv_on_curve(self.market.discount())?;
        yield_from_price(
            &self.yield_flows(workout)?,
            model_dirty,
            self.quoting_periods(),
            &self.solver,
        )
    }

    fn credit_recovery(&self) -> AnalyticsResult<f64> {
        Ok(self
            .market
            .credit()
            .map_err(|e| AnalyticsError::unavailable("credit measure", e.to_string()))?
            .recovery())
    }

    /// Input quote to clean price under a fixed work-out.
    fn clean_for_workout(&self, quote: Quote, workout: &WorkoutInfo) -> AnalyticsResult<f64> {
        if quote.measure == Measure::Price {
            if quote.value <= 0.0 || !quote.value.is_finite() {
                return Err(AnalyticsError::input(format!(
                    "price {} must be positive and finite",
                    quote.value
                )));
            }
            return Ok(quote.value);
        }

        let flows = self.workout_flows(workout)?;
        let accrued = self.accrued();
        let periods = self.quoting_periods();
        let discount = self.market.discount();

        let dirty = match quote.measure {
            Measure::Price => unreachable!("handled above"),
            Measure::Yield => price_from_yield(&self.yield_flows(workout)?, quote.value, periods),
            Measure::ZSpread => {
                ZSpreadCalculator::new(discount)
                    .with_config(self.solver)
                    .price(&flows, quote.value / BPS)?
            }
            Measure::Oas => {
                OasCalculator::new(discount, periods)
                    .with_config(self.solver)
                    .price(&flows, quote.value / BPS)?
            }
            Measure::GSpread
            | Measure::ISpread
            | Measure::TsySpread
            | Measure::YieldSpread
            | Measure::DiscountMargin => {
                let reference = curve_spreads::reference_rate(
                    quote.measure,
                    self.market,
                    self.t_workout(workout),
                    self.quoting_compounding(),
                )?;
                price_from_yield(
                    &self.yield_flows(workout)?,
                    reference + quote.value / BPS,
                    periods,
                )
            }
            Measure::BondBasis => {
                let y_model = self.curve_implied_yield(workout)?;
                price_from_yield(&self.yield_flows(workout)?, y_model + quote.value / BPS, periods)
            }
            Measure::AssetSwapSpread => {
                let calc = AssetSwapCalculator::new(discount);
                let coupon = self.bond.coupon_rate().to_f64().unwrap_or(0.0);
                let clean = calc.price_from_spread(
                    coupon,
                    quote.value / BPS,
                    &self.coupon_times(&flows),
                    self.bond.frequency().quoting_periods(),
                    self.t_workout(workout),
                )?;
                return ensure_finite(clean, "asset swap price");
            }
            Measure::CreditBasis => {
                let credit = self
                    .market
                    .credit()
                    .map_err(|e| AnalyticsError::unavailable("Credit Basis", e.to_string()))?;
                RiskyBondPricer::new(discount, self.pricer)
                    .with_config(self.solver)
                    .pv_with_basis(&flows, credit, quote.value / BPS)?
            }
            Measure::Pecs => {
                let recovery = self.credit_recovery()?;
                RiskyBondPricer::new(discount, self.pricer)
                    .with_config(self.solver)
                    .pv_with_pecs(
                        &flows,
                        recovery,
                        self.market.reference_date(),
                        quote.value / BPS,
                    )?
            }
        };

        ensure_finite(dirty - accrued, "clean price")
    }

    /// Clean price to the target measure under a fixed work-out.
    fn measure_from_clean(
        &self,
        clean: f64,
        to: Measure,
        workout: &WorkoutInfo,
    ) -> AnalyticsResult<f64> {
        let flows = self.workout_flows(workout)?;
        let dirty = clean + self.accrued();
        let periods = self.quoting_periods();
        let discount = self.market.discount();

        match to {
            Measure::Price => Ok(clean),
            Measure::Yield => {
                yield_from_price(&self.yield_flows(workout)?, dirty, periods, &self.solver)
            }
            Measure::ZSpread => {
                let z = ZSpreadCalculator::new(discount)
                    .with_config(self.solver)
                    .solve(&flows, dirty)?;
                Ok(z * BPS)
            }
            Measure::Oas => {
                let oas = OasCalculator::new(discount, periods)
                    .with_config(self.solver)
                    .solve(&flows, dirty)?;
                Ok(oas * BPS)
            }
            Measure::GSpread
            | Measure::ISpread
            | Measure::TsySpread
            | Measure::YieldSpread
            | Measure::DiscountMargin => {
                let y = yield_from_price(&self.yield_flows(workout)?, dirty, periods, &self.solver)?;
                let reference = curve_spreads::reference_rate(
                    to,
                    self.market,
                    self.t_workout(workout),
                    self.quoting_compounding(),
                )?;
                Ok((y - reference) * BPS)
            }
            Measure::BondBasis => {
                let y = yield_from_price(&self.yield_flows(workout)?, dirty, periods, &self.solver)?;
                let y_model = self.curve_implied_yield(workout)?;
                Ok((y - y_model) * BPS)
            }
            Measure::AssetSwapSpread => {
                let calc = AssetSwapCalculator::new(discount);
                let coupon = self.bond.coupon_rate().to_f64().unwrap_or(0.0);
                let asw = calc.spread_from_price(
                    coupon,
                    clean,
                    &self.coupon_times(&flows),
                    self.bond.frequency().quoting_periods(),
                    self.t_workout(workout),
                )?;
                Ok(asw * BPS)
            }
            Measure::CreditBasis => {
                let credit = self
                    .market
                    .credit()
                    .map_err(|e| AnalyticsError::unavailable("Credit Basis", e.to_string()))?;
                let basis = RiskyBondPricer::new(discount, self.pricer)
                    .with_config(self.solver)
                    .credit_basis(&flows, credit, dirty)?;
                Ok(basis * BPS)
            }
            Measure::Pecs => {
                let recovery = self.credit_recovery()?;
                let s = RiskyBondPricer::new(discount, self.pricer)
                    .with_config(self.solver)
                    .pecs(&flows, recovery, self.market.reference_date(), dirty)?;
                Ok(s * BPS)
            }
        }
    }
}

/// Every measure computed from one input quote, plus risk sensitivities.
#[derive(Debug, Clone)]
pub struct MeasureReport {
    /// The resolved work-out the measures were computed at.
    pub workout: WorkoutInfo,
    /// Successfully computed measures, in [`Measure::ALL`] order.
    pub values: Vec<Quote>,
    /// Measures that could not be computed, with the reason.
    pub skipped: Vec<(Measure, String)>,
    /// Risk sensitivities at the implied yield.
    pub risk: RiskMeasures,
}

impl MeasureReport {
    /// Looks up a computed measure.
    #[must_use]
    pub fn get(&self, measure: Measure) -> Option<f64> {
        self.values
            .iter()
            .find(|q| q.measure == measure)
            .map(|q| q.value)
    }
}

//! Risk calculator bundling schedule, rate source and configuration.

use super::effective::EffectiveRisk;
use super::flat::RiskMetrics;
use super::key_rate::KeyRateDurations;
use super::{Convexity, Duration};
use crate::cashflows::Schedule;
use crate::config::{ApproximationBasis, RiskConfig};
use crate::error::AnalyticsResult;
use crate::pricing::{present_value, price, PricingResult, RateSource};
use crate::terms::BondTerms;
use crate::types::{Compounding, FlatYield};

/// Computes every risk measure for one bond under one rate source.
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::prelude::*;
///
/// let terms = BondTerms::new(1000.0, 0.06, 5.0, 2, Compounding::SEMI_ANNUAL).unwrap();
/// let calc = RiskCalculator::new(&terms, RateSource::flat(0.06), RiskConfig::default()).unwrap();
///
/// let metrics = calc.flat_metrics().unwrap();
/// assert!((metrics.modified.as_f64() - 4.2651).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    schedule: Schedule,
    source: RateSource,
    compounding: Compounding,
    maturity: f64,
    config: RiskConfig,
}

impl RiskCalculator {
    /// Builds the schedule for `terms` under `config.stub`.
    pub fn new(terms: &BondTerms, source: RateSource, config: RiskConfig) -> AnalyticsResult<Self> {
        config.validate()?;
        let schedule = Schedule::generate(terms, config.stub)?;
        Ok(Self {
            schedule,
            source,
            compounding: terms.compounding,
            maturity: terms.maturity,
            config,
        })
    }

    /// Returns the schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the rate source.
    pub fn source(&self) -> &RateSource {
        &self.source
    }

    /// Returns the compounding convention.
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Flat yield used for flat-yield measures: the rate itself, or the curve
    /// rate at maturity.
    pub fn flat_yield(&self) -> FlatYield {
        self.source.flat_yield_at(self.maturity, self.compounding)
    }

    /// Prices the bond with per-period detail.
    pub fn pricing(&self) -> AnalyticsResult<PricingResult> {
        price(&self.schedule, &self.source, self.compounding)
    }

    /// Price under the rate source.
    pub fn price(&self) -> AnalyticsResult<f64> {
        present_value(&self.schedule, &self.source, self.compounding)
    }

    /// Macaulay, modified duration and convexity.
    ///
    /// The weights are the present values under the rate source, so on a
    /// curve they are curve-discounted; [`Self::flat_yield`] only enters
    /// through the `1 + j/m` terms.
    pub fn flat_metrics(&self) -> AnalyticsResult<RiskMetrics> {
        Ok(RiskMetrics::from_pricing(&self.pricing()?, self.flat_yield()))
    }

    /// Effective duration and convexity under a parallel bump.
    pub fn effective(&self) -> AnalyticsResult<EffectiveRisk> {
        EffectiveRisk::compute(
            &self.schedule,
            &self.source,
            self.compounding,
            self.config.bump_bps,
        )
    }

    /// Key-rate durations per pillar.
    pub fn key_rate_durations(&self) -> AnalyticsResult<KeyRateDurations> {
        KeyRateDurations::compute(&self.schedule, &self.source, self.compounding, &self.config)
    }

    /// Duration and convexity selected by `config.approximation`.
    pub fn approximation_measures(&self) -> AnalyticsResult<(Duration, Convexity)> {
        match self.config.approximation {
            ApproximationBasis::FlatYield => {
                let m = self.flat_metrics()?;
                Ok((m.modified, m.convexity))
            }
            ApproximationBasis::Effective => {
                let e = self.effective()?;
                Ok((e.duration, e.convexity))
            }
        }
    }
}

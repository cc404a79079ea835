//! Scenario repricing and Taylor approximations.

use serde::{Deserialize, Serialize};

use super::catalog::{ScenarioCatalog, ScenarioDefinition};
use crate::error::AnalyticsResult;
use crate::parallel::maybe_parallel_map;
use crate::pricing::present_value;
use crate::risk::{first_order_estimate, second_order_estimate, Convexity, Duration, RiskCalculator};
use crate::types::Compounding;

/// Outcome of one scenario.
///
/// Estimates and their errors are `None` when the scenario is not a uniform
/// shift under the base compounding convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario label.
    pub label: String,
    /// Shock description.
    pub shock: String,
    /// Uniform shift in basis points, if the shock is one.
    pub shift_bps: Option<f64>,
    /// Compounding used to reprice.
    pub compounding: Compounding,
    /// Repriced value.
    pub price: f64,
    /// `(P/P₀ − 1)·100`.
    pub price_change_pct: f64,
    /// `P₀(1 − D·Δy)`.
    pub first_order_estimate: Option<f64>,
    /// `P₀(1 − D·Δy + ½C·Δy²)`.
    pub second_order_estimate: Option<f64>,
    /// `P − first-order estimate`.
    pub first_order_error: Option<f64>,
    /// `P − second-order estimate`.
    pub second_order_error: Option<f64>,
    /// First-order error relative to `P`.
    pub first_order_relative_error: Option<f64>,
    /// Second-order error relative to `P`.
    pub second_order_relative_error: Option<f64>,
}

fn relative_error(actual: f64, estimate: f64) -> f64 {
    if actual == 0.0 {
        0.0
    } else {
        (actual - estimate) / actual
    }
}

/// Reprices a bond under a catalog of scenarios.
#[derive(Debug)]
pub struct ScenarioRunner<'a> {
    calculator: &'a RiskCalculator,
    base_price: f64,
    duration: Duration,
    convexity: Convexity,
}

impl<'a> ScenarioRunner<'a> {
    /// Prices the base case and computes the approximation measures once.
    pub fn new(calculator: &'a RiskCalculator) -> AnalyticsResult<Self> {
        let base_price = calculator.price()?;
        let (duration, convexity) = calculator.approximation_measures()?;
        Ok(Self {
            calculator,
            base_price,
            duration,
            convexity,
        })
    }

    /// Base price `P₀`.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Duration used for estimates.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Convexity used for estimates.
    pub fn convexity(&self) -> Convexity {
        self.convexity
    }

    /// Runs every scenario of `catalog`, preserving catalog order.
    pub fn run(&self, catalog: &ScenarioCatalog) -> AnalyticsResult<Vec<ScenarioResult>> {
        let definitions = catalog.definitions();
        log::debug!("running {} scenarios", definitions.len());

        maybe_parallel_map(&definitions, self.calculator.config(), |d| self.evaluate(d))
            .into_iter()
            .collect()
    }

    /// Reprices one scenario.
    pub fn evaluate(&self, definition: &ScenarioDefinition) -> AnalyticsResult<ScenarioResult> {
        let calc = self.calculator;
        let base_compounding = calc.compounding();
        let compounding = definition.shock.compounding(base_compounding);

        let source = definition.shock.apply(calc.source())?;
        let price = present_value(calc.schedule(), &source, compounding)?;
        let price_change_pct = if self.base_price == 0.0 {
            0.0
        } else {
            (price / self.base_price - 1.0) * 100.0
        };

        let shift_bps = definition.shock.uniform_shift_bps();
        let dy = shift_bps
            .filter(|_| compounding == base_compounding)
            .map(|bps| bps / 10_000.0);

        let first = dy.map(|dy| first_order_estimate(self.base_price, self.duration, dy));
        let second =
            dy.map(|dy| second_order_estimate(self.base_price, self.duration, self.convexity, dy));

        log::trace!("{}: price {price:.6} ({price_change_pct:+.4}%)", definition.label);

        Ok(ScenarioResult {
            label: definition.label.clone(),
            shock: definition.shock.to_string(),
            shift_bps,
            compounding,
            price,
            price_change_pct,
            first_order_estimate: first,
            second_order_estimate: second,
            first_order_error: first.map(|e| price - e),
            second_order_error: second.map(|e| price - e),
            first_order_relative_error: first.map(|e| relative_error(price, e)),
            second_order_relative_error: second.map(|e| relative_error(price, e)),
        })
    }
}

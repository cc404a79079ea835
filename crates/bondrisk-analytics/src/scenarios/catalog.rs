//! Scenario definitions and the default catalog.

use std::fmt;

use bondrisk_curves::bumping::{ParallelBump, TermStructureShock};
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;
use crate::pricing::RateSource;
use crate::types::Compounding;

/// A single shock applied to the base rate source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioShock {
    /// No change.
    Base,
    /// Every rate shifted by the same amount.
    Parallel {
        /// Shift in basis points.
        shift_bps: f64,
    },
    /// Tenor-dependent twist.
    TermStructure {
        /// The twist.
        shock: TermStructureShock,
    },
    /// Same nominal rates, different compounding convention.
    Compounding {
        /// Compounding periods per year.
        periods_per_year: Compounding,
    },
}

impl ScenarioShock {
    /// Size of the uniform rate change in basis points, if the shock is one.
    ///
    /// A compounding change leaves rates untouched and reports zero; twists
    /// have no single size.
    pub fn uniform_shift_bps(&self) -> Option<f64> {
        match self {
            Self::Base | Self::Compounding { .. } => Some(0.0),
            Self::Parallel { shift_bps } => Some(*shift_bps),
            Self::TermStructure { .. } => None,
        }
    }

    /// Compounding used to reprice under this shock.
    pub fn compounding(&self, base: Compounding) -> Compounding {
        match self {
            Self::Compounding { periods_per_year } => *periods_per_year,
            _ => base,
        }
    }

    /// Builds the shocked rate source.
    ///
    /// A twist on a flat source is applied to a flat curve on the default
    /// pillar grid.
    pub fn apply(&self, base: &RateSource) -> AnalyticsResult<RateSource> {
        match self {
            Self::Base | Self::Compounding { .. } => Ok(base.clone()),
            Self::Parallel { shift_bps } => {
                base.shifted(ParallelBump::new(*shift_bps).shift_decimal())
            }
            Self::TermStructure { shock } => {
                let curve = shock.apply(&base.to_curve()?)?;
                Ok(RateSource::curve(curve))
            }
        }
    }
}

impl fmt::Display for ScenarioShock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "no shift"),
            Self::Parallel { shift_bps } => write!(f, "{}", ParallelBump::new(*shift_bps).description()),
            Self::TermStructure { shock } => write!(f, "{}", shock.description()),
            Self::Compounding { periods_per_year } => {
                write!(f, "m={} ({periods_per_year})", periods_per_year.periods_per_year())
            }
        }
    }
}

/// A labelled scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDefinition {
    /// Display label.
    pub label: String,
    /// Shock to apply.
    pub shock: ScenarioShock,
}

impl ScenarioDefinition {
    /// Creates a scenario.
    pub fn new(label: impl Into<String>, shock: ScenarioShock) -> Self {
        Self {
            label: label.into(),
            shock,
        }
    }

    /// Base case.
    #[must_use]
    pub fn base() -> Self {
        Self::new("Base", ScenarioShock::Base)
    }

    /// Parallel shift of `shift_bps`.
    #[must_use]
    pub fn parallel(shift_bps: f64) -> Self {
        Self::new(
            ParallelBump::new(shift_bps).description(),
            ScenarioShock::Parallel { shift_bps },
        )
    }

    /// Term-structure twist.
    pub fn twist(label: impl Into<String>, shock: TermStructureShock) -> Self {
        Self::new(label, ScenarioShock::TermStructure { shock })
    }

    /// Same nominal rates under `compounding`.
    #[must_use]
    pub fn compounding(compounding: Compounding) -> Self {
        Self::new(
            format!("Same nominal j, m={}", compounding.periods_per_year()),
            ScenarioShock::Compounding {
                periods_per_year: compounding,
            },
        )
    }
}

/// Configurable set of standard scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    /// Whether to include the unshocked base case.
    #[serde(default = "default_true")]
    pub include_base: bool,

    /// Parallel shifts in basis points.
    #[serde(default = "default_parallel_bps")]
    pub parallel_bps: Vec<f64>,

    /// Whether to include the steepener and flattener.
    #[serde(default = "default_true")]
    pub include_twists: bool,

    /// Steepener anchors and magnitudes.
    #[serde(default = "TermStructureShock::steepener")]
    pub steepener: TermStructureShock,

    /// Flattener anchors and magnitudes.
    #[serde(default = "TermStructureShock::flattener")]
    pub flattener: TermStructureShock,

    /// Alternative compounding conventions for the unshocked rates.
    #[serde(default = "default_alternative_compounding")]
    pub alternative_compounding: Vec<Compounding>,
}

fn default_true() -> bool {
    true
}

fn default_parallel_bps() -> Vec<f64> {
    vec![50.0, 100.0, -50.0, -100.0]
}

fn default_alternative_compounding() -> Vec<Compounding> {
    vec![Compounding::QUARTERLY, Compounding::ANNUAL]
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self {
            include_base: true,
            parallel_bps: default_parallel_bps(),
            include_twists: true,
            steepener: TermStructureShock::steepener(),
            flattener: TermStructureShock::flattener(),
            alternative_compounding: default_alternative_compounding(),
        }
    }
}

impl ScenarioCatalog {
    /// Expands the catalog into scenarios, in reporting order.
    pub fn definitions(&self) -> Vec<ScenarioDefinition> {
        let mut defs = Vec::new();
        if self.include_base {
            defs.push(ScenarioDefinition::base());
        }
        defs.extend(self.parallel_bps.iter().map(|&bps| ScenarioDefinition::parallel(bps)));
        if self.include_twists {
            defs.push(ScenarioDefinition::twist("Steepener", self.steepener));
            defs.push(ScenarioDefinition::twist("Flattener", self.flattener));
        }
        defs.extend(
            self.alternative_compounding
                .iter()
                .map(|&m| ScenarioDefinition::compounding(m)),
        );
        defs
    }
}

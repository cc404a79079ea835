//! Input document loading.
//!
//! A document describes one bond and the market it is valued in:
//!
//! ```toml
//! [bond]
//! face_value = 1000.0
//! coupon_rate = 0.06
//! maturity = 5.0
//! frequency = 2
//! compounding = 2
//!
//! [yield]
//! rate = 0.06
//!
//! [curve]
//! tenors = [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0]
//! rates = [0.050, 0.052, 0.055, 0.058, 0.060, 0.062, 0.063]
//!
//! [risk]
//! bump_bps = 1.0
//! stub = "include"
//!
//! [scenarios]
//! parallel_bps = [25.0, -25.0]
//! ```
//!
//! `[curve]`, `[risk]` and `[scenarios]` are optional. JSON documents use
//! the same keys.

use std::path::Path;

use bondrisk_analytics::prelude::*;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

/// The flat yield section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct YieldInput {
    /// Nominal annual rate as a decimal.
    pub rate: f64,
}

/// A parsed and validated input document.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    /// Contractual terms of the bond.
    pub bond: BondTerms,
    /// Flat yield, read from the `yield` key.
    #[serde(rename = "yield")]
    pub flat_yield: YieldInput,
    /// Optional zero curve; when present, pricing discounts off it.
    #[serde(default)]
    pub curve: Option<NominalCurve>,
    /// Bump sizes and key-rate settings.
    #[serde(default)]
    pub risk: RiskConfig,
    /// Shift and twist scenarios to evaluate.
    #[serde(default)]
    pub scenarios: ScenarioCatalog,
}

impl InputDocument {
    /// Reads a document, choosing the parser from the file extension.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let doc = match extension.as_str() {
            "toml" => Self::from_toml(&text)?,
            "json" => Self::from_json(&text)?,
            other => return Err(CliError::UnsupportedFormat(other.to_string())),
        };
        tracing::debug!(path = %path.display(), "loaded input document");
        Ok(doc)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(text: &str) -> CliResult<Self> {
        let doc: Self = toml::from_str(text).map_err(|e| CliError::Parse(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parses and validates a JSON document.
    pub fn from_json(text: &str) -> CliResult<Self> {
        let doc: Self = serde_json::from_str(text).map_err(|e| CliError::Parse(e.to_string()))?;
        doc.validate()?;
        Ok(doc)
    }

    fn validate(&self) -> CliResult<()> {
        self.bond.validate()?;
        self.risk.validate()?;
        if !self.flat_yield.rate.is_finite() {
            return Err(CliError::InvalidInput(format!(
                "yield rate must be finite, got {}",
                self.flat_yield.rate
            )));
        }
        for shock in [&self.scenarios.steepener, &self.scenarios.flattener] {
            shock.validate().map_err(AnalyticsError::from)?;
        }
        Ok(())
    }

    /// Discounting source: the curve when `use_curve`, else the flat yield.
    pub fn rate_source(&self, use_curve: bool) -> CliResult<RateSource> {
        if use_curve {
            let curve = self.curve.clone().ok_or(CliError::MissingCurve)?;
            Ok(RateSource::curve(curve))
        } else {
            Ok(RateSource::flat(self.flat_yield.rate))
        }
    }

    /// Builds a calculator for the bond under the chosen source.
    pub fn calculator(&self, use_curve: bool) -> CliResult<RiskCalculator> {
        let source = self.rate_source(use_curve)?;
        Ok(RiskCalculator::new(&self.bond, source, self.risk.clone())?)
    }
}

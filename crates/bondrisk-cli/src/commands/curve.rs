//! Curve command implementation.
//!
//! Displays the input curve at its pillars or at requested tenors.

use std::path::PathBuf;

use anyhow::Result;
use bondrisk_analytics::prelude::*;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::input::InputDocument;
use crate::output::{format_percent, print_header, print_json_value, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Input document (.toml or .json) with a [curve] section
    pub input: PathBuf,

    /// Tenor to query in years (repeatable). Defaults to the pillars.
    #[arg(short, long = "tenor")]
    pub tenors: Vec<f64>,
}

/// A curve rate with its discount factor under the bond's compounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Nominal rate at the tenor, as a decimal.
    pub rate: f64,
    /// Discount factor at the tenor.
    pub discount_factor: f64,
}

#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "DF")]
    discount_factor: String,
}

impl From<&CurvePoint> for CurveRow {
    fn from(p: &CurvePoint) -> Self {
        Self {
            tenor: format!("{:.2}Y", p.tenor),
            rate: format_percent(p.rate),
            discount_factor: format!("{:.8}", p.discount_factor),
        }
    }
}

/// Reads `curve` at each tenor, or at its pillars when `tenors` is empty.
pub fn curve_points(
    curve: &NominalCurve,
    tenors: &[f64],
    compounding: Compounding,
) -> Result<Vec<CurvePoint>, CliError> {
    let tenors = if tenors.is_empty() { curve.tenors() } else { tenors };

    tenors
        .iter()
        .map(|&tenor| {
            if !tenor.is_finite() || tenor < 0.0 {
                return Err(CliError::InvalidInput(format!(
                    "tenor must be a non-negative number of years, got {tenor}"
                )));
            }
            let rate = curve.rate_at(tenor);
            Ok(CurvePoint {
                tenor,
                rate,
                discount_factor: discount_factor(rate, compounding, tenor)?,
            })
        })
        .collect()
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let doc = InputDocument::load(&args.input)?;
    let curve = doc.curve.as_ref().ok_or(CliError::MissingCurve)?;
    let points = curve_points(curve, &args.tenors, doc.bond.compounding)?;

    match format {
        OutputFormat::Table => {
            print_header(&format!("Nominal Curve ({})", doc.bond.compounding));
            let rows: Vec<CurveRow> = points.iter().map(CurveRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Json => print_json_value(&points)?,
        OutputFormat::Csv => {
            let rows: Vec<CurveRow> = points.iter().map(CurveRow::from).collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for p in &points {
                println!("{}", p.rate);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> NominalCurve {
        NominalCurve::new(vec![1.0, 5.0, 10.0], vec![0.04, 0.05, 0.055]).unwrap()
    }

    #[test]
    fn test_points_default_to_pillars() {
        let points = curve_points(&curve(), &[], Compounding::SEMI_ANNUAL).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].tenor, 5.0);
        assert_relative_eq!(points[1].rate, 0.05);
    }

    #[test]
    fn test_points_interpolate_and_extend_flat() {
        let points = curve_points(&curve(), &[3.0, 0.25, 30.0], Compounding::ANNUAL).unwrap();
        assert_relative_eq!(points[0].rate, 0.045, epsilon = 1e-12);
        assert_relative_eq!(points[1].rate, 0.04);
        assert_relative_eq!(points[2].rate, 0.055);
        assert_relative_eq!(points[0].discount_factor, 1.045f64.powf(-3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_negative_tenor_rejected() {
        assert!(matches!(
            curve_points(&curve(), &[-1.0], Compounding::ANNUAL),
            Err(CliError::InvalidInput(_))
        ));
    }
}

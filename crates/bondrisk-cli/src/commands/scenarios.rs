//! Scenarios command implementation.
//!
//! Reprices the bond under every scenario of the catalog and reports the
//! duration/convexity approximation errors plus key-rate durations.

use std::path::PathBuf;

use anyhow::Result;
use bondrisk_analytics::prelude::*;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::input::InputDocument;
use crate::output::{format_optional, print_header, print_json_value, print_output};

/// Arguments for the scenarios command.
#[derive(Args, Debug)]
pub struct ScenariosArgs {
    /// Input document (.toml or .json)
    pub input: PathBuf,

    /// Discount on the [curve] section instead of the flat yield
    #[arg(long)]
    pub use_curve: bool,
}

/// One scenario for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    pub scenario: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Change %")]
    pub change_pct: String,
    #[tabled(rename = "Duration Est.")]
    pub first_order: String,
    #[tabled(rename = "Dur+Conv Est.")]
    pub second_order: String,
    #[tabled(rename = "Duration Err")]
    pub first_order_error: String,
    #[tabled(rename = "Dur+Conv Err")]
    pub second_order_error: String,
    #[tabled(rename = "Duration Rel Err")]
    pub first_order_relative_error: String,
    #[tabled(rename = "Dur+Conv Rel Err")]
    pub second_order_relative_error: String,
}

impl From<&ScenarioResult> for ScenarioRow {
    fn from(r: &ScenarioResult) -> Self {
        Self {
            scenario: r.label.clone(),
            price: format!("{:.6}", r.price),
            change_pct: format!("{:.4}", r.price_change_pct),
            first_order: format_optional(r.first_order_estimate, 6),
            second_order: format_optional(r.second_order_estimate, 6),
            first_order_error: format_optional(r.first_order_error, 6),
            second_order_error: format_optional(r.second_order_error, 6),
            first_order_relative_error: format_optional(r.first_order_relative_error, 8),
            second_order_relative_error: format_optional(r.second_order_relative_error, 8),
        }
    }
}

/// One key-rate duration for display.
#[derive(Debug, Serialize, Tabled)]
pub struct KeyRateRow {
    #[tabled(rename = "Tenor")]
    pub tenor: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

fn key_rate_rows(krds: &KeyRateDurations) -> Vec<KeyRateRow> {
    let mut rows: Vec<KeyRateRow> = krds
        .iter()
        .map(|krd| KeyRateRow {
            tenor: format!("{}Y", krd.tenor),
            duration: format!("{:.6}", krd.duration.as_f64()),
        })
        .collect();
    rows.push(KeyRateRow {
        tenor: "Total".to_string(),
        duration: format!("{:.6}", krds.total_duration().as_f64()),
    });
    rows
}

#[derive(Serialize)]
struct ScenarioReport<'a> {
    base_price: f64,
    duration: Duration,
    convexity: Convexity,
    scenarios: &'a [ScenarioResult],
    key_rate_durations: &'a KeyRateDurations,
}

/// Execute the scenarios command.
pub fn execute(args: ScenariosArgs, format: OutputFormat) -> Result<()> {
    let doc = InputDocument::load(&args.input)?;
    let calc = doc.calculator(args.use_curve)?;

    let runner = ScenarioRunner::new(&calc)?;
    let results = runner.run(&doc.scenarios)?;
    let krds = calc.key_rate_durations()?;
    tracing::info!(
        scenarios = results.len(),
        pillars = krds.len(),
        "evaluated scenario grid"
    );

    let rows: Vec<ScenarioRow> = results.iter().map(ScenarioRow::from).collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Scenarios (P0 = {:.6}, D = {:.6}, C = {:.6})",
                runner.base_price(),
                runner.duration().as_f64(),
                runner.convexity().as_f64()
            ));
            print_output(&rows, format)?;
            print_header("Key Rate Durations");
            print_output(&key_rate_rows(&krds), format)?;
        }
        OutputFormat::Json => {
            print_json_value(&ScenarioReport {
                base_price: runner.base_price(),
                duration: runner.duration(),
                convexity: runner.convexity(),
                scenarios: &results,
                key_rate_durations: &krds,
            })?;
        }
        OutputFormat::Csv => {
            // Two blocks, each with its own header, separated by a blank line
            print_output(&rows, format)?;
            println!();
            print_output(&key_rate_rows(&krds), format)?;
        }
        OutputFormat::Minimal => {
            for r in &results {
                println!("{}\t{:.6}", r.label, r.price);
            }
            for krd in krds.iter() {
                println!("KRD {}Y\t{:.6}", krd.tenor, krd.duration.as_f64());
            }
        }
    }

    Ok(())
}

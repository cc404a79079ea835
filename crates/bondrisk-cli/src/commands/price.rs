//! Price command implementation.
//!
//! Prices the bond and reports flat-yield and effective risk measures.

use std::path::PathBuf;

use anyhow::Result;
use bondrisk_analytics::prelude::*;
use bondrisk_analytics::report::report;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::input::InputDocument;
use crate::output::{print_header, print_json_value, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Input document (.toml or .json)
    pub input: PathBuf,

    /// Discount on the [curve] section instead of the flat yield
    #[arg(long)]
    pub use_curve: bool,

    /// Also show every cashflow with its discount factor
    #[arg(long)]
    pub cashflows: bool,
}

/// One priced cashflow for display.
#[derive(Debug, Serialize, Tabled)]
pub struct CashflowRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Time")]
    pub time: String,
    #[tabled(rename = "Coupon")]
    pub coupon: String,
    #[tabled(rename = "Cashflow")]
    pub cashflow: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "DF")]
    pub discount_factor: String,
    #[tabled(rename = "PV")]
    pub present_value: String,
}

impl From<&PricedPeriod> for CashflowRow {
    fn from(p: &PricedPeriod) -> Self {
        Self {
            index: p.index,
            time: format!("{:.4}", p.time),
            coupon: format!("{:.4}", p.coupon),
            cashflow: format!("{:.4}", p.cashflow),
            rate: crate::output::format_percent(p.rate),
            discount_factor: format!("{:.8}", p.discount_factor),
            present_value: format!("{:.6}", p.present_value),
        }
    }
}

/// Display rows for the headline figures.
pub fn summary_rows(summary: &BondSummary, use_curve: bool) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Discounting", if use_curve { "curve" } else { "flat yield" }),
        KeyValue::from_f64("Price", summary.price, 6),
        KeyValue::new("Flat Yield", summary.flat_yield.to_string()),
        KeyValue::from_f64("Macaulay Duration", summary.macaulay_duration.as_f64(), 6),
        KeyValue::from_f64("Modified Duration", summary.modified_duration.as_f64(), 6),
        KeyValue::from_f64("Convexity", summary.convexity.as_f64(), 6),
        KeyValue::from_f64("Effective Duration", summary.effective_duration.as_f64(), 6),
        KeyValue::from_f64("Effective Convexity", summary.effective_convexity.as_f64(), 6),
        KeyValue::new("Bump", format!("{}bp", summary.bump_bps)),
        KeyValue::new("Cashflows", summary.cashflow_count.to_string()),
        KeyValue::new("Stub Policy", summary.stub_policy.to_string()),
        KeyValue::new("Has Stub", summary.has_stub.to_string()),
    ]
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let doc = InputDocument::load(&args.input)?;
    let calc = doc.calculator(args.use_curve)?;
    let bond_report = report(&calc)?;
    tracing::info!(
        price = bond_report.summary.price,
        cashflows = bond_report.summary.cashflow_count,
        "priced bond"
    );

    let cashflows: Vec<CashflowRow> = bond_report
        .pricing
        .periods
        .iter()
        .map(CashflowRow::from)
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Bond Risk Summary");
            print_output(&summary_rows(&bond_report.summary, args.use_curve), format)?;
            if args.cashflows {
                print_header("Cashflows");
                print_output(&cashflows, format)?;
            }
        }
        OutputFormat::Json => {
            if args.cashflows {
                print_json_value(&bond_report)?;
            } else {
                print_json_value(&bond_report.summary)?;
            }
        }
        OutputFormat::Csv => {
            if args.cashflows {
                print_output(&cashflows, format)?;
            } else {
                print_output(&summary_rows(&bond_report.summary, args.use_curve), format)?;
            }
        }
        OutputFormat::Minimal => {
            println!("{:.6}", bond_report.summary.price);
        }
    }

    Ok(())
}

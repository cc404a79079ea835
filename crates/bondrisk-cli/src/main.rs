//! bondrisk CLI - price a bond and stress it under rate scenarios.
//!
//! # Usage
//!
//! ```bash
//! # Price and headline risk at the flat yield
//! bondrisk price bond.toml
//!
//! # Discount on the curve and show every cashflow
//! bondrisk price bond.toml --use-curve --cashflows
//!
//! # Scenario grid and key-rate durations as CSV
//! bondrisk --format csv scenarios bond.toml
//!
//! # Interpolated curve rates
//! bondrisk curve bond.toml --tenor 3 --tenor 7
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bondrisk=debug" } else { "bondrisk=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the report
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, format)?,
        Commands::Curve(args) => commands::curve::execute(args, format)?,
    }

    Ok(())
}

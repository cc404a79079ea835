//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CurveArgs, PriceArgs, ScenariosArgs};

/// bondrisk - bond pricing and interest-rate risk
#[derive(Parser)]
#[command(name = "bondrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log calculation detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a bond and report duration and convexity
    Price(PriceArgs),

    /// Reprice under the scenario catalog and report key-rate durations
    Scenarios(ScenariosArgs),

    /// Show interpolated rates from the input curve
    Curve(CurveArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bondrisk", "price", "bond.toml", "--format", "json", "-v"])
            .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Price(_)));
    }

    #[test]
    fn test_repeated_tenor_flag() {
        let cli =
            Cli::try_parse_from(["bondrisk", "curve", "bond.toml", "--tenor", "3", "--tenor", "7.5"])
                .unwrap();
        match cli.command {
            Commands::Curve(args) => assert_eq!(args.tenors, vec![3.0, 7.5]),
            _ => panic!("expected curve command"),
        }
    }
}

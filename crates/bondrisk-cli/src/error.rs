//! CLI error types.

use std::path::PathBuf;

use bondrisk_analytics::error::AnalyticsError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input document could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input extension is neither `.toml` nor `.json`.
    #[error("Unsupported input format: {0}. Use a .toml or .json file.")]
    UnsupportedFormat(String),

    /// The input document is malformed.
    #[error("Invalid input document: {0}")]
    Parse(String),

    /// A field of the input document is out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A curve was requested but the document has none.
    #[error("No [curve] section in the input document")]
    MissingCurve,

    /// Pricing or risk calculation failed.
    #[error("Calculation error: {0}")]
    Calculation(#[from] AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

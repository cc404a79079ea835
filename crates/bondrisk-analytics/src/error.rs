//! Error types for the analytics engine.

use bondrisk_curves::CurveError;
use thiserror::Error;

/// Error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Bond terms failed validation.
    #[error("invalid bond terms: {field} {reason}")]
    InvalidTerms {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Bump size for finite differences is not positive and finite.
    #[error("invalid shock size: {0} (must be positive and finite)")]
    InvalidShockSize(f64),

    /// The periodic growth factor `1 + j/m` is not positive.
    #[error("invalid rate {rate} at t={tenor} with {compounding} compounding periods per year: 1 + j/m must be positive")]
    InvalidRate {
        /// Nominal rate used.
        rate: f64,
        /// Time at which it was applied.
        tenor: f64,
        /// Compounding periods per year.
        compounding: u32,
    },

    /// Curve construction or bumping failed.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            field,
            reason: reason.into(),
        }
    }
}

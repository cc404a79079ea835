//! Error types for curve operations.

use bondrisk_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Pillar data or shock anchors are malformed.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of what is wrong with the curve.
        reason: String,
    },

    /// A pillar index outside the curve was requested.
    #[error("Pillar {index} not found: curve has {len} pillars")]
    PillarNotFound {
        /// Requested pillar index.
        index: usize,
        /// Number of pillars on the curve.
        len: usize,
    },

    /// Underlying numerical failure.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }

    /// Creates a pillar-not-found error.
    #[must_use]
    pub fn pillar_not_found(index: usize, len: usize) -> Self {
        Self::PillarNotFound { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::invalid_curve("tenors must be strictly increasing");
        assert_eq!(
            err.to_string(),
            "Invalid curve: tenors must be strictly increasing"
        );

        let err = CurveError::pillar_not_found(7, 7);
        assert_eq!(err.to_string(), "Pillar 7 not found: curve has 7 pillars");
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::insufficient_data(1, 0).into();
        assert!(matches!(err, CurveError::Math(_)));
    }
}

//! Parallel (uniform) curve bumping.

use serde::{Deserialize, Serialize};

use super::bps_to_decimal;
use crate::curve::NominalCurve;
use crate::error::CurveResult;

/// A parallel shift applied to every pillar of a curve.
///
/// The shift is given in basis points. This is the bump behind effective
/// duration and convexity, and the shock behind the parallel scenarios.
///
/// # Example
///
/// ```rust
/// use bondrisk_curves::bumping::ParallelBump;
///
/// let bump_up = ParallelBump::new(100.0);
/// assert!((bump_up.shift_decimal() - 0.01).abs() < 1e-15);
/// assert!((bump_up.apply_to_rate(0.06) - 0.07).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelBump {
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl ParallelBump {
    /// Creates a new parallel bump of `shift_bps` basis points.
    #[must_use]
    pub fn new(shift_bps: f64) -> Self {
        Self { shift_bps }
    }

    /// Creates symmetric up/down bumps for central differences.
    ///
    /// Returns (up_bump, down_bump).
    #[must_use]
    pub fn symmetric(shift_bps: f64) -> (Self, Self) {
        (Self::new(shift_bps), Self::new(-shift_bps))
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift as a decimal (0.0001 = 1bp).
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        bps_to_decimal(self.shift_bps)
    }

    /// Returns true if the bump leaves rates unchanged.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.shift_bps == 0.0
    }

    /// Applies the bump to a single flat rate.
    #[must_use]
    pub fn apply_to_rate(&self, rate: f64) -> f64 {
        rate + self.shift_decimal()
    }

    /// Applies the bump to a curve, returning the shifted copy.
    pub fn apply(&self, curve: &NominalCurve) -> CurveResult<NominalCurve> {
        curve.bump_parallel(self.shift_decimal())
    }

    /// Returns a short label such as `Parallel +50bp`.
    #[must_use]
    pub fn description(&self) -> String {
        format!("Parallel {:+}bp", self.shift_bps)
    }
}

impl Default for ParallelBump {
    fn default() -> Self {
        Self::new(1.0)
    }
}

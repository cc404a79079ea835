//! Single-pillar bumping for key-rate durations.

use serde::{Deserialize, Serialize};

use super::bps_to_decimal;
use crate::curve::NominalCurve;
use crate::error::CurveResult;

/// A shift applied to one pillar of a curve.
///
/// Because the curve interpolates linearly in the rate, the shift fades to
/// zero at the neighbouring pillars, giving the usual triangular key-rate
/// profile without any extra weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarBump {
    /// Index of the pillar to shift.
    index: usize,
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl PillarBump {
    /// Creates a bump of `shift_bps` at pillar `index`.
    #[must_use]
    pub fn new(index: usize, shift_bps: f64) -> Self {
        Self { index, shift_bps }
    }

    /// Creates symmetric up/down bumps at one pillar.
    #[must_use]
    pub fn symmetric(index: usize, shift_bps: f64) -> (Self, Self) {
        (Self::new(index, shift_bps), Self::new(index, -shift_bps))
    }

    /// One bump per pillar of `curve`, in pillar order.
    #[must_use]
    pub fn profile(curve: &NominalCurve, shift_bps: f64) -> Vec<Self> {
        (0..curve.len()).map(|i| Self::new(i, shift_bps)).collect()
    }

    /// Returns the pillar index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift as a decimal.
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        bps_to_decimal(self.shift_bps)
    }

    /// Applies the bump, failing with `PillarNotFound` if the index is
    /// outside the curve.
    pub fn apply(&self, curve: &NominalCurve) -> CurveResult<NominalCurve> {
        curve.bump_pillar(self.index, self.shift_decimal())
    }
}

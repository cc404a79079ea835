//! Tenor-dependent twists of the curve.

use serde::{Deserialize, Serialize};

use super::bps_to_decimal;
use crate::curve::NominalCurve;
use crate::error::{CurveError, CurveResult};

/// A twist whose size depends on tenor.
///
/// The shift is `short_bps` at or before `short_tenor`, `long_bps` at or
/// after `long_tenor`, and a linear blend of the two shifts in between.
/// Blending the shift (rather than the shocked rates) keeps the twist
/// independent of the curve's shape.
///
/// # Example
///
/// ```rust
/// use bondrisk_curves::bumping::TermStructureShock;
///
/// let steep = TermStructureShock::steepener();
/// assert_eq!(steep.shift_bps_at(1.0), 100.0);
/// assert_eq!(steep.shift_bps_at(5.0), 73.75);
/// assert_eq!(steep.shift_bps_at(30.0), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermStructureShock {
    /// Tenor up to which the short shift applies, in years.
    pub short_tenor: f64,
    /// Tenor from which the long shift applies, in years.
    pub long_tenor: f64,
    /// Shift at the short end, in basis points.
    pub short_bps: f64,
    /// Shift at the long end, in basis points.
    pub long_bps: f64,
}

impl TermStructureShock {
    /// Creates a validated shock.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurve`] unless
    /// `0 <= short_tenor < long_tenor` and all values are finite.
    pub fn new(short_tenor: f64, long_tenor: f64, short_bps: f64, long_bps: f64) -> CurveResult<Self> {
        let shock = Self {
            short_tenor,
            long_tenor,
            short_bps,
            long_bps,
        };
        shock.validate()?;
        Ok(shock)
    }

    /// 2y +100bp, 10y +30bp: short rates rise more than long rates.
    #[must_use]
    pub fn steepener() -> Self {
        Self {
            short_tenor: 2.0,
            long_tenor: 10.0,
            short_bps: 100.0,
            long_bps: 30.0,
        }
    }

    /// 2y +30bp, 10y +100bp: long rates rise more than short rates.
    #[must_use]
    pub fn flattener() -> Self {
        Self {
            short_tenor: 2.0,
            long_tenor: 10.0,
            short_bps: 30.0,
            long_bps: 100.0,
        }
    }

    /// Checks the anchors and magnitudes.
    pub fn validate(&self) -> CurveResult<()> {
        let values = [self.short_tenor, self.long_tenor, self.short_bps, self.long_bps];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CurveError::invalid_curve(
                "term-structure shock values must be finite",
            ));
        }
        if self.short_tenor < 0.0 || self.short_tenor >= self.long_tenor {
            return Err(CurveError::invalid_curve(format!(
                "shock anchors must satisfy 0 <= short < long, got {} and {}",
                self.short_tenor, self.long_tenor
            )));
        }
        Ok(())
    }

    /// Returns the shift at `tenor` in basis points.
    #[must_use]
    pub fn shift_bps_at(&self, tenor: f64) -> f64 {
        if tenor <= self.short_tenor {
            self.short_bps
        } else if tenor >= self.long_tenor {
            self.long_bps
        } else {
            let w = (tenor - self.short_tenor) / (self.long_tenor - self.short_tenor);
            self.short_bps + w * (self.long_bps - self.short_bps)
        }
    }

    /// Returns the shift at `tenor` as a decimal.
    #[must_use]
    pub fn shift_at(&self, tenor: f64) -> f64 {
        bps_to_decimal(self.shift_bps_at(tenor))
    }

    /// Applies the shock to every pillar of `curve`.
    pub fn apply(&self, curve: &NominalCurve) -> CurveResult<NominalCurve> {
        self.validate()?;
        log::trace!("applying {}", self.description());
        curve.apply_term_structure_shock(|t| self.shift_at(t))
    }

    /// Returns a short label such as `2Y +100bp / 10Y +30bp`.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{}Y {:+}bp / {}Y {:+}bp",
            self.short_tenor, self.short_bps, self.long_tenor, self.long_bps
        )
    }
}

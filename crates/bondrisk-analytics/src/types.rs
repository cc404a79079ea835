//! Rate conventions shared across the engine.

use std::fmt;

use bondrisk_curves::NominalCurve;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Number of compounding periods per year for a nominal rate.
///
/// A nominal rate `j` compounded `m` times a year grows one unit of money
/// to `(1 + j/m)^(m·t)` after `t` years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Compounding(u32);

impl Compounding {
    /// Annual compounding.
    pub const ANNUAL: Self = Self(1);
    /// Semi-annual compounding.
    pub const SEMI_ANNUAL: Self = Self(2);
    /// Quarterly compounding.
    pub const QUARTERLY: Self = Self(4);
    /// Monthly compounding.
    pub const MONTHLY: Self = Self(12);

    /// Creates a compounding convention with `periods_per_year` periods.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidTerms`] for zero periods.
    pub fn new(periods_per_year: u32) -> AnalyticsResult<Self> {
        if periods_per_year == 0 {
            return Err(AnalyticsError::invalid_terms(
                "compounding",
                "must have at least one period per year",
            ));
        }
        Ok(Self(periods_per_year))
    }

    /// Returns the number of periods per year.
    pub fn periods_per_year(self) -> u32 {
        self.0
    }

    /// Returns the number of periods per year as `f64`.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the one-period growth factor `1 + j/m`.
    pub fn growth(self, rate: f64) -> f64 {
        1.0 + rate / self.as_f64()
    }
}

impl Default for Compounding {
    fn default() -> Self {
        Self::SEMI_ANNUAL
    }
}

impl TryFrom<u32> for Compounding {
    type Error = AnalyticsError;

    fn try_from(m: u32) -> AnalyticsResult<Self> {
        Self::new(m)
    }
}

impl From<Compounding> for u32 {
    fn from(c: Compounding) -> Self {
        c.0
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "annual"),
            2 => write!(f, "semi-annual"),
            4 => write!(f, "quarterly"),
            12 => write!(f, "monthly"),
            m => write!(f, "{m}x per year"),
        }
    }
}

/// A flat nominal yield with its compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatYield {
    /// Nominal annual rate as a decimal.
    pub rate: f64,
    /// Compounding convention the rate is quoted under.
    pub compounding: Compounding,
}

impl FlatYield {
    /// Creates a flat yield.
    #[must_use]
    pub fn new(rate: f64, compounding: Compounding) -> Self {
        Self { rate, compounding }
    }

    /// Reads the curve rate at `tenor`, typically the bond's maturity, so
    /// that flat-yield metrics can be quoted for a curve-priced bond.
    #[must_use]
    pub fn from_curve_at(curve: &NominalCurve, tenor: f64, compounding: Compounding) -> Self {
        Self::new(curve.rate_at(tenor), compounding)
    }

    /// Returns the one-period growth factor `1 + j/m`.
    #[must_use]
    pub fn growth(&self) -> f64 {
        self.compounding.growth(self.rate)
    }

    /// Returns the same yield shifted by `delta` (decimal).
    #[must_use]
    pub fn shifted(&self, delta: f64) -> Self {
        Self::new(self.rate + delta, self.compounding)
    }
}

impl fmt::Display for FlatYield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}% {}", self.rate * 100.0, self.compounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondrisk_curves::DEFAULT_PILLAR_TENORS;

    #[test]
    fn test_zero_compounding_rejected() {
        assert!(matches!(
            Compounding::new(0),
            Err(AnalyticsError::InvalidTerms { field: "compounding", .. })
        ));
        assert_eq!(Compounding::new(4).unwrap(), Compounding::QUARTERLY);
    }

    #[test]
    fn test_compounding_serde() {
        let c: Compounding = serde_json::from_str("12").unwrap();
        assert_eq!(c, Compounding::MONTHLY);
        assert!(serde_json::from_str::<Compounding>("0").is_err());
        assert_eq!(serde_json::to_string(&Compounding::ANNUAL).unwrap(), "1");
    }

    #[test]
    fn test_display() {
        assert_eq!(Compounding::SEMI_ANNUAL.to_string(), "semi-annual");
        assert_eq!(Compounding::new(3).unwrap().to_string(), "3x per year");
        assert_eq!(
            FlatYield::new(0.06, Compounding::SEMI_ANNUAL).to_string(),
            "6.0000% semi-annual"
        );
    }

    #[test]
    fn test_growth() {
        let y = FlatYield::new(0.06, Compounding::SEMI_ANNUAL);
        assert_relative_eq!(y.growth(), 1.03, epsilon = 1e-15);
        assert_relative_eq!(y.shifted(0.01).growth(), 1.035, epsilon = 1e-15);
    }

    #[test]
    fn test_from_curve_at() {
        let curve = NominalCurve::new(vec![1.0, 10.0], vec![0.03, 0.048]).unwrap();
        let y = FlatYield::from_curve_at(&curve, 5.5, Compounding::ANNUAL);
        assert_relative_eq!(y.rate, 0.039, epsilon = 1e-12);

        let flat = NominalCurve::flat(0.05, &DEFAULT_PILLAR_TENORS).unwrap();
        let y = FlatYield::from_curve_at(&flat, 50.0, Compounding::SEMI_ANNUAL);
        assert_relative_eq!(y.rate, 0.05);
    }
}

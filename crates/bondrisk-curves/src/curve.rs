//! Nominal zero-rate pillar curve.

use bondrisk_math::interpolation::LinearInterpolator;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Pillar grid used when a curve is built from a single flat rate.
pub const DEFAULT_PILLAR_TENORS: [f64; 7] = [0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0];

/// Raw pillar data, the serialized form of a [`NominalCurve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePillars {
    /// Pillar tenors in years.
    pub tenors: Vec<f64>,
    /// Nominal rates at each tenor, as decimals.
    pub rates: Vec<f64>,
}

/// An immutable nominal zero-rate curve defined on pillars.
///
/// Rates are linearly interpolated between pillars and held flat beyond the
/// first and last pillar. The rate at a tenor is read as a nominal annual
/// rate; the compounding convention is supplied by whoever discounts with it.
///
/// Every bump returns a new curve on the same tenor grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurvePillars", into = "CurvePillars")]
pub struct NominalCurve {
    interp: LinearInterpolator,
}

impl NominalCurve {
    /// Creates a curve from pillar tenors and rates.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurve`] if the pillar set is empty, the
    /// lengths differ, any tenor is not strictly positive, tenors are not
    /// strictly increasing, or any value is non-finite.
    pub fn new(tenors: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        if tenors.is_empty() {
            return Err(CurveError::invalid_curve("curve needs at least one pillar"));
        }
        if tenors.len() != rates.len() {
            return Err(CurveError::invalid_curve(format!(
                "{} tenors but {} rates",
                tenors.len(),
                rates.len()
            )));
        }
        if let Some(t) = tenors.iter().find(|t| !t.is_finite() || **t <= 0.0) {
            return Err(CurveError::invalid_curve(format!(
                "tenors must be positive and finite, got {t}"
            )));
        }
        if let Some(r) = rates.iter().find(|r| !r.is_finite()) {
            return Err(CurveError::invalid_curve(format!(
                "rates must be finite, got {r}"
            )));
        }
        if let Some(w) = tenors.windows(2).find(|w| w[1] <= w[0]) {
            return Err(CurveError::invalid_curve(format!(
                "tenors must be strictly increasing: {} then {}",
                w[0], w[1]
            )));
        }

        let interp = LinearInterpolator::new(tenors, rates)?;
        Ok(Self { interp })
    }

    /// Creates a flat curve at `rate` on the given tenor grid.
    ///
    /// Use [`DEFAULT_PILLAR_TENORS`] when no grid is prescribed.
    pub fn flat(rate: f64, tenors: &[f64]) -> CurveResult<Self> {
        Self::new(tenors.to_vec(), vec![rate; tenors.len()])
    }

    /// Returns the pillar tenors.
    pub fn tenors(&self) -> &[f64] {
        self.interp.xs()
    }

    /// Returns the pillar rates.
    pub fn rates(&self) -> &[f64] {
        self.interp.ys()
    }

    /// Returns the number of pillars.
    pub fn len(&self) -> usize {
        self.interp.len()
    }

    /// Always false: a curve has at least one pillar.
    pub fn is_empty(&self) -> bool {
        self.interp.is_empty()
    }

    /// Iterates over (tenor, rate) pillars.
    pub fn pillars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tenors().iter().copied().zip(self.rates().iter().copied())
    }

    /// Returns the nominal rate at `tenor`.
    ///
    /// Exact at pillars, linear in the rate between them, flat outside.
    pub fn rate_at(&self, tenor: f64) -> f64 {
        self.interp.evaluate(tenor)
    }

    /// Returns a copy with every pillar rate shifted by `delta` (decimal).
    pub fn bump_parallel(&self, delta: f64) -> CurveResult<Self> {
        log::trace!("parallel bump of {delta} on {} pillars", self.len());
        self.with_rates(self.rates().iter().map(|r| r + delta).collect())
    }

    /// Returns a copy with only pillar `index` shifted by `delta` (decimal).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::PillarNotFound`] if `index` is out of range.
    pub fn bump_pillar(&self, index: usize, delta: f64) -> CurveResult<Self> {
        if index >= self.len() {
            return Err(CurveError::pillar_not_found(index, self.len()));
        }
        log::trace!(
            "pillar bump of {delta} at index {index} (tenor {})",
            self.tenors()[index]
        );

        let mut rates = self.rates().to_vec();
        rates[index] += delta;
        self.with_rates(rates)
    }

    /// Returns a copy with `shock(tenor)` (decimal) added to each pillar rate.
    pub fn apply_term_structure_shock<F>(&self, shock: F) -> CurveResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        let rates = self.pillars().map(|(t, r)| r + shock(t)).collect();
        self.with_rates(rates)
    }

    fn with_rates(&self, rates: Vec<f64>) -> CurveResult<Self> {
        Self::new(self.tenors().to_vec(), rates)
    }
}

impl TryFrom<CurvePillars> for NominalCurve {
    type Error = CurveError;

    fn try_from(pillars: CurvePillars) -> CurveResult<Self> {
        Self::new(pillars.tenors, pillars.rates)
    }
}

impl From<NominalCurve> for CurvePillars {
    fn from(curve: NominalCurve) -> Self {
        Self {
            tenors: curve.tenors().to_vec(),
            rates: curve.rates().to_vec(),
        }
    }
}

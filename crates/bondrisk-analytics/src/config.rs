//! Risk and scenario configuration.

use serde::{Deserialize, Serialize};

use crate::cashflows::StubPolicy;
use crate::error::{AnalyticsError, AnalyticsResult};

/// Which duration and convexity feed the Taylor price approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproximationBasis {
    /// Modified duration and discrete convexity at the flat yield.
    #[default]
    FlatYield,
    /// Effective duration and convexity from the parallel bump.
    Effective,
}

/// Configuration for risk calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Bump size for effective and key-rate measures, in basis points.
    #[serde(default = "default_bump_bps")]
    pub bump_bps: f64,

    /// Treatment of a fractional final coupon period.
    #[serde(default)]
    pub stub: StubPolicy,

    /// Measures used for scenario price approximations.
    #[serde(default)]
    pub approximation: ApproximationBasis,

    /// Whether to evaluate independent repricings in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Minimum number of repricings before going parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_bump_bps() -> f64 {
    1.0
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    8
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            bump_bps: default_bump_bps(),
            stub: StubPolicy::default(),
            approximation: ApproximationBasis::default(),
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl RiskConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bump size in basis points.
    #[must_use]
    pub fn with_bump_bps(mut self, bump_bps: f64) -> Self {
        self.bump_bps = bump_bps;
        self
    }

    /// Sets the stub policy.
    #[must_use]
    pub fn with_stub(mut self, stub: StubPolicy) -> Self {
        self.stub = stub;
        self
    }

    /// Sets the approximation basis.
    #[must_use]
    pub fn with_approximation(mut self, approximation: ApproximationBasis) -> Self {
        self.approximation = approximation;
        self
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the bump size as a decimal.
    #[must_use]
    pub fn bump_decimal(&self) -> f64 {
        self.bump_bps / 10_000.0
    }

    /// Checks the bump size.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidShockSize`] unless `bump_bps` is
    /// positive and finite.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.bump_bps.is_finite() || self.bump_bps <= 0.0 {
            return Err(AnalyticsError::InvalidShockSize(self.bump_bps));
        }
        Ok(())
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

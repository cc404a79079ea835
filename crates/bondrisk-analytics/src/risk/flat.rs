//! Flat-yield duration and convexity.
//!
//! ## Formulas
//!
//! ```text
//! D_mac = Σ tₖ·PVₖ / P
//! D_mod = D_mac / (1 + j/m)
//! C     = Σ tₖ(tₖ + 1/m)·PVₖ / (P·(1 + j/m)²)
//! ```
//!
//! All three are zero when the price is zero.

use serde::{Deserialize, Serialize};

use super::{Convexity, Duration};
use crate::cashflows::Schedule;
use crate::error::AnalyticsResult;
use crate::pricing::{price, PricedPeriod, PricingResult, RateSource};
use crate::types::FlatYield;

fn total_pv(periods: &[PricedPeriod]) -> f64 {
    periods.iter().map(|p| p.present_value).sum()
}

/// Macaulay duration: PV-weighted average payment time.
pub fn macaulay_duration(periods: &[PricedPeriod]) -> Duration {
    let price = total_pv(periods);
    if price == 0.0 {
        return Duration::ZERO;
    }
    let weighted: f64 = periods.iter().map(|p| p.time * p.present_value).sum();
    Duration::from(weighted / price)
}

/// Converts Macaulay duration to modified duration.
pub fn modified_from_macaulay(macaulay: Duration, flat_yield: FlatYield) -> Duration {
    Duration::from(macaulay.as_f64() / flat_yield.growth())
}

/// Discrete-compounding convexity with weight `t(t + 1/m)`.
pub fn discrete_convexity(periods: &[PricedPeriod], flat_yield: FlatYield) -> Convexity {
    let price = total_pv(periods);
    if price == 0.0 {
        return Convexity::ZERO;
    }
    let m = flat_yield.compounding.as_f64();
    let weighted: f64 = periods
        .iter()
        .map(|p| p.time * (p.time + 1.0 / m) * p.present_value)
        .sum();
    Convexity::from(weighted / (price * flat_yield.growth().powi(2)))
}

/// Flat-yield risk measures of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Price at the flat yield.
    pub price: f64,
    /// Macaulay duration.
    pub macaulay: Duration,
    /// Modified duration.
    pub modified: Duration,
    /// Discrete convexity.
    pub convexity: Convexity,
    /// Yield the measures were computed under.
    pub flat_yield: FlatYield,
}

impl RiskMetrics {
    /// Prices `schedule` at `flat_yield` and computes the measures.
    pub fn compute(schedule: &Schedule, flat_yield: FlatYield) -> AnalyticsResult<Self> {
        let pricing = price(schedule, &RateSource::from(flat_yield), flat_yield.compounding)?;
        Ok(Self::from_pricing(&pricing, flat_yield))
    }

    /// Computes the measures from an existing pricing.
    ///
    /// The present values of `pricing` are the weights; `flat_yield` supplies
    /// the `1 + j/m` scaling. With a curve pricing the durations are
    /// curve-weighted.
    pub fn from_pricing(pricing: &PricingResult, flat_yield: FlatYield) -> Self {
        let macaulay = macaulay_duration(&pricing.periods);
        Self {
            price: pricing.price,
            macaulay,
            modified: if pricing.price == 0.0 {
                Duration::ZERO
            } else {
                modified_from_macaulay(macaulay, flat_yield)
            },
            convexity: discrete_convexity(&pricing.periods, flat_yield),
            flat_yield,
        }
    }
}

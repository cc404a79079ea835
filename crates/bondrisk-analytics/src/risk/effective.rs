//! Effective duration and convexity from a parallel bump.

use bondrisk_curves::bumping::ParallelBump;
use serde::{Deserialize, Serialize};

use super::{Convexity, Duration};
use crate::cashflows::Schedule;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::pricing::{present_value, RateSource};
use crate::types::Compounding;

fn check_bump(bump_size: f64) -> AnalyticsResult<()> {
    if !bump_size.is_finite() || bump_size <= 0.0 {
        return Err(AnalyticsError::InvalidShockSize(bump_size));
    }
    Ok(())
}

/// Calculate effective duration using central differences.
///
/// # Formula
///
/// ```text
/// D_eff = (P₋ − P₊) / (2 × P₀ × Δy)
/// ```
///
/// Returns zero when the base price is zero.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidShockSize`] unless `bump_size` is
/// positive and finite.
pub fn effective_duration(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    bump_size: f64,
) -> AnalyticsResult<Duration> {
    check_bump(bump_size)?;
    if price_base == 0.0 {
        return Ok(Duration::ZERO);
    }
    Ok(Duration::from(
        (price_down - price_up) / (2.0 * price_base * bump_size),
    ))
}

/// Calculate effective convexity using central differences.
///
/// # Formula
///
/// ```text
/// C_eff = (P₊ + P₋ − 2×P₀) / (P₀ × Δy²)
/// ```
///
/// Returns zero when the base price is zero.
pub fn effective_convexity(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    bump_size: f64,
) -> AnalyticsResult<Convexity> {
    check_bump(bump_size)?;
    if price_base == 0.0 {
        return Ok(Convexity::ZERO);
    }
    Ok(Convexity::from(
        (price_up + price_down - 2.0 * price_base) / (price_base * bump_size.powi(2)),
    ))
}

/// Effective duration and convexity with the prices behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveRisk {
    /// Effective duration.
    pub duration: Duration,
    /// Effective convexity.
    pub convexity: Convexity,
    /// Unbumped price.
    pub base_price: f64,
    /// Price with rates bumped up.
    pub price_up: f64,
    /// Price with rates bumped down.
    pub price_down: f64,
    /// Bump size in basis points.
    pub bump_bps: f64,
}

impl EffectiveRisk {
    /// Reprices `schedule` under `source` bumped by ±`bump_bps`.
    pub fn compute(
        schedule: &Schedule,
        source: &RateSource,
        compounding: Compounding,
        bump_bps: f64,
    ) -> AnalyticsResult<Self> {
        let (up, down) = ParallelBump::symmetric(bump_bps);
        let h = up.shift_decimal();
        check_bump(h)?;

        let base_price = present_value(schedule, source, compounding)?;
        let price_up = present_value(schedule, &source.shifted(up.shift_decimal())?, compounding)?;
        let price_down =
            present_value(schedule, &source.shifted(down.shift_decimal())?, compounding)?;

        log::debug!(
            "effective risk at {bump_bps}bp: P0={base_price:.6} P+={price_up:.6} P-={price_down:.6}"
        );

        Ok(Self {
            duration: effective_duration(price_up, price_down, base_price, h)?,
            convexity: effective_convexity(price_up, price_down, base_price, h)?,
            base_price,
            price_up,
            price_down,
            bump_bps,
        })
    }
}

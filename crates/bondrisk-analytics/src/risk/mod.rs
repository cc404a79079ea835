//! Interest-rate risk measures.
//!
//! - **Flat-yield**: Macaulay duration, modified duration and discrete
//!   convexity under a single nominal yield ([`flat`])
//! - **Effective**: duration and convexity from repricing under a parallel
//!   bump of the rate source ([`effective`])
//! - **Key-rate**: duration with respect to each curve pillar ([`key_rate`])
//!
//! [`RiskCalculator`] bundles a schedule, a rate source and a
//! [`RiskConfig`](crate::config::RiskConfig) and computes all three.

pub mod calculator;
pub mod effective;
pub mod flat;
pub mod key_rate;

pub use calculator::RiskCalculator;
pub use effective::{effective_convexity, effective_duration, EffectiveRisk};
pub use flat::{discrete_convexity, macaulay_duration, modified_from_macaulay, RiskMetrics};
pub use key_rate::{key_rate_duration_at_pillar, KeyRateDuration, KeyRateDurations};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Duration value (in years).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Duration(f64);

impl Duration {
    /// Zero duration.
    pub const ZERO: Self = Self(0.0);

    /// Get the duration as f64.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} years", self.0)
    }
}

impl From<f64> for Duration {
    fn from(f: f64) -> Self {
        Self(f)
    }
}

/// Convexity value (in years squared).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Convexity(f64);

impl Convexity {
    /// Zero convexity.
    pub const ZERO: Self = Self(0.0);

    /// Get the convexity as f64.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Convexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Convexity {
    fn from(f: f64) -> Self {
        Self(f)
    }
}

/// First-order price estimate `P₀(1 − D·Δy)`.
#[must_use]
pub fn first_order_estimate(base_price: f64, duration: Duration, dy: f64) -> f64 {
    base_price * (1.0 - duration.as_f64() * dy)
}

/// Second-order price estimate `P₀(1 − D·Δy + ½C·Δy²)`.
#[must_use]
pub fn second_order_estimate(
    base_price: f64,
    duration: Duration,
    convexity: Convexity,
    dy: f64,
) -> f64 {
    base_price * (1.0 - duration.as_f64() * dy + 0.5 * convexity.as_f64() * dy * dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_display() {
        assert_eq!(Duration::from(4.265101).to_string(), "4.2651 years");
        assert_eq!(Convexity::from(21.7665).to_string(), "21.7665");
    }

    #[test]
    fn test_taylor_estimates() {
        let d = Duration::from(4.265101);
        let c = Convexity::from(21.766501);

        assert_relative_eq!(first_order_estimate(1000.0, d, 0.01), 957.34899, epsilon = 1e-5);
        assert_relative_eq!(second_order_estimate(1000.0, d, c, 0.01), 958.43731, epsilon = 1e-5);
        assert_relative_eq!(first_order_estimate(1000.0, d, 0.0), 1000.0);
    }

    #[test]
    fn test_serde_transparent() {
        assert_eq!(serde_json::to_string(&Duration::from(4.5)).unwrap(), "4.5");
    }
}

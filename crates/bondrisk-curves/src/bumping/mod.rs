//! Curve shocks for sensitivity and scenario analysis.
//!
//! - [`ParallelBump`]: uniform shift of every pillar (effective duration)
//! - [`PillarBump`]: shift of a single pillar (key-rate duration)
//! - [`TermStructureShock`]: tenor-dependent twist (steepener, flattener)
//!
//! Every shock produces a new [`NominalCurve`](crate::NominalCurve); the
//! base curve is never modified.
//!
//! # Example
//!
//! ```rust
//! use bondrisk_curves::prelude::*;
//!
//! let curve = NominalCurve::flat(0.05, &DEFAULT_PILLAR_TENORS).unwrap();
//!
//! let (up, down) = ParallelBump::symmetric(1.0);
//! let curve_up = up.apply(&curve).unwrap();
//! let curve_down = down.apply(&curve).unwrap();
//! assert!(curve_up.rate_at(5.0) > curve_down.rate_at(5.0));
//!
//! let steep = TermStructureShock::steepener().apply(&curve).unwrap();
//! assert!((steep.rate_at(2.0) - 0.06).abs() < 1e-12);
//! assert!((steep.rate_at(10.0) - 0.053).abs() < 1e-12);
//! ```

mod parallel;
mod pillar;
mod term_structure;

pub use parallel::ParallelBump;
pub use pillar::PillarBump;
pub use term_structure::TermStructureShock;

/// Converts basis points to a decimal rate (1bp = 0.0001).
#[inline]
pub(crate) fn bps_to_decimal(bps: f64) -> f64 {
    bps / 10_000.0
}

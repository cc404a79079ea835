//! # bondrisk Curves
//!
//! Nominal zero-rate curves for the bondrisk fixed income engine.
//!
//! This crate provides:
//!
//! - **Curve**: [`NominalCurve`], an immutable set of (tenor, nominal rate)
//!   pillars with linear interpolation and flat extrapolation
//! - **Bumping**: parallel shifts, single-pillar shifts and term-structure
//!   twists, each returning a new curve
//!
//! ## Quick Start
//!
//! ```rust
//! use bondrisk_curves::prelude::*;
//!
//! let curve = NominalCurve::new(
//!     vec![0.5, 1.0, 2.0, 5.0, 10.0],
//!     vec![0.030, 0.032, 0.035, 0.040, 0.045],
//! )
//! .unwrap();
//!
//! // 3.5y sits halfway between the 2y and 5y pillars
//! assert!((curve.rate_at(3.5) - 0.0375).abs() < 1e-12);
//!
//! // +25bp everywhere
//! let shifted = ParallelBump::new(25.0).apply(&curve).unwrap();
//! assert!((shifted.rate_at(3.5) - 0.04).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod bumping;
pub mod curve;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::{ParallelBump, PillarBump, TermStructureShock};
    pub use crate::curve::{CurvePillars, NominalCurve, DEFAULT_PILLAR_TENORS};
    pub use crate::error::{CurveError, CurveResult};
}

pub use curve::{NominalCurve, DEFAULT_PILLAR_TENORS};
pub use error::{CurveError, CurveResult};

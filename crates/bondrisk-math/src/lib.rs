//! # bondrisk Math
//!
//! Numerical primitives for the bondrisk fixed income engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise-linear interpolation over sorted pillars,
//!   held flat beyond the first and last pillar
//!
//! Everything here works on plain `f64` slices; curve semantics (tenors,
//! nominal rates, bumping) live in `bondrisk-curves`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::LinearInterpolator;
}

pub use error::{MathError, MathResult};

//! Interpolation methods for pillar curves.
//!
//! Only piecewise-linear interpolation on the raw values is provided: nominal
//! zero-rate curves in this engine interpolate the rate itself, never a
//! transformed quantity such as log discount factors.

mod linear;

pub use linear::LinearInterpolator;

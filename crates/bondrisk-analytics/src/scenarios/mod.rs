//! Scenario analysis.
//!
//! A [`ScenarioCatalog`] expands into an ordered list of
//! [`ScenarioDefinition`]s: the base case, parallel shifts, term-structure
//! twists and compounding changes. [`ScenarioRunner`] reprices the bond under
//! each and compares the repriced value with duration/convexity estimates
//! where those are meaningful.

mod catalog;
mod runner;

pub use catalog::{ScenarioCatalog, ScenarioDefinition, ScenarioShock};
pub use runner::{ScenarioResult, ScenarioRunner};

//! # bondrisk Analytics
//!
//! Pricing and interest-rate risk for fixed-coupon bonds.
//!
//! - **Cash flows**: schedule construction with optional final stub period
//! - **Pricing**: discounting under nominal compounding, from a flat yield
//!   or a [`NominalCurve`](bondrisk_curves::NominalCurve)
//! - **Risk**: Macaulay, modified and effective duration, convexity,
//!   key-rate durations
//! - **Scenarios**: parallel shifts, steepener/flattener, compounding
//!   changes, with duration/convexity price estimates
//!
//! ## Architecture
//!
//! Stages are independent and pure: `Schedule` → `price` → risk measures →
//! scenarios. Every value type is immutable and serde-serializable.
//!
//! ## Usage
//!
//! ```rust
//! use bondrisk_analytics::prelude::*;
//!
//! let terms = BondTerms::new(1000.0, 0.06, 5.0, 2, Compounding::SEMI_ANNUAL).unwrap();
//! let calc = RiskCalculator::new(&terms, RateSource::flat(0.06), RiskConfig::default()).unwrap();
//!
//! let price = calc.price().unwrap();
//! assert!((price - 1000.0).abs() < 1e-9);
//!
//! let results = ScenarioRunner::new(&calc)
//!     .unwrap()
//!     .run(&ScenarioCatalog::default())
//!     .unwrap();
//! assert_eq!(results[0].label, "Base");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod parallel;
pub mod pricing;
pub mod report;
pub mod risk;
pub mod scenarios;
pub mod terms;
pub mod types;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{CashflowPeriod, Schedule, StubPolicy};
    pub use crate::config::{ApproximationBasis, RiskConfig};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::pricing::{discount_factor, present_value, price, PricedPeriod, PricingResult, RateSource};
    pub use crate::report::{analyze, BondReport, BondSummary};
    pub use crate::risk::{
        Convexity, Duration, EffectiveRisk, KeyRateDuration, KeyRateDurations, RiskCalculator,
        RiskMetrics,
    };
    pub use crate::scenarios::{
        ScenarioCatalog, ScenarioDefinition, ScenarioResult, ScenarioRunner, ScenarioShock,
    };
    pub use crate::terms::BondTerms;
    pub use crate::types::{Compounding, FlatYield};

    pub use bondrisk_curves::prelude::*;
}

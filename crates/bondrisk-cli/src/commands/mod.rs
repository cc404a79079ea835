//! CLI command implementations.

pub mod curve;
pub mod price;
pub mod scenarios;

pub use curve::CurveArgs;
pub use price::PriceArgs;
pub use scenarios::ScenariosArgs;

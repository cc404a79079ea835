//! Contractual terms of a fixed-coupon bullet bond.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::Compounding;

/// Contractual terms of a fixed-coupon bond.
///
/// Time is measured in year fractions from the valuation date; there is no
/// calendar or day-count layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Face (redemption) value.
    pub face_value: f64,
    /// Annual coupon rate as a decimal.
    pub coupon_rate: f64,
    /// Maturity in years.
    pub maturity: f64,
    /// Coupon payments per year.
    pub frequency: u32,
    /// Compounding convention of the discount rate.
    #[serde(default)]
    pub compounding: Compounding,
}

impl BondTerms {
    /// Creates validated bond terms.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidTerms`] if face value or maturity is
    /// not positive, the coupon is negative, the frequency is zero, or any
    /// value is non-finite.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        maturity: f64,
        frequency: u32,
        compounding: Compounding,
    ) -> AnalyticsResult<Self> {
        let terms = Self {
            face_value,
            coupon_rate,
            maturity,
            frequency,
            compounding,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Checks the terms, e.g. after deserialization.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.face_value.is_finite() || self.face_value <= 0.0 {
            return Err(AnalyticsError::invalid_terms(
                "face_value",
                format!("must be positive and finite, got {}", self.face_value),
            ));
        }
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(AnalyticsError::invalid_terms(
                "coupon_rate",
                format!("must be non-negative and finite, got {}", self.coupon_rate),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(AnalyticsError::invalid_terms(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        if self.frequency == 0 {
            return Err(AnalyticsError::invalid_terms(
                "frequency",
                "must have at least one payment per year",
            ));
        }
        Ok(())
    }

    /// Returns the coupon frequency as `f64`.
    pub fn frequency_f64(&self) -> f64 {
        f64::from(self.frequency)
    }

    /// Returns the regular coupon amount `face × c / p`.
    pub fn regular_coupon(&self) -> f64 {
        self.face_value * self.coupon_rate / self.frequency_f64()
    }

    /// Returns true for a zero-coupon bond.
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }
}

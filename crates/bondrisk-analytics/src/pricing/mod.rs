//! Discounting and pricing.
//!
//! Every cashflow at time `t` is discounted with the nominal rate `j`
//! observed at `t` under `m` compounding periods per year:
//!
//! ```text
//! DF(t) = (1 + j/m)^(−m·t)
//! ```
//!
//! With a [`RateSource::Flat`] source `j` is the same for every period; with a
//! [`RateSource::Curve`] source it is read from the curve at each payment
//! time.

use bondrisk_curves::{NominalCurve, DEFAULT_PILLAR_TENORS};
use serde::{Deserialize, Serialize};

use crate::cashflows::{CashflowPeriod, Schedule};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::types::{Compounding, FlatYield};

/// Where discount rates come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RateSource {
    /// One nominal rate for every tenor.
    Flat {
        /// Nominal annual rate as a decimal.
        rate: f64,
    },
    /// A nominal zero-rate curve.
    Curve {
        /// The curve.
        curve: NominalCurve,
    },
}

impl RateSource {
    /// Flat source at `rate`.
    #[must_use]
    pub fn flat(rate: f64) -> Self {
        Self::Flat { rate }
    }

    /// Curve source.
    #[must_use]
    pub fn curve(curve: NominalCurve) -> Self {
        Self::Curve { curve }
    }

    /// Returns the nominal rate at `tenor`.
    pub fn rate_at(&self, tenor: f64) -> f64 {
        match self {
            Self::Flat { rate } => *rate,
            Self::Curve { curve } => curve.rate_at(tenor),
        }
    }

    /// Returns true for a curve source.
    pub fn is_curve(&self) -> bool {
        matches!(self, Self::Curve { .. })
    }

    /// Returns the source with every rate shifted by `delta` (decimal).
    pub fn shifted(&self, delta: f64) -> AnalyticsResult<Self> {
        Ok(match self {
            Self::Flat { rate } => Self::flat(rate + delta),
            Self::Curve { curve } => Self::curve(curve.bump_parallel(delta)?),
        })
    }

    /// Returns the source as a curve; a flat rate becomes a flat curve on
    /// [`DEFAULT_PILLAR_TENORS`].
    pub fn to_curve(&self) -> AnalyticsResult<NominalCurve> {
        match self {
            Self::Flat { rate } => Ok(NominalCurve::flat(*rate, &DEFAULT_PILLAR_TENORS)?),
            Self::Curve { curve } => Ok(curve.clone()),
        }
    }

    /// Flat yield representative of this source at `tenor`.
    pub fn flat_yield_at(&self, tenor: f64, compounding: Compounding) -> FlatYield {
        match self {
            Self::Flat { rate } => FlatYield::new(*rate, compounding),
            Self::Curve { curve } => FlatYield::from_curve_at(curve, tenor, compounding),
        }
    }
}

impl From<FlatYield> for RateSource {
    fn from(y: FlatYield) -> Self {
        Self::flat(y.rate)
    }
}

impl From<NominalCurve> for RateSource {
    fn from(curve: NominalCurve) -> Self {
        Self::curve(curve)
    }
}

/// A schedule period with its discount factor and present value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricedPeriod {
    /// 1-based period index.
    pub index: usize,
    /// Payment time in years.
    pub time: f64,
    /// Length of the period in years.
    pub accrual: f64,
    /// Coupon paid at `time`.
    pub coupon: f64,
    /// Total cashflow.
    pub cashflow: f64,
    /// Nominal rate used for discounting.
    pub rate: f64,
    /// Discount factor.
    pub discount_factor: f64,
    /// Present value of the cashflow.
    pub present_value: f64,
}

/// Result of pricing a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Sum of present values.
    pub price: f64,
    /// Priced periods in payment order.
    pub periods: Vec<PricedPeriod>,
    /// Rate source used for discounting.
    pub source: RateSource,
    /// Compounding convention used.
    pub compounding: Compounding,
}

impl PricingResult {
    /// Returns the number of cashflows.
    #[must_use]
    pub fn cashflow_count(&self) -> usize {
        self.periods.len()
    }
}

/// Discount factor `(1 + j/m)^(−m·t)`.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidRate`] when `1 + j/m` is not positive.
pub fn discount_factor(rate: f64, compounding: Compounding, time: f64) -> AnalyticsResult<f64> {
    let growth = compounding.growth(rate);
    if growth.is_nan() || growth <= 0.0 {
        return Err(AnalyticsError::InvalidRate {
            rate,
            tenor: time,
            compounding: compounding.periods_per_year(),
        });
    }
    Ok(growth.powf(-compounding.as_f64() * time))
}

fn price_period(
    period: &CashflowPeriod,
    source: &RateSource,
    compounding: Compounding,
) -> AnalyticsResult<PricedPeriod> {
    let rate = source.rate_at(period.time);
    let df = discount_factor(rate, compounding, period.time)?;
    Ok(PricedPeriod {
        index: period.index,
        time: period.time,
        accrual: period.accrual,
        coupon: period.coupon,
        cashflow: period.cashflow,
        rate,
        discount_factor: df,
        present_value: period.cashflow * df,
    })
}

/// Prices a schedule, keeping the per-period detail.
pub fn price(
    schedule: &Schedule,
    source: &RateSource,
    compounding: Compounding,
) -> AnalyticsResult<PricingResult> {
    let periods = schedule
        .periods()
        .iter()
        .map(|p| price_period(p, source, compounding))
        .collect::<AnalyticsResult<Vec<_>>>()?;
    let price = periods.iter().map(|p| p.present_value).sum();

    Ok(PricingResult {
        price,
        periods,
        source: source.clone(),
        compounding,
    })
}

/// Present value of a schedule without the per-period detail.
///
/// Used in bump loops where only the price is needed.
pub fn present_value(
    schedule: &Schedule,
    source: &RateSource,
    compounding: Compounding,
) -> AnalyticsResult<f64> {
    schedule.periods().iter().try_fold(0.0, |acc, p| {
        let df = discount_factor(source.rate_at(p.time), compounding, p.time)?;
        Ok(acc + p.cashflow * df)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::StubPolicy;
    use crate::terms::BondTerms;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn par_schedule() -> Schedule {
        let terms = BondTerms::new(1000.0, 0.06, 5.0, 2, Compounding::SEMI_ANNUAL).unwrap();
        Schedule::generate(&terms, StubPolicy::Include).unwrap()
    }

    #[test]
    fn test_discount_factor() {
        assert_relative_eq!(
            discount_factor(0.06, Compounding::SEMI_ANNUAL, 1.0).unwrap(),
            1.0 / 1.0609,
            epsilon = 1e-12
        );
        assert_relative_eq!(discount_factor(0.05, Compounding::ANNUAL, 0.0).unwrap(), 1.0);
        // Negative rates are fine while 1 + j/m stays positive
        assert!(discount_factor(-0.01, Compounding::ANNUAL, 2.0).unwrap() > 1.0);
    }

    #[test]
    fn test_discount_factor_invalid_rate() {
        assert_eq!(
            discount_factor(-2.0, Compounding::SEMI_ANNUAL, 1.5),
            Err(AnalyticsError::InvalidRate {
                rate: -2.0,
                tenor: 1.5,
                compounding: 2
            })
        );
        assert!(discount_factor(f64::NAN, Compounding::ANNUAL, 1.0).is_err());
    }

    #[test]
    fn test_par_bond_prices_at_par() {
        let result = price(&par_schedule(), &RateSource::flat(0.06), Compounding::SEMI_ANNUAL).unwrap();
        assert_relative_eq!(result.price, 1000.0, epsilon = 1e-9);
        assert_eq!(result.cashflow_count(), 10);

        let pv_sum: f64 = result.periods.iter().map(|p| p.present_value).sum();
        assert_relative_eq!(pv_sum, result.price);
    }

    #[test]
    fn test_compounding_changes_price() {
        let schedule = par_schedule();
        let source = RateSource::flat(0.06);
        let quarterly = present_value(&schedule, &source, Compounding::QUARTERLY).unwrap();
        let annual = present_value(&schedule, &source, Compounding::ANNUAL).unwrap();

        assert_relative_eq!(quarterly, 998.0829, epsilon = 1e-4);
        assert_relative_eq!(annual, 1003.7359, epsilon = 1e-4);
    }

    #[test]
    fn test_flat_curve_matches_flat_rate() {
        let schedule = par_schedule();
        let flat = RateSource::flat(0.045);
        let curve = RateSource::curve(flat.to_curve().unwrap());

        let p_flat = present_value(&schedule, &flat, Compounding::SEMI_ANNUAL).unwrap();
        let p_curve = present_value(&schedule, &curve, Compounding::SEMI_ANNUAL).unwrap();
        assert_relative_eq!(p_flat, p_curve, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_rates_read_at_payment_time() {
        let curve = NominalCurve::new(vec![1.0, 5.0], vec![0.02, 0.06]).unwrap();
        let result = price(&par_schedule(), &RateSource::curve(curve), Compounding::SEMI_ANNUAL).unwrap();

        assert_relative_eq!(result.periods[0].rate, 0.02);
        assert_relative_eq!(result.periods[4].rate, 0.035, epsilon = 1e-12);
        assert_relative_eq!(result.periods[9].rate, 0.06);
    }

    #[test]
    fn test_zero_coupon_discounts_face_only() {
        let terms = BondTerms::new(1000.0, 0.0, 1.0, 1, Compounding::ANNUAL).unwrap();
        let schedule = Schedule::generate(&terms, StubPolicy::Include).unwrap();
        let pv = present_value(&schedule, &RateSource::flat(0.05), Compounding::ANNUAL).unwrap();
        assert_relative_eq!(pv, 1000.0 / 1.05, epsilon = 1e-9);
    }

    #[test]
    fn test_shifted_source() {
        let shifted = RateSource::flat(0.05).shifted(0.01).unwrap();
        assert_relative_eq!(shifted.rate_at(3.0), 0.06, epsilon = 1e-15);

        let curve = RateSource::curve(NominalCurve::new(vec![1.0, 5.0], vec![0.02, 0.06]).unwrap());
        let shifted = curve.shifted(-0.005).unwrap();
        assert_relative_eq!(shifted.rate_at(3.0), 0.035, epsilon = 1e-12);
    }

    #[test]
    fn test_rate_source_serde_tagged() {
        let json = serde_json::to_string(&RateSource::flat(0.05)).unwrap();
        assert_eq!(json, r#"{"kind":"flat","rate":0.05}"#);
    }

    proptest! {
        #[test]
        fn prop_price_non_increasing_in_rate(j in -0.02f64..0.20, dj in 0.0f64..0.05) {
            let schedule = par_schedule();
            let lo = present_value(&schedule, &RateSource::flat(j), Compounding::SEMI_ANNUAL).unwrap();
            let hi = present_value(&schedule, &RateSource::flat(j + dj), Compounding::SEMI_ANNUAL).unwrap();
            prop_assert!(hi <= lo + 1e-9);
        }
    }
}

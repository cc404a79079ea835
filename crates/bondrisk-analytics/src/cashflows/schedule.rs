//! Period skeleton generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::terms::BondTerms;

/// Tolerance used when flooring `T·p` to the number of regular periods.
pub const PERIOD_COUNT_TOLERANCE: f64 = 1e-7;

/// Treatment of a maturity that is not a whole number of coupon periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StubPolicy {
    /// Pay a final short period ending at maturity.
    #[default]
    Include,
    /// Drop the fractional period and redeem at the last regular date.
    Truncate,
}

impl fmt::Display for StubPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

/// One period of the schedule, before discounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashflowPeriod {
    /// 1-based period index.
    pub index: usize,
    /// Payment time in years.
    pub time: f64,
    /// Length of the period in years.
    pub accrual: f64,
    /// Coupon paid at `time`.
    pub coupon: f64,
    /// Total cashflow: coupon plus face on the final period.
    pub cashflow: f64,
}

/// Ordered cashflow schedule of a bond.
///
/// Only [`Schedule::generate`] builds one, so it serializes but does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    periods: Vec<CashflowPeriod>,
    stub_policy: StubPolicy,
    has_stub: bool,
}

impl Schedule {
    /// Builds the schedule for `terms`.
    ///
    /// With `N = floor(T·p + ε)` regular periods:
    ///
    /// - if `T·p` is integral, the N-th payment is at exactly `T`
    /// - otherwise a stub of length `T − N/p` ends at `T` (`Include`), or the
    ///   face is redeemed at `N/p` (`Truncate`)
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidTerms`] for invalid terms, or for a
    /// truncated schedule with no regular period left.
    pub fn generate(terms: &BondTerms, stub_policy: StubPolicy) -> AnalyticsResult<Self> {
        terms.validate()?;

        let p = terms.frequency_f64();
        let exact = terms.maturity * p;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n_regular = (exact + PERIOD_COUNT_TOLERANCE).floor() as usize;
        #[allow(clippy::cast_precision_loss)]
        let integral =
            n_regular > 0 && (exact - n_regular as f64).abs() <= PERIOD_COUNT_TOLERANCE;

        let mut times: Vec<f64> = (1..=n_regular).map(|k| k as f64 / p).collect();
        let mut has_stub = false;

        if integral {
            // Pin the last date to maturity instead of N/p.
            if let Some(last) = times.last_mut() {
                *last = terms.maturity;
            }
        } else {
            match stub_policy {
                StubPolicy::Include => {
                    times.push(terms.maturity);
                    has_stub = true;
                }
                StubPolicy::Truncate if n_regular == 0 => {
                    return Err(AnalyticsError::invalid_terms(
                        "maturity",
                        format!(
                            "{} years is shorter than one coupon period; cannot truncate the stub",
                            terms.maturity
                        ),
                    ));
                }
                StubPolicy::Truncate => {}
            }
        }

        let regular_coupon = terms.regular_coupon();
        let last = times.len();
        let mut previous = 0.0;
        let periods = times
            .into_iter()
            .enumerate()
            .map(|(i, time)| {
                let index = i + 1;
                let accrual = time - previous;
                previous = time;

                let coupon = if has_stub && index == last {
                    terms.face_value * terms.coupon_rate * accrual
                } else {
                    regular_coupon
                };
                let cashflow = if index == last {
                    coupon + terms.face_value
                } else {
                    coupon
                };

                CashflowPeriod {
                    index,
                    time,
                    accrual,
                    coupon,
                    cashflow,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "generated {} periods for T={} p={} (stub: {})",
            periods.len(),
            terms.maturity,
            terms.frequency,
            has_stub
        );

        Ok(Self {
            periods,
            stub_policy,
            has_stub,
        })
    }

    /// Returns the periods in payment order.
    pub fn periods(&self) -> &[CashflowPeriod] {
        &self.periods
    }

    /// Returns the number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Always false for a generated schedule.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the stub policy the schedule was built with.
    pub fn stub_policy(&self) -> StubPolicy {
        self.stub_policy
    }

    /// Returns true if the final period is a stub.
    pub fn has_stub(&self) -> bool {
        self.has_stub
    }

    /// Returns the stub accrual, if any.
    pub fn stub_accrual(&self) -> Option<f64> {
        if self.has_stub {
            self.periods.last().map(|p| p.accrual)
        } else {
            None
        }
    }

    /// Returns the time of the final payment.
    pub fn final_time(&self) -> f64 {
        self.periods.last().map_or(0.0, |p| p.time)
    }

    /// Returns the sum of all accruals.
    pub fn total_accrual(&self) -> f64 {
        self.periods.iter().map(|p| p.accrual).sum()
    }

    /// Returns the sum of undiscounted cashflows.
    pub fn total_cashflow(&self) -> f64 {
        self.periods.iter().map(|p| p.cashflow).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Compounding;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn terms(maturity: f64, frequency: u32, coupon: f64) -> BondTerms {
        BondTerms::new(1000.0, coupon, maturity, frequency, Compounding::SEMI_ANNUAL).unwrap()
    }

    #[test]
    fn test_schedule_serializes_periods() {
        let schedule = Schedule::generate(&terms(1.0, 2, 0.06), StubPolicy::Include).unwrap();
        let json = serde_json::to_value(&schedule).unwrap();

        assert_eq!(json["periods"].as_array().unwrap().len(), 2);
        assert_eq!(json["has_stub"], false);
        assert_eq!(json["periods"][1]["cashflow"], 1030.0);
    }

    #[test]
    fn test_integral_schedule() {
        let schedule = Schedule::generate(&terms(5.0, 2, 0.06), StubPolicy::Include).unwrap();

        assert_eq!(schedule.len(), 10);
        assert!(!schedule.has_stub());
        assert_eq!(schedule.stub_accrual(), None);

        for (k, period) in schedule.periods().iter().enumerate() {
            assert_eq!(period.index, k + 1);
            assert_relative_eq!(period.time, (k + 1) as f64 / 2.0, epsilon = 1e-12);
            assert_relative_eq!(period.accrual, 0.5, epsilon = 1e-12);
            assert_relative_eq!(period.coupon, 30.0);
        }
        let last = schedule.periods().last().unwrap();
        assert_eq!(last.time, 5.0);
        assert_relative_eq!(last.cashflow, 1030.0);
        assert_relative_eq!(schedule.total_accrual(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stub_schedule() {
        // 2.3y semi-annual: 4 regular periods then a 0.3y stub
        let schedule = Schedule::generate(&terms(2.3, 2, 0.05), StubPolicy::Include).unwrap();

        assert_eq!(schedule.len(), 5);
        assert!(schedule.has_stub());
        assert_relative_eq!(schedule.stub_accrual().unwrap(), 0.3, epsilon = 1e-12);

        let periods = schedule.periods();
        assert_relative_eq!(periods[3].time, 2.0);
        assert_relative_eq!(periods[3].coupon, 25.0);
        assert_eq!(periods[4].time, 2.3);
        assert_relative_eq!(periods[4].coupon, 1000.0 * 0.05 * 0.3, epsilon = 1e-9);
        assert_relative_eq!(periods[4].cashflow, 1015.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.total_accrual(), 2.3, epsilon = 1e-12);
    }

    #[test]
    fn test_truncated_stub() {
        let schedule = Schedule::generate(&terms(2.3, 2, 0.05), StubPolicy::Truncate).unwrap();

        assert_eq!(schedule.len(), 4);
        assert!(!schedule.has_stub());
        let last = schedule.periods().last().unwrap();
        assert_relative_eq!(last.time, 2.0);
        assert_relative_eq!(last.cashflow, 1025.0);
        assert_eq!(schedule.stub_policy(), StubPolicy::Truncate);
    }

    #[test]
    fn test_truncate_without_regular_period_fails() {
        let result = Schedule::generate(&terms(0.25, 2, 0.05), StubPolicy::Truncate);
        assert!(matches!(
            result,
            Err(AnalyticsError::InvalidTerms { field: "maturity", .. })
        ));
    }

    #[test]
    fn test_maturity_shorter_than_one_period() {
        let schedule = Schedule::generate(&terms(0.25, 2, 0.04), StubPolicy::Include).unwrap();

        assert_eq!(schedule.len(), 1);
        let only = schedule.periods()[0];
        assert_relative_eq!(only.accrual, 0.25);
        assert_relative_eq!(only.coupon, 10.0, epsilon = 1e-12);
        assert_relative_eq!(only.cashflow, 1010.0, epsilon = 1e-12);
    }

    #[test]
    fn test_near_integral_product_is_not_a_stub() {
        // 0.1 * 30 is 3.0000000000000004 in binary floating point
        let schedule =
            Schedule::generate(&terms(0.1 * 30.0, 4, 0.04), StubPolicy::Include).unwrap();
        assert_eq!(schedule.len(), 12);
        assert!(!schedule.has_stub());

        // 2.9999999999 years quarterly floors to 12 within tolerance
        let schedule = Schedule::generate(&terms(3.0 - 1e-10, 4, 0.04), StubPolicy::Include).unwrap();
        assert_eq!(schedule.len(), 12);
        assert!(!schedule.has_stub());
    }

    #[test]
    fn test_zero_coupon_keeps_every_period() {
        let schedule = Schedule::generate(&terms(3.0, 2, 0.0), StubPolicy::Include).unwrap();

        assert_eq!(schedule.len(), 6);
        assert!(schedule.periods()[..5].iter().all(|p| p.cashflow == 0.0));
        assert_relative_eq!(schedule.periods()[5].cashflow, 1000.0);
        assert_relative_eq!(schedule.total_cashflow(), 1000.0);
    }

    #[test]
    fn test_stub_policy_serde() {
        assert_eq!(serde_json::to_string(&StubPolicy::Truncate).unwrap(), "\"truncate\"");
        let parsed: StubPolicy = serde_json::from_str("\"include\"").unwrap();
        assert_eq!(parsed, StubPolicy::Include);
        assert_eq!(StubPolicy::Truncate.to_string(), "truncate");
    }

    proptest! {
        #[test]
        fn prop_accruals_sum_to_maturity(maturity in 0.05f64..40.0, frequency in 1u32..=12) {
            let schedule = Schedule::generate(&terms(maturity, frequency, 0.05), StubPolicy::Include).unwrap();
            prop_assert!((schedule.total_accrual() - maturity).abs() < 1e-9);
            prop_assert_eq!(schedule.final_time(), maturity);
            prop_assert!(schedule.periods().iter().all(|p| p.accrual > 0.0));
        }

        #[test]
        fn prop_integral_maturity_has_exact_period_count(n in 1usize..200, frequency in 1u32..=12) {
            let maturity = n as f64 / f64::from(frequency);
            let schedule = Schedule::generate(&terms(maturity, frequency, 0.05), StubPolicy::Include).unwrap();
            prop_assert_eq!(schedule.len(), n);
            prop_assert!(!schedule.has_stub());
            for p in schedule.periods() {
                prop_assert!((p.accrual - 1.0 / f64::from(frequency)).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_times_strictly_increasing(maturity in 0.05f64..40.0, frequency in 1u32..=12) {
            let schedule = Schedule::generate(&terms(maturity, frequency, 0.05), StubPolicy::Include).unwrap();
            for w in schedule.periods().windows(2) {
                prop_assert!(w[1].time > w[0].time);
            }
        }
    }
}

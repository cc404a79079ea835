//! Key-rate durations.
//!
//! Each pillar of the curve is bumped up and down on its own and the bond is
//! repriced; the central difference gives that pillar's duration. Because the
//! curve interpolates linearly, the pillar bumps add up to a parallel bump, so
//! the key-rate durations sum to the effective duration up to second-order
//! terms.

use bondrisk_curves::bumping::PillarBump;
use bondrisk_curves::NominalCurve;
use serde::{Deserialize, Serialize};

use super::effective::effective_duration;
use super::Duration;
use crate::cashflows::Schedule;
use crate::config::RiskConfig;
use crate::error::AnalyticsResult;
use crate::parallel::maybe_parallel_map;
use crate::pricing::{present_value, RateSource};
use crate::types::Compounding;

/// Key rate duration for a specific pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRateDuration {
    /// The pillar tenor (in years).
    pub tenor: f64,
    /// The duration at this pillar.
    pub duration: Duration,
}

/// Collection of key rate durations in pillar order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyRateDurations {
    /// Individual key rate durations.
    pub durations: Vec<KeyRateDuration>,
}

impl KeyRateDurations {
    /// Create new key rate durations.
    #[must_use]
    pub fn new(durations: Vec<KeyRateDuration>) -> Self {
        Self { durations }
    }

    /// Bumps every pillar of the source's curve by ±`config.bump_bps`.
    ///
    /// A flat source is expanded to a flat curve on the default pillar grid
    /// first.
    pub fn compute(
        schedule: &Schedule,
        source: &RateSource,
        compounding: Compounding,
        config: &RiskConfig,
    ) -> AnalyticsResult<Self> {
        config.validate()?;
        let curve = source.to_curve()?;
        let base_price = present_value(schedule, &RateSource::curve(curve.clone()), compounding)?;

        let indices: Vec<usize> = (0..curve.len()).collect();
        let durations = maybe_parallel_map(&indices, config, |&index| {
            key_rate_duration_at_pillar(
                schedule,
                &curve,
                compounding,
                index,
                config.bump_bps,
                base_price,
            )
        })
        .into_iter()
        .collect::<AnalyticsResult<Vec<_>>>()?;

        log::debug!("computed {} key-rate durations", durations.len());
        Ok(Self::new(durations))
    }

    /// Get the total duration (sum of all key rate durations).
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let total: f64 = self.durations.iter().map(|krd| krd.duration.as_f64()).sum();
        Duration::from(total)
    }

    /// Get duration at a specific tenor.
    #[must_use]
    pub fn at_tenor(&self, tenor: f64) -> Option<&KeyRateDuration> {
        self.durations
            .iter()
            .find(|krd| (krd.tenor - tenor).abs() < 0.001)
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns true if there are no pillars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Iterates over the durations.
    pub fn iter(&self) -> impl Iterator<Item = &KeyRateDuration> {
        self.durations.iter()
    }
}

/// Key-rate duration at pillar `index` of `curve`.
///
/// `base_price` is the price under the unbumped curve.
///
/// # Errors
///
/// Returns `PillarNotFound` for an index outside the curve and
/// `InvalidShockSize` for a non-positive bump.
pub fn key_rate_duration_at_pillar(
    schedule: &Schedule,
    curve: &NominalCurve,
    compounding: Compounding,
    index: usize,
    bump_bps: f64,
    base_price: f64,
) -> AnalyticsResult<KeyRateDuration> {
    let (up, down) = PillarBump::symmetric(index, bump_bps);
    let price_up = present_value(schedule, &RateSource::curve(up.apply(curve)?), compounding)?;
    let price_down = present_value(schedule, &RateSource::curve(down.apply(curve)?), compounding)?;

    let duration = effective_duration(price_up, price_down, base_price, up.shift_decimal())?;
    Ok(KeyRateDuration {
        tenor: curve.tenors()[index],
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::StubPolicy;
    use crate::error::AnalyticsError;
    use crate::risk::EffectiveRisk;
    use crate::terms::BondTerms;
    use approx::assert_relative_eq;
    use bondrisk_curves::CurveError;

    fn par_schedule() -> Schedule {
        let terms = BondTerms::new(1000.0, 0.06, 5.0, 2, Compounding::SEMI_ANNUAL).unwrap();
        Schedule::generate(&terms, StubPolicy::Include).unwrap()
    }

    #[test]
    fn test_key_rate_duration_collection() {
        let krds = KeyRateDurations::new(vec![
            KeyRateDuration {
                tenor: 2.0,
                duration: Duration::from(1.5),
            },
            KeyRateDuration {
                tenor: 5.0,
                duration: Duration::from(2.0),
            },
            KeyRateDuration {
                tenor: 10.0,
                duration: Duration::from(1.5),
            },
        ]);

        assert_relative_eq!(krds.total_duration().as_f64(), 5.0);
        assert_relative_eq!(krds.at_tenor(5.0).unwrap().duration.as_f64(), 2.0);
        assert!(krds.at_tenor(7.0).is_none());
    }

    #[test]
    fn test_flat_source_uses_default_pillars() {
        let krds = KeyRateDurations::compute(
            &par_schedule(),
            &RateSource::flat(0.06),
            Compounding::SEMI_ANNUAL,
            &RiskConfig::default(),
        )
        .unwrap();

        let tenors: Vec<f64> = krds.iter().map(|k| k.tenor).collect();
        assert_eq!(tenors, vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0]);

        // A 5y bond has no exposure beyond the 5y pillar
        for tenor in [10.0, 20.0, 30.0] {
            assert_eq!(krds.at_tenor(tenor).unwrap().duration, Duration::ZERO);
        }
        // Redemption at 5y dominates
        let five = krds.at_tenor(5.0).unwrap().duration.as_f64();
        assert!(krds.iter().all(|k| k.duration.as_f64() <= five));
    }

    #[test]
    fn test_total_matches_effective_duration() {
        let curve = NominalCurve::new(
            vec![0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0],
            vec![0.030, 0.032, 0.035, 0.040, 0.045, 0.047, 0.048],
        )
        .unwrap();
        let source = RateSource::curve(curve);
        let config = RiskConfig::default();

        let krds =
            KeyRateDurations::compute(&par_schedule(), &source, Compounding::SEMI_ANNUAL, &config)
                .unwrap();
        let effective =
            EffectiveRisk::compute(&par_schedule(), &source, Compounding::SEMI_ANNUAL, 1.0)
                .unwrap();

        assert_relative_eq!(
            krds.total_duration().as_f64(),
            effective.duration.as_f64(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_pillar_out_of_range() {
        let curve = NominalCurve::new(vec![1.0, 5.0], vec![0.03, 0.04]).unwrap();
        let result = key_rate_duration_at_pillar(
            &par_schedule(),
            &curve,
            Compounding::SEMI_ANNUAL,
            2,
            1.0,
            1000.0,
        );
        assert_eq!(
            result,
            Err(AnalyticsError::Curve(CurveError::PillarNotFound { index: 2, len: 2 }))
        );
    }

    #[test]
    fn test_invalid_bump_rejected() {
        let result = KeyRateDurations::compute(
            &par_schedule(),
            &RateSource::flat(0.06),
            Compounding::SEMI_ANNUAL,
            &RiskConfig::new().with_bump_bps(0.0),
        );
        assert!(matches!(result, Err(AnalyticsError::InvalidShockSize(_))));
    }
}

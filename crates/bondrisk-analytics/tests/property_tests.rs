//! Property-based tests for pricing and risk measures.

use bondrisk_analytics::prelude::*;
use proptest::prelude::*;

fn bond_strategy() -> impl Strategy<Value = BondTerms> {
    (
        0.0f64..0.12,
        0.5f64..30.0,
        prop::sample::select(vec![1u32, 2, 4, 12]),
        prop::sample::select(vec![1u32, 2, 4, 12]),
    )
        .prop_map(|(coupon, maturity, frequency, m)| {
            BondTerms::new(100.0, coupon, maturity, frequency, Compounding::new(m).unwrap())
                .unwrap()
        })
}

fn flat_metrics(terms: &BondTerms, rate: f64) -> RiskMetrics {
    let calc = RiskCalculator::new(terms, RateSource::flat(rate), RiskConfig::default()).unwrap();
    calc.flat_metrics().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_decreases_as_yield_rises(
        terms in bond_strategy(),
        rate in 0.0f64..0.10,
        dy in 0.0001f64..0.02,
    ) {
        let low = flat_metrics(&terms, rate).price;
        let high = flat_metrics(&terms, rate + dy).price;
        prop_assert!(high < low);
    }

    #[test]
    fn prop_macaulay_bounded_by_final_payment(terms in bond_strategy(), rate in 0.0f64..0.10) {
        let calc = RiskCalculator::new(&terms, RateSource::flat(rate), RiskConfig::default()).unwrap();
        let metrics = calc.flat_metrics().unwrap();
        let first = calc.schedule().periods()[0].time;
        let last = calc.schedule().final_time();

        let mac = metrics.macaulay.as_f64();
        prop_assert!(mac >= first - 1e-9);
        prop_assert!(mac <= last + 1e-9);
        prop_assert!(metrics.modified.as_f64() <= mac + 1e-12);
        prop_assert!(metrics.convexity.as_f64() > 0.0);
    }

    #[test]
    fn prop_zero_coupon_duration_is_maturity(
        maturity in 0.5f64..30.0,
        rate in 0.0f64..0.10,
        m in prop::sample::select(vec![1u32, 2, 4, 12]),
    ) {
        let compounding = Compounding::new(m).unwrap();
        let terms = BondTerms::new(100.0, 0.0, maturity, 2, compounding).unwrap();
        let metrics = flat_metrics(&terms, rate);
        let last = RiskCalculator::new(&terms, RateSource::flat(rate), RiskConfig::default())
            .unwrap()
            .schedule()
            .final_time();

        prop_assert!((metrics.macaulay.as_f64() - last).abs() < 1e-9);
    }

    #[test]
    fn prop_zero_shift_reprices_to_base(terms in bond_strategy(), rate in 0.0f64..0.10) {
        let calc = RiskCalculator::new(&terms, RateSource::flat(rate), RiskConfig::default()).unwrap();
        let runner = ScenarioRunner::new(&calc).unwrap();
        let result = runner.evaluate(&ScenarioDefinition::parallel(0.0)).unwrap();

        prop_assert!((result.price - runner.base_price()).abs() < 1e-9);
        prop_assert!(result.price_change_pct.abs() < 1e-9);
        prop_assert!(result.first_order_error.unwrap().abs() < 1e-9);
    }

    #[test]
    fn prop_effective_duration_tracks_modified(terms in bond_strategy(), rate in 0.01f64..0.10) {
        let calc = RiskCalculator::new(&terms, RateSource::flat(rate), RiskConfig::default()).unwrap();
        let modified = calc.flat_metrics().unwrap().modified.as_f64();
        let effective = calc.effective().unwrap().duration.as_f64();

        prop_assert!((effective - modified).abs() < 1e-4 * modified.max(1.0));
    }

    #[test]
    fn prop_second_order_beats_first_order(
        terms in bond_strategy(),
        rate in 0.01f64..0.10,
        shift in prop::sample::select(vec![-100.0f64, -50.0, 50.0, 100.0]),
    ) {
        let calc = RiskCalculator::new(&terms, RateSource::flat(rate), RiskConfig::default()).unwrap();
        let result = ScenarioRunner::new(&calc)
            .unwrap()
            .evaluate(&ScenarioDefinition::parallel(shift))
            .unwrap();

        let first = result.first_order_error.unwrap().abs();
        let second = result.second_order_error.unwrap().abs();
        prop_assert!(second <= first + 1e-9);
    }
}

//! One-call summary of a bond's price and risk.

use serde::{Deserialize, Serialize};

use crate::cashflows::StubPolicy;
use crate::config::RiskConfig;
use crate::error::AnalyticsResult;
use crate::pricing::{PricingResult, RateSource};
use crate::risk::{Convexity, Duration, RiskCalculator};
use crate::terms::BondTerms;
use crate::types::FlatYield;

/// Price, flat-yield and effective measures of a bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondSummary {
    /// Price under the rate source.
    pub price: f64,
    /// Flat yield the flat-yield measures use.
    pub flat_yield: FlatYield,
    /// Macaulay duration at the flat yield.
    pub macaulay_duration: Duration,
    /// Modified duration at the flat yield.
    pub modified_duration: Duration,
    /// Convexity at the flat yield.
    pub convexity: Convexity,
    /// Effective duration under the parallel bump.
    pub effective_duration: Duration,
    /// Effective convexity under the parallel bump.
    pub effective_convexity: Convexity,
    /// Bump size behind the effective measures, in basis points.
    pub bump_bps: f64,
    /// Number of cashflows.
    pub cashflow_count: usize,
    /// Stub policy used for the schedule.
    pub stub_policy: StubPolicy,
    /// Whether the schedule ends with a stub.
    pub has_stub: bool,
}

/// Summary plus the priced schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondReport {
    /// Headline figures.
    pub summary: BondSummary,
    /// Per-period pricing detail.
    pub pricing: PricingResult,
}

/// Prices `terms` under `source` and computes the headline risk measures.
pub fn analyze(terms: &BondTerms, source: RateSource, config: RiskConfig) -> AnalyticsResult<BondReport> {
    let calc = RiskCalculator::new(terms, source, config)?;
    report(&calc)
}

/// Builds the report from an existing calculator.
pub fn report(calc: &RiskCalculator) -> AnalyticsResult<BondReport> {
    let pricing = calc.pricing()?;
    let flat = calc.flat_metrics()?;
    let effective = calc.effective()?;

    let summary = BondSummary {
        price: pricing.price,
        flat_yield: flat.flat_yield,
        macaulay_duration: flat.macaulay,
        modified_duration: flat.modified,
        convexity: flat.convexity,
        effective_duration: effective.duration,
        effective_convexity: effective.convexity,
        bump_bps: effective.bump_bps,
        cashflow_count: pricing.cashflow_count(),
        stub_policy: calc.schedule().stub_policy(),
        has_stub: calc.schedule().has_stub(),
    };

    log::debug!(
        "price {:.6}, modified {}, effective {}",
        summary.price,
        summary.modified_duration,
        summary.effective_duration
    );

    Ok(BondReport { summary, pricing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Compounding;
    use approx::assert_relative_eq;

    #[test]
    fn test_par_bond_summary() {
        let terms = BondTerms::new(1000.0, 0.06, 5.0, 2, Compounding::SEMI_ANNUAL).unwrap();
        let report = analyze(&terms, RateSource::flat(0.06), RiskConfig::default()).unwrap();
        let s = &report.summary;

        assert_relative_eq!(s.price, 1000.0, epsilon = 1e-9);
        assert_relative_eq!(s.macaulay_duration.as_f64(), 4.393054, epsilon = 1e-6);
        assert_relative_eq!(s.modified_duration.as_f64(), 4.265101, epsilon = 1e-6);
        assert_relative_eq!(s.convexity.as_f64(), 21.766501, epsilon = 1e-6);
        assert_relative_eq!(s.effective_duration.as_f64(), 4.265102, epsilon = 1e-5);
        assert_eq!(s.cashflow_count, 10);
        assert_eq!(s.stub_policy, StubPolicy::Include);
        assert!(!s.has_stub);
        assert_eq!(report.pricing.periods.len(), 10);
    }
}

//! Integration test: shock a Treasury-style nominal curve.
//!
//! | Tenor | Rate   |
//! |-------|--------|
//! | 6M    | 3.774% |
//! | 1Y    | 3.591% |
//! | 2Y    | 3.502% |
//! | 5Y    | 3.603% |
//! | 10Y   | 4.018% |
//! | 20Y   | 4.628% |
//! | 30Y   | 4.667% |

use approx::assert_relative_eq;
use bondrisk_curves::prelude::*;

fn treasury_curve() -> NominalCurve {
    NominalCurve::new(
        DEFAULT_PILLAR_TENORS.to_vec(),
        vec![0.03774, 0.03591, 0.03502, 0.03603, 0.04018, 0.04628, 0.04667],
    )
    .unwrap()
}

#[test]
fn test_inverted_front_end_interpolates_downward() {
    let curve = treasury_curve();
    // Between 6M and 1Y the curve falls
    let r = curve.rate_at(0.75);
    assert!(r < 0.03774 && r > 0.03591);
    assert_relative_eq!(r, (0.03774 + 0.03591) / 2.0, epsilon = 1e-12);
}

#[test]
fn test_steepener_then_flattener_nets_to_parallel() {
    let curve = treasury_curve();

    let steep = TermStructureShock::steepener().apply(&curve).unwrap();
    let both = TermStructureShock::flattener().apply(&steep).unwrap();
    // 100 + 30 at either end, and the blends are complementary in between
    let parallel = ParallelBump::new(130.0).apply(&curve).unwrap();

    for t in [0.25, 1.0, 3.0, 5.0, 7.0, 12.0, 40.0] {
        assert_relative_eq!(both.rate_at(t), parallel.rate_at(t), epsilon = 1e-12);
    }
}

#[test]
fn test_twists_move_the_two_ten_spread() {
    let curve = treasury_curve();
    let spread = |c: &NominalCurve| c.rate_at(10.0) - c.rate_at(2.0);

    let base = spread(&curve);
    let steep = spread(&TermStructureShock::steepener().apply(&curve).unwrap());
    let flat = spread(&TermStructureShock::flattener().apply(&curve).unwrap());

    // 2y/10y spread moves by (long - short) shift
    assert_relative_eq!(steep - base, -0.0070, epsilon = 1e-12);
    assert_relative_eq!(flat - base, 0.0070, epsilon = 1e-12);
}

#[test]
fn test_key_rate_bumps_reconstruct_parallel_bump() {
    let curve = treasury_curve();
    let parallel = ParallelBump::new(1.0).apply(&curve).unwrap();

    let mut rebuilt = curve.clone();
    for bump in PillarBump::profile(&curve, 1.0) {
        rebuilt = bump.apply(&rebuilt).unwrap();
    }

    for t in [0.1, 0.5, 1.5, 3.0, 7.0, 15.0, 25.0, 50.0] {
        assert_relative_eq!(rebuilt.rate_at(t), parallel.rate_at(t), epsilon = 1e-14);
    }
}

#[test]
fn test_bumps_leave_base_curve_untouched() {
    let curve = treasury_curve();
    let snapshot = curve.clone();

    let _ = ParallelBump::new(100.0).apply(&curve).unwrap();
    let _ = PillarBump::new(3, 25.0).apply(&curve).unwrap();
    let _ = TermStructureShock::steepener().apply(&curve).unwrap();

    assert_eq!(curve, snapshot);
}

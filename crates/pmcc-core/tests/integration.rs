//! Integration tests for pmcc-core.
//!
//! These tests exercise the full pipeline:
//! population generation → bootstrap resampling → correlation → threshold
//! aggregation, with the standard experiment's parameters.

use pmcc_core::{
    Population, PopulationConfig, SimulationRequest, aggregate, run_request, simulate_seeded,
};
use statrs::distribution::{ContinuousCDF, Normal};

/// The standard experiment: seed 42, 100 rows, mean 25.5, std (50-1)/6,
/// range [1, 50].
fn reference_population() -> Population {
    Population::generate(PopulationConfig::default()).unwrap()
}

#[test]
fn end_to_end_reference_run_is_stable() {
    let pop = reference_population();
    let request = SimulationRequest {
        sample_size: 10,
        threshold: 0.6319,
        iterations: 50_000,
        seed: Some(42),
    };

    let first = run_request(&pop, &request).unwrap();
    let second = run_request(&pop, &request).unwrap();

    assert_eq!(first.values, second.values);
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.values.len(), 50_000);
}

#[test]
fn reference_run_proportions_are_sane() {
    let pop = reference_population();
    let request = SimulationRequest {
        sample_size: 10,
        threshold: 0.6319,
        iterations: 50_000,
        seed: Some(42),
    };
    let report = run_request(&pop, &request).unwrap();

    assert!((report.stats.within + report.stats.outside - 1.0).abs() < 1e-9);
    assert_eq!(report.stats.undefined, 0);
    // For n=10 unpaired draws the PMCC is centered on zero with a standard
    // error around 1/sqrt(n-1) ≈ 0.33, so the bulk of the mass sits inside
    // ±0.6319 and a real tail sits outside it.
    assert!(
        report.stats.within > 0.8,
        "within = {} unexpectedly small",
        report.stats.within
    );
    assert!(
        report.stats.outside > 0.005,
        "outside = {} unexpectedly small",
        report.stats.outside
    );
}

#[test]
fn wider_band_catches_more_of_the_same_sequence() {
    let pop = reference_population();
    let values = simulate_seeded(&pop, 10, 20_000, 7).unwrap();

    let mut prev = 0.0;
    for t in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
        let within = aggregate(&values, t).within;
        assert!(within >= prev, "within dropped at t={t}");
        prev = within;
    }
    assert_eq!(aggregate(&values, 1.0).within, 1.0);
}

#[test]
fn smaller_samples_spread_the_distribution() {
    // With fewer points per sample, extreme correlations occur more often,
    // so the share outside a fixed band grows.
    let pop = reference_population();
    let small = simulate_seeded(&pop, 5, 20_000, 3).unwrap();
    let large = simulate_seeded(&pop, 20, 20_000, 3).unwrap();

    let outside_small = aggregate(&small, 0.6).outside;
    let outside_large = aggregate(&large, 0.6).outside;
    assert!(
        outside_small > outside_large,
        "outside(n=5) = {outside_small} should exceed outside(n=20) = {outside_large}"
    );
}

#[test]
fn degenerate_sample_size_applies_nan_policy() {
    let pop = reference_population();
    let request = SimulationRequest {
        sample_size: 1,
        threshold: 0.6319,
        iterations: 500,
        seed: Some(1),
    };
    let report = run_request(&pop, &request).unwrap();

    assert!(report.values.iter().all(|v| v.is_nan()));
    assert_eq!(report.stats.undefined, 500);
    assert_eq!(report.stats.within, 0.0);
    assert_eq!(report.stats.outside, 0.0);
}

#[test]
fn population_matches_clamped_normal_shape() {
    // Sanity-check the generator against the normal CDF: the share of
    // values clamped to each bound must be close to the tail mass beyond
    // it, and the mean must sit near the distribution mean.
    let config = PopulationConfig {
        size: 20_000,
        ..PopulationConfig::default()
    };
    let pop = Population::generate(config).unwrap();
    let normal = Normal::new(config.mean, config.std_dev).unwrap();
    let (lo, hi) = config.range;

    let values: Vec<f64> = pop
        .column1()
        .iter()
        .chain(pop.column2())
        .copied()
        .collect();
    let n = values.len() as f64;

    let lower_tail = normal.cdf(lo);
    let at_lo = values.iter().filter(|&&v| v == lo).count() as f64 / n;
    // [1, 50] sits at ±3σ, so the tail mass is ~0.00135 per side; allow a
    // generous sampling margin around it.
    assert!(
        (at_lo - lower_tail).abs() < 0.005,
        "share at lower bound {at_lo} vs tail mass {lower_tail}"
    );

    let upper_tail = 1.0 - normal.cdf(hi);
    let at_hi = values.iter().filter(|&&v| v == hi).count() as f64 / n;
    assert!(
        (at_hi - upper_tail).abs() < 0.005,
        "share at upper bound {at_hi} vs tail mass {upper_tail}"
    );

    let mean = values.iter().sum::<f64>() / n;
    assert!(
        (mean - config.mean).abs() < 0.5,
        "sample mean {mean} far from {}",
        config.mean
    );
}

//! Accuracy regression tests for warpband-dtw.
//!
//! Reference values pin the ordered predecessor rule: changing it silently
//! changes every downstream distance, so these must only move deliberately.

use warpband_dtw::{
    BandConfig, BandedDistanceEngine, ClassicDtw, DistanceError, ElasticDistance, Sequence,
    configure, distance,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn seq(values: &[f64]) -> Sequence {
    Sequence::new(values.to_vec()).expect("valid test sequence")
}

fn dtw(a: &[f64], b: &[f64], fraction: f64) -> f64 {
    distance(a, b, &configure(fraction).expect("valid fraction"))
        .expect("valid sequences")
        .value()
}

fn classic(a: &[f64], b: &[f64], fraction: f64) -> f64 {
    let engine = BandedDistanceEngine::new(BandConfig::new(fraction).unwrap(), ClassicDtw);
    engine.distance(seq(a).as_view(), seq(b).as_view()).value()
}

fn assert_close(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "{label}: got {actual:.15}, expected {expected:.15}"
    );
}

// ---------------------------------------------------------------------------
// a) concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn identical_ramp_is_zero() {
    assert_eq!(dtw(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 1.0), 0.0);
}

#[test]
fn constant_offset_is_sqrt_three() {
    assert_close(dtw(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], 1.0), 3.0_f64.sqrt(), "offset");
}

#[test]
fn zero_band_longer_first_sequence_is_unreachable_not_error() {
    let band = configure(0.0).unwrap();
    let result = distance(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 2.0, 3.0], &band);
    assert_eq!(result.unwrap(), ElasticDistance::UNREACHABLE);
}

#[test]
fn empty_inputs_are_rejected_before_any_work() {
    let band = BandConfig::default();
    assert!(matches!(distance(&[], &[1.0], &band), Err(DistanceError::EmptySequence)));
    assert!(matches!(distance(&[1.0], &[], &band), Err(DistanceError::EmptySequence)));
}

#[test]
fn invalid_fraction_is_rejected_at_configuration() {
    assert!(matches!(
        configure(1.5),
        Err(DistanceError::InvalidConfiguration { .. })
    ));
    assert!(matches!(
        configure(f64::NAN),
        Err(DistanceError::InvalidConfiguration { .. })
    ));
}

// ---------------------------------------------------------------------------
// b) reference values at full band
// ---------------------------------------------------------------------------

/// Ordered-rule distances for ten pairs at fraction 1.0, next to the classical
/// three-way-minimum value. The two alternating pairs are where the ordered
/// rule takes a costlier diagonal on a deletion/insertion tie.
#[test]
fn full_band_matches_known_values() {
    let cases: Vec<(Vec<f64>, Vec<f64>, f64, f64)> = vec![
        (vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0], 1.7320508075688772, 1.7320508075688772),
        (vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0], 1.0, 1.0),
        (vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0], 0.0, 0.0),
        (vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0], 2.8284271247461903, 2.8284271247461903),
        (vec![0.0, 5.0, 0.0, 5.0], vec![5.0, 0.0, 5.0, 0.0], 10.0, 7.0710678118654755),
        (vec![1.0], vec![5.0], 4.0, 4.0),
        (vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0], 1.4142135623730951, 1.4142135623730951),
        (vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 0.0, 0.0, 0.0, 4.0], 2.449489742783178, 2.449489742783178),
        (vec![10.0, 10.0, 10.0], vec![10.1, 9.9, 10.0], 0.141421356237309, 0.141421356237309),
        (vec![0.0, 3.0, 0.0, 3.0, 0.0], vec![3.0, 0.0, 3.0, 0.0, 3.0], 6.708203932499369, 4.242640687119285),
    ];

    for (i, (a, b, ordered, reference)) in cases.iter().enumerate() {
        assert_close(dtw(a, b, 1.0), *ordered, &format!("pair {i} ordered"));
        assert_close(classic(a, b, 1.0), *reference, &format!("pair {i} classic"));
    }
}

#[test]
fn full_band_agrees_with_classic_when_no_ties() {
    let pairs: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 3.0, 4.0]),
        (vec![0.5, 1.5, -2.0, 3.25, 0.0], vec![1.0, -0.5, 2.5, 3.0]),
        (vec![1.0, 5.0, 2.0, 8.0, 3.0], vec![2.0, 4.0, 7.0]),
    ];
    for (i, (a, b)) in pairs.iter().enumerate() {
        assert_close(dtw(a, b, 1.0), classic(a, b, 1.0), &format!("pair {i}"));
    }
}

// ---------------------------------------------------------------------------
// c) banded values
// ---------------------------------------------------------------------------

#[test]
fn sine_pair_across_fractions() {
    let a: Vec<f64> = (0..20).map(|i| (i as f64 * 0.3).sin()).collect();
    let b: Vec<f64> = (0..16).map(|i| (i as f64 * 0.3 + 0.6).sin()).collect();

    // m = 16: fraction 0.1 resolves to w = 2, too narrow for (19, 15)
    assert_eq!(dtw(&a, &b, 0.0), f64::INFINITY);
    assert_eq!(dtw(&a, &b, 0.1), f64::INFINITY);
    for fraction in [0.25, 0.5, 1.0] {
        assert_close(dtw(&a, &b, fraction), 0.7452477110383204, &format!("fraction {fraction}"));
    }
}

#[test]
fn zero_band_equal_lengths_is_lockstep_euclidean() {
    let a = [0.5, 1.5, -2.0, 3.25];
    let b = [1.0, -0.5, 2.5, 3.0];
    let euclidean = a
        .iter()
        .zip(&b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt();
    assert_close(dtw(&a, &b, 0.0), euclidean, "lockstep");
}

#[test]
fn late_ramp_is_monotone_in_band() {
    let a = [0.0, 1.0, 2.0, 3.0, 4.0];
    let b = [0.0, 0.0, 0.0, 0.0, 4.0];
    assert_close(dtw(&a, &b, 0.0), 14.0_f64.sqrt(), "fraction 0.0");
    assert_close(dtw(&a, &b, 0.2), 6.0_f64.sqrt(), "fraction 0.2");
    assert_close(dtw(&a, &b, 0.4), 6.0_f64.sqrt(), "fraction 0.4");
    assert_close(dtw(&a, &b, 1.0), 6.0_f64.sqrt(), "fraction 1.0");
}

/// Widening the band can raise the ordered-rule distance: at w = 2 a
/// deletion/insertion tie routes through a costlier diagonal.
#[test]
fn ordered_rule_is_not_band_monotone() {
    let a = [-1.0, 1.0, -1.0, 0.0, 1.0];
    let b = [-3.0, -3.0, 0.0, 1.0, -1.0];
    assert_close(dtw(&a, &b, 0.2), 14.0_f64.sqrt(), "w = 1");
    assert_close(dtw(&a, &b, 0.4), 15.0_f64.sqrt(), "w = 2");
    assert_close(classic(&a, &b, 0.4), 14.0_f64.sqrt(), "classic w = 2");
}

// ---------------------------------------------------------------------------
// d) asymmetry
// ---------------------------------------------------------------------------

/// The band comes from the second argument's length, so even fraction 1.0
/// admits the terminal cell in one direction only.
#[test]
fn swapping_arguments_changes_the_band() {
    let short = [3.0, 1.0];
    let long = [0.0, 0.0, 0.0, 0.0, 1.0];
    assert_close(dtw(&short, &long, 1.0), 12.0_f64.sqrt(), "short -> long");
    assert_eq!(dtw(&long, &short, 1.0), f64::INFINITY);

    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [1.0, 4.0];
    assert_eq!(dtw(&a, &b, 0.5), f64::INFINITY);
    assert_close(dtw(&b, &a, 0.5), 2.0_f64.sqrt(), "b -> a");
}

#[test]
fn equal_lengths_are_symmetric() {
    let pairs: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![2.0, 0.0, 2.0], vec![2.0, 3.0, 2.0]),
        (vec![0.0, 5.0, 0.0, 5.0], vec![5.0, 0.0, 5.0, 0.0]),
        (vec![0.5, 1.5, -2.0, 3.25, 0.0], vec![1.0, -0.5, 2.5, 3.0, -1.0]),
    ];
    for fraction in [0.0, 0.34, 1.0] {
        for (a, b) in &pairs {
            assert_eq!(
                dtw(a, b, fraction).to_bits(),
                dtw(b, a, fraction).to_bits(),
                "{a:?} vs {b:?} at {fraction}"
            );
        }
    }
}

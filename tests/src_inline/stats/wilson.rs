use super::*;

#[test]
fn test_interval_reference_value() {
    let ci = compute_interval(0.848, 112, DEFAULT_Z).unwrap();
    assert!((ci.lower - 0.770069).abs() < 1e-5);
    assert!((ci.upper - 0.902850).abs() < 1e-5);
    assert!((ci.lower - 0.766).abs() <= 0.005);
    assert!((ci.upper - 0.904).abs() <= 0.005);
}

#[test]
fn test_interval_brackets_wilson_center() {
    let n = 112u32;
    let z2 = DEFAULT_Z * DEFAULT_Z;
    for i in 0..=20 {
        let score = i as f64 / 20.0;
        let ci = compute_interval(score, n, DEFAULT_Z).unwrap();
        let center = (score + z2 / (2.0 * n as f64)) / (1.0 + z2 / n as f64);
        assert!(ci.lower <= center + 1e-12, "score {score}");
        assert!(center <= ci.upper + 1e-12, "score {score}");
    }
}

#[test]
fn test_interval_narrows_with_sample_size() {
    let mut last = f64::INFINITY;
    for n in [10u32, 100, 1_000, 10_000, 1_000_000] {
        let width = compute_interval(0.7, n, DEFAULT_Z).unwrap().width();
        assert!(width < last);
        last = width;
    }
    assert!(last < 0.002);
}

#[test]
fn test_interval_at_boundaries_stays_in_unit_range() {
    let zero = compute_interval(0.0, 112, DEFAULT_Z).unwrap();
    assert!(zero.lower.abs() < 1e-12);
    assert!((zero.upper - 0.033163).abs() < 1e-5);

    let one = compute_interval(1.0, 112, DEFAULT_Z).unwrap();
    assert!((one.lower - 0.966837).abs() < 1e-5);
    assert!((one.upper - 1.0).abs() < 1e-12);
}

#[test]
fn test_interval_custom_z() {
    let ci = compute_interval(0.5, 10, 1.0).unwrap();
    assert!((ci.lower - 0.349244).abs() < 1e-5);
    assert!((ci.upper - 0.650756).abs() < 1e-5);
}

#[test]
fn test_interval_rejects_zero_n() {
    assert!(matches!(
        compute_interval(0.5, 0, DEFAULT_Z),
        Err(StatsError::InvalidArgument(_))
    ));
}

#[test]
fn test_interval_rejects_bad_z() {
    assert!(compute_interval(0.5, 10, 0.0).is_err());
    assert!(compute_interval(0.5, 10, f64::NAN).is_err());
}

#[test]
fn test_interval_rejects_score_without_variance() {
    assert!(matches!(
        compute_interval(1.5, 112, DEFAULT_Z),
        Err(StatsError::InvalidArgument(_))
    ));
}

#[test]
fn test_extreme_scores_touch_unit_bounds_exactly() {
    for n in 1..=2000u32 {
        let zero = compute_interval(0.0, n, DEFAULT_Z).unwrap();
        assert_eq!(zero.lower, 0.0, "n {n}");
        assert!(zero.is_within_unit(), "n {n}");

        let one = compute_interval(1.0, n, DEFAULT_Z).unwrap();
        assert_eq!(one.upper, 1.0, "n {n}");
        assert!(one.is_within_unit(), "n {n}");
    }
}

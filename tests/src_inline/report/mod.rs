
use super::*;

#[test]
fn test_mean() {
    let v = vec![0.848, 0.804, 0.786, 0.688, 0.759, 0.580];
    assert!((mean(&v) - 0.744_166_666_666_666_6).abs() < 1e-9);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_formatting() {
    assert_eq!(format_score(0.8479), "0.848");
    assert_eq!(format_score(0.58), "0.580");
    assert_eq!(format_f64_6(1.96), "1.960000");
}

#[test]
fn test_bool_fraction() {
    assert_eq!(bool_fraction(&[]), 0.0);
    assert_eq!(bool_fraction(&[true, false, true, false]), 0.5);
}

//! Unit tests for the shared math primitives

use tokensight::common::math;

#[test]
fn test_mean_empty() {
    assert!(math::mean(&[]).is_none());
}

#[test]
fn test_sma_short_series() {
    assert!(math::sma(&[1.0, 2.0], 3).is_none());
}

#[test]
fn test_sma_uses_last_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::sma(&values, 3), Some(4.0));
}

#[test]
fn test_ema_seed_equals_sma() {
    // With exactly `period` values the EMA is just the seed SMA.
    let values = [2.0, 4.0, 6.0];
    assert_eq!(math::ema(&values, 3), Some(4.0));
}

#[test]
fn test_ema_tracks_rising_series() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let ema = math::ema(&values, 12).unwrap();
    let sma = math::sma(&values, 12).unwrap();
    // EMA weights recent prices more, so it sits above the SMA on a rise.
    assert!(ema > sma - 1.0);
    assert!(ema < *values.last().unwrap());
}

#[test]
fn test_ema_from_previous_step() {
    let next = math::ema_from_previous(110.0, 100.0, 9);
    assert!((next - 102.0).abs() < 1e-9);
}

#[test]
fn test_standard_deviation_constant_series() {
    let values = [5.0; 10];
    assert_eq!(math::standard_deviation(&values, 10), Some(0.0));
}

#[test]
fn test_standard_deviation_population_form() {
    // Population sigma of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = math::standard_deviation(&values, 8).unwrap();
    assert!((std - 2.0).abs() < 1e-9);
}

#[test]
fn test_clamps() {
    assert_eq!(math::clamp_signed(1.7), 1.0);
    assert_eq!(math::clamp_signed(-1.7), -1.0);
    assert_eq!(math::clamp_unit(-0.2), 0.0);
    assert_eq!(math::clamp_unit(1.2), 1.0);
}

#[test]
fn test_to_unit_mapping() {
    assert_eq!(math::to_unit(-1.0), 0.0);
    assert_eq!(math::to_unit(0.0), 0.5);
    assert_eq!(math::to_unit(1.0), 1.0);
}

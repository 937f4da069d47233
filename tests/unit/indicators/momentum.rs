//! Unit tests for RSI and MACD

use chrono::Utc;
use tokensight::indicators::{calculate_macd, calculate_macd_default, calculate_rsi, calculate_rsi_default};
use tokensight::models::OhlcBar;

fn bars_from_closes(closes: &[f64]) -> Vec<OhlcBar> {
    closes
        .iter()
        .map(|&close| OhlcBar::new(Utc::now(), close, close + 0.1, close - 0.1, close, None))
        .collect()
}

fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_rsi_insufficient_history() {
    // 14 deltas need 15 bars.
    let bars = bars_from_closes(&rising_closes(14));
    assert!(calculate_rsi_default(&bars).is_none());
}

#[test]
fn test_rsi_all_gains_reads_100() {
    let bars = bars_from_closes(&rising_closes(20));
    assert_eq!(calculate_rsi_default(&bars), Some(100.0));
}

#[test]
fn test_rsi_all_losses_reads_0() {
    let closes: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
    let bars = bars_from_closes(&closes);
    assert_eq!(calculate_rsi_default(&bars), Some(0.0));
}

#[test]
fn test_rsi_stays_in_bounds() {
    // Zigzag series with mixed gains and losses.
    let closes: Vec<f64> = (0..40)
        .map(|i| 100.0 + if i % 2 == 0 { -1.4 } else { 0.9 } * (i as f64 / 2.0).ceil())
        .collect();
    let rsi = calculate_rsi(&bars_from_closes(&closes), 14).unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_macd_insufficient_history() {
    let bars = bars_from_closes(&rising_closes(25));
    assert!(calculate_macd_default(&bars).is_none());
}

#[test]
fn test_macd_signal_fallback_with_minimal_history() {
    // Exactly 26 bars produces a single MACD value; the signal line falls
    // back to it and the histogram collapses to zero.
    let bars = bars_from_closes(&rising_closes(26));
    let macd = calculate_macd_default(&bars).unwrap();
    assert_eq!(macd.signal_line, macd.macd_line);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_positive_histogram_on_accelerating_rise() {
    // The histogram reads momentum change, so it needs an accelerating
    // trend to pick a sign: the fast EMA pulls ahead of the slow one and
    // the signal line lags below the widening MACD values.
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + 0.05 * (i * i) as f64).collect();
    let macd = calculate_macd_default(&bars_from_closes(&closes)).unwrap();
    assert!(macd.macd_line > 0.0);
    assert!(macd.histogram > 0.0);
}

#[test]
fn test_macd_negative_histogram_on_accelerating_fall() {
    let closes: Vec<f64> = (0..80).map(|i| 500.0 - 0.05 * (i * i) as f64).collect();
    let macd = calculate_macd_default(&bars_from_closes(&closes)).unwrap();
    assert!(macd.macd_line < 0.0);
    assert!(macd.histogram < 0.0);
}

#[test]
fn test_macd_histogram_flat_on_linear_ramp() {
    // On an exactly linear ramp both EMAs ride at their steady-state lag
    // from the seed onward, so every derived MACD value equals the
    // constant slope times the lag difference and the signal line matches
    // the MACD line. Constant momentum carries no histogram signal.
    let bars = bars_from_closes(&rising_closes(60));
    let macd = calculate_macd_default(&bars).unwrap();
    assert!((macd.macd_line - 7.0).abs() < 1e-6);
    assert!(macd.histogram.abs() < 1e-6);
}

#[test]
fn test_macd_custom_periods() {
    let bars = bars_from_closes(&rising_closes(40));
    let macd = calculate_macd(&bars, 5, 10, 3).unwrap();
    assert!(macd.macd_line > 0.0);
}

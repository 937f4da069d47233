//! Unit tests for SMA/EMA calculators

use chrono::Utc;
use tokensight::indicators::{calculate_ema, calculate_sma};
use tokensight::models::OhlcBar;

fn rising_bars(count: usize, start: f64) -> Vec<OhlcBar> {
    (0..count)
        .map(|i| {
            let close = start + i as f64;
            OhlcBar::new(Utc::now(), close - 0.5, close + 0.2, close - 0.7, close, None)
        })
        .collect()
}

#[test]
fn test_sma_insufficient_history() {
    let bars = rising_bars(10, 100.0);
    assert!(calculate_sma(&bars, 20).is_none());
}

#[test]
fn test_sma_exact_window() {
    let bars = rising_bars(20, 100.0);
    // Closes are 100..119, mean 109.5.
    assert_eq!(calculate_sma(&bars, 20), Some(109.5));
}

#[test]
fn test_sma_uses_most_recent_window() {
    let bars = rising_bars(25, 100.0);
    // Last 20 closes are 105..124, mean 114.5.
    assert_eq!(calculate_sma(&bars, 20), Some(114.5));
}

#[test]
fn test_ema_insufficient_history() {
    let bars = rising_bars(11, 100.0);
    assert!(calculate_ema(&bars, 12).is_none());
}

#[test]
fn test_ema_lags_last_close_on_rise() {
    let bars = rising_bars(50, 100.0);
    let ema = calculate_ema(&bars, 12).unwrap();
    let last_close = bars.last().unwrap().close;
    assert!(ema < last_close);
    assert!(ema > calculate_sma(&bars, 50).unwrap());
}

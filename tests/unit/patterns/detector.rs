//! Unit tests for candlestick pattern detection

use chrono::Utc;
use tokensight::models::{CandlePattern, OhlcBar};
use tokensight::patterns::detect_patterns;

fn candle(open: f64, high: f64, low: f64, close: f64) -> OhlcBar {
    OhlcBar::new(Utc::now(), open, high, low, close, None)
}

#[test]
fn test_empty_series_has_no_patterns() {
    assert!(detect_patterns(&[]).is_empty());
}

#[test]
fn test_bullish_engulfing() {
    let bars = vec![
        candle(105.0, 106.0, 99.0, 100.0),  // bearish
        candle(99.5, 107.5, 99.0, 107.0),   // bullish, engulfs previous body
    ];
    let patterns = detect_patterns(&bars);
    assert!(patterns.contains(&CandlePattern::BullishEngulfing));
    assert!(!patterns.contains(&CandlePattern::BearishEngulfing));
}

#[test]
fn test_bearish_engulfing() {
    let bars = vec![
        candle(100.0, 106.0, 99.0, 105.0),  // bullish
        candle(105.5, 106.0, 98.0, 99.0),   // bearish, engulfs previous body
    ];
    let patterns = detect_patterns(&bars);
    assert!(patterns.contains(&CandlePattern::BearishEngulfing));
    assert!(!patterns.contains(&CandlePattern::BullishEngulfing));
}

#[test]
fn test_partial_overlap_is_not_engulfing() {
    let bars = vec![
        candle(105.0, 106.0, 99.0, 100.0),
        candle(102.0, 108.0, 101.0, 107.0), // opens above previous close
    ];
    assert!(!detect_patterns(&bars).contains(&CandlePattern::BullishEngulfing));
}

#[test]
fn test_morning_star() {
    let bars = vec![
        candle(110.0, 111.0, 99.0, 100.0),   // large bearish body (10)
        candle(100.5, 101.5, 99.5, 101.0),   // small body (0.5 < 3.0)
        candle(101.5, 110.0, 101.0, 109.0),  // bullish close above midpoint 105
    ];
    assert!(detect_patterns(&bars).contains(&CandlePattern::MorningStar));
}

#[test]
fn test_evening_star() {
    let bars = vec![
        candle(100.0, 111.0, 99.0, 110.0),   // large bullish body
        candle(110.5, 112.0, 109.5, 111.0),  // small body
        candle(110.0, 110.5, 100.0, 101.0),  // bearish close below midpoint 105
    ];
    assert!(detect_patterns(&bars).contains(&CandlePattern::EveningStar));
}

#[test]
fn test_wide_middle_bar_breaks_star() {
    let bars = vec![
        candle(110.0, 111.0, 99.0, 100.0),
        candle(100.0, 106.0, 99.0, 105.0),  // body 5 > 30% of 10
        candle(105.0, 110.0, 104.0, 109.0),
    ];
    assert!(!detect_patterns(&bars).contains(&CandlePattern::MorningStar));
}

#[test]
fn test_hammer() {
    // Body 1, lower wick 5, upper wick 0.2.
    let bars = vec![candle(100.0, 101.2, 95.0, 101.0)];
    let patterns = detect_patterns(&bars);
    assert!(patterns.contains(&CandlePattern::Hammer));
    assert!(!patterns.contains(&CandlePattern::ShootingStar));
}

#[test]
fn test_shooting_star() {
    // Body 1, upper wick 5, lower wick 0.2.
    let bars = vec![candle(101.0, 106.0, 99.8, 100.0)];
    let patterns = detect_patterns(&bars);
    assert!(patterns.contains(&CandlePattern::ShootingStar));
    assert!(!patterns.contains(&CandlePattern::Hammer));
}

#[test]
fn test_doji_is_neither_hammer_nor_star() {
    // Zero body: wick ratios are undefined, nothing should fire.
    let bars = vec![candle(100.0, 103.0, 97.0, 100.0)];
    assert!(detect_patterns(&bars).is_empty());
}

#[test]
fn test_multiple_patterns_reported_together() {
    // Final bar both engulfs the previous bar and completes a morning star.
    let bars = vec![
        candle(110.0, 111.0, 99.0, 100.0),  // large bearish
        candle(101.0, 101.6, 99.5, 100.2),  // small bearish body (0.8)
        candle(99.8, 112.0, 99.5, 111.0),   // engulfing bullish, above midpoint
    ];
    let patterns = detect_patterns(&bars);
    assert!(patterns.contains(&CandlePattern::BullishEngulfing));
    assert!(patterns.contains(&CandlePattern::MorningStar));
}

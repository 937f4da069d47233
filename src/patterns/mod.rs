//! Candlestick reversal pattern detection.
//!
//! Classifies only the most recent 1-3 bars; the window size is constant
//! regardless of series length. Non-conflicting patterns are reported
//! together as a set.

use crate::models::indicators::CandlePattern;
use crate::models::market::OhlcBar;

/// Middle bar of a star pattern must stay under this fraction of the first
/// bar's body.
const STAR_MIDDLE_BODY_RATIO: f64 = 0.3;

/// Detect all reversal patterns present on the tail of the series.
pub fn detect_patterns(bars: &[OhlcBar]) -> Vec<CandlePattern> {
    let mut patterns = Vec::new();

    if let Some(last) = bars.last() {
        if is_hammer(last) {
            patterns.push(CandlePattern::Hammer);
        }
        if is_shooting_star(last) {
            patterns.push(CandlePattern::ShootingStar);
        }
    }

    if bars.len() >= 2 {
        let prev = &bars[bars.len() - 2];
        let curr = &bars[bars.len() - 1];
        if is_bullish_engulfing(prev, curr) {
            patterns.push(CandlePattern::BullishEngulfing);
        }
        if is_bearish_engulfing(prev, curr) {
            patterns.push(CandlePattern::BearishEngulfing);
        }
    }

    if bars.len() >= 3 {
        let first = &bars[bars.len() - 3];
        let middle = &bars[bars.len() - 2];
        let third = &bars[bars.len() - 1];
        if is_morning_star(first, middle, third) {
            patterns.push(CandlePattern::MorningStar);
        }
        if is_evening_star(first, middle, third) {
            patterns.push(CandlePattern::EveningStar);
        }
    }

    patterns
}

/// Bearish bar fully engulfed by the following bullish bar.
fn is_bullish_engulfing(prev: &OhlcBar, curr: &OhlcBar) -> bool {
    prev.is_bearish() && curr.is_bullish() && curr.open < prev.close && curr.close > prev.open
}

fn is_bearish_engulfing(prev: &OhlcBar, curr: &OhlcBar) -> bool {
    prev.is_bullish() && curr.is_bearish() && curr.open > prev.close && curr.close < prev.open
}

/// Large bearish bar, small middle body, large bullish bar closing above
/// the midpoint of the first body.
fn is_morning_star(first: &OhlcBar, middle: &OhlcBar, third: &OhlcBar) -> bool {
    first.is_bearish()
        && first.body() > 0.0
        && middle.body() < first.body() * STAR_MIDDLE_BODY_RATIO
        && third.is_bullish()
        && third.close > first.body_midpoint()
}

fn is_evening_star(first: &OhlcBar, middle: &OhlcBar, third: &OhlcBar) -> bool {
    first.is_bullish()
        && first.body() > 0.0
        && middle.body() < first.body() * STAR_MIDDLE_BODY_RATIO
        && third.is_bearish()
        && third.close < first.body_midpoint()
}

/// Long lower wick (>2x body) with a short upper wick (<0.5x body).
fn is_hammer(bar: &OhlcBar) -> bool {
    let body = bar.body();
    body > 0.0 && bar.lower_wick() > 2.0 * body && bar.upper_wick() < 0.5 * body
}

fn is_shooting_star(bar: &OhlcBar) -> bool {
    let body = bar.body();
    body > 0.0 && bar.upper_wick() > 2.0 * body && bar.lower_wick() < 0.5 * body
}

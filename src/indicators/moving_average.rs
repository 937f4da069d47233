//! SMA and EMA over the close series.

use crate::common::math;
use crate::models::market::OhlcBar;

/// Simple moving average of the last `period` closes.
pub fn calculate_sma(bars: &[OhlcBar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period)
}

/// Exponential moving average over the whole close series.
///
/// Seeded with the SMA of the first `period` closes, then the 2/(n+1)
/// multiplier is applied across the remainder.
pub fn calculate_ema(bars: &[OhlcBar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema(&closes, period)
}

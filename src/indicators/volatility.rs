//! Bollinger Bands.

use crate::common::math;
use crate::models::indicators::BollingerBands;
use crate::models::market::OhlcBar;

/// Calculate Bollinger Bands.
///
/// Middle = SMA(period); bands = middle ± std_dev_mult × population
/// standard deviation of the last `period` closes.
pub fn calculate_bollinger(
    bars: &[OhlcBar],
    period: usize,
    std_dev_mult: f64,
) -> Option<BollingerBands> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let middle = math::sma(&closes, period)?;
    let std = math::standard_deviation(&closes, period)?;

    Some(BollingerBands {
        middle,
        upper: middle + std_dev_mult * std,
        lower: middle - std_dev_mult * std,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ).
pub fn calculate_bollinger_default(bars: &[OhlcBar]) -> Option<BollingerBands> {
    calculate_bollinger(bars, 20, 2.0)
}

//! Assembles the full indicator set for one OHLC series.

use tracing::debug;

use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::moving_average::{calculate_ema, calculate_sma};
use crate::indicators::volatility::calculate_bollinger_default;
use crate::models::indicators::IndicatorSet;
use crate::models::market::OhlcBar;

/// Compute every indicator the series can support.
///
/// Indicators whose window exceeds the series length come back `None`;
/// this function never fails on a short series.
pub fn compute_indicator_set(bars: &[OhlcBar]) -> IndicatorSet {
    let set = IndicatorSet {
        sma_20: calculate_sma(bars, 20),
        sma_50: calculate_sma(bars, 50),
        sma_200: calculate_sma(bars, 200),
        ema_12: calculate_ema(bars, 12),
        ema_26: calculate_ema(bars, 26),
        rsi_14: calculate_rsi_default(bars),
        macd: calculate_macd_default(bars),
        bollinger: calculate_bollinger_default(bars),
    };

    debug!(
        bars = bars.len(),
        rsi = ?set.rsi_14,
        has_macd = set.macd.is_some(),
        "computed indicator set"
    );

    set
}

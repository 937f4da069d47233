//! Momentum indicators: RSI and MACD.

use crate::common::math;
use crate::models::indicators::MacdIndicator;
use crate::models::market::OhlcBar;

/// Calculate RSI over the last `period` single-bar deltas.
///
/// RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss.
/// A window with no losses reads as fully bullish: RSI = 100. That is a
/// defined edge case, not an error.
pub fn calculate_rsi(bars: &[OhlcBar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for window in bars[bars.len() - period - 1..].windows(2) {
        let change = window[1].close - window[0].close;
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with the default period (14).
pub fn calculate_rsi_default(bars: &[OhlcBar]) -> Option<f64> {
    calculate_rsi(bars, 14)
}

/// Calculate MACD.
///
/// MACD line = EMA(fast) - EMA(slow); signal line = EMA(signal_period) of
/// the derived MACD-value series. When fewer than `signal_period` MACD
/// values exist the signal line falls back to the latest MACD value rather
/// than returning `None`, so the histogram reads 0 until enough history
/// accumulates.
pub fn calculate_macd(
    bars: &[OhlcBar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if bars.len() < slow_period {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast_ema = math::ema(&closes, fast_period)?;
    let slow_ema = math::ema(&closes, slow_period)?;
    let macd_line = fast_ema - slow_ema;

    // Rebuild the MACD-value series bar by bar so the signal line has a
    // real history to smooth over.
    let mut macd_values = Vec::new();
    let mut fast_prev = math::sma(&closes[..fast_period], fast_period)?;
    let mut slow_prev = math::sma(&closes[..slow_period], slow_period)?;

    for i in fast_period..closes.len() {
        fast_prev = math::ema_from_previous(closes[i], fast_prev, fast_period);
        if i >= slow_period {
            slow_prev = math::ema_from_previous(closes[i], slow_prev, slow_period);
            macd_values.push(fast_prev - slow_prev);
        }
    }
    if macd_values.is_empty() {
        macd_values.push(macd_line);
    }

    let signal_line = if macd_values.len() < signal_period {
        *macd_values.last().unwrap_or(&macd_line)
    } else {
        math::ema(&macd_values, signal_period)?
    };

    Some(MacdIndicator {
        macd_line,
        signal_line,
        histogram: macd_line - signal_line,
    })
}

/// Calculate MACD with the default periods (12, 26, 9).
pub fn calculate_macd_default(bars: &[OhlcBar]) -> Option<MacdIndicator> {
    calculate_macd(bars, 12, 26, 9)
}

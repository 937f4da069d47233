//! Per-dimension scoring primitives shared by both composite forms.

use crate::common::math;
use crate::config::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::models::indicators::{CandlePattern, IndicatorSet};
use crate::models::onchain::{NetworkStats, RiskMetrics};
use crate::models::sentiment::SentimentSnapshot;
use crate::sentiment;

/// Empirical log10 ceiling for active addresses and transaction counts.
const ACTIVITY_LOG_CEILING: f64 = 6.0;
/// Empirical log10 ceiling for total value locked (USD).
const TVL_LOG_CEILING: f64 = 10.0;

/// Technical dimension in [-1, +1].
///
/// Signed contributions: moving-average ordering (+0.2 each for
/// sma20>sma50 and sma50>sma200), RSI extremes (±0.3), MACD histogram sign
/// (±0.2), and net pattern count ×0.1. Unavailable indicators contribute
/// nothing rather than zeroing the whole dimension.
pub fn technical_score(indicators: &IndicatorSet, patterns: &[CandlePattern]) -> f64 {
    let mut score = 0.0;

    if let (Some(sma_20), Some(sma_50)) = (indicators.sma_20, indicators.sma_50) {
        if sma_20 > sma_50 {
            score += 0.2;
        }
    }
    if let (Some(sma_50), Some(sma_200)) = (indicators.sma_50, indicators.sma_200) {
        if sma_50 > sma_200 {
            score += 0.2;
        }
    }

    if let Some(rsi) = indicators.rsi_14 {
        if rsi < RSI_OVERSOLD {
            score += 0.3;
        } else if rsi > RSI_OVERBOUGHT {
            score -= 0.3;
        }
    }

    if let Some(macd) = &indicators.macd {
        if macd.histogram > 0.0 {
            score += 0.2;
        } else if macd.histogram < 0.0 {
            score -= 0.2;
        }
    }

    let bullish = patterns.iter().filter(|p| p.is_bullish()).count() as f64;
    let bearish = patterns.iter().filter(|p| p.is_bearish()).count() as f64;
    score += (bullish - bearish) * 0.1;

    math::clamp_signed(score)
}

/// Fundamental dimension in [0, 1]: log-compressed network activity.
pub fn fundamental_score(stats: &NetworkStats) -> f64 {
    let activity = log_compress(stats.active_addresses as f64, ACTIVITY_LOG_CEILING);
    let throughput = log_compress(stats.transaction_count as f64, ACTIVITY_LOG_CEILING);
    let locked = log_compress(stats.total_value_locked, TVL_LOG_CEILING);
    math::clamp_unit((activity + throughput + locked) / 3.0)
}

/// log10-compress a raw count against an empirical ceiling, capped at 1.
fn log_compress(value: f64, ceiling: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    math::clamp_unit((value + 1.0).log10() / ceiling)
}

/// Social dimension in [-1, +1], delegated to the sentiment normalizer.
pub fn social_score(snapshot: &SentimentSnapshot) -> f64 {
    sentiment::social_score(snapshot)
}

/// Risk dimension in [0, 1]: 1 minus the blended raw risk, so a higher
/// value always reads as "more favorable".
///
/// Raw blend: volatility 0.3, liquidity tier 0.25, concentration tier 0.25,
/// sentiment polarization 0.2 (neutral 0.5 when sentiment is absent).
pub fn risk_score(metrics: &RiskMetrics, sentiment: Option<&SentimentSnapshot>) -> f64 {
    let volatility = metrics.volume_volatility.min(1.0);
    let liquidity = metrics.liquidity_risk.as_score();
    let concentration = metrics.concentration_risk.as_score();
    let sentiment_volatility = sentiment.map(|s| s.percentage_spread()).unwrap_or(0.5);

    let raw =
        0.3 * volatility + 0.25 * liquidity + 0.25 * concentration + 0.2 * sentiment_volatility;
    math::clamp_unit(1.0 - raw)
}

/// On-chain contribution to the signal composite, mapped into [-1, +1].
/// Low raw risk pushes the recommendation up, high risk pulls it down.
pub fn onchain_signal_score(metrics: &RiskMetrics) -> f64 {
    math::clamp_signed(2.0 * (1.0 - metrics.overall_risk_score) - 1.0)
}

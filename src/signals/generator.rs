//! Maps the signal-form composite total to a discrete recommendation with
//! entry, stop, and target prices.

use tracing::debug;

use crate::models::indicators::{BollingerBands, SupportResistance};
use crate::models::onchain::OnChainSnapshot;
use crate::models::sentiment::SentimentSnapshot;
use crate::models::signal::{RiskLevel, SignalAction, TradingSignal};
use crate::onchain;

/// Band width (relative to the middle band) treated as maximum volatility.
const MAX_RELATIVE_BAND_WIDTH: f64 = 0.2;

/// Everything the generator needs beyond the composite total.
pub struct SignalContext<'a> {
    pub levels: &'a SupportResistance,
    pub bollinger: Option<&'a BollingerBands>,
    pub sentiment: Option<&'a SentimentSnapshot>,
    pub onchain: Option<&'a OnChainSnapshot>,
}

/// Produce the trading signal for one analysis.
pub fn generate_signal(total_score: f64, ctx: &SignalContext<'_>) -> TradingSignal {
    let (overall_signal, confidence) = action_for(total_score);
    let risk_level = risk_level(ctx);

    // Prices come straight from detected levels; nothing is fabricated
    // when the level lists are empty.
    let entry_points = ctx.levels.support.clone();
    let stop_loss = ctx
        .levels
        .support
        .first()
        .map(|lowest| lowest * 0.95);
    let take_profit = ctx
        .levels
        .resistance
        .last()
        .map(|highest| highest * 1.05);

    debug!(
        total_score,
        ?overall_signal,
        ?risk_level,
        entries = entry_points.len(),
        "generated trading signal"
    );

    TradingSignal {
        overall_signal,
        confidence,
        risk_level,
        entry_points,
        stop_loss,
        take_profit,
    }
}

/// Threshold map from the signal-form total to action and confidence.
fn action_for(total_score: f64) -> (SignalAction, f64) {
    if total_score > 0.7 {
        (SignalAction::StrongBuy, 0.8)
    } else if total_score > 0.3 {
        (SignalAction::Buy, 0.6)
    } else if total_score < -0.7 {
        (SignalAction::StrongSell, 0.8)
    } else if total_score < -0.3 {
        (SignalAction::Sell, 0.6)
    } else {
        (SignalAction::Neutral, 0.4)
    }
}

/// Risk level from a blend of volatility, sentiment polarization, and
/// whale activity. Components without data are left out of the average;
/// with no data at all the level defaults to medium.
fn risk_level(ctx: &SignalContext<'_>) -> RiskLevel {
    let mut components = Vec::new();

    if let Some(bands) = ctx.bollinger {
        let width = (bands.relative_width() / MAX_RELATIVE_BAND_WIDTH).clamp(0.0, 1.0);
        components.push(width);
    }
    if let Some(sentiment) = ctx.sentiment {
        components.push(sentiment.percentage_spread());
    }
    if let Some(snapshot) = ctx.onchain {
        components.push(onchain::large_transaction_frequency(&snapshot.transactions));
    }

    if components.is_empty() {
        return RiskLevel::Medium;
    }

    let blend = components.iter().sum::<f64>() / components.len() as f64;
    if blend > 0.7 {
        RiskLevel::High
    } else if blend > 0.3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

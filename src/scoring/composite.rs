//! The two composite forms: the narrow signal score and the full metrics
//! score, both built from the same dimension primitives.

use tracing::debug;

use crate::common::math;
use crate::models::indicators::{CandlePattern, IndicatorSet};
use crate::models::onchain::{NetworkStats, RiskMetrics};
use crate::models::sentiment::SentimentSnapshot;
use crate::models::signal::{CompositeScore, DimensionFlags, Rating, TrendLabel};
use crate::scoring::dimensions;
use crate::scoring::weights::{MetricsWeights, SignalWeights};

/// Analyzer outputs shared by both composite forms.
pub struct DimensionInputs<'a> {
    pub indicators: &'a IndicatorSet,
    pub patterns: &'a [CandlePattern],
    pub network_stats: Option<&'a NetworkStats>,
    pub risk_metrics: Option<&'a RiskMetrics>,
    pub sentiment: Option<&'a SentimentSnapshot>,
}

impl DimensionInputs<'_> {
    pub fn flags(&self) -> DimensionFlags {
        DimensionFlags {
            onchain: self.risk_metrics.is_some(),
            sentiment: self.sentiment.is_some(),
        }
    }
}

/// 3-input composite total in [-1, +1], feeding the signal generator.
///
/// Missing dimensions score 0 (neutral) so the threshold map stays stable
/// and the total remains monotone in the technical score.
pub fn signal_total(inputs: &DimensionInputs<'_>) -> f64 {
    let technical = dimensions::technical_score(inputs.indicators, inputs.patterns);
    let social = inputs
        .sentiment
        .map(dimensions::social_score)
        .unwrap_or(0.0);
    let onchain = inputs
        .risk_metrics
        .map(dimensions::onchain_signal_score)
        .unwrap_or(0.0);

    let total = SignalWeights::TECHNICAL * technical
        + SignalWeights::SENTIMENT * social
        + SignalWeights::ONCHAIN * onchain;

    debug!(technical, social, onchain, total, "signal composite");
    math::clamp_signed(total)
}

/// Full 5-dimension composite used for general token scoring.
///
/// Absent dimensions score neutral and are excluded from both the weighted
/// total (via renormalization) and the confidence variance.
pub fn metrics_composite(inputs: &DimensionInputs<'_>) -> CompositeScore {
    let flags = inputs.flags();

    let technical = dimensions::technical_score(inputs.indicators, inputs.patterns);
    let fundamental = inputs
        .network_stats
        .map(dimensions::fundamental_score)
        .unwrap_or(0.0);
    let social = inputs
        .sentiment
        .map(dimensions::social_score)
        .unwrap_or(0.0);
    let risk = inputs
        .risk_metrics
        .map(|m| dimensions::risk_score(m, inputs.sentiment))
        .unwrap_or(0.0);

    let total = metrics_total(technical, fundamental, social, risk, flags);

    let mut unit_scores = vec![math::to_unit(technical)];
    if flags.onchain {
        unit_scores.push(fundamental);
        unit_scores.push(risk);
    }
    if flags.sentiment {
        unit_scores.push(math::to_unit(social));
    }
    let confidence = confidence(&unit_scores);

    debug!(
        technical,
        fundamental, social, risk, total, confidence, "metrics composite"
    );

    CompositeScore {
        technical_score: technical,
        fundamental_score: fundamental,
        social_score: social,
        risk_score: risk,
        total_score: total,
        confidence,
        rating: rating(total),
        trend: trend_label(inputs.indicators),
    }
}

/// Weighted metrics total over the dimensions present, renormalized.
///
/// Signed dimensions are mapped into [0, 1] before weighting so the rating
/// thresholds (0.8 … 0.3) apply uniformly.
pub fn metrics_total(
    technical: f64,
    fundamental: f64,
    social: f64,
    risk: f64,
    flags: DimensionFlags,
) -> f64 {
    let weights = MetricsWeights::for_flags(flags);
    let weight_sum = weights.sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }

    let weighted = weights.technical * math::to_unit(technical)
        + weights.fundamental * fundamental
        + weights.social * math::to_unit(social)
        + weights.risk * risk;

    math::clamp_unit(weighted / weight_sum)
}

/// Confidence from agreement between the present dimension scores, each
/// mapped into [0, 1]: 1 - 2·sqrt(variance around 0.5). Scores that agree
/// with each other produce higher confidence than scores that disagree.
pub fn confidence(unit_scores: &[f64]) -> f64 {
    if unit_scores.is_empty() {
        return 0.0;
    }
    let variance = unit_scores
        .iter()
        .map(|s| (s - 0.5).powi(2))
        .sum::<f64>()
        / unit_scores.len() as f64;
    math::clamp_unit(1.0 - 2.0 * variance.sqrt())
}

/// Bucket the metrics total into a letter rating.
pub fn rating(total: f64) -> Rating {
    if total > 0.8 {
        Rating::APlus
    } else if total > 0.7 {
        Rating::A
    } else if total > 0.6 {
        Rating::BPlus
    } else if total > 0.5 {
        Rating::B
    } else if total > 0.4 {
        Rating::CPlus
    } else if total > 0.3 {
        Rating::C
    } else {
        Rating::D
    }
}

/// Trend label from the moving-average ordering.
pub fn trend_label(indicators: &IndicatorSet) -> TrendLabel {
    match (indicators.sma_20, indicators.sma_50, indicators.sma_200) {
        (Some(s20), Some(s50), Some(s200)) if s20 > s50 && s50 > s200 => TrendLabel::Bullish,
        (Some(s20), Some(s50), Some(s200)) if s20 < s50 && s50 < s200 => TrendLabel::Bearish,
        (Some(s20), Some(s50), None) if s20 > s50 => TrendLabel::Bullish,
        (Some(s20), Some(s50), None) if s20 < s50 => TrendLabel::Bearish,
        _ => TrendLabel::Sideways,
    }
}

//! Social sentiment snapshot input.

use serde::{Deserialize, Serialize};

/// Aggregated social sentiment for one asset, as delivered by the upstream
/// sentiment store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// Net sentiment in [-1, +1].
    pub score: f64,
    /// Strength of the sentiment regardless of direction, >= 0.
    pub magnitude: f64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub mentions: u64,
}

impl SentimentSnapshot {
    /// Spread between positive and negative shares, in [0, 1]. A wide
    /// spread marks a polarized crowd and feeds the risk-level blend.
    pub fn percentage_spread(&self) -> f64 {
        ((self.positive_percentage - self.negative_percentage).abs() / 100.0).clamp(0.0, 1.0)
    }
}

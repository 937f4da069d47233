//! Engine invocation contract: the analysis request and the output report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::TechnicalSnapshot;
use crate::models::market::OhlcBar;
use crate::models::onchain::{OnChainSnapshot, RiskMetrics};
use crate::models::sentiment::SentimentSnapshot;
use crate::models::signal::{CompositeScore, DimensionFlags, TradingSignal};

/// Supported analysis timeframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1d",
            Timeframe::OneWeek => "1w",
            Timeframe::OneMonth => "1m",
            Timeframe::ThreeMonths => "3m",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the engine needs for one analysis. The caller has already
/// fetched these snapshots; the engine performs no I/O of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub asset_id: String,
    pub timeframe: Timeframe,
    /// Ordered oldest-first.
    pub ohlc: Vec<OhlcBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onchain: Option<OnChainSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSnapshot>,
}

/// Full analysis output, produced fresh on every call and handed to the
/// persistence collaborator keyed by (asset_id, timeframe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub asset_id: String,
    pub timeframe: Timeframe,
    pub technical: TechnicalSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_metrics: Option<RiskMetrics>,
    pub composite: CompositeScore,
    pub signal: TradingSignal,
    pub dimensions: DimensionFlags,
    pub computed_at: DateTime<Utc>,
}

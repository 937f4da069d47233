//! Composite score and trading signal output models.

use serde::{Deserialize, Serialize};

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Letter rating bucketed from the composite total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Bullish,
    Bearish,
    Sideways,
}

/// Which optional inputs were actually present for this analysis. Missing
/// dimensions are scored neutral rather than failing the call, and these
/// flags are how the caller learns that happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DimensionFlags {
    pub onchain: bool,
    pub sentiment: bool,
}

/// Per-dimension scores and their weighted fusion.
///
/// `technical_score` and `social_score` are signed in [-1, +1];
/// `fundamental_score` and `risk_score` live in [0, 1] with higher always
/// meaning "more favorable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub technical_score: f64,
    pub fundamental_score: f64,
    pub social_score: f64,
    pub risk_score: f64,
    pub total_score: f64,
    pub confidence: f64,
    pub rating: Rating,
    pub trend: TrendLabel,
}

/// The engine's sole output artifact for the recommendation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub overall_signal: SignalAction,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Candidate entries, taken directly from detected support levels.
    pub entry_points: Vec<f64>,
    /// 5% below the lowest support; `None` when no support level exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    /// 5% above the highest resistance; `None` when no resistance exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
}

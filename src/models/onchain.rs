//! On-chain snapshot inputs and derived risk metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One address/balance pair from the holder distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    pub address: String,
    pub balance: f64,
}

/// One raw transfer from the chain explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainTransaction {
    pub from: String,
    pub to: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate network-level figures reported alongside holders and transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NetworkStats {
    pub active_addresses: u64,
    pub transaction_count: u64,
    pub total_value_locked: f64,
    pub total_supply: f64,
}

/// Raw on-chain input. Consumed by the risk analyzer, never persisted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnChainSnapshot {
    pub holders: Vec<Holder>,
    pub transactions: Vec<ChainTransaction>,
    pub network_stats: NetworkStats,
}

/// Discrete risk tier used for concentration and liquidity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Midpoint of the tier as a raw-risk value in [0, 1], for blending.
    pub fn as_score(&self) -> f64 {
        match self {
            RiskTier::VeryLow => 0.1,
            RiskTier::Low => 0.3,
            RiskTier::Medium => 0.5,
            RiskTier::High => 0.7,
            RiskTier::VeryHigh => 0.9,
        }
    }
}

/// Output of the on-chain risk analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub concentration_risk: RiskTier,
    /// Inequality of the holder distribution, in [0, 1].
    pub gini_coefficient: f64,
    /// Standard deviation of successive per-transaction value changes.
    pub volume_volatility: f64,
    pub liquidity_risk: RiskTier,
    /// Weighted blend of the raw risk components, in [0, 1]. Higher is riskier.
    pub overall_risk_score: f64,
}

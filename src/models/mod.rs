//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod onchain;
pub mod report;
pub mod sentiment;
pub mod signal;

pub use indicators::{
    BollingerBands, CandlePattern, IndicatorSet, MacdIndicator, SupportResistance,
    TechnicalSnapshot,
};
pub use market::OhlcBar;
pub use onchain::{ChainTransaction, Holder, NetworkStats, OnChainSnapshot, RiskMetrics, RiskTier};
pub use report::{AnalysisReport, AnalysisRequest, Timeframe};
pub use sentiment::SentimentSnapshot;
pub use signal::{
    CompositeScore, DimensionFlags, Rating, RiskLevel, SignalAction, TradingSignal, TrendLabel,
};

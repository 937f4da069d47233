//! Technical indicator output models.
//!
//! Every field is optional: `None` always means "not enough history to
//! compute this indicator", never zero. Callers must not collapse the two.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: f64,
    pub upper: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// Band width relative to the middle band, a normalized volatility proxy.
    pub fn relative_width(&self) -> f64 {
        if self.middle == 0.0 {
            return 0.0;
        }
        (self.upper - self.lower) / self.middle
    }
}

/// The full indicator snapshot derived from one OHLC series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_12: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_26: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBands>,
}

/// Recurring price levels below (support) and above (resistance) the last
/// close. Both lists are sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SupportResistance {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

/// Named reversal patterns over the last 1-3 candles. Several
/// non-conflicting patterns may hold on the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlePattern {
    BullishEngulfing,
    BearishEngulfing,
    MorningStar,
    EveningStar,
    Hammer,
    ShootingStar,
}

impl CandlePattern {
    pub fn is_bullish(&self) -> bool {
        matches!(
            self,
            CandlePattern::BullishEngulfing | CandlePattern::MorningStar | CandlePattern::Hammer
        )
    }

    pub fn is_bearish(&self) -> bool {
        !self.is_bullish()
    }
}

/// Everything the technical leg of the pipeline produced, bundled for the
/// output report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    #[serde(flatten)]
    pub indicators: IndicatorSet,
    pub support_resistance: SupportResistance,
    pub patterns: Vec<CandlePattern>,
}

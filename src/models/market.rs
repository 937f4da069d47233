//! OHLC market data models.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One time bucket of price history, oldest-first in a series.
///
/// Upstream market-data providers deliver bars either as objects or as
/// positional rows `[open_time_ms, open, high, low, close, volume?]`; the
/// volume column is sometimes absent, so it stays optional here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OhlcBar {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BarRepr {
    Object {
        open_time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        #[serde(default)]
        volume: Option<f64>,
    },
    Row(Vec<f64>),
}

impl<'de> Deserialize<'de> for OhlcBar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match BarRepr::deserialize(deserializer)? {
            BarRepr::Object {
                open_time,
                open,
                high,
                low,
                close,
                volume,
            } => Ok(OhlcBar {
                open_time,
                open,
                high,
                low,
                close,
                volume,
            }),
            BarRepr::Row(columns) => {
                if columns.len() < 5 {
                    return Err(serde::de::Error::custom(format!(
                        "OHLC row needs at least 5 columns, got {}",
                        columns.len()
                    )));
                }
                let open_time = Utc
                    .timestamp_millis_opt(columns[0] as i64)
                    .single()
                    .ok_or_else(|| serde::de::Error::custom("invalid open_time timestamp"))?;
                Ok(OhlcBar {
                    open_time,
                    open: columns[1],
                    high: columns[2],
                    low: columns[3],
                    close: columns[4],
                    volume: columns.get(5).copied(),
                })
            }
        }
    }
}

impl OhlcBar {
    pub fn new(
        open_time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Absolute size of the candle body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Length of the wick above the body.
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Length of the wick below the body.
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.open > self.close
    }

    /// Midpoint of the candle body.
    pub fn body_midpoint(&self) -> f64 {
        (self.open + self.close) / 2.0
    }
}

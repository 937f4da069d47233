//! Engine error taxonomy.
//!
//! Indicator-level "not enough history" is deliberately *not* an error: those
//! cases surface as `None` fields on the indicator set. Errors here are the
//! conditions that make the whole analysis unusable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The OHLC series cannot support any analysis (e.g. it is empty).
    /// Maps to a client-class failure in any wrapping API surface.
    #[error("invalid OHLC series: {0}")]
    InvalidSeries(String),

    /// A scoring stage produced a non-finite value. A NaN must never be
    /// allowed to dress itself up as a plausible trading signal, so this
    /// maps to a server-class failure.
    #[error("numeric corruption in {stage}: computation produced a non-finite value")]
    NumericCorruption { stage: &'static str },
}

impl EngineError {
    /// Whether the error is the caller's fault (bad input) rather than a
    /// defect inside the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(self, EngineError::InvalidSeries(_))
    }
}

//! Dimension weighting tables for the two composite forms.
//!
//! Both the narrow signal form and the full metrics form draw their
//! weights from here so the scoring logic stays single-sourced.

use crate::models::signal::DimensionFlags;

/// Weights of the 3-input signal composite (drives the buy/sell call).
pub struct SignalWeights;

impl SignalWeights {
    pub const TECHNICAL: f64 = 0.5;
    pub const SENTIMENT: f64 = 0.3;
    pub const ONCHAIN: f64 = 0.2;

    pub fn verify() -> bool {
        (Self::TECHNICAL + Self::SENTIMENT + Self::ONCHAIN - 1.0).abs() < 1e-9
    }
}

/// Weights of the 5-dimension metrics composite (general token scoring).
///
/// Technical carries 0.25 normally but takes over at 0.5 when neither
/// on-chain nor sentiment data arrived. The effective weights are
/// renormalized over the dimensions actually present.
#[derive(Debug, Clone, Copy)]
pub struct MetricsWeights {
    pub technical: f64,
    pub fundamental: f64,
    pub social: f64,
    pub risk: f64,
}

impl MetricsWeights {
    pub const TECHNICAL: f64 = 0.25;
    pub const TECHNICAL_SOLO: f64 = 0.5;
    pub const FUNDAMENTAL: f64 = 0.20;
    pub const SOCIAL: f64 = 0.15;
    pub const RISK: f64 = 0.10;

    /// Build the weight row for the dimensions present on this request.
    /// Absent dimensions get weight zero.
    pub fn for_flags(flags: DimensionFlags) -> Self {
        let technical = if !flags.onchain && !flags.sentiment {
            Self::TECHNICAL_SOLO
        } else {
            Self::TECHNICAL
        };
        Self {
            technical,
            fundamental: if flags.onchain { Self::FUNDAMENTAL } else { 0.0 },
            social: if flags.sentiment { Self::SOCIAL } else { 0.0 },
            risk: if flags.onchain { Self::RISK } else { 0.0 },
        }
    }

    pub fn sum(&self) -> f64 {
        self.technical + self.fundamental + self.social + self.risk
    }
}

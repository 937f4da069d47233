//! The analysis engine façade.
//!
//! A pure, synchronous pipeline: raw snapshots → per-dimension analyzers →
//! composite scorer → signal generator → output report. Stateless per call
//! and idempotent apart from the `computed_at` timestamp; concurrent
//! invocations need no coordination.

use chrono::Utc;
use tracing::info;

use crate::error::EngineError;
use crate::indicators::compute_indicator_set;
use crate::levels::find_levels;
use crate::models::indicators::TechnicalSnapshot;
use crate::models::report::{AnalysisReport, AnalysisRequest};
use crate::onchain::analyze_risk;
use crate::patterns::detect_patterns;
use crate::scoring::{metrics_composite, signal_total, DimensionInputs};
use crate::signals::{generate_signal, SignalContext};

pub struct SignalEngine;

impl SignalEngine {
    /// Run the full pipeline for one request.
    ///
    /// Fails fast on an empty series; missing on-chain or sentiment input
    /// scores the corresponding dimensions neutral and is reported through
    /// `dimensions`, never as an error.
    pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisReport, EngineError> {
        if request.ohlc.is_empty() {
            return Err(EngineError::InvalidSeries(format!(
                "no OHLC bars for {} ({})",
                request.asset_id, request.timeframe
            )));
        }

        let indicators = compute_indicator_set(&request.ohlc);
        let support_resistance = find_levels(&request.ohlc);
        let patterns = detect_patterns(&request.ohlc);

        let risk_metrics = request.onchain.as_ref().map(analyze_risk);

        let inputs = DimensionInputs {
            indicators: &indicators,
            patterns: &patterns,
            network_stats: request.onchain.as_ref().map(|s| &s.network_stats),
            risk_metrics: risk_metrics.as_ref(),
            sentiment: request.sentiment.as_ref(),
        };
        let dimensions = inputs.flags();

        let composite = metrics_composite(&inputs);
        let total = signal_total(&inputs);

        ensure_finite(composite.total_score, "metrics composite")?;
        ensure_finite(composite.confidence, "composite confidence")?;
        ensure_finite(total, "signal composite")?;

        let signal = generate_signal(
            total,
            &SignalContext {
                levels: &support_resistance,
                bollinger: indicators.bollinger.as_ref(),
                sentiment: request.sentiment.as_ref(),
                onchain: request.onchain.as_ref(),
            },
        );

        info!(
            asset = %request.asset_id,
            timeframe = %request.timeframe,
            signal = ?signal.overall_signal,
            rating = ?composite.rating,
            "analysis complete"
        );

        Ok(AnalysisReport {
            asset_id: request.asset_id.clone(),
            timeframe: request.timeframe,
            technical: TechnicalSnapshot {
                indicators,
                support_resistance,
                patterns,
            },
            risk_metrics,
            composite,
            signal,
            dimensions,
            computed_at: Utc::now(),
        })
    }
}

/// Numeric corruption must never dress up as a plausible signal.
fn ensure_finite(value: f64, stage: &'static str) -> Result<(), EngineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NumericCorruption { stage })
    }
}

//! Composite scoring: per-dimension primitives and the two weighted forms.

pub mod composite;
pub mod dimensions;
pub mod weights;

pub use composite::{
    confidence, metrics_composite, metrics_total, rating, signal_total, trend_label,
    DimensionInputs,
};
pub use weights::{MetricsWeights, SignalWeights};

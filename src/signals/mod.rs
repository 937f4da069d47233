//! Trading signal generation from the composite score.

pub mod generator;

pub use generator::{generate_signal, SignalContext};

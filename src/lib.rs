//! tokensight: technical signal and risk scoring engine.
//!
//! Turns OHLC price history, on-chain network metrics, and social
//! sentiment into a single actionable trading signal. The engine is a
//! pure function of its inputs: callers fetch the snapshots, the engine
//! scores them, and the resulting report goes back to the caller's
//! persistence layer.

pub mod cache;
pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod levels;
pub mod logging;
pub mod models;
pub mod onchain;
pub mod patterns;
pub mod scoring;
pub mod sentiment;
pub mod signals;

pub use engine::SignalEngine;
pub use error::EngineError;
pub use models::{AnalysisReport, AnalysisRequest, Timeframe};

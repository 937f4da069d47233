//! Engine configuration and environment helpers.

use std::env;
use std::time::Duration;

/// RSI band below which an asset is considered oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI band above which an asset is considered overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Ratio of average transaction value to total supply below which
/// liquidity is classified as high risk.
pub const LIQUIDITY_RISK_THRESHOLD: f64 = 0.001;

/// Get the current environment name (e.g. "sandbox", "production")
///
/// Reads from the ENVIRONMENT variable, loading `.env` if present.
/// Defaults to "sandbox" when unset.
pub fn get_environment() -> String {
    dotenvy::dotenv().ok();
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Engine-level configuration shared by the demo binary and the cache
/// collaborator. Scoring weights live in `scoring::weights` as constants.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long a cached analysis report stays fresh.
    pub report_ttl: Duration,
    /// Default asset identifier used when the caller does not supply one.
    pub default_asset: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_ttl: Duration::from_secs(300),
            default_asset: "BTC".to_string(),
        }
    }
}

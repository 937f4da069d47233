//! On-chain risk analyzer.
//!
//! Turns a raw holder/transaction snapshot into concentration, activity,
//! and liquidity metrics plus one blended risk score.

use tracing::debug;

use crate::common::math;
use crate::config::LIQUIDITY_RISK_THRESHOLD;
use crate::models::onchain::{ChainTransaction, OnChainSnapshot, RiskMetrics, RiskTier};

/// Weight of the Gini/concentration component in the overall blend.
const CONCENTRATION_WEIGHT: f64 = 0.4;
const VOLATILITY_WEIGHT: f64 = 0.3;
const LIQUIDITY_WEIGHT: f64 = 0.3;

/// Derive every risk metric from one snapshot.
pub fn analyze_risk(snapshot: &OnChainSnapshot) -> RiskMetrics {
    // A reported total supply of zero is unusable; fall back to the sum of
    // observed balances so the percentages stay meaningful.
    let balance_sum: f64 = snapshot.holders.iter().map(|h| h.balance).sum();
    let total_supply = if snapshot.network_stats.total_supply > 0.0 {
        snapshot.network_stats.total_supply
    } else {
        balance_sum
    };

    let top_10_percentage = top_k_percentage(snapshot, 10, total_supply);
    let concentration_risk = concentration_tier(top_10_percentage);

    let balances: Vec<f64> = snapshot.holders.iter().map(|h| h.balance).collect();
    let gini_coefficient = gini_coefficient(&balances);

    let volume_volatility = volume_volatility(&snapshot.transactions);
    let liquidity_score = liquidity_score(&snapshot.transactions, total_supply);
    let liquidity_risk = if liquidity_score < 1.0 {
        RiskTier::High
    } else {
        RiskTier::Low
    };

    let overall_risk_score = math::clamp_unit(
        CONCENTRATION_WEIGHT * gini_coefficient
            + VOLATILITY_WEIGHT * volume_volatility.min(1.0)
            + LIQUIDITY_WEIGHT * (1.0 - liquidity_score),
    );

    debug!(
        top_10_percentage,
        gini = gini_coefficient,
        volatility = volume_volatility,
        liquidity = liquidity_score,
        overall = overall_risk_score,
        "analyzed on-chain risk"
    );

    RiskMetrics {
        concentration_risk,
        gini_coefficient,
        volume_volatility,
        liquidity_risk,
        overall_risk_score,
    }
}

/// Share of total supply held by the `k` largest holders, in percent.
fn top_k_percentage(snapshot: &OnChainSnapshot, k: usize, total_supply: f64) -> f64 {
    if total_supply <= 0.0 {
        return 0.0;
    }
    let mut balances: Vec<f64> = snapshot.holders.iter().map(|h| h.balance).collect();
    balances.sort_by(|a, b| b.total_cmp(a));
    let top_sum: f64 = balances.iter().take(k).sum();
    (top_sum / total_supply) * 100.0
}

fn concentration_tier(top_10_percentage: f64) -> RiskTier {
    if top_10_percentage > 80.0 {
        RiskTier::VeryHigh
    } else if top_10_percentage > 60.0 {
        RiskTier::High
    } else if top_10_percentage > 40.0 {
        RiskTier::Medium
    } else if top_10_percentage > 20.0 {
        RiskTier::Low
    } else {
        RiskTier::VeryLow
    }
}

/// Gini coefficient over the holder balances, in [0, 1].
///
/// G = Σ(2i - n + 1)·b_i / (n²·mean) over balances sorted ascending, the
/// standard mean-difference form: equal balances score 0 and one whale
/// holding everything approaches 1 as n grows. A single holder is
/// trivially "equal among itself" and scores 0.
pub fn gini_coefficient(balances: &[f64]) -> f64 {
    let n = balances.len();
    if n == 0 {
        return 0.0;
    }
    let mut sorted = balances.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let mean = total / n as f64;

    let weighted_sum: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, balance)| (2.0 * i as f64 - n as f64 + 1.0) * balance)
        .sum();

    math::clamp_unit(weighted_sum / ((n as f64).powi(2) * mean))
}

/// Standard deviation of successive percentage changes in transaction value.
fn volume_volatility(transactions: &[ChainTransaction]) -> f64 {
    let mut changes = Vec::new();
    for pair in transactions.windows(2) {
        if pair[0].value != 0.0 {
            changes.push((pair[1].value - pair[0].value) / pair[0].value);
        }
    }
    math::population_variance(&changes)
        .map(f64::sqrt)
        .unwrap_or(0.0)
}

/// Average transaction value relative to total supply, scaled so the
/// empirical risk threshold sits at 1.0. Values below 1.0 mean thin flow.
fn liquidity_score(transactions: &[ChainTransaction], total_supply: f64) -> f64 {
    if transactions.is_empty() || total_supply <= 0.0 {
        return 0.0;
    }
    let avg_value: f64 =
        transactions.iter().map(|t| t.value).sum::<f64>() / transactions.len() as f64;
    math::clamp_unit((avg_value / total_supply) / LIQUIDITY_RISK_THRESHOLD)
}

/// Fraction of transactions whose value dwarfs the average (>10x). Feeds
/// the signal generator's risk-level blend.
pub fn large_transaction_frequency(transactions: &[ChainTransaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }
    let avg_value: f64 =
        transactions.iter().map(|t| t.value).sum::<f64>() / transactions.len() as f64;
    if avg_value <= 0.0 {
        return 0.0;
    }
    let large = transactions
        .iter()
        .filter(|t| t.value > 10.0 * avg_value)
        .count();
    large as f64 / transactions.len() as f64
}

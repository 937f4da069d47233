use chrono::{Duration, Utc};
use tokensight::cache::ReportCache;
use tokensight::config::Config;
use tokensight::logging::init_logging;
use tokensight::models::{
    AnalysisReport, AnalysisRequest, ChainTransaction, Holder, NetworkStats, OhlcBar,
    OnChainSnapshot, SentimentSnapshot, Timeframe,
};
use tokensight::SignalEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::default();
    let cache = ReportCache::new(config.report_ttl);

    let request = AnalysisRequest {
        asset_id: config.default_asset.clone(),
        timeframe: Timeframe::OneDay,
        ohlc: sample_series(60, 42_000.0),
        onchain: Some(sample_onchain()),
        sentiment: Some(SentimentSnapshot {
            score: 0.4,
            magnitude: 0.7,
            positive_percentage: 55.0,
            negative_percentage: 20.0,
            mentions: 1_800,
        }),
    };

    let report = SignalEngine::analyze(&request)?;
    print_report(&report);
    cache.insert(report);

    Ok(())
}

/// A gently rising daily series with believable wicks.
fn sample_series(count: usize, base_price: f64) -> Vec<OhlcBar> {
    let start = Utc::now() - Duration::days(count as i64);
    (0..count)
        .map(|i| {
            let drift = i as f64 * 35.0;
            let wobble = ((i % 7) as f64 - 3.0) * 120.0;
            let open = base_price + drift + wobble;
            let close = open + 80.0;
            OhlcBar::new(
                start + Duration::days(i as i64),
                open,
                close + 150.0,
                open - 150.0,
                close,
                Some(1_000.0 + (i % 5) as f64 * 250.0),
            )
        })
        .collect()
}

fn sample_onchain() -> OnChainSnapshot {
    let now = Utc::now();
    OnChainSnapshot {
        holders: (0..40)
            .map(|i| Holder {
                address: format!("0xholder{i:02}"),
                balance: 10_000.0 / (i + 1) as f64,
            })
            .collect(),
        transactions: (0..25)
            .map(|i| ChainTransaction {
                from: format!("0xfrom{i:02}"),
                to: format!("0xto{i:02}"),
                value: 120.0 + (i % 4) as f64 * 30.0,
                timestamp: now - Duration::minutes(i as i64 * 10),
            })
            .collect(),
        network_stats: NetworkStats {
            active_addresses: 320_000,
            transaction_count: 1_450_000,
            total_value_locked: 2.4e9,
            total_supply: 21_000_000.0,
        },
    }
}

fn print_report(report: &AnalysisReport) {
    println!("Analysis for {} ({})", report.asset_id, report.timeframe);
    println!("  Signal: {:?}", report.signal.overall_signal);
    println!("  Confidence: {:.0}%", report.signal.confidence * 100.0);
    println!("  Risk level: {:?}", report.signal.risk_level);
    println!("  Rating: {:?}", report.composite.rating);
    println!("  Trend: {:?}", report.composite.trend);
    println!("  Total score: {:.3}", report.composite.total_score);
    if let Some(rsi) = report.technical.indicators.rsi_14 {
        println!("  RSI(14): {rsi:.1}");
    }
    if let Some(stop) = report.signal.stop_loss {
        println!("  Stop loss: {stop:.2}");
    }
    if let Some(target) = report.signal.take_profit {
        println!("  Take profit: {target:.2}");
    }
    for entry in &report.signal.entry_points {
        println!("  Entry: {entry:.2}");
    }
}

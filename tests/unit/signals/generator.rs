//! Unit tests for the trading signal generator

use tokensight::models::{
    BollingerBands, RiskLevel, SentimentSnapshot, SignalAction, SupportResistance,
};
use tokensight::signals::{generate_signal, SignalContext};

fn context(levels: &SupportResistance) -> SignalContext<'_> {
    SignalContext {
        levels,
        bollinger: None,
        sentiment: None,
        onchain: None,
    }
}

#[test]
fn test_threshold_map() {
    let levels = SupportResistance::default();
    let cases = [
        (0.8, SignalAction::StrongBuy, 0.8),
        (0.5, SignalAction::Buy, 0.6),
        (0.0, SignalAction::Neutral, 0.4),
        (-0.5, SignalAction::Sell, 0.6),
        (-0.8, SignalAction::StrongSell, 0.8),
    ];
    for (total, action, confidence) in cases {
        let signal = generate_signal(total, &context(&levels));
        assert_eq!(signal.overall_signal, action, "total={total}");
        assert_eq!(signal.confidence, confidence, "total={total}");
    }
}

#[test]
fn test_boundary_values_stay_neutral() {
    let levels = SupportResistance::default();
    for total in [0.3, 0.7, -0.3, -0.7] {
        let signal = generate_signal(total, &context(&levels));
        // Thresholds are strict inequalities.
        assert_ne!(signal.overall_signal, SignalAction::StrongBuy);
        assert_ne!(signal.overall_signal, SignalAction::StrongSell);
    }
}

#[test]
fn test_entry_and_exit_prices_from_levels() {
    let levels = SupportResistance {
        support: vec![40_000.0, 42_000.0],
        resistance: vec![48_000.0, 50_000.0],
    };
    let signal = generate_signal(0.5, &context(&levels));
    assert_eq!(signal.entry_points, vec![40_000.0, 42_000.0]);
    // 5% below the lowest support, 5% above the highest resistance.
    assert!((signal.stop_loss.unwrap() - 38_000.0).abs() < 1e-6);
    assert!((signal.take_profit.unwrap() - 52_500.0).abs() < 1e-6);
}

#[test]
fn test_empty_levels_fabricate_nothing() {
    let levels = SupportResistance::default();
    let signal = generate_signal(0.9, &context(&levels));
    assert!(signal.entry_points.is_empty());
    assert_eq!(signal.stop_loss, None);
    assert_eq!(signal.take_profit, None);
}

#[test]
fn test_risk_level_defaults_to_medium_without_data() {
    let levels = SupportResistance::default();
    let signal = generate_signal(0.0, &context(&levels));
    assert_eq!(signal.risk_level, RiskLevel::Medium);
}

#[test]
fn test_tight_bands_and_calm_sentiment_read_low_risk() {
    let levels = SupportResistance::default();
    let bands = BollingerBands {
        middle: 100.0,
        upper: 100.5,
        lower: 99.5,
    };
    let sentiment = SentimentSnapshot {
        score: 0.1,
        magnitude: 0.2,
        positive_percentage: 40.0,
        negative_percentage: 35.0,
        mentions: 50,
    };
    let signal = generate_signal(
        0.0,
        &SignalContext {
            levels: &levels,
            bollinger: Some(&bands),
            sentiment: Some(&sentiment),
            onchain: None,
        },
    );
    assert_eq!(signal.risk_level, RiskLevel::Low);
}

#[test]
fn test_wide_bands_and_polarized_sentiment_read_high_risk() {
    let levels = SupportResistance::default();
    let bands = BollingerBands {
        middle: 100.0,
        upper: 125.0,
        lower: 75.0,
    };
    let sentiment = SentimentSnapshot {
        score: -0.8,
        magnitude: 0.9,
        positive_percentage: 90.0,
        negative_percentage: 5.0,
        mentions: 10_000,
    };
    let signal = generate_signal(
        0.0,
        &SignalContext {
            levels: &levels,
            bollinger: Some(&bands),
            sentiment: Some(&sentiment),
            onchain: None,
        },
    );
    assert_eq!(signal.risk_level, RiskLevel::High);
}

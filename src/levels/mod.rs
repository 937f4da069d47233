//! Support/resistance level detection.
//!
//! Approximates clustering of turning points by bucketing every high and
//! low to a price-magnitude step and keeping buckets that recur. O(n) over
//! the series, deterministic, no pivot scan.

use std::collections::HashMap;

use crate::models::indicators::SupportResistance;
use crate::models::market::OhlcBar;

/// Buckets must recur more than this many times to count as a level.
const MIN_OCCURRENCES: u32 = 3;

/// Round a price to half of its own decimal magnitude step. 45,230 buckets
/// to the nearest 5,000; 4.52 buckets to the nearest 0.5.
fn bucket_price(price: f64) -> f64 {
    let magnitude = 10f64.powf(price.log10().floor());
    let step = magnitude / 2.0;
    (price / step).round() * step
}

/// Find recurring price levels and partition them around the last close.
///
/// Both returned lists are sorted ascending. A series whose highs and lows
/// never cluster yields empty lists, not an error.
pub fn find_levels(bars: &[OhlcBar]) -> SupportResistance {
    let last_close = match bars.last() {
        Some(bar) => bar.close,
        None => return SupportResistance::default(),
    };

    let mut counts: HashMap<u64, (f64, u32)> = HashMap::new();
    for bar in bars {
        for price in [bar.high, bar.low] {
            if price <= 0.0 || !price.is_finite() {
                continue;
            }
            let level = bucket_price(price);
            let entry = counts.entry(level.to_bits()).or_insert((level, 0));
            entry.1 += 1;
        }
    }

    let mut support = Vec::new();
    let mut resistance = Vec::new();
    for (level, count) in counts.into_values() {
        if count <= MIN_OCCURRENCES {
            continue;
        }
        if level < last_close {
            support.push(level);
        } else if level > last_close {
            resistance.push(level);
        }
    }

    support.sort_by(|a, b| a.total_cmp(b));
    resistance.sort_by(|a, b| a.total_cmp(b));

    SupportResistance {
        support,
        resistance,
    }
}

//! Basic statistical primitives shared by the indicator and scoring layers.

/// Arithmetic mean of a slice. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    mean(window)
}

/// Exponential moving average over the whole series.
///
/// Seeds with the SMA of the first `period` values, then applies the
/// standard multiplier k = 2 / (period + 1) across the remainder.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut current = seed;
    for &value in &values[period..] {
        current = ema_from_previous(value, current, period);
    }
    Some(current)
}

/// Single EMA step given the previous EMA value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    (value - previous) * k + previous
}

/// Population variance of a slice. Returns `None` for an empty slice.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Population standard deviation over the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    population_variance(window).map(f64::sqrt)
}

/// Clamp a score into [-1, +1].
pub fn clamp_signed(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Clamp a score into [0, 1].
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Map a signed [-1, +1] score onto [0, 1].
pub fn to_unit(value: f64) -> f64 {
    clamp_unit((value + 1.0) / 2.0)
}

//! Sentiment normalizer.

use crate::common::math;
use crate::models::sentiment::SentimentSnapshot;

/// Magnitude above this level earns a directional bonus.
const MAGNITUDE_BONUS_FLOOR: f64 = 0.5;
/// Scale of the bonus relative to the raw score.
const MAGNITUDE_BONUS_SCALE: f64 = 0.2;

/// Map a raw sentiment snapshot into a bounded social score in [-1, +1].
///
/// The raw score carries the direction; strong magnitude (> 0.5) amplifies
/// it slightly in the same direction before clamping.
pub fn social_score(snapshot: &SentimentSnapshot) -> f64 {
    let mut score = snapshot.score;
    if snapshot.magnitude > MAGNITUDE_BONUS_FLOOR {
        score += snapshot.score * MAGNITUDE_BONUS_SCALE * (snapshot.magnitude - MAGNITUDE_BONUS_FLOOR);
    }
    math::clamp_signed(score)
}

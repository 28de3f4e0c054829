//! Trend direction and history-derived velocity

use crate::models::{EngagementSample, TrendPattern};
use crate::scoring::hours_between;

/// Classify a velocity: above `rising` is rising, above `stable` is stable,
/// anything else (including NaN) is declining.
pub fn classify_velocity(velocity: f64, rising: f64, stable: f64) -> TrendPattern {
    if velocity > rising {
        TrendPattern::Rising
    } else if velocity > stable {
        TrendPattern::Stable
    } else {
        TrendPattern::Declining
    }
}

/// Engagement gained per hour between the first and last sample.
///
/// Returns 0 with fewer than two samples or when no time has elapsed.
pub fn calculate_trending_velocity(history: &[EngagementSample]) -> f64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) if history.len() >= 2 => pair_velocity(first, last),
        _ => 0.0,
    }
}

/// Change in velocity across the history: the last pairwise velocity minus the first.
///
/// Returns 0 with fewer than three samples.
pub fn calculate_trending_momentum(history: &[EngagementSample]) -> f64 {
    if history.len() < 3 {
        return 0.0;
    }

    let velocities: Vec<f64> = history
        .windows(2)
        .map(|pair| pair_velocity(&pair[0], &pair[1]))
        .collect();

    match (velocities.first(), velocities.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    }
}

fn pair_velocity(from: &EngagementSample, to: &EngagementSample) -> f64 {
    let hours = hours_between(from.timestamp, to.timestamp);
    if hours > 0.0 {
        (to.engagement - from.engagement) / hours
    } else {
        0.0
    }
}

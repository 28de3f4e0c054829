//! Shared weighted-sum scoring helpers
//!
//! Both the search and trending scorers reduce a handful of bounded
//! sub-scores to a single total through a fixed weight vector.

use chrono::{DateTime, Utc};

/// Sum of `value * weight` over all pairs
pub fn weighted_sum(components: &[(f64, f64)]) -> f64 {
    components
        .iter()
        .map(|(value, weight)| value * weight)
        .sum()
}

/// Clamp `value` into `[min, max]`, mapping NaN to `min`
pub fn cap(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Fractional hours from `from` to `to` (negative if `from` is later)
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / 3_600_000.0
}

/// Case-insensitive substring test
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_weighted_sum() {
        assert_eq!(weighted_sum(&[]), 0.0);
        let total = weighted_sum(&[(10.0, 0.5), (4.0, 0.25)]);
        assert!((total - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_cap() {
        assert_eq!(cap(25.0, 0.0, 20.0), 20.0);
        assert_eq!(cap(-1.0, 0.0, 20.0), 0.0);
        assert_eq!(cap(f64::NAN, 1.0, 100.0), 1.0);
        assert_eq!(cap(7.5, 0.0, 20.0), 7.5);
    }

    #[test]
    fn test_hours_between() {
        let now = Utc::now();
        let earlier = now - Duration::minutes(90);
        assert!((hours_between(earlier, now) - 1.5).abs() < 1e-9);
        assert!(hours_between(now, earlier) < 0.0);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Jazz Night", "jazz"));
        assert!(!contains_ci("Jazz Night", "opera"));
    }
}

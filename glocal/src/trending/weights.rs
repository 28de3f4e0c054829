//! Static weight tables for trending scores

use crate::models::TrendingPeriod;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Weights of the six trending axes for one period. Each profile sums to 1.0.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PeriodWeights {
    pub engagement: f64,
    pub velocity: f64,
    pub time_decay: f64,
    pub category: f64,
    pub location: f64,
    pub quality: f64,
}

const HOUR_WEIGHTS: PeriodWeights = PeriodWeights {
    engagement: 0.20,
    velocity: 0.35,
    time_decay: 0.25,
    category: 0.05,
    location: 0.05,
    quality: 0.10,
};

const DAY_WEIGHTS: PeriodWeights = PeriodWeights {
    engagement: 0.25,
    velocity: 0.25,
    time_decay: 0.20,
    category: 0.10,
    location: 0.05,
    quality: 0.15,
};

const WEEK_WEIGHTS: PeriodWeights = PeriodWeights {
    engagement: 0.30,
    velocity: 0.15,
    time_decay: 0.15,
    category: 0.15,
    location: 0.10,
    quality: 0.15,
};

const MONTH_WEIGHTS: PeriodWeights = PeriodWeights {
    engagement: 0.35,
    velocity: 0.10,
    time_decay: 0.10,
    category: 0.15,
    location: 0.10,
    quality: 0.20,
};

impl PeriodWeights {
    /// Weight profile for a period
    pub fn for_period(period: TrendingPeriod) -> Self {
        match period {
            TrendingPeriod::Hour => HOUR_WEIGHTS,
            TrendingPeriod::Day => DAY_WEIGHTS,
            TrendingPeriod::Week => WEEK_WEIGHTS,
            TrendingPeriod::Month => MONTH_WEIGHTS,
        }
    }

    pub fn total(&self) -> f64 {
        self.engagement + self.velocity + self.time_decay + self.category + self.location + self.quality
    }
}

lazy_static! {
    static ref CATEGORY_WEIGHTS: HashMap<&'static str, f64> = HashMap::from([
        ("sports", 1.3),
        ("entertainment", 1.25),
        ("music", 1.2),
        ("technology", 1.15),
        ("food", 1.1),
        ("community", 1.1),
        ("health", 1.05),
        ("art", 1.0),
        ("outdoor", 1.0),
        ("education", 0.95),
        ("business", 0.9),
    ]);
}

/// Category multiplier, matched case-insensitively; unknown categories get 1.0
pub fn category_multiplier(category: &str) -> f64 {
    CATEGORY_WEIGHTS
        .get(category.trim().to_lowercase().as_str())
        .copied()
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_sum_to_one() {
        for period in [
            TrendingPeriod::Hour,
            TrendingPeriod::Day,
            TrendingPeriod::Week,
            TrendingPeriod::Month,
        ] {
            let total = PeriodWeights::for_period(period).total();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", period, total);
        }
    }

    #[test]
    fn test_hour_profile_favors_velocity() {
        let hour = PeriodWeights::for_period(TrendingPeriod::Hour);
        assert_eq!(hour.velocity, 0.35);
        assert!(hour.velocity > hour.engagement);
        assert!(hour.velocity > hour.time_decay);

        let month = PeriodWeights::for_period(TrendingPeriod::Month);
        assert!(month.engagement > month.velocity);
    }

    #[test]
    fn test_category_multiplier() {
        assert_eq!(category_multiplier("sports"), 1.3);
        assert_eq!(category_multiplier("Music"), 1.2);
        assert_eq!(category_multiplier("business"), 0.9);
        assert_eq!(category_multiplier("knitting"), 1.0);
        assert_eq!(CATEGORY_WEIGHTS.len(), 11);
    }
}

//! Trending content models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time window a trending score is computed for
///
/// Each period selects its own weight profile: short windows favor velocity,
/// long windows favor cumulative engagement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendingPeriod {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for TrendingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
        }
    }
}

impl FromStr for TrendingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(format!("Invalid trending period: {}", s)),
        }
    }
}

/// Direction of a content item's engagement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TrendPattern {
    Rising,
    Stable,
    Declining,
}

impl fmt::Display for TrendPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Stable => write!(f, "stable"),
            Self::Declining => write!(f, "declining"),
        }
    }
}

/// Engagement counters plus the caller-computed velocity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendingEngagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    /// Engagement accrued per hour
    pub velocity: f64,
}

/// A content item competing for a trending slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingContent {
    #[serde(default)]
    pub id: String,

    /// Free-form category name, matched case-insensitively
    pub category: String,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub engagement: TrendingEngagement,

    /// Only meaningful after ranking; never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending_score: Option<f64>,
}

impl TrendingContent {
    /// Create a content item with no engagement, created now
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            description: None,
            image: None,
            created_at: Utc::now(),
            engagement: TrendingEngagement::default(),
            trending_score: None,
        }
    }
}

/// A point-in-time engagement total, used to derive velocity from history
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngagementSample {
    pub timestamp: DateTime<Utc>,
    pub engagement: f64,
}

/// Per-axis trending breakdown for one content item
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingMetrics {
    pub engagement_score: f64,
    pub velocity_score: f64,
    pub time_decay_score: f64,
    pub category_weight: f64,
    pub location_relevance: f64,
    pub quality_score: f64,
    pub total_score: f64,
}

/// Human-readable summary of where a content item is heading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingInsights {
    pub pattern: TrendPattern,
    pub momentum: String,
    pub prediction: String,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_round_trip_names() {
        for period in [
            TrendingPeriod::Hour,
            TrendingPeriod::Day,
            TrendingPeriod::Week,
            TrendingPeriod::Month,
        ] {
            assert_eq!(period.to_string().parse::<TrendingPeriod>().unwrap(), period);
        }
        assert!("year".parse::<TrendingPeriod>().is_err());
        assert_eq!(TrendingPeriod::default(), TrendingPeriod::Day);
    }

    #[test]
    fn test_deserialize_content_without_engagement() {
        let json = r#"{
            "category": "Music",
            "title": "Open mic",
            "createdAt": "2026-03-01T18:00:00Z"
        }"#;
        let content: TrendingContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.engagement, TrendingEngagement::default());
        assert!(content.id.is_empty());
        assert!(content.trending_score.is_none());
    }
}

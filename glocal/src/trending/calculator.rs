//! Trending score calculator

use chrono::{DateTime, Utc};
use std::time::Instant;

use super::pattern::classify_velocity;
use super::weights::{PeriodWeights, category_multiplier};
use crate::config::TrendingConfig;
use crate::models::{
    TrendPattern, TrendingContent, TrendingEngagement, TrendingInsights, TrendingMetrics,
    TrendingPeriod,
};
use crate::scoring::{cap, hours_between, weighted_sum};

const MAX_SCORE: f64 = 100.0;
const MIN_TIME_DECAY: f64 = 1.0;

/// Location score used until content carries a location to compare against
const NEUTRAL_LOCATION_RELEVANCE: f64 = 80.0;

const BASE_QUALITY: f64 = 50.0;
const QUALITY_BONUS: f64 = 10.0;
const MAX_LIKE_RATIO_BONUS: f64 = 20.0;

/// Velocity above which a rising item is described as accelerating
const ACCELERATING_VELOCITY: f64 = 20.0;

/// Trending scorer, ranker and pattern classifier
#[derive(Debug, Clone, Default)]
pub struct TrendingAlgorithms {
    config: TrendingConfig,
}

impl TrendingAlgorithms {
    pub fn new(config: TrendingConfig) -> Self {
        Self { config }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &TrendingConfig {
        &self.config
    }

    /// Score content for a period as of now
    pub fn calculate_trending_score(
        &self,
        content: &TrendingContent,
        period: TrendingPeriod,
    ) -> TrendingMetrics {
        self.calculate_trending_score_at(content, period, Utc::now())
    }

    /// Score content for a period as of `now`
    pub fn calculate_trending_score_at(
        &self,
        content: &TrendingContent,
        period: TrendingPeriod,
        now: DateTime<Utc>,
    ) -> TrendingMetrics {
        let engagement_score = engagement_score(&content.engagement);
        let velocity_score = cap(content.engagement.velocity * 10.0, 0.0, MAX_SCORE);
        let time_decay_score = self.time_decay_score(content.created_at, now);
        let category_weight = category_multiplier(&content.category) * 100.0;
        let location_relevance = NEUTRAL_LOCATION_RELEVANCE;
        let quality_score = quality_score(content);

        let weights = PeriodWeights::for_period(period);
        let total_score = weighted_sum(&[
            (engagement_score, weights.engagement),
            (velocity_score, weights.velocity),
            (time_decay_score, weights.time_decay),
            (category_weight, weights.category),
            (location_relevance, weights.location),
            (quality_score, weights.quality),
        ]);

        tracing::trace!(
            id = %content.id,
            %period,
            engagement_score,
            velocity_score,
            time_decay_score,
            quality_score,
            total_score,
            "Scored trending content"
        );

        TrendingMetrics {
            engagement_score,
            velocity_score,
            time_decay_score,
            category_weight,
            location_relevance,
            quality_score,
            total_score,
        }
    }

    /// Assign `trending_score` to every item and sort descending
    pub fn rank_trending_content(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
    ) -> Vec<TrendingContent> {
        self.rank_trending_content_at(content, period, Utc::now())
    }

    pub fn rank_trending_content_at(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
        now: DateTime<Utc>,
    ) -> Vec<TrendingContent> {
        self.rank_trending_content_with_metrics_at(content, period, now)
            .into_iter()
            .map(|(item, _)| item)
            .collect()
    }

    /// Rank like [`rank_trending_content`](Self::rank_trending_content), keeping each item's breakdown
    pub fn rank_trending_content_with_metrics(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
    ) -> Vec<(TrendingContent, TrendingMetrics)> {
        self.rank_trending_content_with_metrics_at(content, period, Utc::now())
    }

    pub fn rank_trending_content_with_metrics_at(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
        now: DateTime<Utc>,
    ) -> Vec<(TrendingContent, TrendingMetrics)> {
        let started = Instant::now();
        let count = content.len();

        let mut scored: Vec<(TrendingContent, TrendingMetrics)> = content
            .into_iter()
            .map(|mut item| {
                let metrics = self.calculate_trending_score_at(&item, period, now);
                item.trending_score = Some(metrics.total_score);
                (item, metrics)
            })
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.total_score.total_cmp(&a.total_score));

        tracing::debug!(
            count,
            %period,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Ranked trending content"
        );

        scored
    }

    /// The `n` highest-scoring items
    pub fn top_trending(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
        n: usize,
    ) -> Vec<TrendingContent> {
        self.top_trending_at(content, period, n, Utc::now())
    }

    pub fn top_trending_at(
        &self,
        content: Vec<TrendingContent>,
        period: TrendingPeriod,
        n: usize,
        now: DateTime<Utc>,
    ) -> Vec<TrendingContent> {
        let mut ranked = self.rank_trending_content_at(content, period, now);
        ranked.truncate(n);
        ranked
    }

    /// Classify content by its embedded velocity
    pub fn detect_trending_pattern(&self, content: &TrendingContent) -> TrendPattern {
        classify_velocity(
            content.engagement.velocity,
            self.config.rising_velocity,
            self.config.stable_velocity,
        )
    }

    /// Keep items whose quality score is at least `min_score`, or the configured
    /// minimum when `None`. Order is preserved.
    pub fn filter_by_quality(
        &self,
        content: Vec<TrendingContent>,
        min_score: Option<f64>,
    ) -> Vec<TrendingContent> {
        let min_score = min_score.unwrap_or(self.config.min_quality_score);
        let before = content.len();

        let kept: Vec<TrendingContent> = content
            .into_iter()
            .filter(|item| quality_score(item) >= min_score)
            .collect();

        tracing::debug!(before, after = kept.len(), min_score, "Filtered by quality");
        kept
    }

    /// Describe where an item is heading
    pub fn get_trending_insights(&self, content: &TrendingContent) -> TrendingInsights {
        let pattern = self.detect_trending_pattern(content);
        let velocity = content.engagement.velocity;

        let (momentum, prediction, recommendations) = match pattern {
            TrendPattern::Rising => (
                if velocity > ACCELERATING_VELOCITY {
                    "accelerating"
                } else {
                    "growing"
                },
                "Likely to keep climbing over the next few hours",
                vec![
                    "Feature this content prominently",
                    "Share it to related groups while interest is high",
                    "Reply to comments to sustain engagement",
                ],
            ),
            TrendPattern::Stable => (
                "steady",
                "Expected to hold its current position",
                vec![
                    "Post a follow-up to renew interest",
                    "Cross-promote with similar content",
                ],
            ),
            TrendPattern::Declining => (
                "slowing",
                "Likely to drop out of trending soon",
                vec![
                    "Refresh the title or image",
                    "Try reposting at a peak time",
                    "Ask a question to invite comments",
                ],
            ),
        };

        TrendingInsights {
            pattern,
            momentum: momentum.to_string(),
            prediction: prediction.to_string(),
            recommendations: recommendations.into_iter().map(String::from).collect(),
        }
    }

    fn time_decay_score(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let hours = hours_between(created_at, now).max(0.0);
        cap(
            (-self.config.decay_rate * hours).exp() * MAX_SCORE,
            MIN_TIME_DECAY,
            MAX_SCORE,
        )
    }
}

fn engagement_score(engagement: &TrendingEngagement) -> f64 {
    let raw = engagement.likes as f64
        + engagement.comments as f64 * 2.0
        + engagement.shares as f64 * 3.0
        + engagement.views as f64 * 0.1;
    cap(raw / 10.0, 0.0, MAX_SCORE)
}

fn quality_score(content: &TrendingContent) -> f64 {
    let mut score = BASE_QUALITY;

    if content.title.chars().count() > 10 {
        score += QUALITY_BONUS;
    }
    if content
        .description
        .as_deref()
        .is_some_and(|d| d.chars().count() > 50)
    {
        score += QUALITY_BONUS;
    }
    if content.image.as_deref().is_some_and(|i| !i.is_empty()) {
        score += QUALITY_BONUS;
    }

    let engagement = &content.engagement;
    if engagement.views > 0 {
        let ratio = engagement.likes as f64 / engagement.views as f64 * 100.0;
        score += ratio.min(MAX_LIKE_RATIO_BONUS);
    }

    score.min(MAX_SCORE)
}

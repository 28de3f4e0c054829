//! Search relevance calculator
//!
//! Combines text, location, category, engagement and freshness signals into a
//! single relevance score, and orders result sets by it or by another key.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::time::Instant;

use super::geo::calculate_distance;
use super::suggestions::generate_search_suggestions;
use crate::config::{SearchConfig, SearchWeights};
use crate::models::{
    ContentType, SearchPage, SearchQuery, SearchResult, SearchScore, SortBy,
};
use crate::scoring::{contains_ci, hours_between, weighted_sum};

const MAX_TEXT_RELEVANCE: f64 = 20.0;
const MAX_LOCATION_RELEVANCE: f64 = 15.0;
const MAX_ENGAGEMENT_SCORE: f64 = 10.0;

/// Category score used until category filters carry real matching logic
const NEUTRAL_CATEGORY_RELEVANCE: f64 = 5.0;

/// Distance bands (upper bound in km, points), nearest first
const DISTANCE_BANDS: &[(f64, f64)] = &[(5.0, 10.0), (15.0, 7.0), (30.0, 4.0), (50.0, 2.0)];

/// Freshness bands (maximum age in hours, points), newest first
const FRESHNESS_BANDS: &[(f64, f64)] = &[(1.0, 10.0), (24.0, 8.0), (168.0, 6.0), (720.0, 4.0)];
const STALE_FRESHNESS: f64 = 2.0;

/// Relevance scorer and ranker for search results
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads. Ranking takes the result batch by value and hands it back sorted.
#[derive(Debug, Clone, Default)]
pub struct SearchAlgorithms {
    config: SearchConfig,
}

impl SearchAlgorithms {
    /// Create a scorer with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn weights(&self) -> &SearchWeights {
        &self.config.weights
    }

    /// Score a result against a query as of now
    pub fn calculate_relevance_score(&self, result: &SearchResult, query: &SearchQuery) -> SearchScore {
        self.calculate_relevance_score_at(result, query, Utc::now())
    }

    /// Score a result against a query as of `now`
    pub fn calculate_relevance_score_at(
        &self,
        result: &SearchResult,
        query: &SearchQuery,
        now: DateTime<Utc>,
    ) -> SearchScore {
        let text_relevance = text_relevance(result, &query.query);
        let location_relevance = location_relevance(result, query);
        let category_relevance = category_relevance(result, query);
        let engagement_score = engagement_score(result);
        let freshness_score = freshness_score(result.created_at, now);

        let weights = self.weights();
        let total_score = weighted_sum(&[
            (text_relevance, weights.text),
            (location_relevance, weights.location),
            (category_relevance, weights.category),
            (engagement_score, weights.engagement),
            (freshness_score, weights.freshness),
        ]);

        tracing::trace!(
            id = %result.id,
            text_relevance,
            location_relevance,
            category_relevance,
            engagement_score,
            freshness_score,
            total_score,
            "Scored search result"
        );

        SearchScore {
            text_relevance,
            location_relevance,
            category_relevance,
            engagement_score,
            freshness_score,
            total_score,
        }
    }

    /// Assign `relevance_score` to every result and sort by `query.sort_by`
    pub fn rank_search_results(
        &self,
        results: Vec<SearchResult>,
        query: &SearchQuery,
    ) -> Vec<SearchResult> {
        self.rank_search_results_at(results, query, Utc::now())
    }

    /// Ranking as of `now`
    pub fn rank_search_results_at(
        &self,
        mut results: Vec<SearchResult>,
        query: &SearchQuery,
        now: DateTime<Utc>,
    ) -> Vec<SearchResult> {
        let started = Instant::now();

        for result in results.iter_mut() {
            let score = self.calculate_relevance_score_at(result, query, now);
            result.relevance_score = Some(score.total_score);
        }

        sort_results(&mut results, query.sort_by);

        tracing::debug!(
            count = results.len(),
            sort_by = %query.sort_by,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Ranked search results"
        );

        results
    }

    /// Suggest completions for a partial query, up to the configured limit
    pub fn generate_search_suggestions(&self, query: &str, history: &[String]) -> Vec<String> {
        generate_search_suggestions(query, history, self.config.suggestion_limit)
    }

    /// Haversine distance in kilometers
    pub fn calculate_distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        calculate_distance(lat1, lon1, lat2, lon2)
    }

    /// Keep only results of the given type, or all when `None`
    pub fn filter_by_type(
        &self,
        results: Vec<SearchResult>,
        content_type: Option<ContentType>,
    ) -> Vec<SearchResult> {
        match content_type {
            Some(wanted) => results
                .into_iter()
                .filter(|r| r.content_type == wanted)
                .collect(),
            None => results,
        }
    }

    /// Fill in `distance` from coordinates where the caller left it unset.
    ///
    /// Only results whose location carries non-zero coordinates are touched.
    pub fn annotate_distances(&self, results: &mut [SearchResult], query: &SearchQuery) {
        let Some(origin) = query.location else {
            return;
        };
        if origin.latitude == 0.0 || origin.longitude == 0.0 {
            return;
        }

        for result in results.iter_mut().filter(|r| r.distance.is_none()) {
            let coordinates = result.location.as_ref().and_then(|l| l.coordinates());
            if let Some((lat, lon)) = coordinates
                && lat != 0.0
                && lon != 0.0
            {
                result.distance = Some(calculate_distance(
                    origin.latitude,
                    origin.longitude,
                    lat,
                    lon,
                ));
            }
        }
    }

    /// Drop results farther than the query radius; results without a distance are kept
    pub fn filter_by_radius(
        &self,
        results: Vec<SearchResult>,
        query: &SearchQuery,
    ) -> Vec<SearchResult> {
        match query.location {
            Some(origin) if origin.radius > 0.0 => results
                .into_iter()
                .filter(|r| r.distance.is_none_or(|d| d <= origin.radius))
                .collect(),
            _ => results,
        }
    }

    /// Slice out one page; page numbers start at 1
    pub fn paginate(&self, results: Vec<SearchResult>, page: usize, limit: usize) -> SearchPage {
        let page = page.max(1);
        let limit = if limit == 0 {
            self.config.default_page_size
        } else {
            limit
        };
        let total = results.len();
        let start = (page - 1).saturating_mul(limit);

        let results: Vec<SearchResult> = results.into_iter().skip(start).take(limit).collect();
        let has_more = start.saturating_add(results.len()) < total;

        SearchPage {
            results,
            total,
            page,
            limit,
            has_more,
        }
    }

    /// Type filter, distance fill-in, radius filter, ranking and pagination in one pass
    pub fn search(&self, results: Vec<SearchResult>, query: &SearchQuery) -> SearchPage {
        self.search_at(results, query, Utc::now())
    }

    /// Full search pipeline as of `now`
    pub fn search_at(
        &self,
        results: Vec<SearchResult>,
        query: &SearchQuery,
        now: DateTime<Utc>,
    ) -> SearchPage {
        let candidates = results.len();
        let mut results = self.filter_by_type(results, query.content_type);
        self.annotate_distances(&mut results, query);
        let results = self.filter_by_radius(results, query);
        let ranked = self.rank_search_results_at(results, query, now);

        tracing::debug!(
            query = %query.query,
            candidates,
            matched = ranked.len(),
            page = query.page,
            "Search pipeline complete"
        );

        self.paginate(ranked, query.page, query.limit)
    }
}

/// Title, description and tag matching, capped at 20.
///
/// Case-insensitive substring containment only. An empty query scores 0.
fn text_relevance(result: &SearchResult, query: &str) -> f64 {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return 0.0;
    }
    let words: Vec<&str> = needle.split_whitespace().collect();
    let mut score = 0.0;

    let title = result.title.to_lowercase();
    if title.contains(&needle) {
        score += 10.0;
    } else if words.iter().any(|w| title.contains(w)) {
        score += 7.0;
    }

    if let Some(description) = &result.description {
        let description = description.to_lowercase();
        if description.contains(&needle) {
            score += 5.0;
        } else if words.iter().any(|w| description.contains(w)) {
            score += 3.0;
        }
    }

    let tag_matches = result
        .tags
        .iter()
        .filter(|tag| contains_ci(tag, &needle))
        .count();
    score += 3.0 * tag_matches as f64;

    if title.trim() == needle {
        score += 5.0;
    }

    score.min(MAX_TEXT_RELEVANCE)
}

/// Distance band plus place-name match, capped at 15.
///
/// Zero unless both the query and the result carry a location.
fn location_relevance(result: &SearchResult, query: &SearchQuery) -> f64 {
    let (Some(_), Some(location)) = (query.location, result.location.as_ref()) else {
        return 0.0;
    };
    let mut score = 0.0;

    if let Some(distance) = result.distance {
        score += DISTANCE_BANDS
            .iter()
            .find(|(max_km, _)| distance <= *max_km)
            .map(|(_, points)| *points)
            .unwrap_or(0.0);
    }

    let needle = query.query.trim().to_lowercase();
    if !needle.is_empty() {
        let place_matches = [&location.name, &location.city, &location.state]
            .into_iter()
            .flatten()
            .any(|place| contains_ci(place, &needle));
        if place_matches {
            score += 5.0;
        }
    }

    score.min(MAX_LOCATION_RELEVANCE)
}

/// Neutral 5 whether or not a category filter is set.
// TODO: match `query.category` against result tags once category ids are exported with search rows
fn category_relevance(_result: &SearchResult, _query: &SearchQuery) -> f64 {
    NEUTRAL_CATEGORY_RELEVANCE
}

/// Weighted interaction count over 100, capped at 10
fn engagement_score(result: &SearchResult) -> f64 {
    let Some(engagement) = result.engagement else {
        return 0.0;
    };
    let raw = engagement.likes as f64
        + engagement.comments as f64 * 2.0
        + engagement.shares as f64 * 3.0
        + engagement.views as f64 * 0.1;
    (raw / 100.0).min(MAX_ENGAGEMENT_SCORE)
}

/// Discrete age bands: an hour, a day, a week, a month
fn freshness_score(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age_hours = hours_between(created_at, now);
    FRESHNESS_BANDS
        .iter()
        .find(|(max_hours, _)| age_hours <= *max_hours)
        .map(|(_, points)| *points)
        .unwrap_or(STALE_FRESHNESS)
}

fn sort_results(results: &mut [SearchResult], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => results.sort_by(|a, b| desc(a.relevance_score, b.relevance_score)),
        SortBy::Distance => results.sort_by(|a, b| {
            a.distance
                .unwrap_or(0.0)
                .total_cmp(&b.distance.unwrap_or(0.0))
        }),
        SortBy::Date => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Popularity => results.sort_by_key(|r| std::cmp::Reverse(r.popularity())),
        SortBy::Rating => results.sort_by(|a, b| desc(a.rating, b.rating)),
    }
}

/// Descending order on optional scores, missing treated as 0
fn desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Engagement, Location};
    use chrono::Duration;

    fn create_test_result(id: &str, title: &str, created_at: DateTime<Utc>) -> SearchResult {
        let mut result = SearchResult::new(id, ContentType::Event, title);
        result.created_at = created_at;
        result.updated_at = created_at;
        result
    }

    #[test]
    fn test_text_relevance_bands() {
        let now = Utc::now();
        let result = create_test_result("1", "Jazz Night", now);

        assert_eq!(text_relevance(&result, "jazz"), 10.0);
        assert_eq!(text_relevance(&result, "jazz brunch"), 7.0);
        assert_eq!(text_relevance(&result, "Jazz Night"), 15.0);
        assert_eq!(text_relevance(&result, "opera"), 0.0);
        assert_eq!(text_relevance(&result, "   "), 0.0);
    }

    #[test]
    fn test_text_relevance_description_and_tags() {
        let mut result = create_test_result("1", "Friday Social", Utc::now());
        result.description = Some("An evening of jazz standards".to_string());
        result.tags = vec!["jazz".to_string(), "Jazz-club".to_string(), "bar".to_string()];

        // description substring 5 + two tags 6
        assert_eq!(text_relevance(&result, "jazz"), 11.0);

        result.description = Some("Smooth jazz all night".to_string());
        // description word match 3, no title or tag match for the phrase
        assert_eq!(text_relevance(&result, "jazz trio"), 3.0);
    }

    #[test]
    fn test_text_relevance_capped() {
        let mut result = create_test_result("1", "jazz", Utc::now());
        result.description = Some("jazz".to_string());
        result.tags = vec!["jazz".into(), "jazz".into(), "jazz".into()];
        assert_eq!(text_relevance(&result, "jazz"), MAX_TEXT_RELEVANCE);
    }

    #[test]
    fn test_location_relevance_requires_both_locations() {
        let mut result = create_test_result("1", "Jazz Night", Utc::now());
        result.distance = Some(1.0);
        let query = SearchQuery::new("austin").near(30.26, -97.74, 25.0);
        assert_eq!(location_relevance(&result, &query), 0.0);

        result.location = Some(Location {
            city: Some("Austin".to_string()),
            ..Default::default()
        });
        assert_eq!(location_relevance(&result, &SearchQuery::new("austin")), 0.0);
        assert_eq!(location_relevance(&result, &query), 15.0);
    }

    #[test]
    fn test_location_distance_bands() {
        let mut result = create_test_result("1", "Jazz Night", Utc::now());
        result.location = Some(Location::default());
        let query = SearchQuery::new("jazz").near(30.26, -97.74, 100.0);

        for (distance, expected) in [
            (2.0, 10.0),
            (5.0, 10.0),
            (10.0, 7.0),
            (25.0, 4.0),
            (45.0, 2.0),
            (80.0, 0.0),
        ] {
            result.distance = Some(distance);
            assert_eq!(location_relevance(&result, &query), expected, "distance {}", distance);
        }
    }

    #[test]
    fn test_engagement_score() {
        let mut result = create_test_result("1", "x", Utc::now());
        assert_eq!(engagement_score(&result), 0.0);

        result.engagement = Some(Engagement {
            likes: 50,
            comments: 10,
            shares: 5,
            views: 500,
        });
        assert!((engagement_score(&result) - 1.35).abs() < 1e-9);

        result.engagement = Some(Engagement {
            likes: 10_000,
            ..Default::default()
        });
        assert_eq!(engagement_score(&result), MAX_ENGAGEMENT_SCORE);
    }

    #[test]
    fn test_freshness_bands() {
        let now = Utc::now();
        assert_eq!(freshness_score(now, now), 10.0);
        assert_eq!(freshness_score(now - Duration::minutes(30), now), 10.0);
        assert_eq!(freshness_score(now - Duration::hours(5), now), 8.0);
        assert_eq!(freshness_score(now - Duration::days(3), now), 6.0);
        assert_eq!(freshness_score(now - Duration::days(20), now), 4.0);
        assert_eq!(freshness_score(now - Duration::days(90), now), 2.0);
        // Future-dated rows count as brand new
        assert_eq!(freshness_score(now + Duration::hours(3), now), 10.0);
    }

    #[test]
    fn test_total_is_weighted_sum() {
        let now = Utc::now();
        let calc = SearchAlgorithms::default();
        let result = create_test_result("1", "Jazz Night", now);

        let score = calc.calculate_relevance_score_at(&result, &SearchQuery::new("jazz"), now);
        assert_eq!(score.text_relevance, 10.0);
        assert_eq!(score.location_relevance, 0.0);
        assert_eq!(score.category_relevance, 5.0);
        assert_eq!(score.engagement_score, 0.0);
        assert_eq!(score.freshness_score, 10.0);
        assert!((score.total_score - (10.0 * 0.35 + 5.0 * 0.15 + 10.0 * 0.10)).abs() < 1e-9);
    }

    #[test]
    fn test_rank_sorts_by_each_key() {
        let now = Utc::now();
        let calc = SearchAlgorithms::default();

        let mut a = create_test_result("a", "Jazz Night", now - Duration::days(10));
        a.distance = Some(12.0);
        a.rating = Some(3.5);
        a.engagement = Some(Engagement {
            likes: 1,
            ..Default::default()
        });
        let mut b = create_test_result("b", "Opera", now);
        b.distance = None;
        b.rating = Some(4.8);
        b.engagement = Some(Engagement {
            likes: 10,
            comments: 10,
            ..Default::default()
        });
        let mut c = create_test_result("c", "Jazz brunch", now - Duration::hours(2));
        c.distance = Some(3.0);

        let ids = |sort_by: SortBy| -> Vec<String> {
            let query = SearchQuery::new("jazz").sort_by(sort_by);
            calc.rank_search_results_at(vec![a.clone(), b.clone(), c.clone()], &query, now)
                .into_iter()
                .map(|r| r.id)
                .collect()
        };

        assert_eq!(ids(SortBy::Relevance)[2], "b");
        assert_eq!(ids(SortBy::Distance), vec!["b", "c", "a"]);
        assert_eq!(ids(SortBy::Date), vec!["b", "c", "a"]);
        assert_eq!(ids(SortBy::Popularity), vec!["b", "a", "c"]);
        assert_eq!(ids(SortBy::Rating), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_assigns_scores() {
        let calc = SearchAlgorithms::default();
        let results = vec![create_test_result("a", "Jazz", Utc::now())];
        let ranked = calc.rank_search_results(results, &SearchQuery::new("jazz"));
        assert!(ranked[0].relevance_score.unwrap() > 0.0);
    }

    #[test]
    fn test_annotate_and_filter_by_radius() {
        let calc = SearchAlgorithms::default();
        let now = Utc::now();

        let mut near = create_test_result("near", "Jazz", now);
        near.location = Some(Location {
            latitude: Some(30.2700),
            longitude: Some(-97.7400),
            ..Default::default()
        });
        let mut far = create_test_result("far", "Jazz", now);
        far.location = Some(Location {
            latitude: Some(29.7604),
            longitude: Some(-95.3698),
            ..Default::default()
        });
        let unknown = create_test_result("unknown", "Jazz", now);

        let query = SearchQuery::new("jazz").near(30.2672, -97.7431, 50.0);
        let mut results = vec![near, far, unknown];
        calc.annotate_distances(&mut results, &query);

        assert!(results[0].distance.unwrap() < 1.0);
        assert!(results[1].distance.unwrap() > 200.0);
        assert!(results[2].distance.is_none());

        let kept: Vec<String> = calc
            .filter_by_radius(results, &query)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec!["near", "unknown"]);
    }

    #[test]
    fn test_filter_by_type() {
        let calc = SearchAlgorithms::default();
        let results = vec![
            SearchResult::new("1", ContentType::Artist, "DJ Sol"),
            SearchResult::new("2", ContentType::Event, "Sol Festival"),
        ];
        let only_artists = calc.filter_by_type(results.clone(), Some(ContentType::Artist));
        assert_eq!(only_artists.len(), 1);
        assert_eq!(only_artists[0].id, "1");
        assert_eq!(calc.filter_by_type(results, None).len(), 2);
    }

    #[test]
    fn test_paginate() {
        let calc = SearchAlgorithms::default();
        let results: Vec<SearchResult> = (0..5)
            .map(|i| SearchResult::new(i.to_string(), ContentType::Post, "post"))
            .collect();

        let first = calc.paginate(results.clone(), 1, 2);
        assert_eq!(first.results.len(), 2);
        assert_eq!(first.total, 5);
        assert!(first.has_more);

        let last = calc.paginate(results.clone(), 3, 2);
        assert_eq!(last.results.len(), 1);
        assert_eq!(last.results[0].id, "4");
        assert!(!last.has_more);

        let beyond = calc.paginate(results.clone(), 9, 2);
        assert!(beyond.results.is_empty());
        assert!(!beyond.has_more);

        let defaulted = calc.paginate(results, 0, 0);
        assert_eq!(defaulted.page, 1);
        assert_eq!(defaulted.limit, 20);
        assert_eq!(defaulted.results.len(), 5);
    }

    #[test]
    fn test_search_pipeline() {
        let calc = SearchAlgorithms::default();
        let now = Utc::now();
        let mut results = vec![
            create_test_result("1", "Jazz Night", now),
            create_test_result("2", "Opera Gala", now),
            create_test_result("3", "Jazz Picnic", now - Duration::days(40)),
        ];
        results.push(SearchResult::new("4", ContentType::Group, "Jazz Lovers"));

        let query = SearchQuery::new("jazz")
            .of_type(ContentType::Event)
            .page(1, 2);
        let page = calc.search_at(results, &query, now);

        assert_eq!(page.total, 3);
        assert_eq!(page.results.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.results[0].id, "1");
        assert_eq!(page.results[1].id, "3");
    }

    #[test]
    fn test_custom_weights() {
        let config = SearchConfig {
            weights: SearchWeights {
                text: 0.0,
                location: 0.0,
                category: 0.0,
                engagement: 0.0,
                freshness: 1.0,
            },
            ..Default::default()
        };
        let calc = SearchAlgorithms::new(config);
        let now = Utc::now();
        let result = create_test_result("1", "Jazz Night", now);
        let score = calc.calculate_relevance_score_at(&result, &SearchQuery::new("jazz"), now);
        assert_eq!(score.total_score, 10.0);
    }
}

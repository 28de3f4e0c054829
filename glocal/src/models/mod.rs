//! Data model shared by the search and trending scorers.
//!
//! These types mirror the rows the backend hands to the UI layer. They are
//! read-only inputs apart from the `relevance_score` / `trending_score`
//! fields, which the rankers fill in.

pub mod search;
pub mod trending;

pub use search::{
    ContentType, Engagement, Location, QueryLocation, SearchPage, SearchQuery, SearchResult,
    SearchScore, SortBy,
};
pub use trending::{
    EngagementSample, TrendPattern, TrendingContent, TrendingEngagement, TrendingInsights,
    TrendingMetrics, TrendingPeriod,
};

//! Search result and query models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content a search result points at
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Performer profile available for bookings
    Artist,
    /// Local event listing
    Event,
    /// Community post, poll or discussion
    Post,
    /// Community group
    Group,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artist => write!(f, "artist"),
            Self::Event => write!(f, "event"),
            Self::Post => write!(f, "post"),
            Self::Group => write!(f, "group"),
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "event" => Ok(Self::Event),
            "post" => Ok(Self::Post),
            "group" => Ok(Self::Group),
            _ => Err(format!("Invalid content type: {}", s)),
        }
    }
}

/// Ordering applied by `rank_search_results`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Relevance score, highest first
    #[default]
    Relevance,
    /// Distance from the searcher, nearest first
    Distance,
    /// Creation time, newest first
    Date,
    /// Likes plus comments, highest first
    Popularity,
    /// Rating, highest first
    Rating,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::Distance => write!(f, "distance"),
            Self::Date => write!(f, "date"),
            Self::Popularity => write!(f, "popularity"),
            Self::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "distance" => Ok(Self::Distance),
            "date" => Ok(Self::Date),
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

/// Where a result takes place or is based
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    /// Venue or place name
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    /// Both coordinates, if present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Engagement counters as stored by the backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
}

/// A single search hit assembled from a backend row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Distance from the searcher in kilometers, precomputed by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Only meaningful after ranking; never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl SearchResult {
    /// Create a minimal result with the given id, type and title, timestamped now
    pub fn new(id: impl Into<String>, content_type: ContentType, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            content_type,
            title: title.into(),
            description: None,
            image: None,
            price: None,
            location: None,
            distance: None,
            tags: Vec::new(),
            engagement: None,
            rating: None,
            created_at: now,
            updated_at: now,
            relevance_score: None,
        }
    }

    /// Likes plus comments, used by the popularity ordering
    pub fn popularity(&self) -> u64 {
        self.engagement
            .map(|e| e.likes.saturating_add(e.comments))
            .unwrap_or(0)
    }
}

/// Searcher position and radius filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in kilometers
    pub radius: f64,
}

/// User-supplied search parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free text; may be empty only when generating suggestions
    pub query: String,

    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,

    pub location: Option<QueryLocation>,

    pub category: Option<String>,

    pub sort_by: SortBy,

    /// 1-based page number
    pub page: usize,

    pub limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            content_type: None,
            location: None,
            category: None,
            sort_by: SortBy::Relevance,
            page: 1,
            limit: 20,
        }
    }
}

impl SearchQuery {
    /// Create a query for the given text with default options
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn of_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn near(mut self, latitude: f64, longitude: f64, radius: f64) -> Self {
        self.location = Some(QueryLocation {
            latitude,
            longitude,
            radius,
        });
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn page(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

/// Per-axis relevance breakdown for one result
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchScore {
    pub text_relevance: f64,
    pub location_relevance: f64,
    pub category_relevance: f64,
    pub engagement_score: f64,
    pub freshness_score: f64,
    pub total_score: f64,
}

/// One page of ranked results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub results: Vec<SearchResult>,
    /// Number of results that survived filtering, across all pages
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{
            "id": "evt-1",
            "type": "event",
            "title": "Jazz Night",
            "location": {"name": "Blue Room", "city": "Austin", "latitude": 30.27, "longitude": -97.74},
            "tags": ["jazz", "live"],
            "engagement": {"likes": 3, "views": 40},
            "createdAt": "2026-01-01T20:00:00Z",
            "updatedAt": "2026-01-02T20:00:00Z"
        }"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.content_type, ContentType::Event);
        assert_eq!(result.tags.len(), 2);
        assert_eq!(result.engagement.unwrap().comments, 0);
        assert_eq!(
            result.location.unwrap().coordinates(),
            Some((30.27, -97.74))
        );
        assert!(result.relevance_score.is_none());
    }

    #[test]
    fn test_query_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{"query": "jazz"}"#).unwrap();
        assert_eq!(query.sort_by, SortBy::Relevance);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Date".parse::<SortBy>().unwrap(), SortBy::Date);
        assert_eq!("group".parse::<ContentType>().unwrap(), ContentType::Group);
        assert!("venue".parse::<ContentType>().is_err());
        assert_eq!(SortBy::Popularity.to_string(), "popularity");
    }

    #[test]
    fn test_popularity() {
        let mut result = SearchResult::new("a", ContentType::Post, "Hello");
        assert_eq!(result.popularity(), 0);
        result.engagement = Some(Engagement {
            likes: 4,
            comments: 3,
            shares: 100,
            views: 1000,
        });
        assert_eq!(result.popularity(), 7);
    }

    #[test]
    fn test_popularity_saturates_on_huge_counters() {
        let mut big = SearchResult::new("big", ContentType::Post, "Viral");
        big.engagement = Some(Engagement {
            likes: u64::MAX,
            comments: 1,
            ..Default::default()
        });
        assert_eq!(big.popularity(), u64::MAX);

        let mut small = SearchResult::new("small", ContentType::Post, "Quiet");
        small.engagement = Some(Engagement {
            likes: 1,
            ..Default::default()
        });

        let query = SearchQuery::new("").sort_by(SortBy::Popularity);
        let ranked = crate::search::SearchAlgorithms::default().rank_search_results(vec![small, big], &query);
        assert_eq!(ranked[0].id, "big");
    }
}

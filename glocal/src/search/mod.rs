//! Search relevance scoring
//!
//! Scores a search hit against a user query along five axes (text, location,
//! category, engagement and freshness), combines them with a fixed weight
//! profile, and orders result sets by the requested sort key.
//!
//! # Example
//!
//! ```
//! use glocal::models::{ContentType, SearchQuery, SearchResult};
//! use glocal::search::SearchAlgorithms;
//!
//! let search = SearchAlgorithms::default();
//! let results = vec![
//!     SearchResult::new("1", ContentType::Event, "Jazz Night"),
//!     SearchResult::new("2", ContentType::Event, "Opera Gala"),
//! ];
//!
//! let ranked = search.rank_search_results(results, &SearchQuery::new("jazz"));
//! assert_eq!(ranked[0].id, "1");
//! ```

pub mod calculator;
pub mod geo;
pub mod suggestions;

pub use calculator::SearchAlgorithms;
pub use geo::{EARTH_RADIUS_KM, calculate_distance};
pub use suggestions::{COMMON_SEARCH_TERMS, SEARCH_CATEGORIES, generate_search_suggestions};

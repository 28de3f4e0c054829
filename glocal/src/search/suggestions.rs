//! Query auto-suggestions

use std::collections::HashSet;

/// Popular searches offered as completions
pub const COMMON_SEARCH_TERMS: &[&str] = &[
    "live music",
    "concerts",
    "art exhibitions",
    "food festivals",
    "farmers market",
    "workshops",
    "networking events",
    "comedy shows",
    "theater",
    "dance classes",
    "book club",
    "yoga",
    "sports",
    "community meetup",
    "charity events",
    "nightlife",
    "family activities",
];

/// Browsable content categories
pub const SEARCH_CATEGORIES: &[&str] = &[
    "music",
    "art",
    "food",
    "sports",
    "technology",
    "business",
    "education",
    "health",
    "community",
    "entertainment",
    "outdoor",
];

/// Suggest completions for a partial query.
///
/// Candidates are drawn, in order, from the search history, the common terms
/// and the category list, keeping those that contain `query`
/// case-insensitively. Duplicates are dropped and at most `limit` are
/// returned. An empty query matches everything.
pub fn generate_search_suggestions(query: &str, history: &[String], limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut seen = HashSet::new();

    history
        .iter()
        .map(String::as_str)
        .chain(COMMON_SEARCH_TERMS.iter().copied())
        .chain(SEARCH_CATEGORIES.iter().copied())
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .filter(|candidate| seen.insert(*candidate))
        .take(limit)
        .map(str::to_string)
        .collect()
}

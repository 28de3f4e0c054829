//! Trending content scoring
//!
//! Scores content "hotness" along six axes (engagement, velocity, time decay,
//! category weight, location relevance and quality), weighting them by a
//! profile chosen per [`TrendingPeriod`](crate::models::TrendingPeriod), and
//! classifies items into rising, stable or declining patterns.

pub mod calculator;
pub mod pattern;
pub mod weights;

pub use calculator::TrendingAlgorithms;
pub use pattern::{calculate_trending_momentum, calculate_trending_velocity};
pub use weights::{PeriodWeights, category_multiplier};

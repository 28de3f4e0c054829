//! # Glocal
//!
//! Ranking utilities for a local community discovery platform: relevance
//! scoring for search hits (artists, events, posts and groups) and "hotness"
//! scoring for trending content.
//!
//! ## Quick Start
//!
//! ```rust
//! use glocal::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let glocal = Glocal::builder().build()?;
//!
//!     let mut gig = TrendingContent::new("gig-1", "music", "Rooftop session");
//!     gig.engagement.velocity = 15.0;
//!
//!     let metrics = glocal
//!         .trending()
//!         .calculate_trending_score(&gig, TrendingPeriod::Hour);
//!     assert!(metrics.total_score > 0.0);
//!     assert_eq!(
//!         glocal.trending().detect_trending_pattern(&gig),
//!         TrendPattern::Rising
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Search**: text, location, category, engagement and freshness scores
//!   combined with a fixed weight profile
//! - **Trending**: six axes weighted per time period, plus rising/stable/declining classification
//! - **Config**: weights and thresholds loadable from files and `GLOCAL_` environment variables
//!
//! Scoring never fails. Missing optional fields degrade to zero or neutral sub-scores.

pub mod config;
pub mod engine;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod search;
pub mod trending;

pub use engine::{Glocal, GlocalBuilder};

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::engine::{Glocal, GlocalBuilder};
    pub use crate::{init, init_with_defaults};

    // Config types
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, GlocalConfig, LogFormat, LogLevel, SearchConfig,
        SearchWeights, TrendingConfig,
    };

    // Model types
    pub use crate::models::{
        ContentType, Engagement, EngagementSample, Location, QueryLocation, SearchPage,
        SearchQuery, SearchResult, SearchScore, SortBy, TrendPattern, TrendingContent,
        TrendingEngagement, TrendingInsights, TrendingMetrics, TrendingPeriod,
    };

    // Scorers
    pub use crate::search::{SearchAlgorithms, calculate_distance};
    pub use crate::trending::{
        TrendingAlgorithms, calculate_trending_momentum, calculate_trending_velocity,
    };

    pub use crate::{GlocalError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Glocal operations
#[derive(Debug, thiserror::Error)]
pub enum GlocalError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Input data could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::config::ConfigError> for GlocalError {
    fn from(err: crate::config::ConfigError) -> Self {
        GlocalError::Configuration(err.to_string())
    }
}

/// Result type for Glocal operations
pub type Result<T> = std::result::Result<T, GlocalError>;

/// Initialize Glocal with default configuration
pub fn init_with_defaults() -> Result<Glocal> {
    let config = config::ConfigBuilder::new().build()?;
    init(config)
}

/// Initialize Glocal with the provided configuration
///
/// Installs the global tracing subscriber described by `config.logging`
/// (a no-op if one is already installed) and returns a [`Glocal`] whose
/// scorers are built from the validated configuration.
///
/// # Examples
///
/// ```rust
/// use glocal::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::testing()
///         .with_default_period(TrendingPeriod::Week)
///         .build()?;
///
///     let glocal = init(config)?;
///     assert_eq!(glocal.default_period(), TrendingPeriod::Week);
///     Ok(())
/// }
/// ```
pub fn init(config: config::GlocalConfig) -> Result<Glocal> {
    let glocal = Glocal::new(config)?;
    logging::init(&glocal.config().logging)?;

    tracing::debug!(version = VERSION, "Glocal initialized");
    Ok(glocal)
}

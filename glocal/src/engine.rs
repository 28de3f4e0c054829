//! The `Glocal` facade
//!
//! Bundles a validated configuration with the search and trending scorers
//! built from it.

use crate::Result;
use crate::config::{
    ConfigBuilder, ConfigLoader, GlocalConfig, LogLevel, SearchWeights, validate_config,
};
use crate::models::TrendingPeriod;
use crate::search::SearchAlgorithms;
use crate::trending::TrendingAlgorithms;
use std::path::Path;

/// Entry point holding both scorers
///
/// # Examples
///
/// ```rust
/// use glocal::prelude::*;
///
/// fn example() -> Result<()> {
///     let glocal = Glocal::builder()
///         .with_default_period(TrendingPeriod::Hour)
///         .build()?;
///
///     let query = SearchQuery::new("jazz");
///     let ranked = glocal.search().rank_search_results(Vec::new(), &query);
///     assert!(ranked.is_empty());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Glocal {
    config: GlocalConfig,
    search: SearchAlgorithms,
    trending: TrendingAlgorithms,
}

impl Glocal {
    /// Create an instance from a configuration, validating it first
    pub fn new(config: GlocalConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self::from_valid(config))
    }

    /// Load configuration from the default files and `GLOCAL_` environment variables
    pub fn from_env() -> Result<Self> {
        let config = ConfigLoader::new().load_default_files().load_env().extract()?;
        Ok(Self::from_valid(config))
    }

    /// Load configuration from a specific file, with environment overrides applied on top
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = ConfigLoader::new().load_file(path)?.load_env().extract()?;
        Ok(Self::from_valid(config))
    }

    pub fn builder() -> GlocalBuilder {
        GlocalBuilder::new()
    }

    fn from_valid(config: GlocalConfig) -> Self {
        Self {
            search: SearchAlgorithms::new(config.search.clone()),
            trending: TrendingAlgorithms::new(config.trending.clone()),
            config,
        }
    }

    pub fn config(&self) -> &GlocalConfig {
        &self.config
    }

    /// Search relevance scorer
    pub fn search(&self) -> &SearchAlgorithms {
        &self.search
    }

    /// Trending scorer
    pub fn trending(&self) -> &TrendingAlgorithms {
        &self.trending
    }

    /// Period used when a caller does not pick one
    pub fn default_period(&self) -> TrendingPeriod {
        self.config.trending.default_period
    }
}

impl Default for Glocal {
    fn default() -> Self {
        Self::from_valid(GlocalConfig::default())
    }
}

/// Builder for [`Glocal`]
#[derive(Debug, Default)]
pub struct GlocalBuilder {
    config: ConfigBuilder,
}

impl GlocalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: GlocalConfig) -> Self {
        self.config = ConfigBuilder::from_config(config);
        self
    }

    pub fn with_search_weights(mut self, weights: SearchWeights) -> Self {
        self.config = self.config.with_search_weights(weights);
        self
    }

    pub fn with_default_period(mut self, period: TrendingPeriod) -> Self {
        self.config = self.config.with_default_period(period);
        self
    }

    pub fn with_pattern_thresholds(mut self, rising: f64, stable: f64) -> Self {
        self.config = self.config.with_pattern_thresholds(rising, stable);
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config = self.config.with_log_level(level);
        self
    }

    /// Validate the configuration and build the instance
    pub fn build(self) -> Result<Glocal> {
        let config = self.config.build()?;
        Ok(Glocal::from_valid(config))
    }
}

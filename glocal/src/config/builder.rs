//! Configuration builder.

use super::{Result, models::*, validation};
use crate::models::TrendingPeriod;
use std::path::Path;

/// Builder for creating GlocalConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: GlocalConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: GlocalConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GlocalConfig) -> Self {
        Self { config }
    }

    /// Set the relevance weight profile.
    pub fn with_search_weights(mut self, weights: SearchWeights) -> Self {
        self.config.search.weights = weights;
        self
    }

    /// Set the maximum number of query suggestions.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.config.search.suggestion_limit = limit;
        self
    }

    /// Set the page size used when a query leaves it unset.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.config.search.default_page_size = size;
        self
    }

    /// Set the period used when callers do not name one.
    pub fn with_default_period(mut self, period: TrendingPeriod) -> Self {
        self.config.trending.default_period = period;
        self
    }

    /// Set the exponential decay constant for trending freshness.
    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.config.trending.decay_rate = rate;
        self
    }

    /// Set the minimum quality score kept by `filter_by_quality`.
    pub fn with_min_quality_score(mut self, score: f64) -> Self {
        self.config.trending.min_quality_score = score;
        self
    }

    /// Set the rising and stable velocity thresholds.
    pub fn with_pattern_thresholds(mut self, rising: f64, stable: f64) -> Self {
        self.config.trending.rising_velocity = rising;
        self.config.trending.stable_velocity = stable;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file instead of stdout.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Configuration for local development: debug logging, readable format.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Default)
    }

    /// Configuration for automated tests: warnings only, compact output.
    pub fn testing() -> Self {
        Self::new()
            .with_log_level(LogLevel::Warn)
            .with_log_format(LogFormat::Compact)
    }

    /// Configuration for production: info level JSON logs.
    pub fn production() -> Self {
        Self::new()
            .with_log_level(LogLevel::Info)
            .with_log_format(LogFormat::Json)
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<GlocalConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

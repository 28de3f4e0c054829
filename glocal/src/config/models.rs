//! Configuration model definitions.

use crate::models::TrendingPeriod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Glocal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlocalConfig {
    /// Search relevance configuration
    pub search: SearchConfig,

    /// Trending score configuration
    pub trending: TrendingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weights combining the five relevance axes into a total score.
///
/// Must be non-negative and sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchWeights {
    pub text: f64,
    pub location: f64,
    pub category: f64,
    pub engagement: f64,
    pub freshness: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            text: 0.35,
            location: 0.25,
            category: 0.15,
            engagement: 0.15,
            freshness: 0.10,
        }
    }
}

impl SearchWeights {
    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.text + self.location + self.category + self.engagement + self.freshness
    }

    /// Rescale the weights so they sum to 1.0, preserving their ratios
    pub fn normalize(&mut self) {
        let total = self.total();
        if total > 0.0 {
            self.text /= total;
            self.location /= total;
            self.category /= total;
            self.engagement /= total;
            self.freshness /= total;
        }
    }
}

/// Search relevance configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Weight profile for relevance scoring
    pub weights: SearchWeights,

    /// Maximum number of query suggestions returned
    pub suggestion_limit: usize,

    /// Page size used when a query does not set one
    pub default_page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: SearchWeights::default(),
            suggestion_limit: 10,
            default_page_size: 20,
        }
    }
}

/// Trending score configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrendingConfig {
    /// Period used when the caller does not name one
    pub default_period: TrendingPeriod,

    /// Exponential time-decay constant, per hour
    pub decay_rate: f64,

    /// Quality score below which `filter_by_quality` drops content
    pub min_quality_score: f64,

    /// Velocity above which content is classified as rising
    pub rising_velocity: f64,

    /// Velocity above which content is classified as stable
    pub stable_velocity: f64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            default_period: TrendingPeriod::Day,
            decay_rate: 0.1,
            min_quality_score: 30.0,
            rising_velocity: 10.0,
            stable_velocity: 2.0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored single-line development format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}

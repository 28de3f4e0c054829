//! Configuration system for Glocal.
//!
//! Scoring weights, suggestion limits, trending thresholds and logging can be
//! loaded from files and environment variables. The defaults reproduce the
//! constants the scorers have always used.

mod builder;
mod loader;
mod models;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "glocal.toml",
    "glocal.yaml",
    "glocal.yml",
    "glocal.json",
    ".glocal/config.toml",
    ".glocal/config.yaml",
    ".glocal/config.yml",
    ".glocal/config.json",
];

/// Environment variable prefix for Glocal configuration
pub const ENV_PREFIX: &str = "GLOCAL_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

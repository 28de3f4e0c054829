//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Tolerance when checking that a weight profile sums to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Validate the entire configuration.
pub fn validate_config(config: &GlocalConfig) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_trending_config(&config.trending)?;
    Ok(())
}

fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let weights = &config.weights;
    for (name, value) in [
        ("text", weights.text),
        ("location", weights.location),
        ("category", weights.category),
        ("engagement", weights.engagement),
        ("freshness", weights.freshness),
    ] {
        if value.is_nan() || value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "search weight '{}' must be >= 0.0, got {}",
                name, value
            )));
        }
    }

    if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::ValidationError(format!(
            "search weights must sum to 1.0, got {:.4}",
            weights.total()
        )));
    }

    if config.suggestion_limit == 0 {
        return Err(ConfigError::ValidationError(
            "suggestion_limit must be greater than 0".to_string(),
        ));
    }

    if config.default_page_size == 0 {
        return Err(ConfigError::ValidationError(
            "default_page_size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

fn validate_trending_config(config: &TrendingConfig) -> Result<(), ConfigError> {
    if config.decay_rate.is_nan() || config.decay_rate <= 0.0 {
        return Err(ConfigError::ValidationError(
            "decay_rate must be > 0.0".to_string(),
        ));
    }

    if config.min_quality_score.is_nan() || config.min_quality_score < 0.0 {
        return Err(ConfigError::ValidationError(
            "min_quality_score must be >= 0.0".to_string(),
        ));
    }

    if config.rising_velocity <= config.stable_velocity {
        return Err(ConfigError::ValidationError(format!(
            "rising_velocity ({}) must be greater than stable_velocity ({})",
            config.rising_velocity, config.stable_velocity
        )));
    }

    Ok(())
}

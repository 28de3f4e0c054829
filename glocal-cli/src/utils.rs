use glocal::GlocalError;
use glocal::models::{ContentType, QueryLocation, SortBy, TrendingPeriod};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::args::LocationArgs;

pub fn parse_sort_by(sort_str: &str) -> glocal::Result<SortBy> {
    sort_str.parse().map_err(GlocalError::InvalidInput)
}

pub fn parse_period(period_str: &str) -> glocal::Result<TrendingPeriod> {
    period_str.parse().map_err(GlocalError::InvalidInput)
}

pub fn parse_content_type(type_str: &str) -> glocal::Result<ContentType> {
    type_str.parse().map_err(GlocalError::InvalidInput)
}

/// Build the query location from `--lat/--lon/--radius`
pub fn query_location(args: &LocationArgs) -> glocal::Result<Option<QueryLocation>> {
    match (args.lat, args.lon) {
        (Some(latitude), Some(longitude)) => {
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                return Err(GlocalError::InvalidInput(format!(
                    "Coordinates out of range: {}, {}",
                    latitude, longitude
                )));
            }
            if args.radius.is_nan() || args.radius < 0.0 {
                return Err(GlocalError::InvalidInput(format!(
                    "Radius must be non-negative, got {}",
                    args.radius
                )));
            }
            Ok(Some(QueryLocation {
                latitude,
                longitude,
                radius: args.radius,
            }))
        }
        (None, None) => Ok(None),
        _ => Err(GlocalError::InvalidInput(
            "Both --lat and --lon are required for a location".to_string(),
        )),
    }
}

/// Read and deserialize a JSON data file
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> glocal::Result<T> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        GlocalError::InvalidInput(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let value = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "Loaded data file");
    Ok(value)
}

//! User settings schema.

use serde::{Deserialize, Serialize};
use std::time::Duration as StdDuration;

use crate::cache::parse_ttl;
use crate::error::{Result, SkycastError};
use crate::location::Location;
use crate::weather::Units;

/// Default forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default geocoding endpoint.
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default cache TTL.
pub const DEFAULT_CACHE_TTL: &str = "10m";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Default number of geocoding results.
pub const DEFAULT_SEARCH_RESULTS: usize = 10;

/// Allowed HTTP timeout range in seconds.
pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=60;

/// Allowed geocoding result count.
pub const SEARCH_RESULTS_RANGE: std::ops::RangeInclusive<usize> = 1..=100;

/// User settings, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Location used when no city is given on the command line.
    pub default_city: Location,

    /// How long a cached forecast is served without refetching ("10m", "1h").
    pub cache_ttl: String,

    /// HTTP timeout for each request.
    pub timeout_seconds: u64,

    /// Units requested from the API.
    pub units: Units,

    /// Language for geocoding results.
    pub language: String,

    /// Number of geocoding matches requested.
    pub search_results: usize,

    /// Upstream endpoints.
    pub api: ApiSettings,
}

/// Upstream endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub forecast_url: String,
    pub geocoding_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_city: Location::zagreb(),
            cache_ttl: DEFAULT_CACHE_TTL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            units: Units::default(),
            language: "en".to_string(),
            search_results: DEFAULT_SEARCH_RESULTS,
            api: ApiSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
        }
    }
}

impl Settings {
    /// The cache TTL as a duration.
    pub fn ttl(&self) -> Result<chrono::Duration> {
        parse_ttl(&self.cache_ttl).map_err(|e| SkycastError::ConfigValidationError {
            message: format!("cache_ttl: {:#}", e),
        })
    }

    /// The HTTP timeout, clamped to the allowed range.
    pub fn timeout(&self) -> StdDuration {
        let secs = self
            .timeout_seconds
            .clamp(*TIMEOUT_RANGE.start(), *TIMEOUT_RANGE.end());
        StdDuration::from_secs(secs)
    }
}

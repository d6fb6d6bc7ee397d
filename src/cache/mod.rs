//! Forecast caching.
//!
//! Snapshots are kept per location in a single JSON document under the
//! per-user cache directory and served while younger than the TTL.

pub mod entry;
pub mod store;
pub mod ttl;

pub use entry::{is_fresh, CacheEntry};
pub use store::CacheStore;
pub use ttl::{format_age, format_duration, parse_ttl};

use std::path::PathBuf;

/// Default cache file name.
pub const CACHE_FILE_NAME: &str = "forecast_cache.json";

/// Get the default cache file path.
pub fn default_cache_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skycast")
        .join(CACHE_FILE_NAME)
}

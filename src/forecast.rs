//! Forecast retrieval with caching and offline fallback.
//!
//! [`ForecastService::get_forecast`] serves a fresh cache entry without
//! touching the network, otherwise fetches live and caches the result. When
//! the fetch fails and a stale entry exists, the stale entry is served
//! instead of an error.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::cache::{format_age, CacheEntry, CacheStore};
use crate::error::FetchError;
use crate::location::Location;
use crate::weather::{WeatherSnapshot, WeatherSource};

/// Where a forecast came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Freshness {
    /// Served from cache within the TTL.
    Cached,
    /// Fetched from the API just now.
    Live,
    /// Cache entry past its TTL, served because the fetch failed.
    Stale {
        /// Why the live fetch failed.
        reason: String,
    },
}

impl Freshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale { .. })
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cached => "cached",
            Self::Live => "live",
            Self::Stale { .. } => "stale",
        }
    }
}

/// A snapshot together with where and when it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location: Location,
    pub snapshot: WeatherSnapshot,
    pub fetched_at: DateTime<Utc>,
    pub status: Freshness,
}

impl Forecast {
    /// Nearby places share a cache key, so the label comes from the
    /// caller's `location`, not from whoever stored the entry.
    fn from_entry(location: &Location, entry: CacheEntry, status: Freshness) -> Self {
        Self {
            location: location.clone(),
            snapshot: entry.snapshot,
            fetched_at: entry.fetched_at,
            status,
        }
    }

    /// "just now", "12m ago", ...
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        format_age(now.signed_duration_since(self.fetched_at))
    }
}

/// Combines a weather source with the cache.
pub struct ForecastService<S> {
    source: S,
    store: CacheStore,
    ttl: Duration,
}

impl<S: WeatherSource> ForecastService<S> {
    pub fn new(source: S, store: CacheStore, ttl: Duration) -> Self {
        Self { source, store, ttl }
    }

    /// The underlying weather source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cache store.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Get the forecast for `location` as of `now`.
    ///
    /// A cache entry younger than the TTL is returned without a network call.
    /// Returns the fetch error only when there is nothing cached to fall back
    /// on.
    pub fn get_forecast(
        &self,
        location: &Location,
        now: DateTime<Utc>,
    ) -> Result<Forecast, FetchError> {
        let key = location.cache_key();
        let cached = self.store.get(&key);

        if let Some(entry) = cached.as_ref().filter(|e| e.is_fresh(now, self.ttl)) {
            debug!(key = %key, age = ?entry.age(now), "Serving cached forecast");
            return Ok(Forecast::from_entry(location, entry.clone(), Freshness::Cached));
        }

        self.fetch_live(location, now, cached)
    }

    /// Fetch `location` live regardless of cache freshness.
    ///
    /// Still falls back to a cached entry if the fetch fails.
    pub fn refresh(
        &self,
        location: &Location,
        now: DateTime<Utc>,
    ) -> Result<Forecast, FetchError> {
        let cached = self.store.get(&location.cache_key());
        self.fetch_live(location, now, cached)
    }

    fn fetch_live(
        &self,
        location: &Location,
        now: DateTime<Utc>,
        cached: Option<CacheEntry>,
    ) -> Result<Forecast, FetchError> {
        match self.source.fetch(location) {
            Ok(snapshot) => {
                if let Err(e) = self.store.put(&location.cache_key(), location, &snapshot, now) {
                    warn!("{}", e);
                }
                Ok(Forecast {
                    location: location.clone(),
                    snapshot,
                    fetched_at: now,
                    status: Freshness::Live,
                })
            }
            Err(err) => match cached {
                Some(entry) => {
                    warn!(
                        location = %location.name,
                        "Fetch failed, serving cached forecast from {}: {}",
                        entry.fetched_at,
                        err
                    );
                    Ok(Forecast::from_entry(
                        location,
                        entry,
                        Freshness::Stale {
                            reason: err.to_string(),
                        },
                    ))
                }
                None => Err(err),
            },
        }
    }

    /// Resolve a city name via the weather source.
    pub fn resolve(&self, name: &str) -> Result<Location, FetchError> {
        self.source.resolve(name)
    }
}

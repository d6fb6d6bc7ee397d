//! Cache entry type and freshness rule.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::location::{Location, LocationKey};
use crate::weather::WeatherSnapshot;

/// A cached snapshot for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Slot this entry is stored under.
    pub key: LocationKey,
    /// Location the snapshot was fetched for.
    pub location: Location,
    /// The snapshot itself.
    pub snapshot: WeatherSnapshot,
    /// When the snapshot was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create a new cache entry.
    pub fn new(
        key: LocationKey,
        location: Location,
        snapshot: WeatherSnapshot,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            key,
            location,
            snapshot,
            fetched_at,
        }
    }

    /// Age of this entry at `now`.
    ///
    /// Negative when `fetched_at` lies in the future.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.fetched_at)
    }

    /// Whether this entry may be served without a network call.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        is_fresh(self, now, ttl)
    }
}

/// `now - fetched_at < ttl`.
///
/// An entry stamped in the future (clock moved backwards) counts as fresh.
pub fn is_fresh(entry: &CacheEntry, now: DateTime<Utc>, ttl: Duration) -> bool {
    entry.age(now) < ttl
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::weather::{CurrentConditions, ForecastMeta, Units, WeatherCode};
    use chrono::NaiveDate;

    /// A minimal snapshot with the given current temperature.
    pub fn snapshot(temperature: f64) -> WeatherSnapshot {
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        WeatherSnapshot {
            current: CurrentConditions {
                time,
                temperature,
                feels_like: Some(temperature - 1.0),
                condition: WeatherCode(1),
                wind_speed: Some(8.0),
                wind_direction: Some(180.0),
                humidity: Some(60.0),
                pressure: None,
            },
            hourly: Vec::new(),
            daily: Vec::new(),
            sunrise: None,
            sunset: None,
            uv_index: None,
            meta: ForecastMeta {
                latitude: 45.82,
                longitude: 15.98,
                timezone: Some("Europe/Zagreb".into()),
                elevation: None,
            },
            units: Units::default(),
        }
    }

    /// 2024-05-01 12:00:00 UTC.
    pub fn noon() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{noon, snapshot};
    use super::*;

    fn entry_at(fetched_at: DateTime<Utc>) -> CacheEntry {
        let location = Location::zagreb();
        CacheEntry::new(location.cache_key(), location, snapshot(12.0), fetched_at)
    }

    #[test]
    fn fresh_within_ttl() {
        let entry = entry_at(noon());
        let ttl = Duration::minutes(10);

        assert!(entry.is_fresh(noon(), ttl));
        assert!(entry.is_fresh(noon() + Duration::minutes(5), ttl));
        assert!(entry.is_fresh(noon() + Duration::seconds(599), ttl));
    }

    #[test]
    fn stale_at_and_after_ttl() {
        let entry = entry_at(noon());
        let ttl = Duration::minutes(10);

        assert!(!is_fresh(&entry, noon() + Duration::minutes(10), ttl));
        assert!(!is_fresh(&entry, noon() + Duration::minutes(15), ttl));
    }

    #[test]
    fn zero_ttl_is_never_fresh() {
        let entry = entry_at(noon());
        assert!(!entry.is_fresh(noon(), Duration::zero()));
    }

    #[test]
    fn future_timestamp_counts_as_fresh() {
        let entry = entry_at(noon() + Duration::hours(1));
        assert!(entry.age(noon()) < Duration::zero());
        assert!(entry.is_fresh(noon(), Duration::minutes(10)));
    }

    #[test]
    fn entry_serializes_timestamp_as_rfc3339() {
        let json = serde_json::to_value(entry_at(noon())).unwrap();
        assert_eq!(json["key"], "45.815,15.982");
        assert_eq!(json["fetched_at"], "2024-05-01T12:00:00Z");
    }
}

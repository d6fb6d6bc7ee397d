//! Weather data: the Open-Meteo client and the snapshot it produces.
//!
//! [`WeatherSource`] is the seam between fetching and everything that
//! consumes forecasts. [`WeatherClient`] implements it against the live
//! API; tests implement it with canned snapshots.

pub mod client;
pub mod codes;
pub(crate) mod response;
pub mod snapshot;
pub mod units;

pub use client::WeatherClient;
pub use codes::WeatherCode;
pub use snapshot::{
    CurrentConditions, DailyForecast, ForecastMeta, HourlyForecast, WeatherSnapshot,
};
pub use units::{TemperatureUnit, Units, WindSpeedUnit};

use crate::error::FetchError;
use crate::location::Location;

/// Something that can produce weather snapshots and geocode names.
pub trait WeatherSource {
    /// Fetch a fresh snapshot for `location`.
    fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, FetchError>;

    /// Look up places matching `query`. No match is an empty list.
    fn search(&self, query: &str) -> Result<Vec<Location>, FetchError>;

    /// Resolve a name to its best match.
    fn resolve(&self, name: &str) -> Result<Location, FetchError> {
        self.search(name)?
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NotFound {
                query: name.to_string(),
            })
    }
}

impl<S: WeatherSource + ?Sized> WeatherSource for &S {
    fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, FetchError> {
        (**self).fetch(location)
    }

    fn search(&self, query: &str) -> Result<Vec<Location>, FetchError> {
        (**self).search(query)
    }
}

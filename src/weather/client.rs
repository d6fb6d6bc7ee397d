//! Blocking Open-Meteo client.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::response::{
    ForecastResponse, GeocodingResponse, CURRENT_FIELDS, DAILY_FIELDS, HOURLY_FIELDS,
};
use super::snapshot::WeatherSnapshot;
use super::units::Units;
use super::WeatherSource;
use crate::config::Settings;
use crate::error::{FetchError, Result};
use crate::location::Location;

/// Days of forecast requested. Covers today plus the five-day outlook with
/// margin for the timezone shift.
const FORECAST_DAYS: u32 = 7;

/// Fetches forecasts and geocodes city names against Open-Meteo.
pub struct WeatherClient {
    client: Client,
    forecast_url: String,
    geocoding_url: String,
    units: Units,
    language: String,
    search_limit: usize,
}

impl WeatherClient {
    /// Create a client from settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout())
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            client,
            forecast_url: settings.api.forecast_url.clone(),
            geocoding_url: settings.api.geocoding_url.clone(),
            units: settings.units,
            language: settings.language.clone(),
            search_limit: settings.search_results,
        })
    }

    /// Override the number of geocoding results requested.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, FetchError> {
        debug!(url, ?query, "GET");
        let response = self.client.get(url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| FetchError::Parse {
            message: e.to_string(),
        })
    }
}

impl WeatherSource for WeatherClient {
    fn fetch(&self, location: &Location) -> std::result::Result<WeatherSnapshot, FetchError> {
        if !location.has_valid_coordinates() {
            return Err(FetchError::InvalidLocation {
                latitude: location.latitude,
                longitude: location.longitude,
            });
        }

        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_FIELDS.join(",")),
            ("hourly", HOURLY_FIELDS.join(",")),
            ("daily", DAILY_FIELDS.join(",")),
            ("timezone", "auto".to_string()),
            ("forecast_days", FORECAST_DAYS.to_string()),
            ("temperature_unit", self.units.temperature.as_query().to_string()),
            ("wind_speed_unit", self.units.wind_speed.as_query().to_string()),
        ];

        let response: ForecastResponse = self.get_json(&self.forecast_url, &query)?;
        let snapshot = response.into_snapshot(location, self.units)?;
        debug!(
            location = %location.name,
            hourly = snapshot.hourly.len(),
            daily = snapshot.daily.len(),
            "Fetched forecast"
        );
        Ok(snapshot)
    }

    fn search(&self, query: &str) -> std::result::Result<Vec<Location>, FetchError> {
        let params = [
            ("name", query.to_string()),
            ("count", self.search_limit.to_string()),
            ("language", self.language.clone()),
            ("format", "json".to_string()),
        ];

        let response: GeocodingResponse = self.get_json(&self.geocoding_url, &params)?;
        let locations = response.into_locations();
        debug!(query, matches = locations.len(), "Geocoding lookup");
        Ok(locations)
    }
}

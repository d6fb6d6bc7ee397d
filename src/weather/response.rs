//! Open-Meteo wire types and their conversion into [`WeatherSnapshot`].
//!
//! Required fields are plain types so a response without them fails to
//! decode. Everything the upstream may omit is an `Option`, and array
//! elements may be `null`.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Deserialize;

use super::codes::WeatherCode;
use super::snapshot::{
    CurrentConditions, DailyForecast, ForecastMeta, HourlyForecast, WeatherSnapshot, DAILY_DAYS,
    HOURLY_HOURS,
};
use super::units::Units;
use crate::error::FetchError;
use crate::location::Location;

/// Open-Meteo timestamp format (`timeformat=iso8601`, minute precision).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Variables requested in the `current` block.
pub const CURRENT_FIELDS: &[&str] = &[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
    "pressure_msl",
];

/// Variables requested in the `hourly` block.
pub const HOURLY_FIELDS: &[&str] = &["temperature_2m", "weather_code"];

/// Variables requested in the `daily` block.
pub const DAILY_FIELDS: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "weather_code",
    "uv_index_max",
    "sunrise",
    "sunset",
];

/// Forecast response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub elevation: Option<f64>,
    pub current: CurrentBlock,
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
pub struct CurrentBlock {
    pub time: String,
    pub temperature_2m: f64,
    pub weather_code: u8,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub pressure_msl: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub weather_code: Vec<Option<u8>>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
    #[serde(default)]
    pub sunrise: Vec<Option<String>>,
    #[serde(default)]
    pub sunset: Vec<Option<String>>,
}

/// Geocoding response.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent (not empty) when nothing matched.
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            latitude: result.latitude,
            longitude: result.longitude,
            country: result.country.filter(|c| !c.is_empty()),
            admin: result.admin1.filter(|a| !a.is_empty()),
        }
    }
}

impl GeocodingResponse {
    /// Matches as locations, possibly empty.
    pub fn into_locations(self) -> Vec<Location> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect()
    }
}

fn parse_time(value: &str) -> Result<NaiveDateTime, FetchError> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT).map_err(|e| FetchError::Parse {
        message: format!("invalid time '{}': {}", value, e),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, FetchError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| FetchError::Parse {
        message: format!("invalid date '{}': {}", value, e),
    })
}

fn element<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

impl ForecastResponse {
    /// Build a snapshot for `location`.
    ///
    /// Hourly entries start at the hour containing the observation time;
    /// daily entries start the day after it.
    pub fn into_snapshot(
        self,
        location: &Location,
        units: Units,
    ) -> Result<WeatherSnapshot, FetchError> {
        let now = parse_time(&self.current.time)?;
        let hour_start = now
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .unwrap_or(now);

        let current = CurrentConditions {
            time: now,
            temperature: self.current.temperature_2m,
            feels_like: self.current.apparent_temperature,
            condition: WeatherCode(self.current.weather_code),
            wind_speed: self.current.wind_speed_10m,
            wind_direction: self.current.wind_direction_10m,
            humidity: self.current.relative_humidity_2m,
            pressure: self.current.pressure_msl,
        };

        let mut hourly = Vec::with_capacity(HOURLY_HOURS);
        for (i, raw) in self.hourly.time.iter().enumerate() {
            let time = parse_time(raw)?;
            if time < hour_start {
                continue;
            }
            hourly.push(HourlyForecast {
                time,
                temperature: element(&self.hourly.temperature_2m, i),
                condition: element(&self.hourly.weather_code, i).map(WeatherCode),
            });
            if hourly.len() == HOURLY_HOURS {
                break;
            }
        }

        let today = now.date();
        let mut daily = Vec::with_capacity(DAILY_DAYS);
        let mut today_index = None;
        for (i, raw) in self.daily.time.iter().enumerate() {
            let date = parse_date(raw)?;
            if date == today {
                today_index = Some(i);
            }
            if date <= today || daily.len() == DAILY_DAYS {
                continue;
            }
            daily.push(DailyForecast {
                date,
                min: element(&self.daily.temperature_2m_min, i),
                max: element(&self.daily.temperature_2m_max, i),
                condition: element(&self.daily.weather_code, i).map(WeatherCode),
            });
        }

        let sun_time = |values: &[Option<String>]| {
            today_index
                .and_then(|i| values.get(i).cloned().flatten())
                .and_then(|raw| parse_time(&raw).ok())
        };
        let sunrise = sun_time(&self.daily.sunrise);
        let sunset = sun_time(&self.daily.sunset);
        let uv_index = today_index.and_then(|i| element(&self.daily.uv_index_max, i));

        Ok(WeatherSnapshot {
            current,
            hourly,
            daily,
            sunrise,
            sunset,
            uv_index,
            meta: ForecastMeta {
                latitude: self.latitude.unwrap_or(location.latitude),
                longitude: self.longitude.unwrap_or(location.longitude),
                timezone: self.timezone,
                elevation: self.elevation,
            },
            units,
        })
    }
}

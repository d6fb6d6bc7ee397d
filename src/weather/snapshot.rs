//! Normalized weather snapshot.
//!
//! A [`WeatherSnapshot`] is what the rest of the application works with: it
//! is built once from an API response and never mutated afterwards. Optional
//! fields are `None` when the upstream did not report them and render as
//! `N/A`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::codes::WeatherCode;
use super::units::Units;

/// Number of hourly entries kept, starting at the current local hour.
pub const HOURLY_HOURS: usize = 8;

/// Number of daily entries kept, starting tomorrow.
pub const DAILY_DAYS: usize = 5;

/// Placeholder for values the upstream did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single point-in-time weather record including forecasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Conditions at observation time.
    pub current: CurrentConditions,
    /// Next hours, ordered by time.
    pub hourly: Vec<HourlyForecast>,
    /// Next days, ordered by date.
    pub daily: Vec<DailyForecast>,
    /// Today's sunrise, local time.
    pub sunrise: Option<NaiveDateTime>,
    /// Today's sunset, local time.
    pub sunset: Option<NaiveDateTime>,
    /// Today's maximum UV index.
    pub uv_index: Option<f64>,
    /// Where the forecast applies.
    pub meta: ForecastMeta,
    /// Units all values are expressed in.
    pub units: Units,
}

/// Current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time, local to the forecast location.
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub condition: WeatherCode,
    pub wind_speed: Option<f64>,
    /// Degrees, 0 = from the north.
    pub wind_direction: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<f64>,
    /// Mean sea level pressure in hPa.
    pub pressure: Option<f64>,
}

/// One hour of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature: Option<f64>,
    pub condition: Option<WeatherCode>,
}

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub condition: Option<WeatherCode>,
}

/// Location metadata reported by the forecast API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMeta {
    /// Grid cell latitude the forecast was computed for.
    pub latitude: f64,
    /// Grid cell longitude the forecast was computed for.
    pub longitude: f64,
    /// IANA timezone name, e.g. `Europe/Zagreb`.
    pub timezone: Option<String>,
    /// Elevation in metres.
    pub elevation: Option<f64>,
}

impl WeatherSnapshot {
    /// Current temperature with unit, e.g. `12.3°C`.
    pub fn format_temperature(&self) -> String {
        format!(
            "{:.1}{}",
            self.current.temperature,
            self.units.temperature.symbol()
        )
    }

    /// Any optional temperature with unit, or `N/A`.
    pub fn format_optional_temperature(&self, value: Option<f64>) -> String {
        format_optional(value, |v| {
            format!("{:.1}{}", v, self.units.temperature.symbol())
        })
    }

    /// Wind speed and cardinal direction, e.g. `12.0 km/h NE`.
    pub fn format_wind(&self) -> String {
        let Some(speed) = self.current.wind_speed else {
            return NOT_AVAILABLE.to_string();
        };
        let speed = format!("{:.1} {}", speed, self.units.wind_speed.symbol());
        match self.current.wind_direction {
            Some(deg) => format!("{} {}", speed, wind_direction_to_cardinal(deg)),
            None => speed,
        }
    }

    pub fn format_humidity(&self) -> String {
        format_optional(self.current.humidity, |v| format!("{:.0}%", v))
    }

    pub fn format_pressure(&self) -> String {
        format_optional(self.current.pressure, |v| format!("{:.0} hPa", v))
    }

    pub fn format_uv_index(&self) -> String {
        format_optional(self.uv_index, |v| format!("{:.1}", v))
    }
}

/// Format `value` with `f`, or return `N/A` when absent.
pub fn format_optional(value: Option<f64>, f: impl FnOnce(f64) -> String) -> String {
    value.map(f).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format an optional local time as `HH:MM`, or `N/A`.
pub fn format_clock(value: Option<NaiveDateTime>) -> String {
    value
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Convert wind direction from degrees to a 16-point compass direction.
pub fn wind_direction_to_cardinal(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    if !degrees.is_finite() {
        return "?";
    }
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 11.25) / 22.5) as usize % POINTS.len();
    POINTS[index]
}

/// Nerd Font arrow pointing where the wind blows from, in 8 sectors.
pub fn wind_direction_arrow(degrees: f64) -> &'static str {
    const ARROWS: [&str; 8] = ["󰁝", "󰁜", "󰁛", "󰁚", "󰁙", "󰁘", "󰁗", "󰁖"];
    if !degrees.is_finite() || degrees < 0.0 {
        return "";
    }
    let index = ((degrees + 22.5) / 45.0) as usize % ARROWS.len();
    ARROWS[index]
}

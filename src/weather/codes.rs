//! WMO weather interpretation codes.
//!
//! Open-Meteo reports conditions as WMO 4677 codes. [`WeatherCode`] keeps the
//! raw number and maps it to text, an emoji, and a Nerd Font glyph for the
//! status bar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WMO weather interpretation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u8);

/// Nerd Font glyph used when a code is not recognised.
const FALLBACK_ICON: &str = "󰖐";

impl WeatherCode {
    /// The raw code.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Foggy",
            48 => "Rime fog",
            51 => "Light drizzle",
            53 => "Drizzle",
            55 => "Dense drizzle",
            56 | 57 => "Freezing drizzle",
            61 => "Light rain",
            63 => "Rain",
            65 => "Heavy rain",
            66 | 67 => "Freezing rain",
            71 => "Light snow",
            73 => "Snow",
            75 => "Heavy snow",
            77 => "Snow grains",
            80 => "Light showers",
            81 => "Showers",
            82 => "Heavy showers",
            85 => "Snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with hail",
            99 => "Severe thunderstorm",
            _ => "Unknown",
        }
    }

    /// Emoji for terminal output.
    pub fn emoji(self) -> &'static str {
        match self.0 {
            0 => "☀️",
            1 => "🌤️",
            2 => "⛅",
            3 => "☁️",
            45 | 48 => "🌫️",
            51..=57 => "🌦️",
            61..=67 | 80..=82 => "🌧️",
            71 | 73 | 77 | 85 => "🌨️",
            75 | 86 => "❄️",
            95..=99 => "⛈️",
            _ => "❓",
        }
    }

    /// Nerd Font (Material Design) glyph for the status bar.
    pub fn icon(self) -> &'static str {
        match self.0 {
            0 | 1 => "󰖙",
            2 => "󰖖",
            3 => "󰖐",
            45 | 48 => "󰖑",
            51 | 53 | 55 | 56 | 57 | 80 => "󰖗",
            61 | 63 | 81 => "󰖛",
            65 | 82 => "󰖚",
            66 | 67 => "󰖞",
            71 | 73 | 77 => "󰖜",
            75 | 86 => "󰖝",
            85 => "󰖘",
            95 | 96 | 99 => "󰖓",
            _ => FALLBACK_ICON,
        }
    }
}

impl From<u8> for WeatherCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Nerd Font glyph for an optional code.
pub fn icon_or_fallback(code: Option<WeatherCode>) -> &'static str {
    code.map(WeatherCode::icon).unwrap_or(FALLBACK_ICON)
}

/// Description for an optional code.
pub fn description_or_unknown(code: Option<WeatherCode>) -> &'static str {
    code.map(WeatherCode::description).unwrap_or("Unknown")
}

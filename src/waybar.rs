//! Status-bar output in the Waybar custom module schema.
//!
//! One JSON object per invocation: `{"text", "tooltip", "class"}`. Errors
//! still produce a valid object so the bar never shows a broken module.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::forecast::{Forecast, Freshness};
use crate::weather::codes::{description_or_unknown, icon_or_fallback};
use crate::weather::snapshot::format_optional;
use crate::weather::{TemperatureUnit, WeatherSnapshot};

/// Hourly lines shown in the tooltip.
pub const TOOLTIP_HOURS: usize = 6;

const SEPARATOR_WIDTH: usize = 40;

/// CSS class Waybar applies to the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaybarClass {
    #[serde(rename = "weather")]
    Normal,
    #[serde(rename = "weather-stale")]
    Stale,
    #[serde(rename = "weather-error")]
    Error,
}

/// One Waybar update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaybarOutput {
    pub text: String,
    pub tooltip: String,
    pub class: WaybarClass,
}

impl WaybarOutput {
    /// Build the module output for a forecast.
    pub fn from_forecast(forecast: &Forecast, now: DateTime<Utc>) -> Self {
        let snapshot = &forecast.snapshot;
        let text = format!(
            "{}: {} {}",
            forecast.location.name,
            snapshot.current.condition.icon(),
            snapshot.format_temperature()
        );

        let mut tooltip = format_tooltip(&forecast.location.name, snapshot);
        let class = match &forecast.status {
            Freshness::Stale { reason } => {
                tooltip.push('\n');
                tooltip.push_str(&separator());
                tooltip.push_str(&format!(
                    "\nOffline, data from {} ({})",
                    forecast.age_label(now),
                    reason
                ));
                WaybarClass::Stale
            }
            Freshness::Cached | Freshness::Live => WaybarClass::Normal,
        };

        Self {
            text,
            tooltip,
            class,
        }
    }

    /// Output shown when no forecast could be obtained.
    pub fn error(message: impl Into<String>, unit: TemperatureUnit) -> Self {
        Self {
            text: format!("{} --{}", icon_or_fallback(None), unit.symbol()),
            tooltip: message.into(),
            class: WaybarClass::Error,
        }
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"text":"--","tooltip":"","class":"weather-error"}"#.to_string()
        })
    }
}

fn separator() -> String {
    "─".repeat(SEPARATOR_WIDTH)
}

/// Multi-line tooltip: header, today's next hours, the next days.
pub fn format_tooltip(name: &str, snapshot: &WeatherSnapshot) -> String {
    let symbol = snapshot.units.temperature.symbol();
    let mut lines = Vec::new();

    lines.push(format!(
        "{}: {}, {} {}",
        name,
        snapshot.format_temperature(),
        snapshot.current.condition.icon(),
        snapshot.current.condition.description()
    ));
    lines.push(separator());

    lines.push("Today:".to_string());
    let today = snapshot.current.time.date();
    for hour in snapshot
        .hourly
        .iter()
        .filter(|h| h.time.date() == today)
        .take(TOOLTIP_HOURS)
    {
        lines.push(format!(
            "    {}   {:>7}   {}  {}",
            hour.time.format("%H:%M"),
            format_optional(hour.temperature, |t| format!("{:.1}{}", t, symbol)),
            icon_or_fallback(hour.condition),
            description_or_unknown(hour.condition)
        ));
    }
    lines.push(separator());

    lines.push(format!("Next {} days:", snapshot.daily.len()));
    for day in &snapshot.daily {
        lines.push(format!(
            "    {} {}   {:>6} - {:>6}   {}  {}",
            day.date.format("%a"),
            day.date.format("%d.%m."),
            format_optional(day.min, |t| format!("{:.1}{}", t, symbol)),
            format_optional(day.max, |t| format!("{:.1}{}", t, symbol)),
            icon_or_fallback(day.condition),
            description_or_unknown(day.condition)
        ));
    }

    lines.join("\n")
}

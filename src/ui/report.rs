//! Terminal rendering of a forecast.

use chrono::{DateTime, Utc};

use super::table::Table;
use super::UserInterface;
use crate::forecast::{Forecast, Freshness};
use crate::weather::codes::description_or_unknown;
use crate::weather::snapshot::{format_clock, format_optional, wind_direction_arrow};

/// Renders a [`Forecast`] as a header, a list of fields, and two tables.
pub struct ForecastReport<'a> {
    forecast: &'a Forecast,
}

impl<'a> ForecastReport<'a> {
    pub fn new(forecast: &'a Forecast) -> Self {
        Self { forecast }
    }

    /// Title line: "Zagreb, Croatia".
    pub fn title(&self) -> String {
        self.forecast.location.display_name()
    }

    /// Headline: emoji, temperature, description.
    pub fn headline(&self) -> String {
        let current = &self.forecast.snapshot.current;
        format!(
            "{}  {}  {}",
            current.condition.emoji(),
            self.forecast.snapshot.format_temperature(),
            current.condition.description()
        )
    }

    /// Current conditions as label/value pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let snap = &self.forecast.snapshot;
        let wind = match snap.current.wind_direction.map(wind_direction_arrow) {
            Some(arrow) if !arrow.is_empty() && snap.current.wind_speed.is_some() => {
                format!("{} {}", snap.format_wind(), arrow)
            }
            _ => snap.format_wind(),
        };

        vec![
            (
                "Feels like",
                snap.format_optional_temperature(snap.current.feels_like),
            ),
            ("Humidity", snap.format_humidity()),
            ("Wind", wind),
            ("Pressure", snap.format_pressure()),
            ("UV index", snap.format_uv_index()),
            ("Sunrise", format_clock(snap.sunrise)),
            ("Sunset", format_clock(snap.sunset)),
        ]
    }

    /// Location details shown in verbose mode.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let meta = &self.forecast.snapshot.meta;
        vec![
            (
                "Coordinates",
                self.forecast.location.format_coordinates(),
            ),
            (
                "Timezone",
                meta.timezone.clone().unwrap_or_else(|| "N/A".to_string()),
            ),
            (
                "Elevation",
                format_optional(meta.elevation, |e| format!("{:.0} m", e)),
            ),
            ("Observed", meta_time(self.forecast)),
        ]
    }

    /// Next hours.
    pub fn hourly_table(&self) -> Table {
        let snap = &self.forecast.snapshot;
        let mut table = Table::new(vec!["Time", "", "Temp", "Conditions"]).align_right(2);
        for hour in &snap.hourly {
            table.add_row(&[
                hour.time.format("%H:%M").to_string(),
                hour.condition.map(|c| c.emoji()).unwrap_or("").to_string(),
                snap.format_optional_temperature(hour.temperature),
                description_or_unknown(hour.condition).to_string(),
            ]);
        }
        table
    }

    /// Next days.
    pub fn daily_table(&self) -> Table {
        let snap = &self.forecast.snapshot;
        let mut table = Table::new(vec!["Day", "", "Min", "Max", "Conditions"])
            .align_right(2)
            .align_right(3);
        for day in &snap.daily {
            table.add_row(&[
                day.date.format("%a %d.%m.").to_string(),
                day.condition.map(|c| c.emoji()).unwrap_or("").to_string(),
                snap.format_optional_temperature(day.min),
                snap.format_optional_temperature(day.max),
                description_or_unknown(day.condition).to_string(),
            ]);
        }
        table
    }

    /// Where the data came from, e.g. "Updated 3m ago (cached)".
    pub fn freshness(&self, now: DateTime<Utc>) -> String {
        let age = self.forecast.age_label(now);
        match &self.forecast.status {
            Freshness::Live => "Updated just now".to_string(),
            Freshness::Cached => format!("Updated {} (cached)", age),
            Freshness::Stale { reason } => {
                format!("Offline, showing data from {} ({})", age, reason)
            }
        }
    }

    /// Write the whole report to `ui`.
    pub fn render(&self, ui: &mut dyn UserInterface, now: DateTime<Utc>) {
        ui.show_header(&self.title());
        ui.message(&self.headline());
        ui.message("");
        for (key, value) in self.fields() {
            ui.show_field(key, &value);
        }
        if ui.output_mode().shows_details() {
            for (key, value) in self.details() {
                ui.show_field(key, &value);
            }
        }

        if !self.forecast.snapshot.hourly.is_empty() {
            ui.message("");
            ui.message(&self.hourly_table().render());
        }
        if !self.forecast.snapshot.daily.is_empty() {
            ui.message("");
            ui.message(&self.daily_table().render());
        }

        ui.message("");
        if self.forecast.status.is_stale() {
            ui.warning(&self.freshness(now));
        } else if ui.output_mode().shows_status() {
            ui.message(&self.freshness(now));
        }
    }
}

fn meta_time(forecast: &Forecast) -> String {
    forecast
        .snapshot
        .current
        .time
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::fixtures::{noon, snapshot};
    use crate::location::Location;
    use crate::ui::{MockUI, OutputMode};
    use crate::weather::{DailyForecast, HourlyForecast, WeatherCode};
    use chrono::{Duration, NaiveDate};

    fn forecast(status: Freshness) -> Forecast {
        let mut snap = snapshot(17.4);
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        snap.hourly = vec![HourlyForecast {
            time: day.and_hms_opt(14, 0, 0).unwrap(),
            temperature: Some(17.0),
            condition: Some(WeatherCode(2)),
        }];
        snap.daily = vec![DailyForecast {
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            min: Some(9.5),
            max: None,
            condition: None,
        }];
        Forecast {
            location: Location::zagreb(),
            snapshot: snap,
            fetched_at: noon(),
            status,
        }
    }

    #[test]
    fn headline_and_title() {
        let f = forecast(Freshness::Live);
        let report = ForecastReport::new(&f);

        assert_eq!(report.title(), "Zagreb, Croatia");
        assert_eq!(report.headline(), "🌤️  17.4°C  Mainly clear");
    }

    #[test]
    fn missing_fields_render_as_not_available() {
        let f = forecast(Freshness::Live);
        let fields = ForecastReport::new(&f).fields();
        let get = |k: &str| fields.iter().find(|(key, _)| *key == k).unwrap().1.clone();

        assert_eq!(get("Feels like"), "16.4°C");
        assert_eq!(get("Pressure"), "N/A");
        assert_eq!(get("UV index"), "N/A");
        assert_eq!(get("Sunrise"), "N/A");
        assert!(get("Wind").starts_with("8.0 km/h S"));
    }

    #[test]
    fn tables_contain_rows() {
        let f = forecast(Freshness::Live);
        let report = ForecastReport::new(&f);

        let hourly = report.hourly_table().render();
        assert!(hourly.contains("14:00"));
        assert!(hourly.contains("Partly cloudy"));

        let daily = report.daily_table().render();
        assert!(daily.contains("Thu 02.05."));
        assert!(daily.contains("N/A"));
        assert!(daily.contains("Unknown"));
    }

    #[test]
    fn freshness_labels() {
        let now = noon() + Duration::minutes(3);
        let cached = forecast(Freshness::Cached);
        assert_eq!(
            ForecastReport::new(&cached).freshness(now),
            "Updated 3m ago (cached)"
        );

        let stale = forecast(Freshness::Stale {
            reason: "Network error: dns".into(),
        });
        assert!(ForecastReport::new(&stale)
            .freshness(now)
            .starts_with("Offline, showing data from 3m ago"));
    }

    #[test]
    fn render_writes_to_ui() {
        let f = forecast(Freshness::Cached);
        let mut ui = MockUI::new();

        ForecastReport::new(&f).render(&mut ui, noon());

        assert_eq!(ui.headers(), ["Zagreb, Croatia"]);
        assert_eq!(ui.field("Humidity"), Some("60%"));
        assert!(ui.field("Timezone").is_none());
        assert!(ui.has_message("Updated just now (cached)"));
    }

    #[test]
    fn verbose_render_adds_details() {
        let f = forecast(Freshness::Live);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        ForecastReport::new(&f).render(&mut ui, noon());

        assert_eq!(ui.field("Timezone"), Some("Europe/Zagreb"));
        assert_eq!(ui.field("Coordinates"), Some("45.8150, 15.9820"));
    }

    #[test]
    fn stale_render_warns() {
        let f = forecast(Freshness::Stale {
            reason: "timeout".into(),
        });
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        ForecastReport::new(&f).render(&mut ui, noon() + Duration::minutes(20));

        assert!(ui.has_warning("20m ago"));
    }
}

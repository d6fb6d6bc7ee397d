//! Show command implementation.
//!
//! `skycast show` prints current conditions and forecast tables for the
//! default city, a named city, or explicit coordinates.

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::debug;

use crate::cli::args::ShowArgs;
use crate::cli::context::AppContext;
use crate::error::{Result, SkycastError};
use crate::forecast::{Forecast, ForecastService};
use crate::location::Location;
use crate::ui::{hints, ForecastReport, UserInterface};
use crate::weather::WeatherSource;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand<'a> {
    context: &'a AppContext,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(context: &'a AppContext, args: ShowArgs) -> Self {
        Self { context, args }
    }

    /// Run against an explicit service and clock.
    pub fn run<S: WeatherSource>(
        &self,
        service: &ForecastService<S>,
        ui: &mut dyn UserInterface,
        now: DateTime<Utc>,
    ) -> Result<CommandResult> {
        let location = match self.target(service, ui) {
            Ok(location) => location,
            Err(SkycastError::Fetch(err)) => {
                ui.error(&err.to_string());
                ui.show_hint(hints::after_fetch_failure(&err));
                return Ok(CommandResult::failure(1));
            }
            Err(err) => return Err(err),
        };

        let mut spinner =
            ui.start_spinner(&format!("Fetching forecast for {}", location.name));
        let result = if self.args.refresh {
            service.refresh(&location, now)
        } else {
            service.get_forecast(&location, now)
        };

        let forecast = match result {
            Ok(forecast) => {
                spinner.finish_and_clear();
                forecast
            }
            Err(err) => {
                spinner.finish_error("Could not fetch forecast");
                ui.error(&err.to_string());
                ui.show_hint(hints::after_fetch_failure(&err));
                return Ok(CommandResult::failure(1));
            }
        };
        debug!(status = forecast.status.label(), "Forecast ready");

        if self.args.json {
            ui.data(&forecast_json(&forecast)?);
            return Ok(CommandResult::success());
        }

        ForecastReport::new(&forecast).render(ui, now);
        if forecast.status.is_stale() {
            ui.show_hint(hints::after_stale());
        }
        Ok(CommandResult::success())
    }

    /// The location asked for on the command line, else the default city.
    fn target<S: WeatherSource>(
        &self,
        service: &ForecastService<S>,
        ui: &mut dyn UserInterface,
    ) -> Result<Location> {
        if let Some(name) = &self.args.city {
            let mut spinner = ui.start_spinner(&format!("Looking up {}", name));
            let resolved = service.resolve(name);
            spinner.finish_and_clear();
            return Ok(resolved?);
        }

        let location = match (self.args.lat, self.args.lon) {
            (Some(lat), Some(lon)) => {
                let mut location = Location::new("", lat, lon);
                location.name = location.format_coordinates();
                location
            }
            _ => self.context.settings.default_city.clone(),
        };

        if !location.has_valid_coordinates() {
            return Err(SkycastError::InvalidInput {
                message: format!(
                    "coordinates out of range: {} (latitude -90..90, longitude -180..180)",
                    location.format_coordinates()
                ),
            });
        }
        Ok(location)
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let service = self.context.forecast_service()?;
        self.run(&service, ui, Utc::now())
    }
}

fn forecast_json(forecast: &Forecast) -> Result<String> {
    let value = json!({
        "location": forecast.location,
        "fetched_at": forecast.fetched_at,
        "status": forecast.status.label(),
        "snapshot": forecast.snapshot,
    });
    Ok(serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?)
}

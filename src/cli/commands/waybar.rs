//! Waybar command implementation.
//!
//! `skycast waybar` prints exactly one JSON object on stdout and exits 0,
//! whatever happens, so the status bar never shows a broken module.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::cli::context::AppContext;
use crate::error::Result;
use crate::forecast::ForecastService;
use crate::ui::UserInterface;
use crate::waybar::WaybarOutput;
use crate::weather::WeatherSource;

use super::dispatcher::{Command, CommandResult};

/// The waybar command implementation.
pub struct WaybarCommand<'a> {
    context: &'a AppContext,
}

impl<'a> WaybarCommand<'a> {
    /// Create a new waybar command.
    pub fn new(context: &'a AppContext) -> Self {
        Self { context }
    }

    /// Build the output for the default city.
    pub fn output<S: WeatherSource>(
        &self,
        service: &ForecastService<S>,
        now: DateTime<Utc>,
    ) -> WaybarOutput {
        let city = &self.context.settings.default_city;
        match service.get_forecast(city, now) {
            Ok(forecast) => WaybarOutput::from_forecast(&forecast, now),
            Err(err) => {
                warn!(city = %city.name, "No forecast for status bar: {}", err);
                self.error_output(format!("{}: {}", city.name, err))
            }
        }
    }

    fn error_output(&self, message: String) -> WaybarOutput {
        WaybarOutput::error(message, self.context.settings.units.temperature)
    }
}

impl Command for WaybarCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output = match self.context.forecast_service() {
            Ok(service) => self.output(&service, Utc::now()),
            Err(err) => {
                warn!("Cannot build forecast service: {}", err);
                self.error_output(err.to_string())
            }
        };
        ui.data(&output.to_json());
        Ok(CommandResult::success())
    }
}

//! Config command implementation.
//!
//! `skycast config` shows the active settings, prints the settings path,
//! sets the default city, or resets everything to defaults.

use clap::{Args, Subcommand};

use crate::cli::context::AppContext;
use crate::config::{reset_settings, set_default_city, validate_settings, Settings};
use crate::error::{Result, SkycastError};
use crate::location::Location;
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Arguments for the config command.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the active settings.
    Show {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the settings file path.
    Path,
    /// Set the default city by coordinates.
    SetDefault {
        /// Display name of the city.
        #[arg(long)]
        name: String,
        /// Latitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees.
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Country shown next to the name.
        #[arg(long)]
        country: Option<String>,
    },
    /// Restore default settings.
    Reset {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// The config command implementation.
pub struct ConfigCommand<'a> {
    context: &'a AppContext,
    args: ConfigArgs,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command.
    pub fn new(context: &'a AppContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            ConfigSubcommand::Show { json } => show(self.context, *json, ui),
            ConfigSubcommand::Path => {
                ui.message(&self.context.config_path().display().to_string());
                Ok(CommandResult::success())
            }
            ConfigSubcommand::SetDefault {
                name,
                lat,
                lon,
                country,
            } => {
                let mut location = Location::new(name.trim(), *lat, *lon);
                if let Some(country) = country {
                    location = location.with_country(country.trim());
                }
                set_default(self.context, location, ui)
            }
            ConfigSubcommand::Reset { force } => reset(self.context, *force, ui),
        }
    }
}

fn show(context: &AppContext, json: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    let settings = &context.settings;

    if json {
        let out =
            serde_json::to_string_pretty(settings).map_err(|e| SkycastError::Other(e.into()))?;
        ui.data(&out);
        return Ok(CommandResult::success());
    }

    ui.show_header("Settings");
    for (key, value) in settings_fields(settings) {
        ui.show_field(key, &value);
    }
    ui.message("");
    ui.message(&format!("# {}", context.config_path().display()));

    for problem in validate_settings(settings) {
        ui.warning(&format!("{}: {}", problem.field, problem.message));
    }
    Ok(CommandResult::success())
}

fn settings_fields(settings: &Settings) -> Vec<(&'static str, String)> {
    let city = &settings.default_city;
    vec![
        (
            "Default city",
            format!("{} ({})", city.display_name(), city.format_coordinates()),
        ),
        ("Cache TTL", settings.cache_ttl.clone()),
        ("Timeout", format!("{}s", settings.timeout_seconds)),
        (
            "Units",
            format!(
                "{}, {}",
                settings.units.temperature.symbol(),
                settings.units.wind_speed.symbol()
            ),
        ),
        ("Language", settings.language.clone()),
        ("Results", settings.search_results.to_string()),
        ("Forecast API", settings.api.forecast_url.clone()),
        ("Geocoding API", settings.api.geocoding_url.clone()),
    ]
}

fn set_default(
    context: &AppContext,
    location: Location,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    if location.name.is_empty() {
        return Err(SkycastError::InvalidInput {
            message: "--name must not be empty".to_string(),
        });
    }
    if !location.has_valid_coordinates() {
        return Err(SkycastError::InvalidInput {
            message: format!(
                "coordinates out of range: {} (latitude -90..90, longitude -180..180)",
                location.format_coordinates()
            ),
        });
    }

    let settings = set_default_city(context.config_path(), location)?;
    ui.success(&format!(
        "Default city set to {} ({})",
        settings.default_city.display_name(),
        settings.default_city.format_coordinates()
    ));
    Ok(CommandResult::success())
}

fn reset(context: &AppContext, force: bool, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    if !force {
        let prompt = Prompt::confirm("reset_config", "Restore default settings?", false);
        if !ui.prompt(&prompt)?.as_bool() {
            ui.message("Cancelled");
            return Ok(CommandResult::success());
        }
    }

    reset_settings(context.config_path())?;
    ui.success(&format!(
        "Settings reset ({})",
        context.config_path().display()
    ));
    Ok(CommandResult::success())
}

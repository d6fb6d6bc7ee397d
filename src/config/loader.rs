//! Settings file loading and saving.

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::settings::Settings;
use crate::error::{Result, SkycastError};
use crate::location::Location;

/// Default settings file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the default settings path (`~/.config/skycast/config.json` on Linux).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skycast")
        .join(CONFIG_FILE_NAME)
}

/// Load settings from `path`.
///
/// A missing file yields defaults. A legacy file whose `default_city` is a
/// bare string is upgraded in place.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let mut value: Value =
        serde_json::from_str(&content).map_err(|e| SkycastError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let migrated = migrate_legacy(&mut value);

    let settings: Settings =
        serde_json::from_value(value).map_err(|e| SkycastError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if migrated {
        info!(path = %path.display(), "Upgrading legacy config format");
        if let Err(e) = save_settings(&settings, path) {
            warn!("Failed to save upgraded config: {}", e);
        }
    }

    Ok(settings)
}

/// Load settings, falling back to defaults if the file cannot be used.
pub fn load_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default()
        }
    }
}

/// Save settings to `path` using atomic write.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let content = serde_json::to_string_pretty(settings).map_err(|e| {
        SkycastError::ConfigValidationError {
            message: format!("Failed to serialize settings: {}", e),
        }
    })?;

    let mut temp = NamedTempFile::new_in(dir)?;
    writeln!(temp, "{}", content)?;
    temp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), "Saved config");
    Ok(())
}

/// Store `location` as the default city.
pub fn set_default_city(path: &Path, location: Location) -> Result<Settings> {
    let mut settings = load_or_default(path);
    settings.default_city = location;
    save_settings(&settings, path)?;
    Ok(settings)
}

/// Overwrite the settings file with defaults.
pub fn reset_settings(path: &Path) -> Result<Settings> {
    let settings = Settings::default();
    save_settings(&settings, path)?;
    Ok(settings)
}

/// Upgrade `{"default_city": "Name"}` to the object form.
///
/// The old format carried no coordinates, so the built-in default
/// coordinates are kept under the stored name.
fn migrate_legacy(value: &mut Value) -> bool {
    let Some(name) = value
        .get("default_city")
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return false;
    };

    let mut city = Location::zagreb();
    city.name = name;
    match serde_json::to_value(city) {
        Ok(city) => {
            value["default_city"] = city;
            true
        }
        Err(_) => false,
    }
}

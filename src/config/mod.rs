//! Configuration loading, saving, and validation for skycast.
//!
//! Settings live in a single JSON file:
//! - Schema in [`settings`]
//! - Loading, saving, and legacy migration in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use skycast::config::{load_settings, set_default_city, validate};
//! use skycast::Location;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.json");
//!
//! set_default_city(&path, Location::new("Split", 43.508, 16.44)).unwrap();
//!
//! let settings = load_settings(&path).unwrap();
//! validate(&settings).unwrap();
//! assert_eq!(settings.default_city.name, "Split");
//! ```

pub mod loader;
pub mod settings;
pub mod validator;

pub use loader::{
    default_config_path, load_or_default, load_settings, reset_settings, save_settings,
    set_default_city,
};
pub use settings::{ApiSettings, Settings};
pub use validator::{validate, validate_settings, ValidationError};

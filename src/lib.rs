//! Skycast - Weather forecasts for the terminal and the status bar.
//!
//! Skycast fetches current conditions and forecasts from Open-Meteo, keeps
//! the last result per location in a small disk cache, and falls back to
//! that cache when the network is unavailable.
//!
//! # Modules
//!
//! - [`cache`] - Disk cache with TTL-based freshness
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading, saving, and validation
//! - [`error`] - Error types and result aliases
//! - [`forecast`] - Cache-or-fetch orchestration with stale fallback
//! - [`location`] - Places and cache keys
//! - [`ui`] - Prompts, spinners, tables, and terminal output
//! - [`waybar`] - Status-bar JSON output
//! - [`weather`] - Open-Meteo client and the weather snapshot model
//!
//! # Example
//!
//! ```
//! use skycast::{Location, LocationKey};
//!
//! let zagreb = Location::zagreb();
//! assert_eq!(zagreb.cache_key(), LocationKey::new("45.815,15.982"));
//! assert_eq!(zagreb.display_name(), "Zagreb, Croatia");
//! ```
//!
//! For end-to-end fetching against a mock server, see the integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod forecast;
pub mod location;
pub mod ui;
pub mod waybar;
pub mod weather;

pub use error::{FetchError, Result, SkycastError};
pub use forecast::{Forecast, ForecastService, Freshness};
pub use location::{Location, LocationKey};
pub use weather::{WeatherClient, WeatherSnapshot, WeatherSource};

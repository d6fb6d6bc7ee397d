//! Error types for skycast operations.
//!
//! This module defines [`SkycastError`], the primary error type used throughout
//! the application, [`FetchError`] for failures at the weather client
//! boundary, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fetch failures stay as `FetchError` so the forecast service can fall
//!   back to a stale cache entry before anything reaches the user
//! - Unreadable cache files are recovered as a cold start, never surfaced
//! - Use `anyhow::Error` (via `SkycastError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single request against the upstream weather API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Connection, DNS or TLS failure.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the JSON we expected.
    #[error("Malformed response: {message}")]
    Parse { message: String },

    /// Coordinates outside the valid range; no request was sent.
    #[error("Invalid coordinates: lat={latitude}, lon={longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    /// A geocoding lookup returned no match.
    #[error("Location not found: {query}")]
    NotFound { query: String },
}

impl FetchError {
    /// Whether the failure means the upstream could not be reached at all.
    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if err.is_timeout() {
            Self::Timeout { url }
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
                url,
            }
        } else if err.is_decode() {
            Self::Parse {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Core error type for skycast operations.
#[derive(Debug, Error)]
pub enum SkycastError {
    /// Fetching from the weather API failed and nothing cached could stand in.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Cache file exists but could not be read or decoded.
    #[error("Failed to read cache at {path}: {message}")]
    CacheRead { path: PathBuf, message: String },

    /// Cache file could not be written.
    #[error("Failed to write cache at {path}: {message}")]
    CacheWrite { path: PathBuf, message: String },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Invalid user input on the command line or in a prompt.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for skycast operations.
pub type Result<T> = std::result::Result<T, SkycastError>;

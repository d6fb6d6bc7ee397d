//! Settings validation rules.
//!
//! All problems are collected so the user can fix them in one pass.

use super::settings::{Settings, SEARCH_RESULTS_RANGE, TIMEOUT_RANGE};
use crate::cache::parse_ttl;
use crate::error::{Result, SkycastError};

/// A single validation problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Setting the problem is about.
    pub field: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate settings and return all errors.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !settings.default_city.has_valid_coordinates() {
        errors.push(ValidationError {
            field: "default_city",
            message: format!(
                "coordinates out of range: {}",
                settings.default_city.format_coordinates()
            ),
        });
    }
    if settings.default_city.name.trim().is_empty() {
        errors.push(ValidationError {
            field: "default_city",
            message: "name must not be empty".to_string(),
        });
    }

    if let Err(e) = parse_ttl(&settings.cache_ttl) {
        errors.push(ValidationError {
            field: "cache_ttl",
            message: format!("{:#}", e),
        });
    }

    if !TIMEOUT_RANGE.contains(&settings.timeout_seconds) {
        errors.push(ValidationError {
            field: "timeout_seconds",
            message: format!(
                "must be between {} and {}, got {}",
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end(),
                settings.timeout_seconds
            ),
        });
    }

    if !SEARCH_RESULTS_RANGE.contains(&settings.search_results) {
        errors.push(ValidationError {
            field: "search_results",
            message: format!(
                "must be between {} and {}, got {}",
                SEARCH_RESULTS_RANGE.start(),
                SEARCH_RESULTS_RANGE.end(),
                settings.search_results
            ),
        });
    }

    if settings.language.trim().is_empty() {
        errors.push(ValidationError {
            field: "language",
            message: "must not be empty".to_string(),
        });
    }

    for (field, url) in [
        ("api.forecast_url", &settings.api.forecast_url),
        ("api.geocoding_url", &settings.api.geocoding_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ValidationError {
                field,
                message: format!("not an http(s) URL: '{}'", url),
            });
        }
    }

    errors
}

/// Validate settings, failing with every problem found.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(SkycastError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_empty());
        assert!(validate(&Settings::default()).is_ok());
    }

    #[test]
    fn out_of_range_coordinates() {
        let settings = Settings {
            default_city: Location::new("Nowhere", 95.0, 0.0),
            ..Default::default()
        };
        let errors = validate_settings(&settings);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "default_city");
    }

    #[test]
    fn collects_all_errors() {
        let mut settings = Settings {
            cache_ttl: "later".into(),
            timeout_seconds: 0,
            search_results: 500,
            ..Default::default()
        };
        settings.api.forecast_url = "ftp://example.com".into();

        let fields: Vec<&str> = validate_settings(&settings)
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "cache_ttl",
                "timeout_seconds",
                "search_results",
                "api.forecast_url"
            ]
        );
    }

    #[test]
    fn validate_joins_messages() {
        let settings = Settings {
            language: " ".into(),
            timeout_seconds: 61,
            ..Default::default()
        };
        let err = validate(&settings).unwrap_err().to_string();
        assert!(err.contains("timeout_seconds"));
        assert!(err.contains("language"));
    }
}

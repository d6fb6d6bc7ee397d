//! Hints that suggest the logical next command.

use crate::error::FetchError;

/// After `search` listed results without saving one.
pub fn after_search(query: &str) -> String {
    format!(
        "Run `skycast search \"{}\" --set-default` to save a result as your default city.",
        query
    )
}

/// When a search came back empty.
pub fn no_search_results() -> &'static str {
    "Check the spelling, or try the name in the local language."
}

/// When a stale forecast was shown.
pub fn after_stale() -> &'static str {
    "Run `skycast show --refresh` once you are back online."
}

/// When nothing could be fetched and nothing was cached.
pub fn after_fetch_failure(err: &FetchError) -> &'static str {
    match err {
        FetchError::NotFound { .. } => "Run `skycast search <name>` to see matching places.",
        e if e.is_offline() => "Check your connection. Forecasts are cached once fetched.",
        _ => "Check the API URLs in `skycast config show`.",
    }
}

/// After clearing a non-empty cache.
pub fn after_cache_clear() -> &'static str {
    "The next `skycast show` fetches fresh data."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hint_quotes_query() {
        let hint = after_search("San Francisco");
        assert!(hint.contains("\"San Francisco\""));
        assert!(hint.contains("--set-default"));
    }

    #[test]
    fn static_hints_reference_commands() {
        assert!(after_stale().contains("--refresh"));
        assert!(after_cache_clear().contains("skycast show"));
        assert!(!no_search_results().is_empty());
    }

    #[test]
    fn fetch_failure_hint_depends_on_cause() {
        let offline = FetchError::Timeout {
            url: "https://api.open-meteo.com/v1/forecast".into(),
        };
        let missing = FetchError::NotFound {
            query: "Atlantis".into(),
        };
        let rejected = FetchError::Status {
            status: 400,
            url: "https://api.open-meteo.com/v1/forecast".into(),
        };

        assert!(after_fetch_failure(&offline).contains("connection"));
        assert!(after_fetch_failure(&missing).contains("skycast search"));
        assert!(after_fetch_failure(&rejected).contains("config show"));
    }
}

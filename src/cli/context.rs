//! Per-invocation state shared by all commands.

use std::path::{Path, PathBuf};

use crate::cache::{default_cache_file, CacheStore};
use crate::config::{default_config_path, Settings};
use crate::error::Result;
use crate::forecast::ForecastService;
use crate::weather::WeatherClient;

/// Settings and file locations resolved once in `main`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub config_path: PathBuf,
    pub cache_path: PathBuf,
}

impl AppContext {
    pub fn new(settings: Settings, config_path: PathBuf, cache_path: PathBuf) -> Self {
        Self {
            settings,
            config_path,
            cache_path,
        }
    }

    /// Fill in the per-user default paths where no override was given.
    pub fn resolve_paths(
        config: Option<PathBuf>,
        cache_file: Option<PathBuf>,
    ) -> (PathBuf, PathBuf) {
        (
            config.unwrap_or_else(default_config_path),
            cache_file.unwrap_or_else(default_cache_file),
        )
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn cache_store(&self) -> CacheStore {
        CacheStore::new(&self.cache_path)
    }

    /// Live client plus cache, using the configured TTL.
    pub fn forecast_service(&self) -> Result<ForecastService<WeatherClient>> {
        let client = WeatherClient::new(&self.settings)?;
        Ok(ForecastService::new(
            client,
            self.cache_store(),
            self.settings.ttl()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_paths_win() {
        let (config, cache) = AppContext::resolve_paths(
            Some(PathBuf::from("/tmp/a.json")),
            Some(PathBuf::from("/tmp/b.json")),
        );
        assert_eq!(config, PathBuf::from("/tmp/a.json"));
        assert_eq!(cache, PathBuf::from("/tmp/b.json"));
    }

    #[test]
    fn bad_ttl_fails_service_creation() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            cache_ttl: "soon".into(),
            ..Settings::default()
        };
        let ctx = AppContext::new(
            settings,
            temp.path().join("config.json"),
            temp.path().join("cache.json"),
        );
        assert!(ctx.forecast_service().is_err());
        assert_eq!(ctx.cache_store().path(), temp.path().join("cache.json"));
    }
}

//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A complete Open-Meteo forecast body for Zagreb observed at 2024-05-01 14:15.
pub fn forecast_body() -> String {
    let hourly_time: Vec<String> = (0..48)
        .map(|h| format!("2024-05-{:02}T{:02}:00", 1 + h / 24, h % 24))
        .collect();
    let hourly_temp: Vec<f64> = (0..48).map(|h| 12.0 + (h % 24) as f64 * 0.25).collect();
    let hourly_code: Vec<u8> = (0..48).map(|h| if h < 30 { 0 } else { 61 }).collect();
    let daily_time: Vec<String> = (1..=7).map(|d| format!("2024-05-{:02}", d)).collect();

    serde_json::json!({
        "latitude": 45.82,
        "longitude": 15.98,
        "timezone": "Europe/Zagreb",
        "elevation": 122.0,
        "current": {
            "time": "2024-05-01T14:15",
            "temperature_2m": 17.4,
            "relative_humidity_2m": 55,
            "apparent_temperature": 16.1,
            "weather_code": 0,
            "wind_speed_10m": 9.7,
            "wind_direction_10m": 225,
            "pressure_msl": 1014.2
        },
        "hourly": {
            "time": hourly_time,
            "temperature_2m": hourly_temp,
            "weather_code": hourly_code
        },
        "daily": {
            "time": daily_time,
            "temperature_2m_max": [19.0, 21.5, 22.0, 18.0, 16.5, 20.0, 23.0],
            "temperature_2m_min": [8.0, 9.5, 11.0, 10.0, 7.5, 8.0, 12.0],
            "weather_code": [0, 1, 2, 61, 63, 3, 95],
            "uv_index_max": [5.2, 6.0, 6.1, 3.0, 2.5, 4.0, 6.5],
            "sunrise": ["2024-05-01T05:38", "2024-05-02T05:37", "2024-05-03T05:35",
                        "2024-05-04T05:34", "2024-05-05T05:32", "2024-05-06T05:31",
                        "2024-05-07T05:30"],
            "sunset": ["2024-05-01T20:12", "2024-05-02T20:13", "2024-05-03T20:14",
                       "2024-05-04T20:16", "2024-05-05T20:17", "2024-05-06T20:18",
                       "2024-05-07T20:19"]
        }
    })
    .to_string()
}

/// A geocoding body with two matches for "Split".
pub fn search_body() -> String {
    serde_json::json!({
        "results": [
            {
                "id": 3190261,
                "name": "Split",
                "latitude": 43.50891,
                "longitude": 16.43915,
                "country": "Croatia",
                "admin1": "Split-Dalmatia"
            },
            {
                "id": 5768233,
                "name": "Split",
                "latitude": 46.1,
                "longitude": -97.3,
                "country": "United States",
                "admin1": "North Dakota"
            }
        ],
        "generationtime_ms": 0.7
    })
    .to_string()
}

/// Temporary config and cache files for one test.
pub struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    /// Settings pointing both APIs at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let config = serde_json::json!({
            "api": {
                "forecast_url": format!("{}/v1/forecast", base_url),
                "geocoding_url": format!("{}/v1/search", base_url)
            }
        });
        fs::write(temp.path().join("config.json"), config.to_string()).unwrap();
        Self { temp }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.json")
    }

    pub fn cache_path(&self) -> PathBuf {
        self.temp.path().join("cache.json")
    }

    /// Global flags that point the binary at this sandbox.
    pub fn args(&self) -> Vec<String> {
        vec![
            "--config".to_string(),
            self.config_path().display().to_string(),
            "--cache-file".to_string(),
            self.cache_path().display().to_string(),
        ]
    }
}

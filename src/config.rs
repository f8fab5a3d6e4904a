use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::weather::PaintType;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub forecast: ForecastConfig,
    pub geocode: GeocodeConfig,
    pub advisor: AdvisorConfig,
    pub monitoring: MonitoringConfig,
    /// Optional fallback coordinates used when no --lat/--lon flags are given.
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    pub base_url: String,
    /// Forecast horizon in days. The provider caps this at 16.
    pub forecast_days: u8,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeConfig {
    pub base_url: String,
    /// Language hint for place names (`accept-language`).
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorConfig {
    pub default_paint: PaintType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl AppConfig {
    /// Load configuration from config/default.toml, loading .env first.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config/default.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        dotenvy::dotenv().ok();

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }
}

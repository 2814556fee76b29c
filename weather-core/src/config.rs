use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::{
    error::WeatherError,
    model::Location,
    provider::openmeteo::{DEFAULT_BASE_URL, DEFAULT_TIMEZONE},
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// base_url = "https://api.open-meteo.com/v1"
/// timezone = "America/New_York"
///
/// [location]
/// latitude = 25.7617
/// longitude = -80.1918
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Open-Meteo API root, without the `/forecast` path.
    pub base_url: String,

    pub location: Location,

    /// IANA timezone the daily forecast is bucketed in.
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            location: Location::default(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), WeatherError> {
        if !self.location.is_valid() {
            return Err(WeatherError::InvalidConfig(format!(
                "location ({}, {}) is out of range: latitude must be -90 to 90, longitude -180 to 180",
                self.location.latitude, self.location.longitude
            )));
        }

        if self.base_url.trim().is_empty() {
            return Err(WeatherError::InvalidConfig("base_url must not be empty".into()));
        }

        if self.timezone.trim().is_empty() {
            return Err(WeatherError::InvalidConfig("timezone must not be empty".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo_for_miami() {
        let cfg = Config::default();

        assert_eq!(cfg.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(cfg.timezone, "America/New_York");
        assert_eq!(cfg.location, Location::MIAMI);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            location: Location { latitude: 40.7128, longitude: -74.006 },
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timezone = \"UTC\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(cfg.timezone, "UTC");
        assert_eq!(cfg.location, Location::MIAMI);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_location_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[location]\nlatitude = 95.0\nlongitude = 0.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }

    #[test]
    fn empty_timezone_is_invalid() {
        let cfg = Config { timezone: " ".into(), ..Config::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("timezone"));
    }
}

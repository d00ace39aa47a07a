//! Persistent CLI Configuration Loader
//!
//! Configuration is loaded from `~/.config/gpa/config.toml` on Linux,
//! `~/Library/Application Support/gpa/config.toml` on macOS
//! or `%APPDATA%\gpa\config.toml` on Windows.

use gpa::config::MAX_PRECISION;
use gpa::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Custom curriculum JSON file used instead of the built-in catalog.
    pub catalog: Option<PathBuf>,
    /// Decimal places of the reported GPA.
    pub precision: Option<u32>,
    /// Rounding mode ("half-up", "half-even", "down").
    pub rounding: Option<String>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gpa"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Attempts to load configuration from the default config file location.
    /// Returns `CliConfig::default()` if the file doesn't exist or fails to parse.
    ///
    /// Problems are returned as messages rather than logged, since this runs
    /// before the tracing subscriber exists.
    pub fn load() -> (Self, Vec<String>) {
        let Some(path) = Self::config_path() else {
            return (Self::default(), Vec::new());
        };

        if !path.exists() {
            return (Self::default(), Vec::new());
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => (config, Vec::new()),
                Err(e) => (
                    Self::default(),
                    vec![format!("Failed to parse config file {:?}: {}", path, e)],
                ),
            },
            Err(e) => (
                Self::default(),
                vec![format!("Failed to read config file {:?}: {}", path, e)],
            ),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Saves the current configuration to the default config file location.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(&path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(path)
    }

    /// Writes a sample configuration file to the default location.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let defaults = GpaConfig::default();
        let sample = CliConfig {
            catalog: None,
            precision: Some(defaults.precision),
            rounding: Some(defaults.rounding.to_string()),
            enable_logging: Some(false),
        };
        sample.save()
    }

    /// Engine settings: command-line values win over this file, which wins
    /// over the engine defaults.
    ///
    /// A bad value in the file is replaced by the default and reported in the
    /// returned messages. A bad command-line value is an error.
    pub fn resolve(
        &self,
        precision: Option<u32>,
        rounding: Option<RoundingMode>,
    ) -> Result<(GpaConfig, Vec<String>), GpaError> {
        let defaults = GpaConfig::default();
        let mut warnings = Vec::new();

        let file_precision = match self.precision {
            Some(p) if p > MAX_PRECISION => {
                warnings.push(format!(
                    "Config precision {} exceeds {}; using {}",
                    p, MAX_PRECISION, defaults.precision
                ));
                None
            }
            other => other,
        };

        let file_rounding = match self.rounding.as_deref() {
            Some(raw) => match raw.parse::<RoundingMode>() {
                Ok(mode) => Some(mode),
                Err(_) => {
                    warnings.push(format!(
                        "Unknown rounding mode '{}' in config; using {}",
                        raw, defaults.rounding
                    ));
                    None
                }
            },
            None => None,
        };

        let config = GpaConfig::builder()
            .precision(precision.or(file_precision).unwrap_or(defaults.precision))
            .rounding(rounding.or(file_rounding).unwrap_or(defaults.rounding))
            .build()?;
        Ok((config, warnings))
    }
}

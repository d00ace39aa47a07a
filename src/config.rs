use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::str::FromStr;

use crate::builder::{Builder, Validate};
use crate::types::GpaError;

/// Largest number of decimal places a GPA may be rounded to.
pub const MAX_PRECISION: u32 = 6;

/// How the final GPA is rounded to `precision` places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    strum::Display, strum::EnumString, strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RoundingMode {
    /// 3.745 -> 3.75
    #[default]
    HalfUp,
    /// 3.745 -> 3.74
    HalfEven,
    /// Truncate toward zero.
    Down,
}

impl RoundingMode {
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

/// Settings that shape how a GPA is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpaConfig {
    /// Decimal places of the reported GPA. Default 2.
    pub precision: u32,
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for GpaConfig {
    fn default() -> Self {
        GpaConfig {
            precision: 2,
            rounding: RoundingMode::default(),
        }
    }
}

impl FromStr for GpaConfig {
    type Err = GpaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: GpaConfig = serde_json::from_str(s)
            .map_err(|e| GpaError::ConfigurationError(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl GpaConfig {
    pub fn builder() -> GpaConfigBuilder {
        GpaConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), GpaError> {
        if self.precision > MAX_PRECISION {
            return Err(GpaError::ConfigurationError(format!(
                "Precision must be at most {} decimal places, got {}",
                MAX_PRECISION, self.precision
            )));
        }
        Ok(())
    }

    /// Reads `GPA_PRECISION` and `GPA_ROUNDING`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, GpaError> {
        let mut builder = Self::builder();

        if let Ok(raw) = env::var("GPA_PRECISION") {
            let precision = raw.trim().parse::<u32>().map_err(|e| {
                GpaError::ConfigurationError(format!("Invalid GPA_PRECISION '{}': {}", raw, e))
            })?;
            builder = builder.precision(precision);
        }

        if let Ok(raw) = env::var("GPA_ROUNDING") {
            let rounding = raw.trim().parse::<RoundingMode>().map_err(|_| {
                GpaError::ConfigurationError(format!("Invalid GPA_ROUNDING '{}'", raw))
            })?;
            builder = builder.rounding(rounding);
        }

        builder.build()
    }

    /// Attempts to load configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, GpaError> {
        let content = fs::read_to_string(path)
            .map_err(|e| GpaError::ConfigurationError(format!("Failed to read config file: {}", e)))?;
        content.parse()
    }

    pub fn with_precision(mut self, precision: u32) -> Result<Self, GpaError> {
        self.precision = precision;
        self.validate()?;
        Ok(self)
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}

// ========== GpaConfigBuilder ==========

#[derive(Default)]
pub struct GpaConfigBuilder {
    precision: Option<u32>,
    rounding: Option<RoundingMode>,
}

impl GpaConfigBuilder {
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = Some(rounding);
        self
    }
}

impl Validate for GpaConfigBuilder {
    fn validate(&self) -> Result<(), GpaError> {
        if let Some(precision) = self.precision
            && precision > MAX_PRECISION
        {
            return Err(GpaError::ConfigurationError(format!(
                "Precision must be at most {} decimal places, got {}",
                MAX_PRECISION, precision
            )));
        }
        Ok(())
    }
}

impl Builder<GpaConfig> for GpaConfigBuilder {
    fn build(self) -> Result<GpaConfig, GpaError> {
        Validate::validate(&self)?;
        let defaults = GpaConfig::default();
        Ok(GpaConfig {
            precision: self.precision.unwrap_or(defaults.precision),
            rounding: self.rounding.unwrap_or(defaults.rounding),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GpaConfig::default();
        assert_eq!(config.precision, 2);
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_validation() {
        let res = GpaConfig::builder().precision(3).rounding(RoundingMode::Down).build();
        assert_eq!(res.unwrap(), GpaConfig { precision: 3, rounding: RoundingMode::Down });

        let res_fail = GpaConfig::builder().precision(12).build();
        assert!(matches!(res_fail, Err(GpaError::ConfigurationError(_))));
    }

    #[test]
    fn test_parse_json() {
        let config: GpaConfig = r#"{ "precision": 1, "rounding": "half-even" }"#.parse().unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfEven);

        let config: GpaConfig = r#"{ "precision": 3 }"#.parse().unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfUp);

        assert!(r#"{ "precision": 9 }"#.parse::<GpaConfig>().is_err());
    }

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!("half-up".parse::<RoundingMode>().unwrap(), RoundingMode::HalfUp);
        assert_eq!("DOWN".parse::<RoundingMode>().unwrap(), RoundingMode::Down);
        assert!("sideways".parse::<RoundingMode>().is_err());
        assert_eq!(RoundingMode::HalfEven.to_string(), "half-even");
    }

    #[test]
    fn test_with_precision() {
        assert!(GpaConfig::default().with_precision(4).is_ok());
        assert!(GpaConfig::default().with_precision(7).is_err());
    }
}

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid stability_base: {0}. Must be within [0, 1]")]
    InvalidStabilityBase(f64),

    #[error("Invalid entropy_floor: {0}. Must be positive and at most 0.01")]
    InvalidEntropyFloor(f64),

    #[error("Invalid decay_rate: {0}. Must be positive")]
    InvalidDecayRate(f64),

    #[error("Invalid default_support: {0}. Must be within [0, 1]")]
    InvalidDefaultSupport(f64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .cohera/config.yaml (project config, optional)
    /// 3. .cohera/local.yaml (project local overrides, optional)
    /// 4. Environment variables (`COHERA_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".cohera/config.yaml"))
            .merge(Yaml::file(".cohera/local.yaml"))
            .merge(Env::prefixed("COHERA_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let engine = &config.engine;
        if !(0.0..=1.0).contains(&engine.stability_base) {
            return Err(ConfigError::InvalidStabilityBase(engine.stability_base));
        }
        if engine.entropy_floor <= 0.0 || engine.entropy_floor > 0.01 {
            return Err(ConfigError::InvalidEntropyFloor(engine.entropy_floor));
        }
        if engine.decay_rate <= 0.0 {
            return Err(ConfigError::InvalidDecayRate(engine.decay_rate));
        }
        if !(0.0..=1.0).contains(&engine.default_support) {
            return Err(ConfigError::InvalidDefaultSupport(engine.default_support));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{EngineConfig, LoggingConfig};
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        assert!(ConfigLoader::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_entropy_floor_rejected() {
        let config = Config {
            engine: EngineConfig {
                entropy_floor: 0.0,
                ..EngineConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidEntropyFloor(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..LoggingConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_invalid_decay_rate_rejected() {
        let config = Config {
            engine: EngineConfig {
                decay_rate: -1.0,
                ..EngineConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidDecayRate(_))
        ));
    }

    #[test]
    fn test_load_from_file_merges_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "engine:\n  decay_rate: 3.5\nlogging:\n  level: debug").unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.engine.decay_rate, 3.5);
        assert_eq!(config.engine.stability_base, 0.1);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .unwrap();
        writeln!(file, "engine:\n  entropy_floor: 0.5").unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}

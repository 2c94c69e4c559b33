//! Configuration models for cohera.
//!
//! The scoring formulas carry a handful of tunable constants that the
//! original protocol hard-coded as implicit fallbacks; they are
//! explicit configuration here so a deployment can pin them.

use serde::{Deserialize, Serialize};

/// Main configuration structure for cohera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Scoring engine constants.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tunable constants of the scoring formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Baseline stability term of the Γ resilience formula.
    #[serde(default = "default_stability_base")]
    pub stability_base: f64,

    /// Floor substituted for near-zero entropy in the efficiency
    /// divisor. Invisible for validated input (H ≥ 0.01) but keeps the
    /// formula finite at H = 0.
    #[serde(default = "default_entropy_floor")]
    pub entropy_floor: f64,

    /// Steepness of the entropy decay in the resilience exponent.
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,

    /// External support assumed when an input map omits Φ.
    #[serde(default = "default_support_level")]
    pub default_support: f64,
}

const fn default_stability_base() -> f64 {
    0.1
}

const fn default_entropy_floor() -> f64 {
    0.001
}

const fn default_decay_rate() -> f64 {
    5.0
}

const fn default_support_level() -> f64 {
    0.5
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stability_base: default_stability_base(),
            entropy_floor: default_entropy_floor(),
            decay_rate: default_decay_rate(),
            default_support: default_support_level(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

//! Configuration loading and validation for the simulation service.
//!
//! All values are read from environment variables at startup. The process
//! will exit with a clear error message if any value cannot be parsed or
//! fails validation.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Victim identifier used when an upload supplies none.
    #[serde(default = "default_victim_placeholder")]
    pub victim_placeholder: String,

    /// Lower bound (inclusive) of the demo ransom amount range.
    #[serde(default = "default_ransom_min")]
    pub ransom_min: f64,

    /// Upper bound (inclusive) of the demo ransom amount range.
    #[serde(default = "default_ransom_max")]
    pub ransom_max: f64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_victim_placeholder() -> String {
    "unidentified-victim".into()
}
fn default_ransom_min() -> f64 {
    0.01
}
fn default_ransom_max() -> f64 {
    0.06
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or validation fails.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.victim_placeholder.trim().is_empty() {
            anyhow::bail!("VICTIM_PLACEHOLDER must not be empty");
        }
        if self.ransom_min <= 0.0 {
            anyhow::bail!("RANSOM_MIN must be > 0");
        }
        if self.ransom_max < self.ransom_min {
            anyhow::bail!("RANSOM_MAX must be >= RANSOM_MIN");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            listen_port: default_listen_port(),
            victim_placeholder: default_victim_placeholder(),
            ransom_min: default_ransom_min(),
            ransom_max: default_ransom_max(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_listen_port(), 8080);
        assert_eq!(default_victim_placeholder(), "unidentified-victim");
        assert_eq!(default_ransom_min(), 0.01);
        assert_eq!(default_ransom_max(), 0.06);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_victim_placeholder() {
        let cfg = Config {
            victim_placeholder: "  ".into(),
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_minimum() {
        let cfg = Config {
            ransom_min: 0.0,
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let cfg = Config {
            ransom_min: 0.05,
            ransom_max: 0.01,
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }
}

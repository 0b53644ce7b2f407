//! # fsprobe-config
//!
//! Configuration management for fsprobe.
//!
//! The probe itself is fixed: file name and contents come from the defaults
//! below and are never read from disk or the command line. Only ambient
//! settings can be overridden, through environment variables:
//!
//! - `FSPROBE_LOG`: log level (`error`, `warn`, `info`, `debug`, `trace`)
//! - `RUST_LOG`: full `tracing` filter, wins over `FSPROBE_LOG`

pub mod logging;
pub mod path;
pub mod testing;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::logging::LogLevel;

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "FSPROBE_LOG";

/// Global config instance
static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::load()));

/// Get global config (read-only)
pub fn config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub probe: ProbeConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults plus environment overrides.
    pub fn load() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Parse a TOML document; missing sections and keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_ENV) {
            if let Ok(level) = level.parse() {
                self.log.level = level;
            }
        }
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}

/// What the probe writes and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// File name, resolved against the working directory
    pub file_name: String,
    /// Text written first
    pub text: String,
    /// Bytes written second; the final content of the file
    pub bytes: Vec<u8>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            file_name: "test.txt".to_string(),
            text: "This is a test".to_string(),
            bytes: b"This is a test".to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
}

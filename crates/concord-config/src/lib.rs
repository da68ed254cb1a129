//! Configuration for the Concord demos.
//!
//! Every field has a default, so an empty document (or no file at all)
//! reproduces the stock demo output.
//!
//! # Examples
//!
//! ```
//! use concord_config::DemoConfig;
//!
//! let config = DemoConfig::from_toml_str(r#"
//!     log_filter = "concord_core=debug"
//!
//!     [counter]
//!     start = 10
//!     end = 13
//! "#).unwrap();
//!
//! assert_eq!(config.counter.start, 10);
//! assert_eq!(config.print_value, 14);
//! ```
//!
//! Fall back to defaults when the file is missing:
//!
//! ```
//! use concord_config::DemoConfig;
//!
//! let config = DemoConfig::load_or_default("concord.toml").unwrap();
//! # let _ = config;
//! ```

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DemoConfig {
    /// `tracing_subscriber::EnvFilter` directive for stderr logging.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Range pulled from the counter generator.
    #[serde(default)]
    pub counter: CounterConfig,

    /// Value passed to the integral print.
    #[serde(default = "default_print_value")]
    pub print_value: i64,
}

fn default_print_value() -> i64 {
    14
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            counter: CounterConfig::default(),
            print_value: default_print_value(),
        }
    }
}

impl DemoConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](DemoConfig::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Like [`load`](DemoConfig::load), but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            other => other,
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the counter range.
    pub fn with_counter(mut self, start: i64, end: i64) -> Self {
        self.counter = CounterConfig { start, end };
        self
    }

    /// Sets the logging filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Checks invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.start > self.counter.end {
            return Err(ConfigError::Invalid(format!(
                "counter.start ({}) must not exceed counter.end ({})",
                self.counter.start, self.counter.end
            )));
        }
        Ok(())
    }
}

/// Half-open range `start..end` for the counter demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CounterConfig {
    #[serde(default = "default_counter_start")]
    pub start: i64,

    #[serde(default = "default_counter_end")]
    pub end: i64,
}

fn default_counter_start() -> i64 {
    1
}

fn default_counter_end() -> i64 {
    5
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start: default_counter_start(),
            end: default_counter_end(),
        }
    }
}

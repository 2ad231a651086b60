//! Configuration Module - TOML-based Roster Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field has
//! a default, so running without a config file is supported.

pub mod loader;

use serde::Deserialize;

use crate::usecases::record_store::CorruptPolicy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Roster persistence.
  #[serde(default)]
  pub store: StoreConfig,
  /// Diagnostics output.
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// Roster persistence configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
  /// Path of the JSON roster file.
  #[serde(default = "default_data_file")]
  pub data_file: String,
  /// Behaviour when the roster file exists but cannot be decoded.
  #[serde(default)]
  pub on_corrupt: CorruptPolicy,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      data_file: default_data_file(),
      on_corrupt: CorruptPolicy::default(),
    }
  }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Emit JSON lines instead of human-readable logs.
  #[serde(default)]
  pub json: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

// Default value functions for serde

fn default_data_file() -> String {
  "employees.json".to_string()
}

fn default_log_level() -> String {
  "warn".to_string()
}

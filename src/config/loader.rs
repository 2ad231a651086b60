//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Log levels accepted in `[logging] level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    data_file = %config.store.data_file,
    on_corrupt = ?config.store.on_corrupt,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
///
/// # Errors
/// A file that exists but is unreadable, unparsable or invalid is still an
/// error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if !path.exists() {
    let config = AppConfig::default();
    validate_config(&config)?;
    return Ok(config);
  }
  load_config(path)
}

/// Parse and validate configuration text.
///
/// # Errors
/// TOML syntax errors, unknown enum values, or failed validation.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse config TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.store.data_file.trim().is_empty(),
    "store.data_file must not be empty"
  );

  let level = config.logging.level.to_lowercase();
  anyhow::ensure!(
    LOG_LEVELS.contains(&level.as_str()),
    "logging.level must be one of {:?}, got {:?}",
    LOG_LEVELS,
    config.logging.level
  );

  Ok(())
}

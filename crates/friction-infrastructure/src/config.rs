//! Client configuration loading and saving.
//!
//! The config file lives at `~/.config/friction/config.toml`. A
//! missing file (or missing config directory) yields the defaults; a
//! file that exists but cannot be read or parsed is an error.

use std::fs;

use friction_core::config::ClientConfig;
use friction_core::error::{FrictionError, Result};

use crate::paths::FrictionPaths;

/// Loads the client configuration from the default config file path.
///
/// # Returns
///
/// - `Ok(ClientConfig)`: Parsed configuration, or the defaults if the
///   file does not exist or the config directory cannot be determined.
/// - `Err(_)`: The file exists but cannot be read or parsed.
pub fn load_config() -> Result<ClientConfig> {
    let Ok(config_path) = FrictionPaths::config_file() else {
        return Ok(ClientConfig::default());
    };

    if !config_path.exists() {
        return Ok(ClientConfig::default());
    }

    let content = fs::read_to_string(&config_path).map_err(|e| {
        FrictionError::io(format!(
            "Failed to read config file at {:?}: {}",
            config_path, e
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(ClientConfig::default());
    }

    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the client configuration to the default config file path.
///
/// # Arguments
///
/// * `config` - The configuration to save.
///
/// # Returns
///
/// - `Ok(())`: The file was written.
/// - `Err(_)`: The config directory cannot be determined or created, or
///   the file cannot be written.
pub fn save_config(config: &ClientConfig) -> Result<()> {
    let config_dir = FrictionPaths::config_dir()
        .map_err(|e| FrictionError::config(e.to_string()))?;
    fs::create_dir_all(&config_dir)?;

    let content = toml::to_string_pretty(config)?;
    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, content)?;

    Ok(())
}

//! System-wide configuration for sv
//!
//! Stored at `~/.config/sv/config.toml` (Linux/macOS) or
//! `%APPDATA%\sv\config.toml` (Windows). A missing file yields defaults;
//! a malformed file is a fatal error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// System-wide sv configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Push configuration
    pub push: PushConfig,
}

/// Push configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Remote to push to (default: "origin")
    pub remote: String,

    /// Set GIT_SSL_NO_VERIFY for the push subprocess (default: true).
    /// Inherited from the tool this replaces; a warning is printed whenever
    /// a push runs with verification disabled.
    pub ssl_no_verify: bool,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            ssl_no_verify: true,
        }
    }
}

/// Get the system config directory path
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir().map(|h| h.join(".config/sv"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir().map(|c| c.join("sv"))
    }
}

/// Get the system config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load system configuration
///
/// Returns default config if the file doesn't exist.
pub fn load() -> Result<SystemConfig> {
    let config_path = match config_file_path() {
        Some(p) => p,
        None => {
            tracing::debug!("Could not determine config directory, using defaults");
            return Ok(SystemConfig::default());
        }
    };

    if !config_path.exists() {
        tracing::debug!("System config not found at {}, using defaults", config_path.display());
        return Ok(SystemConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read system config at {}", config_path.display()))?;

    let config: SystemConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse system config at {}", config_path.display()))?;

    tracing::debug!("Loaded system config from {}", config_path.display());
    Ok(config)
}

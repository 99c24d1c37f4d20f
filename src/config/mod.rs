// SPDX-License-Identifier: MPL-2.0
//! This module handles the host settings for the toast engine, including
//! loading and saving them to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Route toasts into a dedicated host element by default
//! config.default_container = Some("#toast-root".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.default_container, Some("#toast-root".to_string()));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastStack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Selector of the mount point used when a request names none.
    #[serde(default)]
    pub default_container: Option<String>,
    /// Deferred-mount delay in milliseconds.
    #[serde(default)]
    pub mount_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_container: None,
            mount_delay_ms: Some(duration_ms(DEFAULT_MOUNT_DELAY)),
        }
    }
}

impl Config {
    #[must_use]
    pub fn mount_delay(&self) -> Duration {
        self.mount_delay_ms
            .map_or(DEFAULT_MOUNT_DELAY, Duration::from_millis)
    }

    /// Returns the default container selector, ignoring blank entries.
    #[must_use]
    pub fn default_container(&self) -> Option<&str> {
        self.default_container
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

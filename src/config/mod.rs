// SPDX-License-Identifier: MPL-2.0
//! This module handles the client configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use edit_session::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the client at a server
//! config.server_url = Some("http://localhost:2283".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::DEFAULT_EDIT_READY_TIMEOUT_MS;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "EditSession";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    /// Base URL of the photo library server, e.g. `http://localhost:2283`.
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub edit_ready_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            server_url: None,
            api_key: None,
            edit_ready_timeout_ms: Some(DEFAULT_EDIT_READY_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Returns the completion-event timeout, clamped to the supported range.
    #[must_use]
    pub fn edit_ready_timeout(&self) -> Duration {
        clamp_edit_ready_timeout(Duration::from_millis(
            self.edit_ready_timeout_ms
                .unwrap_or(DEFAULT_EDIT_READY_TIMEOUT_MS),
        ))
    }
}

/// Clamps a completion-event timeout to
/// `MIN_EDIT_READY_TIMEOUT_MS..=MAX_EDIT_READY_TIMEOUT_MS`.
#[must_use]
pub fn clamp_edit_ready_timeout(timeout: Duration) -> Duration {
    timeout.clamp(
        Duration::from_millis(defaults::MIN_EDIT_READY_TIMEOUT_MS),
        Duration::from_millis(defaults::MAX_EDIT_READY_TIMEOUT_MS),
    )
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
            log::warn!("ignoring invalid config at {}: {err}", path.display());
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_server_settings() {
        let config = Config {
            language: Some("fr".to_string()),
            server_url: Some("http://photos.local:2283".to_string()),
            api_key: Some("secret".to_string()),
            edit_ready_timeout_ms: Some(5_000),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert_eq!(loaded.edit_ready_timeout_ms, Some(DEFAULT_EDIT_READY_TIMEOUT_MS));
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_fields_fall_back_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"en-US\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("en-US"));
        assert!(loaded.server_url.is_none());
        assert_eq!(loaded.edit_ready_timeout(), defaults::DEFAULT_EDIT_READY_TIMEOUT);
    }

    #[test]
    fn edit_ready_timeout_is_clamped() {
        let mut config = Config::default();
        config.edit_ready_timeout_ms = Some(1);
        assert_eq!(
            config.edit_ready_timeout(),
            Duration::from_millis(defaults::MIN_EDIT_READY_TIMEOUT_MS)
        );

        config.edit_ready_timeout_ms = Some(u64::MAX);
        assert_eq!(
            config.edit_ready_timeout(),
            Duration::from_millis(defaults::MAX_EDIT_READY_TIMEOUT_MS)
        );
    }

    #[test]
    fn clamp_keeps_in_range_timeouts() {
        assert_eq!(
            clamp_edit_ready_timeout(Duration::from_secs(3)),
            Duration::from_secs(3)
        );
        assert_eq!(
            clamp_edit_ready_timeout(Duration::ZERO),
            Duration::from_millis(defaults::MIN_EDIT_READY_TIMEOUT_MS)
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Presentation configuration, loadable from a `crouton.toml` file.
//!
//! Every field is optional in the file; missing or malformed values fall
//! back to the defaults in [`defaults`]. Hosts typically load once at
//! startup and hand the result to
//! [`Presenter::with_config`](crate::presenter::Presenter::with_config).
//!
//! # Examples
//!
//! ```no_run
//! use iced_crouton::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.animation_ms = Some(200);
//! config::save(&config).expect("failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "crouton.toml";
const APP_NAME: &str = "iced_crouton";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Length of the enter/exit animations, in milliseconds.
    #[serde(default)]
    pub animation_ms: Option<u64>,
    /// Duration used by `show_with_default_duration`, in seconds.
    #[serde(default)]
    pub default_duration_secs: Option<f32>,
    /// Cosmetic padding between a toast and the nearest container edge.
    #[serde(default)]
    pub cosmetic_inset: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation_ms: Some(defaults::DEFAULT_ANIMATION_MS),
            default_duration_secs: Some(defaults::DEFAULT_DURATION_SECS),
            cosmetic_inset: Some(defaults::DEFAULT_COSMETIC_INSET),
        }
    }
}

impl Config {
    /// Animation length with the default applied.
    #[must_use]
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms.unwrap_or(defaults::DEFAULT_ANIMATION_MS))
    }

    /// Default show duration with the default applied.
    #[must_use]
    pub fn default_duration_secs(&self) -> f32 {
        self.default_duration_secs
            .unwrap_or(defaults::DEFAULT_DURATION_SECS)
    }

    /// Cosmetic inset with the default applied.
    #[must_use]
    pub fn cosmetic_inset(&self) -> f32 {
        self.cosmetic_inset
            .unwrap_or(defaults::DEFAULT_COSMETIC_INSET)
    }
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
    Ok(toml::from_str(&content).unwrap_or_default())
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
    fn defaults_match_documented_constants() {
        let config = Config::default();
        assert_eq!(config.animation(), Duration::from_millis(300));
        assert_eq!(config.default_duration_secs(), 4.0);
        assert_eq!(config.cosmetic_inset(), 10.0);
    }

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            animation_ms: Some(150),
            default_duration_secs: Some(6.5),
            cosmetic_inset: Some(12.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("crouton.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.animation_ms, config.animation_ms);
        assert_eq!(loaded.default_duration_secs, config.default_duration_secs);
        assert_eq!(loaded.cosmetic_inset, config.cosmetic_inset);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("crouton.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.animation_ms, Some(defaults::DEFAULT_ANIMATION_MS));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("crouton.toml");
        fs::write(&config_path, "animation_ms = 120\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.animation(), Duration::from_millis(120));
        // Unset fields use the accessor defaults
        assert_eq!(loaded.default_duration_secs(), defaults::DEFAULT_DURATION_SECS);
    }
}

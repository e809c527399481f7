// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and
//! saving host preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[timing]` - Default toast lifetime and countdown tick cadence
//! - `[display]` - Toast card presentation settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_TOASTS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.timing.default_duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Timing settings for the toast lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Default toast lifetime in milliseconds, applied when a caller does
    /// not request a duration.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Countdown tick interval in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Presentation settings for the toast cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Whether to render the remaining time next to the message.
    #[serde(
        default = "default_show_remaining",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_remaining: Option<bool>,

    /// Toast card width override in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_remaining: default_show_remaining(),
            width: None,
        }
    }
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_show_remaining() -> Option<bool> {
    Some(false)
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Returns the default toast lifetime, clamped into the supported range
    /// so persisted configs cannot request nonsensical lifetimes.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let ms = self
            .timing
            .default_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Returns the countdown tick interval, clamped into the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .timing
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.trim().is_empty() {
            let mut path = PathBuf::from(env_path);
            path.push(CONFIG_FILE);
            return Some(path);
        }
    }

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

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast display window, fade-out and markup escaping
//! - `[animations]` - Stat counter and progress bar timing
//! - `[search]` - Live filter debounce
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LEARNHUB_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use learnhub::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Keep toasts on screen a little longer
//! config.notifications.display_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// How long a toast stays fully visible (milliseconds).
    #[serde(default = "default_display_ms", skip_serializing_if = "Option::is_none")]
    pub display_ms: Option<u64>,

    /// Fade-out length (milliseconds). Zero removes toasts as soon as they expire.
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Escape markup in messages. `false` renders messages verbatim.
    #[serde(default = "default_escape_markup", skip_serializing_if = "Option::is_none")]
    pub escape_markup: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
            fade_ms: default_fade_ms(),
            escape_markup: default_escape_markup(),
        }
    }
}

/// Dashboard animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationsConfig {
    #[serde(default = "default_counter_steps", skip_serializing_if = "Option::is_none")]
    pub counter_steps: Option<u32>,

    #[serde(
        default = "default_counter_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub counter_interval_ms: Option<u64>,

    #[serde(
        default = "default_progress_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_delay_ms: Option<u64>,

    #[serde(
        default = "default_progress_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_duration_ms: Option<u64>,

    #[serde(
        default = "default_progress_start_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_start_ms: Option<u64>,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            counter_steps: default_counter_steps(),
            counter_interval_ms: default_counter_interval_ms(),
            progress_delay_ms: default_progress_delay_ms(),
            progress_duration_ms: default_progress_duration_ms(),
            progress_start_ms: default_progress_start_ms(),
        }
    }
}

/// Search box settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before the live course filter applies (milliseconds).
    #[serde(default = "default_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub animations: AnimationsConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_display_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DISPLAY_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_FADE_MS)
}

fn default_escape_markup() -> Option<bool> {
    Some(true)
}

fn default_counter_steps() -> Option<u32> {
    Some(DEFAULT_COUNTER_STEPS)
}

fn default_counter_interval_ms() -> Option<u64> {
    Some(DEFAULT_COUNTER_INTERVAL_MS)
}

fn default_progress_delay_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_DELAY_MS)
}

fn default_progress_duration_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_DURATION_MS)
}

fn default_progress_start_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_START_MS)
}

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SEARCH_DEBOUNCE_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {raw}")))
}

impl Config {
    /// Clamps values that would make the UI misbehave.
    ///
    /// A display window of zero would remove toasts before they can be read;
    /// counters need at least one step.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if let Some(ms) = self.notifications.display_ms {
            self.notifications.display_ms = Some(ms.clamp(1, MAX_NOTIFICATION_DISPLAY_MS));
        }
        if let Some(steps) = self.animations.counter_steps {
            self.animations.counter_steps = Some(steps.max(1));
        }
        if let Some(ms) = self.animations.counter_interval_ms {
            self.animations.counter_interval_ms = Some(ms.max(1));
        }
        self
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config.sanitized(), None),
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "using default settings");
                    return (
                        Config::default(),
                        Some("Settings could not be read; defaults are in use".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                display_ms: Some(8000),
                fade_ms: Some(0),
                escape_markup: Some(false),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\ndisplay_ms = 2000\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.notifications.display_ms, Some(2000));
        assert_eq!(
            loaded.notifications.fade_ms,
            Some(DEFAULT_NOTIFICATION_FADE_MS)
        );
        assert_eq!(loaded.notifications.escape_markup, Some(true));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.search.debounce_ms, Some(DEFAULT_SEARCH_DEBOUNCE_MS));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn sanitized_clamps_degenerate_values() {
        let mut config = Config::default();
        config.notifications.display_ms = Some(0);
        config.animations.counter_steps = Some(0);

        let config = config.sanitized();
        assert_eq!(config.notifications.display_ms, Some(1));
        assert_eq!(config.animations.counter_steps, Some(1));
    }
}

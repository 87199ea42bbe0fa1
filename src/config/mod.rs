// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[dashboard]` - Optional replacement for the three starting clocks
//!
//! The file is only ever read. Clocks added or removed at runtime are not
//! written back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `CLOCK_DASHBOARD_CONFIG_DIR` or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use clock_dashboard::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! let seeds = config.dashboard.seed();
//! assert!(!seeds.is_empty() || config.dashboard.clocks.is_some());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::dashboard::{default_seed, ClockSeed};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when the settings file exists but cannot be used.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Dashboard settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct DashboardConfig {
    /// Clocks shown at startup. `None` keeps the built-in seed; an empty
    /// list starts with no clocks.
    #[serde(default)]
    pub clocks: Option<Vec<ClockSeed>>,
}

impl DashboardConfig {
    /// Starting clocks, falling back to the built-in three.
    #[must_use]
    pub fn seed(&self) -> Vec<ClockSeed> {
        self.clocks.clone().unwrap_or_else(default_seed)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse()
        .map_err(|_| D::Error::custom(format!("invalid theme_mode: {}", raw)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        tracing::debug!("no config directory available, using defaults");
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded settings");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.dashboard.clocks, None);
        assert_eq!(config.dashboard.seed(), default_seed());
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let content = r#"
[general]
language = "fr"
theme_mode = "dark"

[[dashboard.clocks]]
timezone = "Europe/Paris"
label = "Paris"

[[dashboard.clocks]]
timezone = "Asia/Dubai"
"#;
        fs::write(&config_path, content).expect("write config");

        let loaded = load_from_path(&config_path).expect("should load config");

        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        let seeds = loaded.dashboard.seed();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0], ClockSeed::new("Europe/Paris", "Paris"));
        assert_eq!(seeds[1].timezone, "Asia/Dubai");
        assert_eq!(seeds[1].label, None);
    }

    #[test]
    fn empty_clock_list_means_no_starting_clocks() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[dashboard]\nclocks = []\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load config");

        assert!(loaded.dashboard.seed().is_empty());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Light\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load config");

        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn unknown_theme_mode_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("absent.toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Io(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));

        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_ERROR_KEY));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"de\"\n",
        )
        .expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(config.general.language, Some("de".to_string()));
    }
}

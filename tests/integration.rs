// SPDX-License-Identifier: MPL-2.0
use chrono::{TimeZone, Utc};
use clock_dashboard::app::App;
use clock_dashboard::clock::ManualTimeSource;
use clock_dashboard::config::{self, CONFIG_LOAD_ERROR_KEY};
use clock_dashboard::dashboard::{default_seed, DashboardState};
use clock_dashboard::i18n::fluent::I18n;
use clock_dashboard::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

fn write_settings(dir: &std::path::Path, content: &str) {
    fs::write(dir.join("settings.toml"), content).expect("Failed to write settings file");
}

#[test]
fn test_config_seed_populates_dashboard_in_order() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_settings(
        dir.path(),
        r#"
[general]
theme_mode = "dark"

[[dashboard.clocks]]
timezone = "Europe/Paris"
label = "Paris"

[[dashboard.clocks]]
timezone = "America/Los_Angeles"

[[dashboard.clocks]]
timezone = "Not/A_Zone"
label = "Broken"
"#,
    );

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let (state, rejected) = DashboardState::from_seed(&config.dashboard.seed(), true);

    let labels: Vec<&str> = state.clocks().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["Paris", "Los"]);
    assert_eq!(rejected.len(), 1);
    assert!(state.dark_mode());
}

#[test]
fn test_missing_settings_fall_back_to_default_seed() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (state, rejected) = DashboardState::from_seed(&config.dashboard.seed(), false);
    assert!(rejected.is_empty());
    let zones: Vec<&str> = state.clocks().iter().map(|c| c.timezone()).collect();
    let expected: Vec<String> = default_seed().into_iter().map(|s| s.timezone).collect();
    assert_eq!(zones, expected);
}

#[test]
fn test_corrupt_settings_warn_and_use_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_settings(dir.path(), "[general\nlanguage = ");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_ERROR_KEY));
    assert_eq!(config.dashboard.seed(), default_seed());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");

    write_settings(dir.path(), "[general]\nlanguage = \"en-US\"\n");
    let (english, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    write_settings(dir.path(), "[general]\nlanguage = \"fr\"\n");
    let (french, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n_fr = I18n::new(None, &french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("window-title"), "Tableau d'horloges");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_app_from_config_reports_rejected_seeds() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_settings(
        dir.path(),
        r#"
[[dashboard.clocks]]
timezone = "Asia/Dubai"

[[dashboard.clocks]]
timezone = "Moon/Tranquility"
"#,
    );
    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let start = Utc
        .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
        .single()
        .expect("valid UTC timestamp");

    let (app, _attach) = App::from_config(
        I18n::new(Some("en-US".into()), &config),
        &config,
        false,
        Box::new(ManualTimeSource::new(start)),
    );

    assert_eq!(app.dashboard().clocks().len(), 1);
    assert_eq!(app.dashboard().clocks()[0].label, "Dubai");
    assert_eq!(app.notifications().visible_count(), 1);
}

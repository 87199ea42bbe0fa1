// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and how the starting mode is chosen.
//!
//! Dark mode only ever swaps colors. Geometry, angles and zoned times are
//! computed the same way in both modes.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use std::fmt;
use std::str::FromStr;

/// Colors the analog face is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPalette {
    pub face: Color,
    pub face_stroke: Color,
    pub marker: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
    pub center_dot: Color,
}

impl ClockPalette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            face: palette::WHITE,
            face_stroke: palette::GRAY_200,
            marker: palette::GRAY_500,
            hour_hand: palette::BLUE_500,
            minute_hand: palette::EMERALD_500,
            second_hand: palette::RED_500,
            center_dot: palette::PRIMARY_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            face: palette::GRAY_800,
            face_stroke: palette::GRAY_600,
            marker: palette::GRAY_400,
            hour_hand: palette::BLUE_400,
            minute_hand: palette::EMERALD_400,
            second_hand: palette::RED_400,
            center_dot: palette::PRIMARY_400,
        }
    }

    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Color palette for the surrounding dashboard chrome.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_card: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub danger: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,
            surface_card: palette::WHITE,
            text_primary: palette::GRAY_800,
            text_secondary: palette::GRAY_500,
            danger: palette::RED_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_card: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            danger: palette::RED_400,
        }
    }

    #[must_use]
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Iced theme matching the dark-mode flag.
#[must_use]
pub fn iced_theme(dark_mode: bool) -> Theme {
    if dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Whether `theme` has a dark background, judged by average luminance.
#[must_use]
pub fn is_dark_theme(theme: &Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the starting dark-mode flag.
    ///
    /// `detect_dark` is only called for [`ThemeMode::System`], and at most
    /// once, so the platform query stays out of state construction.
    pub fn resolve_dark(self, detect_dark: impl FnOnce() -> bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => detect_dark(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme mode: {other}")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        })
    }
}

/// Asks the desktop whether it prefers a dark appearance.
///
/// Detection errors and "unspecified" count as light, matching a browser's
/// `prefers-color-scheme` default.
#[must_use]
pub fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(_) => false,
        Err(err) => {
            tracing::debug!(error = %err, "system theme detection failed");
            false
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::{is_dark_theme, ColorScheme};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn scheme(theme: &Theme) -> ColorScheme {
    ColorScheme::for_mode(is_dark_theme(theme))
}

/// Full-window page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = scheme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Raised card used for the add-clock panel and each clock.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = scheme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_card)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.text_secondary
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::{self, WHITE}, radius, shadow};
use crate::ui::theming::{is_dark_theme, ColorScheme};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action ("Add Clock").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::LG),
        button::Status::Pressed => (palette::PRIMARY_700, palette::PRIMARY_700, shadow::SM),
        button::Status::Active | button::Status::Disabled => {
            (palette::PRIMARY_600, palette::PRIMARY_700, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Destructive action on a clock card ("Remove").
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_mode(is_dark_theme(theme));
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (Some(scheme.danger), WHITE),
        button::Status::Active | button::Status::Disabled => (None, scheme.danger),
    };

    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            color: scheme.danger,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header toggle between light and dark mode.
pub fn toggle(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = is_dark_theme(theme);
    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_200, palette::GRAY_900)
    };

    let background = match status {
        button::Status::Hovered => Color {
            a: 1.0 - opacity::OVERLAY_SUBTLE,
            ..bg_color
        },
        _ => bg_color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_600);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn danger_button_fills_on_hover() {
        let theme = Theme::Light;
        let active = danger(&theme, button::Status::Active);
        let hover = danger(&theme, button::Status::Hovered);

        assert!(active.background.is_none());
        assert_eq!(
            hover.background,
            Some(Background::Color(ColorScheme::light().danger))
        );
    }

    #[test]
    fn toggle_follows_theme_brightness() {
        let light = toggle(&Theme::Light, button::Status::Active);
        let dark = toggle(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.text_color, dark.text_color);
    }
}

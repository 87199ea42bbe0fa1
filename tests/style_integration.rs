// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use clock_dashboard::ui::design_tokens::{opacity, palette, sizing, spacing};
    use clock_dashboard::ui::styles::{button, container};
    use clock_dashboard::ui::theming::{iced_theme, ClockPalette, ColorScheme};
    use iced::widget::button::Status;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for dark in [false, true] {
            let theme = iced_theme(dark);
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::danger(&theme, status);
                let _ = button::toggle(&theme, status);
            }
            let _ = container::page(&theme);
            let _ = container::card(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::CLOCK_CARD_WIDTH > sizing::BUTTON_HEIGHT);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surfaces and text invert between modes
        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn clock_face_contrasts_with_card_in_both_modes() {
        let light = ClockPalette::light();
        let dark = ClockPalette::dark();

        assert_eq!(light.face, palette::WHITE);
        assert_eq!(dark.face, palette::GRAY_800);
        assert_ne!(light.second_hand, light.face);
        assert_ne!(dark.second_hand, dark.face);
    }
}

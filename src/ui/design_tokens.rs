// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the clock face colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use clock_dashboard::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);
    pub const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_600: Color = Color::from_rgb8(0x4b, 0x55, 0x63);
    pub const GRAY_500: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_400: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
    pub const GRAY_200: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
    pub const GRAY_100: Color = Color::from_rgb8(0xf3, 0xf4, 0xf6);

    // Brand colors (indigo scale)
    pub const PRIMARY_400: Color = Color::from_rgb8(0x81, 0x8c, 0xf8);
    pub const PRIMARY_500: Color = Color::from_rgb8(0x63, 0x66, 0xf1);
    pub const PRIMARY_600: Color = Color::from_rgb8(0x4f, 0x46, 0xe5);
    pub const PRIMARY_700: Color = Color::from_rgb8(0x43, 0x38, 0xca);

    // Clock hands
    pub const BLUE_400: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
    pub const BLUE_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
    pub const EMERALD_400: Color = Color::from_rgb8(0x34, 0xd3, 0x99);
    pub const EMERALD_500: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
    pub const RED_400: Color = Color::from_rgb8(0xf8, 0x71, 0x71);
    pub const RED_500: Color = Color::from_rgb8(0xef, 0x44, 0x44);

    // Semantic colors
    pub const ERROR_500: Color = RED_500;
    pub const WARNING_500: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
    pub const SUCCESS_500: Color = EMERALD_500;
    pub const INFO_500: Color = BLUE_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Width of a clock card in the grid.
    pub const CLOCK_CARD_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dashboard heading
    pub const TITLE_LG: f32 = 34.0;

    /// Panel headings
    pub const TITLE_MD: f32 = 22.0;

    /// Clock labels
    pub const TITLE_SM: f32 = 20.0;

    /// Digital time readout
    pub const DISPLAY: f32 = 30.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Zone names, date lines
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

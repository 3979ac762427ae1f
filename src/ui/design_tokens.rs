// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Raw design values shared by every theme. Themes in [`crate::ui::theme`]
pick from these; widgets never hard-code colors or sizes.

## Organization

- **Palette**: Base colors (grays plus the green, amber, violet and slate scales)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use tee_studio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
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
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Green scale (default theme)
    pub const GREEN_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const GREEN_700: Color = Color::from_rgb(0.082, 0.502, 0.239);

    // Amber scale (retro theme)
    pub const AMBER_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.780);
    pub const AMBER_300: Color = Color::from_rgb(0.988, 0.827, 0.302);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);
    pub const AMBER_800: Color = Color::from_rgb(0.573, 0.251, 0.055);
    pub const AMBER_900: Color = Color::from_rgb(0.471, 0.208, 0.059);

    // Violet scale (futuristic theme)
    pub const VIOLET_300: Color = Color::from_rgb(0.769, 0.710, 0.992);
    pub const VIOLET_500: Color = Color::from_rgb(0.545, 0.361, 0.965);
    pub const VIOLET_600: Color = Color::from_rgb(0.486, 0.227, 0.929);

    // Slate scale (futuristic theme surfaces)
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and toasts
    pub const SURFACE: f32 = 0.95;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const TEXT_EDITOR_HEIGHT: f32 = 96.0;
    pub const DROP_ZONE_HEIGHT: f32 = 120.0;

    // Preview
    pub const PREVIEW_HEIGHT: f32 = 360.0;
    /// Share of the preview width used by the printed text.
    pub const PREVIEW_TEXT_WIDTH_RATIO: f32 = 0.6;

    // Overlays
    pub const LOADING_LOGO: f32 = 96.0;
    pub const SAVED_SHIRT: f32 = 120.0;
    pub const LOADING_DOT: f32 = 12.0;
    pub const CHECK_BADGE: f32 = 56.0;
    pub const MODAL_WIDTH: f32 = 380.0;

    // Component widths
    pub const FORM_MAX_WIDTH: f32 = 1040.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Page heading and overlay headings
    //! - Body: Labels and inputs
    //! - Caption: Hints and inline errors

    /// Large title - Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Overlay headings
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Section headers, recommended size
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, preview text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, file name
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Inline errors, footer lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Inputs, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Focused inputs, toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Thick border - Retro chunky frames
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };

    /// Hard offset shadow of the retro cards.
    pub const RETRO: Shadow = Shadow {
        color: palette::AMBER_900,
        offset: Vector { x: 4.0, y: 4.0 },
        blur_radius: 0.0,
    };

    /// Violet glow of the futuristic cards.
    pub const GLOW: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::VIOLET_500
        },
        offset: Vector::ZERO,
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PREVIEW_TEXT_WIDTH_RATIO > 0.0 && sizing::PREVIEW_TEXT_WIDTH_RATIO < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn theme_scales_are_ordered_dark_to_light() {
        assert!(palette::SLATE_900.r < palette::SLATE_100.r);
        assert!(palette::AMBER_900.g < palette::AMBER_50.g);
        assert!(palette::GRAY_900.r < palette::GRAY_100.r);
    }
}

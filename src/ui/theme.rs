// SPDX-License-Identifier: MPL-2.0
//! Visual themes.
//!
//! A [`ThemeId`] names one of three fixed themes; [`ThemeId::tokens`] maps it
//! to the [`ThemeTokens`] every view reads its colors, fonts and layout from.
//! The mapping is pure data. The matching Iced [`Theme`] is derived from the
//! same colors so stock widgets (pick list menus, scrollbars) follow along.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::font::Weight;
use iced::keyboard::{Key, Modifiers};
use iced::theme::Palette;
use iced::{Color, Font, Shadow, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Theme Identifier
// ============================================================================

/// One of the built-in themes, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Default,
    Retro,
    Futuristic,
}

impl ThemeId {
    /// Cycling order: default, retro, futuristic, then back to default.
    pub const ALL: [ThemeId; 3] = [ThemeId::Default, ThemeId::Retro, ThemeId::Futuristic];

    /// The theme after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeId::Default => ThemeId::Retro,
            ThemeId::Retro => ThemeId::Futuristic,
            ThemeId::Futuristic => ThemeId::Default,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::Retro => "retro",
            ThemeId::Futuristic => "futuristic",
        }
    }

    /// Returns the i18n key of the theme name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeId::Default => "theme-default",
            ThemeId::Retro => "theme-retro",
            ThemeId::Futuristic => "theme-futuristic",
        }
    }

    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        match self {
            ThemeId::Default => ThemeTokens::default_theme(),
            ThemeId::Retro => ThemeTokens::retro(),
            ThemeId::Futuristic => ThemeTokens::futuristic(),
        }
    }
}

/// Alt+Q, matched on the unmodified key so layouts that turn Alt+Q into
/// another character still work.
#[must_use]
pub fn is_cycle_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    is_plain_alt(modifiers)
        && matches!(key, Key::Character(c) if c.as_str().eq_ignore_ascii_case("q"))
}

/// Alt without Ctrl or Logo. AltGr layouts report Ctrl+Alt and stay typeable.
#[must_use]
pub fn is_plain_alt(modifiers: Modifiers) -> bool {
    modifiers.alt() && !modifiers.control() && !modifiers.logo()
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (expected default, retro or futuristic)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// How the form and the preview are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Form and preview side by side.
    Columns,
    /// Preview stacked under the form in a single column.
    Stacked,
}

/// Colors of one theme, per UI role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub background: Color,
    pub card: Color,
    pub card_border: Color,
    pub preview_background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub heading: Color,

    // Brand
    pub primary: Color,
    pub primary_hover: Color,
    pub on_primary: Color,
    pub accent: Color,

    // Inputs
    pub input_background: Color,
    pub input_border: Color,
    pub input_focus: Color,
    pub placeholder: Color,
    pub selection: Color,

    // Semantic
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlays
    pub backdrop: Color,
}

/// Everything a view needs to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeTokens {
    pub id: ThemeId,
    pub colors: ColorScheme,
    pub font: Font,
    pub heading_font: Font,
    pub layout: LayoutKind,
    pub uppercase_buttons: bool,
    pub card_radius: f32,
    pub input_radius: f32,
    pub button_radius: f32,
    pub border_width: f32,
    pub card_shadow: Shadow,
}

fn bold(font: Font) -> Font {
    Font {
        weight: Weight::Bold,
        ..font
    }
}

fn backdrop() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::BLACK
    }
}

impl ThemeTokens {
    /// Light gray surfaces with a green accent, sans-serif, two columns.
    #[must_use]
    pub fn default_theme() -> Self {
        Self {
            id: ThemeId::Default,
            colors: ColorScheme {
                background: palette::GRAY_100,
                card: palette::WHITE,
                card_border: palette::GRAY_200,
                preview_background: palette::GRAY_200,

                text_primary: palette::GRAY_900,
                text_secondary: palette::GRAY_500,
                heading: palette::GREEN_700,

                primary: palette::GREEN_600,
                primary_hover: palette::GREEN_700,
                on_primary: palette::WHITE,
                accent: palette::GREEN_500,

                input_background: palette::WHITE,
                input_border: palette::GRAY_300,
                input_focus: palette::GREEN_500,
                placeholder: palette::GRAY_500,
                selection: palette::GREEN_100,

                error: palette::ERROR_500,
                warning: palette::WARNING_500,
                success: palette::SUCCESS_500,
                info: palette::INFO_500,

                backdrop: backdrop(),
            },
            font: Font::DEFAULT,
            heading_font: bold(Font::DEFAULT),
            layout: LayoutKind::Columns,
            uppercase_buttons: false,
            card_radius: radius::LG,
            input_radius: radius::MD,
            button_radius: radius::MD,
            border_width: border::WIDTH_SM,
            card_shadow: shadow::MD,
        }
    }

    /// Amber paper with chunky borders, monospace, stacked.
    #[must_use]
    pub fn retro() -> Self {
        Self {
            id: ThemeId::Retro,
            colors: ColorScheme {
                background: palette::AMBER_50,
                card: palette::AMBER_100,
                card_border: palette::AMBER_800,
                preview_background: palette::AMBER_300,

                text_primary: palette::AMBER_900,
                text_secondary: palette::AMBER_800,
                heading: palette::AMBER_900,

                primary: palette::AMBER_500,
                primary_hover: palette::AMBER_600,
                on_primary: palette::AMBER_900,
                accent: palette::AMBER_600,

                input_background: palette::AMBER_50,
                input_border: palette::AMBER_800,
                input_focus: palette::AMBER_600,
                placeholder: palette::AMBER_600,
                selection: palette::AMBER_300,

                error: palette::ERROR_500,
                warning: palette::WARNING_500,
                success: palette::SUCCESS_500,
                info: palette::INFO_500,

                backdrop: backdrop(),
            },
            font: Font::MONOSPACE,
            heading_font: bold(Font::MONOSPACE),
            layout: LayoutKind::Stacked,
            uppercase_buttons: false,
            card_radius: radius::NONE,
            input_radius: radius::NONE,
            button_radius: radius::NONE,
            border_width: border::WIDTH_LG,
            card_shadow: shadow::RETRO,
        }
    }

    /// Dark slate with a violet glow, two columns, uppercase buttons.
    #[must_use]
    pub fn futuristic() -> Self {
        Self {
            id: ThemeId::Futuristic,
            colors: ColorScheme {
                background: palette::SLATE_900,
                card: palette::SLATE_800,
                card_border: palette::VIOLET_500,
                preview_background: palette::SLATE_700,

                text_primary: palette::SLATE_100,
                text_secondary: palette::SLATE_400,
                heading: palette::VIOLET_300,

                primary: palette::VIOLET_600,
                primary_hover: palette::VIOLET_500,
                on_primary: palette::WHITE,
                accent: palette::VIOLET_300,

                input_background: palette::SLATE_900,
                input_border: palette::SLATE_600,
                input_focus: palette::VIOLET_500,
                placeholder: palette::SLATE_400,
                selection: palette::VIOLET_600,

                error: palette::ERROR_500,
                warning: palette::WARNING_500,
                success: palette::SUCCESS_500,
                info: palette::INFO_500,

                backdrop: Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                },
            },
            font: Font::DEFAULT,
            heading_font: bold(Font::DEFAULT),
            layout: LayoutKind::Columns,
            uppercase_buttons: true,
            card_radius: radius::XL,
            input_radius: radius::SM,
            button_radius: radius::FULL,
            border_width: border::WIDTH_SM,
            card_shadow: shadow::GLOW,
        }
    }

    /// Applies the theme's button casing to a label.
    #[must_use]
    pub fn button_label(&self, label: &str) -> String {
        if self.uppercase_buttons {
            label.to_uppercase()
        } else {
            label.to_string()
        }
    }

    /// Whether light text should be used on the theme's background.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        let c = self.colors.background;
        0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b < 0.5
    }

    /// Iced theme derived from these tokens.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let palette = Palette {
            background: self.colors.background,
            text: self.colors.text_primary,
            primary: self.colors.primary,
            success: self.colors.success,
            warning: self.colors.warning,
            danger: self.colors.error,
        };
        let name = match self.id {
            ThemeId::Default => "TeeStudio Default",
            ThemeId::Retro => "TeeStudio Retro",
            ThemeId::Futuristic => "TeeStudio Futuristic",
        };
        Theme::custom(name, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn alt_q_is_the_cycle_shortcut() {
        assert!(is_cycle_shortcut(&character("q"), Modifiers::ALT));
        assert!(is_cycle_shortcut(&character("Q"), Modifiers::ALT | Modifiers::SHIFT));
    }

    #[test]
    fn q_without_alt_is_plain_typing() {
        assert!(!is_cycle_shortcut(&character("q"), Modifiers::empty()));
        assert!(!is_cycle_shortcut(&character("q"), Modifiers::SHIFT));
    }

    #[test]
    fn other_combinations_are_not_the_shortcut() {
        assert!(!is_cycle_shortcut(&character("w"), Modifiers::ALT));
        assert!(!is_cycle_shortcut(&character("q"), Modifiers::ALT | Modifiers::CTRL));
        assert!(!is_cycle_shortcut(
            &Key::Named(iced::keyboard::key::Named::Enter),
            Modifiers::ALT
        ));
    }

    #[test]
    fn cycling_is_circular() {
        for start in ThemeId::ALL {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn cycling_follows_fixed_order() {
        assert_eq!(ThemeId::Default.next(), ThemeId::Retro);
        assert_eq!(ThemeId::Retro.next(), ThemeId::Futuristic);
        assert_eq!(ThemeId::Futuristic.next(), ThemeId::Default);
    }

    #[test]
    fn parse_accepts_names_case_insensitively() {
        assert_eq!("retro".parse::<ThemeId>(), Ok(ThemeId::Retro));
        assert_eq!(" Futuristic ".parse::<ThemeId>(), Ok(ThemeId::Futuristic));
        assert!("neon".parse::<ThemeId>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for id in ThemeId::ALL {
            assert_eq!(id.to_string().parse::<ThemeId>(), Ok(id));
        }
    }

    #[test]
    fn tokens_carry_their_id() {
        for id in ThemeId::ALL {
            assert_eq!(id.tokens().id, id);
        }
    }

    #[test]
    fn layouts_match_theme_character() {
        assert_eq!(ThemeId::Default.tokens().layout, LayoutKind::Columns);
        assert_eq!(ThemeId::Retro.tokens().layout, LayoutKind::Stacked);
        assert_eq!(ThemeId::Futuristic.tokens().layout, LayoutKind::Columns);
        assert_eq!(ThemeId::Retro.tokens().font, Font::MONOSPACE);
    }

    #[test]
    fn only_futuristic_uppercases_buttons() {
        assert_eq!(ThemeId::Default.tokens().button_label("Save"), "Save");
        assert_eq!(ThemeId::Futuristic.tokens().button_label("Save"), "SAVE");
    }

    #[test]
    fn only_futuristic_is_dark() {
        assert!(!ThemeId::Default.tokens().is_dark());
        assert!(!ThemeId::Retro.tokens().is_dark());
        assert!(ThemeId::Futuristic.tokens().is_dark());
    }

    #[test]
    fn iced_theme_uses_token_colors() {
        let tokens = ThemeId::Retro.tokens();
        let theme = tokens.iced_theme();
        assert_eq!(theme.palette().background, tokens.colors.background);
        assert_eq!(theme.palette().primary, tokens.colors.primary);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Button styles, parameterized by the active theme tokens.

use crate::ui::design_tokens::{opacity, shadow};
use crate::ui::theme::ThemeTokens;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (submit).
pub fn primary(tokens: ThemeTokens) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let colors = tokens.colors;
        let (background, elevation) = match status {
            button::Status::Hovered => (colors.primary_hover, shadow::MD),
            button::Status::Pressed => (colors.primary_hover, shadow::NONE),
            button::Status::Active => (colors.primary, shadow::SM),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..colors.primary
                },
                shadow::NONE,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.on_primary,
            border: Border {
                color: colors.card_border,
                width: if tokens.border_width > 1.0 {
                    tokens.border_width / 2.0
                } else {
                    0.0
                },
                radius: tokens.button_radius.into(),
            },
            shadow: elevation,
            ..Default::default()
        }
    }
}

/// Outlined secondary action (browse, clear text).
pub fn secondary(tokens: ThemeTokens) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let colors = tokens.colors;
        let (background, border_color) = match status {
            button::Status::Hovered | button::Status::Pressed => (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..colors.primary
                },
                colors.primary,
            ),
            _ => (Color::TRANSPARENT, colors.input_border),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.text_primary,
            border: Border {
                color: border_color,
                width: tokens.border_width.min(2.0),
                radius: tokens.button_radius.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless text button (toast dismiss).
pub fn text_only(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
            _ => opacity::OVERLAY_STRONG,
        };

        button::Style {
            background: None,
            text_color: Color { a: alpha, ..color },
            ..Default::default()
        }
    }
}

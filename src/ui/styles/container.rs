// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theme::ThemeTokens;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind everything else.
pub fn page(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.background)),
        text_color: Some(tokens.colors.text_primary),
        ..Default::default()
    }
}

/// Card holding the form or the preview.
pub fn card(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.card)),
        text_color: Some(tokens.colors.text_primary),
        border: Border {
            color: tokens.colors.card_border,
            width: tokens.border_width,
            radius: tokens.card_radius.into(),
        },
        shadow: tokens.card_shadow,
        ..Default::default()
    }
}

/// Surface behind the shirt preview.
pub fn preview(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.preview_background)),
        border: Border {
            radius: tokens.input_radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-looking drop target for the image.
pub fn drop_zone(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..tokens.colors.input_background
        })),
        border: Border {
            color: tokens.colors.accent,
            width: border::WIDTH_MD,
            radius: tokens.input_radius.into(),
        },
        ..Default::default()
    }
}

/// Badge showing the recommended size.
pub fn size_badge(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.primary)),
        text_color: Some(tokens.colors.on_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn modal(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.card)),
        text_color: Some(tokens.colors.text_primary),
        border: Border {
            color: tokens.colors.card_border,
            width: tokens.border_width,
            radius: tokens.card_radius.max(radius::MD).into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Round check badge at the top of the saved modal.
pub fn check_badge(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.success)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

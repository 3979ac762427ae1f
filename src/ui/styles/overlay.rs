// SPDX-License-Identifier: MPL-2.0
//! Styles for full-window overlays and toasts.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theme::ThemeTokens;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent backdrop behind the saved modal.
pub fn backdrop(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.backdrop)),
        ..Default::default()
    }
}

/// Opaque screen covering the window while loading.
pub fn loading_screen(tokens: ThemeTokens) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(tokens.colors.background)),
        text_color: Some(tokens.colors.heading),
        ..Default::default()
    }
}

/// Toast card with a colored accent border.
pub fn toast(accent: Color, dark_surface: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (surface, text) = if dark_surface {
            (palette::GRAY_900, palette::WHITE)
        } else {
            (palette::WHITE, palette::GRAY_900)
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..surface
            })),
            text_color: Some(text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeId;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(ThemeId::Default.tokens())(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a > 0.0 && color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn toast_border_uses_accent() {
        let style = toast(Color::from_rgb(1.0, 0.0, 0.0), false)(&Theme::Light);
        assert_eq!(style.border.color, Color::from_rgb(1.0, 0.0, 0.0));
    }
}

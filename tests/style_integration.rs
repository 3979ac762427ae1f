// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, pick_list, text_editor, text_input};
    use iced::Background;
    use tee_studio::ui::design_tokens::{sizing, spacing};
    use tee_studio::ui::styles::{button, container, input, overlay};
    use tee_studio::ui::theme::{LayoutKind, ThemeId};

    #[test]
    fn every_style_is_callable_under_every_theme() {
        for id in ThemeId::ALL {
            let tokens = id.tokens();
            let theme = tokens.iced_theme();

            for status in [
                button_widget::Status::Active,
                button_widget::Status::Hovered,
                button_widget::Status::Pressed,
                button_widget::Status::Disabled,
            ] {
                let _ = button::primary(tokens)(&theme, status);
                let _ = button::secondary(tokens)(&theme, status);
                let _ = button::text_only(tokens.colors.text_primary)(&theme, status);
            }

            let _ = container::page(tokens)(&theme);
            let _ = container::card(tokens)(&theme);
            let _ = container::preview(tokens)(&theme);
            let _ = container::drop_zone(tokens)(&theme);
            let _ = container::size_badge(tokens)(&theme);
            let _ = container::modal(tokens)(&theme);
            let _ = container::check_badge(tokens)(&theme);
            let _ = overlay::backdrop(tokens)(&theme);
            let _ = overlay::loading_screen(tokens)(&theme);
            let _ = overlay::toast(tokens.colors.info, tokens.is_dark())(&theme);

            let _ = input::text_field(tokens, false)(&theme, text_input::Status::Active);
            let _ = input::editor(tokens, false)(&theme, text_editor::Status::Active);
            let _ = input::select(tokens, false)(&theme, pick_list::Status::Active);
        }
    }

    #[test]
    fn invalid_fields_use_the_error_border() {
        for id in ThemeId::ALL {
            let tokens = id.tokens();
            let theme = tokens.iced_theme();

            let valid = input::text_field(tokens, false)(&theme, text_input::Status::Active);
            let invalid = input::text_field(tokens, true)(&theme, text_input::Status::Active);
            assert_eq!(invalid.border.color, tokens.colors.error);
            assert_ne!(valid.border.color, invalid.border.color);
        }
    }

    #[test]
    fn primary_button_uses_theme_primary() {
        for id in ThemeId::ALL {
            let tokens = id.tokens();
            let style = button::primary(tokens)(&tokens.iced_theme(), button_widget::Status::Active);
            assert_eq!(
                style.background,
                Some(Background::Color(tokens.colors.primary))
            );
        }
    }

    #[test]
    fn themes_differ_in_layout_and_tone() {
        assert_eq!(ThemeId::Default.tokens().layout, LayoutKind::Columns);
        assert_eq!(ThemeId::Retro.tokens().layout, LayoutKind::Stacked);
        assert!(ThemeId::Futuristic.tokens().is_dark());
        assert!(!ThemeId::Default.tokens().is_dark());
        assert!(ThemeId::Futuristic.tokens().uppercase_buttons);
    }

    #[test]
    fn design_tokens_are_accessible() {
        assert!(spacing::MD > spacing::XS);
        assert!(sizing::MODAL_WIDTH < sizing::FORM_MAX_WIDTH);
        assert!(sizing::PREVIEW_TEXT_WIDTH_RATIO > 0.0 && sizing::PREVIEW_TEXT_WIDTH_RATIO <= 1.0);
    }
}

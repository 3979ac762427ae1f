// SPDX-License-Identifier: MPL-2.0
//! Styles for form inputs: text inputs, the custom text editor and the build
//! selector.
//!
//! Each style starts from the Iced default for the status and overrides the
//! themed fields.

use crate::ui::design_tokens::border;
use crate::ui::theme::ThemeTokens;
use iced::widget::{pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

fn field_border(tokens: ThemeTokens, focused: bool, hovered: bool, invalid: bool) -> Border {
    let colors = tokens.colors;
    let color = if invalid {
        colors.error
    } else if focused || hovered {
        colors.input_focus
    } else {
        colors.input_border
    };
    let width = if focused {
        tokens.border_width.max(border::WIDTH_MD)
    } else {
        tokens.border_width.min(border::WIDTH_MD)
    };

    Border {
        color,
        width,
        radius: tokens.input_radius.into(),
    }
}

/// Numeric text input; `invalid` paints the border in the error color.
pub fn text_field(
    tokens: ThemeTokens,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let colors = tokens.colors;
        let focused = matches!(status, text_input::Status::Focused { .. });
        let hovered = matches!(status, text_input::Status::Hovered);

        let mut style = text_input::default(theme, status);
        style.background = Background::Color(colors.input_background);
        style.border = field_border(tokens, focused, hovered, invalid);
        style.placeholder = colors.placeholder;
        style.value = colors.text_primary;
        style.selection = colors.selection;
        style
    }
}

/// Multi-line custom text editor.
pub fn editor(
    tokens: ThemeTokens,
    invalid: bool,
) -> impl Fn(&Theme, text_editor::Status) -> text_editor::Style {
    move |theme: &Theme, status: text_editor::Status| {
        let colors = tokens.colors;
        let focused = matches!(status, text_editor::Status::Focused { .. });
        let hovered = matches!(status, text_editor::Status::Hovered);

        let mut style = text_editor::default(theme, status);
        style.background = Background::Color(colors.input_background);
        style.border = field_border(tokens, focused, hovered, invalid);
        style.placeholder = colors.placeholder;
        style.value = colors.text_primary;
        style.selection = colors.selection;
        style
    }
}

/// Build selector.
pub fn select(
    tokens: ThemeTokens,
    invalid: bool,
) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    move |theme: &Theme, status: pick_list::Status| {
        let colors = tokens.colors;
        let opened = matches!(status, pick_list::Status::Opened { .. });
        let hovered = matches!(status, pick_list::Status::Hovered);

        let mut style = pick_list::default(theme, status);
        style.background = Background::Color(colors.input_background);
        style.border = field_border(tokens, opened, hovered, invalid);
        style.text_color = colors.text_primary;
        style.placeholder_color = colors.placeholder;
        style.handle_color = colors.text_secondary;
        style
    }
}

/// Color of inline error messages under a field.
#[must_use]
pub fn error_text(tokens: ThemeTokens) -> Color {
    tokens.colors.error
}

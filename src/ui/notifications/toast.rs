// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored border, a short severity
//! tag and a dismiss button.

use super::manager::{Entry, Manager, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::ThemeTokens;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(entry: &'a Entry, i18n: &'a I18n, tokens: ThemeTokens) -> Element<'a, Message> {
        let notification = entry.notification();
        let severity = notification.severity();
        let accent_color = severity.color();

        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        let message_text = i18n.tr_with_args(notification.message_key(), &args);

        let tag = Text::new(i18n.tr(severity.tag_key()))
            .size(typography::CAPTION)
            .font(tokens.heading_font)
            .color(accent_color);

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .font(tokens.font);

        let dismiss_button = button(text("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(entry.id()))
            .padding(spacing::XXS)
            .style(styles::button::text_only(if tokens.is_dark() {
                palette::WHITE
            } else {
                palette::GRAY_900
            }));

        let body = Column::new().spacing(spacing::XXS).push(tag).push(message_widget);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::overlay::toast(accent_color, tokens.is_dark()))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        tokens: ThemeTokens,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|entry| Self::view(entry, i18n, tokens))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::Severity;
    use super::*;

    #[test]
    fn severity_tags_resolve_in_default_locale() {
        let i18n = I18n::default();
        for severity in [Severity::Info, Severity::Warning, Severity::Error] {
            let label = i18n.tr(severity.tag_key());
            assert!(!label.starts_with("MISSING"), "{label}");
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Confirmation modal shown after a successful submission.

use super::ViewContext;
use crate::ui::animation::{pop_in, pulse_scale, sway_offset};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Shirt;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{opaque, Column, Container, Text};
use iced::{Element, Length};

/// Smallest width of the modal while it pops in, relative to its full width.
const POP_IN_START_SCALE: f32 = 0.9;

/// Width of the modal at the given pop-in progress.
fn modal_width(progress: f32) -> f32 {
    let scale = POP_IN_START_SCALE + (1.0 - POP_IN_START_SCALE) * progress.clamp(0.0, 1.0);
    sizing::MODAL_WIDTH * scale
}

/// Renders the backdrop and the modal. Meant to be stacked over the form;
/// the backdrop swallows every pointer event.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;

    let badge = Container::new(
        Text::new("✓")
            .size(typography::TITLE_LG)
            .font(tokens.heading_font),
    )
    .width(Length::Fixed(sizing::CHECK_BADGE))
    .height(Length::Fixed(sizing::CHECK_BADGE))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::check_badge(tokens));

    let title = Text::new(ctx.i18n.tr("saved-title"))
        .size(typography::TITLE_MD)
        .font(tokens.heading_font)
        .color(tokens.colors.heading)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let message = Text::new(ctx.i18n.tr("saved-message"))
        .size(typography::BODY)
        .font(tokens.font)
        .color(tokens.colors.text_secondary)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let shirt = Shirt::new(tokens.colors.primary, tokens.colors.heading)
        .with_offset(sway_offset(ctx.elapsed))
        .with_print(pulse_scale(ctx.elapsed))
        .into_element(sizing::SAVED_SHIRT);

    let footer = Text::new(ctx.i18n.tr("saved-footer"))
        .size(typography::BODY_SM)
        .font(tokens.font)
        .color(tokens.colors.success)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(title)
        .push(message)
        .push(shirt)
        .push(footer);

    let modal = Container::new(content)
        .width(Length::Fixed(modal_width(pop_in(ctx.elapsed))))
        .padding(spacing::XL)
        .style(styles::container::modal(tokens));

    opaque(
        Container::new(modal)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::overlay::backdrop(tokens)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_grows_to_full_width() {
        assert!((modal_width(0.0) - sizing::MODAL_WIDTH * POP_IN_START_SCALE).abs() < 1e-3);
        assert!((modal_width(1.0) - sizing::MODAL_WIDTH).abs() < 1e-3);
        assert!(modal_width(0.5) < sizing::MODAL_WIDTH);
    }

    #[test]
    fn modal_width_is_clamped() {
        assert!((modal_width(3.0) - sizing::MODAL_WIDTH).abs() < 1e-3);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Loading screen shown from boot until the form becomes available.

use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{LoadingDots, Shirt};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Renders the loading screen covering the whole window.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;

    let logo = Shirt::new(tokens.colors.primary, tokens.colors.heading)
        .into_element(sizing::LOADING_LOGO);

    let heading = Text::new(ctx.i18n.tr("loading-heading"))
        .size(typography::TITLE_MD)
        .font(tokens.heading_font)
        .color(tokens.colors.heading);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(logo)
        .push(heading)
        .push(LoadingDots::new(tokens.colors.primary, ctx.elapsed).into_element());

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::overlay::loading_screen(tokens))
        .into()
}

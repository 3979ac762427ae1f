// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The loading screen replaces everything; otherwise the form is drawn with
//! the saved modal stacked on top when needed. Toasts always come last.

use super::Message;
use crate::domain::UiPhase;
use crate::i18n::fluent::I18n;
use crate::ui::customizer;
use crate::ui::notifications::{self, Toast};
use crate::ui::overlays::{self, loading, saved};
use crate::ui::theme::ThemeTokens;
use iced::widget::Stack;
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tokens: ThemeTokens,
    pub phase: UiPhase,
    pub now: Instant,
    pub customizer: &'a customizer::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the window content for the current phase.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay_ctx = overlays::ViewContext {
        i18n: ctx.i18n,
        tokens: ctx.tokens,
        elapsed: ctx.phase.elapsed(ctx.now),
    };

    let base: Element<'_, Message> = if ctx.phase.is_loading() {
        loading::view(overlay_ctx)
    } else {
        customizer::view(customizer::ViewContext {
            i18n: ctx.i18n,
            state: ctx.customizer,
            tokens: ctx.tokens,
        })
        .map(Message::Customizer)
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.phase.is_saved() {
        layers = layers.push(saved::view(overlay_ctx));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.tokens).map(Message::Notification))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Timed overlays: the boot loading screen and the saved confirmation.
//!
//! Both are pure renderings of the elapsed time of the current
//! [`UiPhase`](crate::domain::UiPhase); they hold no state and emit no
//! messages.

pub mod loading;
pub mod saved;

use crate::i18n::fluent::I18n;
use crate::ui::theme::ThemeTokens;
use std::time::Duration;

/// Context for rendering an overlay.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tokens: ThemeTokens,
    /// Time spent in the phase the overlay belongs to.
    pub elapsed: Duration,
}

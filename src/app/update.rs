// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives the slice of `App` state it needs through
//! [`UpdateContext`] and returns the follow-up task, if any.

use super::Message;
use crate::domain::{Customization, UiPhase};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, SelectedImage};
use crate::ui::customizer::{self, Effect as CustomizerEffect};
use crate::ui::notifications::{self, Notification};
use crate::ui::theme::ThemeId;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a mut ThemeId,
    pub phase: &'a mut UiPhase,
    pub now: &'a mut Instant,
    pub customizer: &'a mut customizer::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Advances the timed phase and expires old toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    let before = *ctx.phase;
    if ctx.phase.advance(now) {
        tracing::debug!(from = ?before, "overlay finished, back to editing");
    }
    ctx.notifications.tick(now);
    Task::none()
}

/// Switches to the next theme. Allowed in every phase; form state is untouched.
pub fn handle_cycle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let next = ctx.theme.next();
    tracing::info!(from = %ctx.theme, to = %next, "theme changed");
    *ctx.theme = next;
    ctx.notifications.push(
        Notification::theme_changed(ctx.i18n.tr(next.i18n_key())),
        *ctx.now,
    );
    Task::none()
}

/// Routes a form message, unless an overlay is blocking interaction.
pub fn handle_customizer_message(
    ctx: &mut UpdateContext<'_>,
    message: customizer::Message,
) -> Task<Message> {
    if !ctx.phase.accepts_input() {
        tracing::trace!(?message, "form message ignored outside editing");
        return Task::none();
    }

    match ctx.customizer.update(message) {
        CustomizerEffect::None | CustomizerEffect::Rejected => Task::none(),
        CustomizerEffect::OpenImageDialog => {
            let filter_name = ctx.i18n.tr("file-dialog-filter-name");
            Task::perform(media::pick_image_file(filter_name), Message::ImageDialogResult)
        }
        CustomizerEffect::Submitted(customization) => {
            handle_submitted(ctx, &customization);
            Task::none()
        }
    }
}

fn handle_submitted(ctx: &mut UpdateContext<'_>, customization: &Customization) {
    tracing::info!(
        height_cm = customization.height_cm,
        weight_kg = customization.weight_kg,
        build = customization.build.as_str(),
        size = %customization.recommended_size,
        image = customization.image_name.as_deref().unwrap_or("-"),
        custom_text = %customization.custom_text,
        "customization saved"
    );
    let now = Instant::now();
    *ctx.now = now;
    ctx.phase.mark_saved(now);
}

/// Starts loading a dropped file. Drops are ignored while an overlay is shown.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !ctx.phase.accepts_input() {
        tracing::debug!(path = %path.display(), "file drop ignored outside editing");
        return Task::none();
    }
    if !media::has_image_extension(&path) {
        tracing::debug!(path = %path.display(), "dropped file has no image extension, trying anyway");
    }
    load_image_task(path)
}

/// Starts loading the picked file, if the dialog was not cancelled.
pub fn handle_dialog_result(path: Option<PathBuf>) -> Task<Message> {
    match path {
        Some(path) => load_image_task(path),
        None => Task::none(),
    }
}

/// Applies a finished image read.
///
/// Success replaces the selected image and clears stale image errors; a
/// failure keeps the current image and reports the problem as a toast.
pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: &std::path::Path,
    result: Result<SelectedImage, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            tracing::info!(
                file = %image.file_name,
                width = image.width,
                height = image.height,
                bytes = image.byte_len,
                "image selected"
            );
            ctx.notifications.clear_image_errors();
            ctx.customizer.set_image(image);
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "image could not be loaded");
            ctx.notifications.push(
                Notification::image_error(&error, media::display_name(path)),
                *ctx.now,
            );
        }
    }
    Task::none()
}

/// Reads and decodes an image off the UI thread.
pub fn load_image_task(path: PathBuf) -> Task<Message> {
    let target = path.clone();
    Task::perform(media::load_image(target), move |result| Message::ImageLoaded {
        path: path.clone(),
        result,
    })
}

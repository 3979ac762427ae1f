// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::SelectedImage;
use crate::ui::customizer;
use crate::ui::notifications;
use crate::ui::theme::ThemeId;
use iced::keyboard::Modifiers;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Customizer(customizer::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the timed phases, animations and toast expiry.
    Tick(Instant),
    /// Alt+Q: switch to the next theme.
    CycleTheme,
    /// Keyboard modifiers changed; the form ignores Alt-typed characters.
    ModifiersChanged(Modifiers),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the image file dialog.
    ImageDialogResult(Option<PathBuf>),
    /// Result from reading and decoding an image.
    ImageLoaded {
        path: PathBuf,
        result: Result<SelectedImage, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional startup theme, overriding `general.theme`.
    pub theme: Option<ThemeId>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `TEE_STUDIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional image to preload on startup.
    pub file_path: Option<PathBuf>,
}

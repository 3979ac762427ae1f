// SPDX-License-Identifier: MPL-2.0
//! What a toast says and how long it stays.
//!
//! Every toast belongs to one [`Kind`]. The kind fixes its severity and its
//! lifetime, so callers only pick the constructor that matches the event.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// How long a theme switch toast stays on screen.
pub const THEME_TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// How long the broken settings warning stays on screen.
pub const CONFIG_TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// The event a toast reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Alt+Q switched the theme.
    ThemeChanged,
    /// `settings.toml` exists but could not be used.
    ConfigWarning,
    /// A picked or dropped file could not be read or decoded.
    ImageError,
}

impl Kind {
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Kind::ThemeChanged => Severity::Info,
            Kind::ConfigWarning => Severity::Warning,
            Kind::ImageError => Severity::Error,
        }
    }

    /// Time on screen before the toast goes away by itself. Image errors
    /// stay until dismissed or replaced by a good image.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Kind::ThemeChanged => Some(THEME_TOAST_LIFETIME),
            Kind::ConfigWarning => Some(CONFIG_TOAST_LIFETIME),
            Kind::ImageError => None,
        }
    }
}

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Border and tag color.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// i18n key of the short tag shown above the message.
    #[must_use]
    pub fn tag_key(self) -> &'static str {
        match self {
            Severity::Info => "notification-tag-info",
            Severity::Warning => "notification-tag-warning",
            Severity::Error => "notification-tag-error",
        }
    }
}

/// A toast message, translated at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: Kind,
    message_key: String,
    message_args: Vec<(&'static str, String)>,
}

impl Notification {
    /// Theme switch announcement, naming the new theme.
    pub fn theme_changed(theme_name: impl Into<String>) -> Self {
        Self {
            kind: Kind::ThemeChanged,
            message_key: "notification-theme-changed".to_owned(),
            message_args: vec![("theme", theme_name.into())],
        }
    }

    /// Settings file problem; `message_key` comes from the config loader.
    pub fn config_warning(message_key: impl Into<String>) -> Self {
        Self {
            kind: Kind::ConfigWarning,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Failed image read or decode for the named file.
    pub fn image_error(error: &Error, file_name: impl Into<String>) -> Self {
        Self {
            kind: Kind::ImageError,
            message_key: error.i18n_key().to_owned(),
            message_args: vec![("file", file_name.into())],
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(&'static str, String)] {
        &self.message_args
    }
}

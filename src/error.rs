// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are stored as strings so that errors stay `Clone` and can travel
//! inside UI messages (e.g. the result of an asynchronous image read).

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The file was read but could not be decoded as an image.
    #[error("Image Error: {0}")]
    Image(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-image-read-error",
            Error::Image(_) => "notification-image-decode-error",
            Error::Config(_) => "notification-config-load-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

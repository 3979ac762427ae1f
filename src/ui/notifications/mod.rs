// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for problems outside the form.
//!
//! Form mistakes are reported inline next to their field; toasts cover the
//! rest: an image that cannot be read or decoded, a settings file that cannot
//! be parsed, a theme switch. They stack in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Entry, Manager, Message as NotificationMessage, NotificationId, MAX_VISIBLE};
pub use notification::{
    Kind, Notification, Severity, CONFIG_TOAST_LIFETIME, THEME_TOAST_LIFETIME,
};
pub use toast::Toast;

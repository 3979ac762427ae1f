// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! Toasts are kept oldest first. The first [`MAX_VISIBLE`] are on screen,
//! the rest wait their turn. A toast's lifetime starts when it is shown, not
//! when it is pushed, so a queued warning still gets its full five seconds.

use super::notification::{Kind, Notification};
use std::time::Instant;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Identifies a pushed toast for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// Messages from the toast widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// A pushed toast and when it became visible.
#[derive(Debug, Clone)]
pub struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Option<Instant>,
}

impl Entry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    fn is_expired(&self, now: Instant) -> bool {
        match (self.notification.kind().lifetime(), self.shown_at) {
            (Some(lifetime), Some(shown_at)) => now.saturating_duration_since(shown_at) >= lifetime,
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toast. It is shown at `now` if there is room, queued otherwise.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        match notification.kind() {
            Kind::ConfigWarning => {
                tracing::warn!(key = notification.message_key(), "settings warning shown");
            }
            Kind::ImageError => {
                tracing::debug!(key = notification.message_key(), "image error shown");
            }
            Kind::ThemeChanged => {}
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let shown_at = (self.entries.len() < MAX_VISIBLE).then_some(now);
        self.entries.push(Entry {
            id,
            notification,
            shown_at,
        });
        id
    }

    /// Removes a toast, visible or queued. Returns whether it existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Starts the clock of toasts that just moved on screen, then drops the
    /// visible ones whose lifetime is over.
    pub fn tick(&mut self, now: Instant) {
        loop {
            for entry in self.entries.iter_mut().take(MAX_VISIBLE) {
                entry.shown_at.get_or_insert(now);
            }
            let before = self.entries.len();
            let mut position = 0;
            self.entries.retain(|entry| {
                let visible = position < MAX_VISIBLE;
                position += 1;
                !(visible && entry.is_expired(now))
            });
            if self.entries.len() == before {
                break;
            }
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().take(MAX_VISIBLE)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Drops every image error, shown or queued. Called once a good image
    /// has loaded so complaints about an earlier file do not linger.
    pub fn clear_image_errors(&mut self) {
        self.entries
            .retain(|entry| entry.notification.kind() != Kind::ImageError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::notification::{CONFIG_TOAST_LIFETIME, THEME_TOAST_LIFETIME};
    use std::time::Duration;

    fn image_error() -> Notification {
        Notification::image_error(&Error::Io("denied".into()), "front.png")
    }

    fn visible_kinds(manager: &Manager) -> Vec<Kind> {
        manager.visible().map(|e| e.notification().kind()).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.visible().count(), 0);
    }

    #[test]
    fn fourth_toast_waits_for_a_free_slot() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let first = manager.push(image_error(), now);
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::theme_changed("Retro"), now);
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert_eq!(visible_kinds(&manager)[0], Kind::ImageError);

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(visible_kinds(&manager).iter().all(|k| *k == Kind::ThemeChanged));
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(image_error(), now);
        manager.dismiss(id);
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut manager = Manager::new();
        let id = manager.push(image_error(), Instant::now());
        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn theme_toast_expires_after_its_lifetime() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::theme_changed("Retro"), now);

        manager.tick(now + THEME_TOAST_LIFETIME - Duration::from_millis(1));
        assert!(manager.has_notifications());
        manager.tick(now + THEME_TOAST_LIFETIME);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn image_errors_stay_until_dismissed() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(image_error(), now);
        manager.tick(now + Duration::from_secs(3600));
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn queued_toast_lifetime_starts_when_shown() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::theme_changed("Retro"), now);
        }
        manager.push(Notification::config_warning("notification-config-load-error"), now);

        let promoted = now + THEME_TOAST_LIFETIME;
        manager.tick(promoted);
        assert_eq!(visible_kinds(&manager), vec![Kind::ConfigWarning]);

        manager.tick(promoted + CONFIG_TOAST_LIFETIME - Duration::from_millis(1));
        assert!(manager.has_notifications());
        manager.tick(promoted + CONFIG_TOAST_LIFETIME);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_image_errors_keeps_other_toasts() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(image_error(), now);
        manager.push(
            Notification::image_error(&Error::Image("truncated".into()), "back.png"),
            now,
        );
        manager.push(Notification::config_warning("notification-config-load-error"), now);
        manager.push(Notification::theme_changed("Retro"), now);

        manager.clear_image_errors();

        assert_eq!(
            visible_kinds(&manager),
            vec![Kind::ConfigWarning, Kind::ThemeChanged]
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard and window listener lives for the whole session. The tick
//! is only registered while something time-based is on screen.

use super::Message;
use crate::config::ANIMATION_TICK;
use crate::ui::theme::is_cycle_shortcut;
use iced::keyboard;
use iced::{event, time, window, Subscription};

/// Listens for the theme shortcut, modifier changes and dropped files.
///
/// The shortcut is global: it fires even when a text field has focus. The
/// form sees the modifier state so it can drop the character a focused
/// field would otherwise insert for the same key press.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| map_event(event))
}

fn map_event(event: event::Event) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if is_cycle_shortcut(&key, modifiers) =>
        {
            Some(Message::CycleTheme)
        }
        event::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    }
}

/// Creates the periodic tick for the timed phases, their animations and
/// toast auto-dismiss.
pub fn create_tick_subscription(
    phase_is_timed: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if phase_is_timed || has_notifications {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::{NativeCode, Physical};
    use iced::keyboard::{Key, Location, Modifiers};

    fn key_press(c: &str, modifiers: Modifiers) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Character(c.into()),
            modified_key: Key::Character(c.into()),
            physical_key: Physical::Unidentified(NativeCode::Unidentified),
            location: Location::Standard,
            modifiers,
            text: Some(c.into()),
            repeat: false,
        })
    }

    #[test]
    fn alt_q_cycles_theme() {
        assert!(matches!(
            map_event(key_press("q", Modifiers::ALT)),
            Some(Message::CycleTheme)
        ));
    }

    #[test]
    fn plain_typing_is_not_mapped() {
        assert!(map_event(key_press("q", Modifiers::empty())).is_none());
    }

    #[test]
    fn modifier_changes_are_forwarded() {
        let event = event::Event::Keyboard(keyboard::Event::ModifiersChanged(Modifiers::ALT));
        assert!(matches!(
            map_event(event),
            Some(Message::ModifiersChanged(m)) if m == Modifiers::ALT
        ));
    }

    #[test]
    fn dropped_files_are_forwarded() {
        let event = event::Event::Window(window::Event::FileDropped("shirt.png".into()));
        assert!(matches!(map_event(event), Some(Message::FileDropped(_))));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native keyboard events to the dial pad and drives
//! the periodic tick that ages toast notifications.

use super::Message;
use crate::domain::dialer::number;
use crate::ui::dialer;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the keyboard event subscription.
///
/// Keys the dial pad owns (digits, `*`, `#`, Backspace, Delete, Enter)
/// are translated into dial pad messages. Events a widget already
/// captured, and every other key, are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => map_dialer_key(&event),
        event::Status::Captured => None,
    })
}

/// Maps a native event to a dial pad message, if the key is one the
/// dial pad owns.
fn map_dialer_key(event: &event::Event) -> Option<Message> {
    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    match key {
        // Shift stays allowed: `#` and `*` arrive as shifted characters
        keyboard::Key::Character(c) if !modifiers.command() && !modifiers.alt() => {
            let mut chars = c.as_str().chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) if number::is_keypad_char(key) => {
                    Some(Message::Dialer(dialer::Message::KeypadPressed(key)))
                }
                _ => None,
            }
        }
        keyboard::Key::Named(keyboard::key::Named::Backspace | keyboard::key::Named::Delete) => {
            Some(Message::Dialer(dialer::Message::DeletePressed))
        }
        keyboard::Key::Named(keyboard::key::Named::Enter) => {
            Some(Message::Dialer(dialer::Message::EnterPressed))
        }
        _ => None,
    }
}

/// Creates a periodic tick subscription for toast fade and expiry.
///
/// Only active while toasts are visible so an idle window does not wake
/// the event loop.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(
            crate::app::config::NOTIFICATION_TICK_MS,
        ))
        .map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::event::Event;

    fn character_event(text: &str, modifiers: keyboard::Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(text.into()),
            modified_key: keyboard::Key::Character(text.into()),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Digit5),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    fn named_event(named: keyboard::key::Named) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Enter),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn digit_key_maps_to_keypad_press() {
        let event = character_event("5", keyboard::Modifiers::default());

        match map_dialer_key(&event) {
            Some(Message::Dialer(dialer::Message::KeypadPressed('5'))) => {}
            other => panic!("expected keypad press, got {:?}", other),
        }
    }

    #[test]
    fn star_and_hash_keys_map_to_keypad_press() {
        for text in ["*", "#"] {
            let event = character_event(text, keyboard::Modifiers::SHIFT);
            assert!(
                matches!(
                    map_dialer_key(&event),
                    Some(Message::Dialer(dialer::Message::KeypadPressed(_)))
                ),
                "{text} should map to a keypad press"
            );
        }
    }

    #[test]
    fn backspace_and_delete_map_to_delete_press() {
        for named in [
            keyboard::key::Named::Backspace,
            keyboard::key::Named::Delete,
        ] {
            let event = named_event(named);
            assert!(matches!(
                map_dialer_key(&event),
                Some(Message::Dialer(dialer::Message::DeletePressed))
            ));
        }
    }

    #[test]
    fn enter_maps_to_enter_press() {
        let event = named_event(keyboard::key::Named::Enter);
        assert!(matches!(
            map_dialer_key(&event),
            Some(Message::Dialer(dialer::Message::EnterPressed))
        ));
    }

    #[test]
    fn unrelated_keys_are_not_consumed() {
        let letter = character_event("a", keyboard::Modifiers::default());
        assert!(map_dialer_key(&letter).is_none());

        let escape = named_event(keyboard::key::Named::Escape);
        assert!(map_dialer_key(&escape).is_none());
    }

    #[test]
    fn digit_with_command_modifier_is_not_consumed() {
        let event = character_event("5", keyboard::Modifiers::COMMAND);
        assert!(map_dialer_key(&event).is_none());
    }

    #[test]
    fn tick_subscription_is_inactive_without_notifications() {
        // Subscription has no public inspection API; this at least pins
        // that both branches construct without panicking.
        let _idle = create_tick_subscription(false);
        let _active = create_tick_subscription(true);
    }
}

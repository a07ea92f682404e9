// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` holds the live notifications and drops them once their
//! display-then-fade lifecycle has run out. There is no queue, no cap on
//! concurrently visible toasts, and no manual dismissal: every push shows
//! immediately and every toast removes itself on expiry.

use super::notification::Notification;

/// Manages the live notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification.
    ///
    /// The notification is displayed immediately, stacking above any
    /// toasts already showing.
    pub fn push(&mut self, notification: Notification) {
        self.visible.insert(0, notification);
    }

    /// Processes a tick event, removing any notifications whose closing
    /// transition has finished.
    ///
    /// Should be called periodically (e.g., every 100ms) while
    /// notifications are alive.
    pub fn tick(&mut self) {
        self.visible.retain(|n| !n.is_expired());
    }

    /// Returns the currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any notifications are alive.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }
}

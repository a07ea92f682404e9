// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Length of the closing fade once the display time has elapsed.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome kind determines the toast fill color.
///
/// Both kinds share the same lifecycle timing; only the color differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Submission succeeded (green).
    Success,
    /// Validation or submission failed (red).
    Failure,
}

impl Kind {
    /// Returns the fill color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Failure => palette::ERROR_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// Notifications are fire-and-forget: each one lives out its fixed
/// display-then-fade lifecycle independently and cannot be dismissed.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Outcome kind (determines color).
    kind: Kind,
    /// The message text shown in the toast.
    message: String,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates a failure notification.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(Kind::Failure, message)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the outcome kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the current toast opacity: fully opaque for the display
    /// duration, then fading linearly to transparent over the closing
    /// transition.
    #[must_use]
    pub fn fade(&self) -> f32 {
        fade_for_age(self.age())
    }

    /// Returns whether the closing transition has finished and the
    /// notification should be removed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age() >= DISPLAY_DURATION + EXIT_DURATION
    }

    /// Test-only: shifts the creation instant into the past.
    #[cfg(test)]
    pub(crate) fn backdated(mut self, by: Duration) -> Self {
        self.created_at = self.created_at.checked_sub(by).unwrap_or(self.created_at);
        self
    }
}

fn fade_for_age(age: Duration) -> f32 {
    if age <= DISPLAY_DURATION {
        return opacity::OPAQUE;
    }

    let into_exit = age - DISPLAY_DURATION;
    if into_exit >= EXIT_DURATION {
        opacity::TRANSPARENT
    } else {
        1.0 - into_exit.as_secs_f32() / EXIT_DURATION.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        assert_ne!(Kind::Success.color(), Kind::Failure.color());
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::failure("").kind(), Kind::Failure);
    }

    #[test]
    fn fresh_notification_is_fully_opaque() {
        let notification = Notification::success("test");
        assert_eq!(notification.fade(), opacity::OPAQUE);
        assert!(!notification.is_expired());
    }

    #[test]
    fn fade_is_opaque_through_display_duration() {
        assert_eq!(fade_for_age(Duration::ZERO), opacity::OPAQUE);
        assert_eq!(fade_for_age(Duration::from_millis(2999)), opacity::OPAQUE);
        assert_eq!(fade_for_age(DISPLAY_DURATION), opacity::OPAQUE);
    }

    #[test]
    fn fade_is_halfway_through_exit_transition() {
        let age = DISPLAY_DURATION + EXIT_DURATION / 2;
        assert_eq!(fade_for_age(age), 0.5);
    }

    #[test]
    fn fade_is_transparent_after_exit_transition() {
        let age = DISPLAY_DURATION + EXIT_DURATION;
        assert_eq!(fade_for_age(age), opacity::TRANSPARENT);
        assert_eq!(
            fade_for_age(age + Duration::from_secs(1)),
            opacity::TRANSPARENT
        );
    }

    #[test]
    fn expiry_matches_full_lifecycle() {
        let total = DISPLAY_DURATION + EXIT_DURATION;
        let expired = Notification::failure("test").backdated(total);
        assert!(expired.is_expired());

        let fading = Notification::failure("test").backdated(DISPLAY_DURATION);
        assert!(!fading.is_expired());
    }

    #[test]
    fn both_kinds_share_the_same_timing() {
        // Timing is a pair of module constants, not a per-kind property;
        // this pins the identical 3000ms + 300ms lifecycle for both kinds.
        assert_eq!(DISPLAY_DURATION, Duration::from_millis(3000));
        assert_eq!(EXIT_DURATION, Duration::from_millis(300));
    }
}

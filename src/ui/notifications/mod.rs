// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to report
//! submission outcomes without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with outcome kinds
//! - [`manager`] - `Manager` for notification lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! manager.push(Notification::success("Call initiated successfully!"));
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager);
//! ```
//!
//! # Design Considerations
//!
//! - Toast lifecycle: 3000ms on display, then a 300ms closing fade,
//!   identical for both kinds
//! - Fire-and-forget: no visible cap, no queue, no manual dismiss
//! - Position: top-right corner, newest on top

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{Kind, Notification, DISPLAY_DURATION, EXIT_DURATION};
pub use toast::Toast;

// SPDX-License-Identifier: MPL-2.0
//! `iced_dial` is a phone dialer desktop app built with the Iced GUI framework.
//!
//! It renders a clinic dial pad with keyboard input, US phone number
//! formatting, and toast feedback for call submissions sent to a
//! configurable HTTP endpoint.

#![doc(html_root_url = "https://docs.rs/iced_dial/0.1.0")]

pub mod app;
pub mod call;
pub mod domain;
pub mod error;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Dialer domain types.
//!
//! This module provides the pure types behind the dial pad:
//! - [`DialedNumber`]: the keypad input buffer
//! - [`format_for_display`]: progressive US phone-number formatting

pub mod format;
pub mod number;

pub use format::{format_for_display, DISPLAY_PLACEHOLDER};
pub use number::DialedNumber;

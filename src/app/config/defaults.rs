// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Call**: Call submission endpoint
//! - **Notifications**: Toast refresh cadence

// ==========================================================================
// Call Defaults
// ==========================================================================

/// Default URL the call-initiation request is POSTed to.
///
/// Overridable per install through `[call] endpoint` in `settings.toml`
/// and per run through the `--endpoint` command line flag.
pub const DEFAULT_CALL_ENDPOINT: &str = "http://52.202.249.155:5001/api/call";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval between toast lifecycle ticks (in milliseconds).
///
/// Each tick re-evaluates toast fade and expiry. 100ms keeps the fade-out
/// smooth without waking the event loop when no toasts are visible.
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // A tick slower than the exit fade would skip the fade entirely
    assert!(NOTIFICATION_TICK_MS > 0);
    assert!(NOTIFICATION_TICK_MS <= 300);

    // The endpoint must be an absolute http(s) URL
    assert!(!DEFAULT_CALL_ENDPOINT.is_empty());
    let bytes = DEFAULT_CALL_ENDPOINT.as_bytes();
    assert!(bytes.len() > 7);
    assert!(bytes[0] == b'h' && bytes[1] == b't' && bytes[2] == b't' && bytes[3] == b'p');
};

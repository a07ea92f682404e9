// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::call::CallResult;
use crate::ui::dialer;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dialer(dialer::Message),
    /// Result of an outbound call submission.
    CallCompleted(CallResult<()>),
    Tick(Instant), // Periodic tick for toast fade and expiry
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional call endpoint override.
    /// Takes precedence over `[call] endpoint` in settings.toml.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_DIAL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

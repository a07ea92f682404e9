// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`dialer`]: Dial string types ([`DialedNumber`](dialer::DialedNumber))
//!   and display formatting ([`format_for_display`](dialer::format_for_display))

pub mod dialer;

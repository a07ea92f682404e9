// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`dialer`] - Dial pad with number readout, key grid, and Call/Delete actions
//! - [`instructions`] - Static usage instructions panel
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod dialer;
pub mod icons;
pub mod instructions;
pub mod notifications;
pub mod styles;
pub mod theming;

// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time and handles are cached using
//! `OnceLock` for optimal performance.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `backspace` not `delete_digit`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = $data;
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Action Icons
// =============================================================================

// White stroke so the glyph reads on the filled Delete button.
const BACKSPACE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="white"><path stroke-linecap="round" stroke-linejoin="round" d="M12 9.75L14.25 12m0 0l2.25 2.25M14.25 12l2.25-2.25M14.25 12L12 14.25m-2.58 4.92l-6.375-6.375a1.125 1.125 0 010-1.59L9.42 4.83c.211-.211.498-.33.796-.33H19.5a2.25 2.25 0 012.25 2.25v10.5a2.25 2.25 0 01-2.25 2.25h-9.284c-.298 0-.585-.119-.796-.33z"/></svg>"##;

define_icon!(
    backspace,
    BACKSPACE_SVG,
    "Backspace icon: key outline with an X, pointing left."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that the embedded SVG data is reachable
        let _ = backspace();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(backspace(), 24.0);
        // Just verify it compiles and returns an Svg
        let _ = icon;
    }

    #[test]
    fn backspace_svg_is_well_formed() {
        let data = std::str::from_utf8(BACKSPACE_SVG).unwrap();
        assert!(data.starts_with("<svg"));
        assert!(data.ends_with("</svg>"));
    }
}

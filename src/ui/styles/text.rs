// SPDX-License-Identifier: MPL-2.0
//! Text styles.
//!
//! The panel cards stay white in both theme modes, so text on them uses
//! fixed grays instead of theme-derived colors.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Panel headings on white cards.
pub fn heading(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_800),
    }
}

/// Body copy on white cards.
pub fn body(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_600),
    }
}

/// Note box text.
pub fn note(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::PRIMARY_600),
    }
}

/// The formatted number readout.
pub fn display(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_700),
    }
}

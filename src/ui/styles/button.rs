// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the twelve keypad keys.
///
/// Soft gray fill that brightens on hover; keys keep their fill when the
/// buffer is full but dim their label.
pub fn keypad(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::GRAY_100, palette::GRAY_700)
        }
        button::Status::Disabled => (palette::GRAY_50, palette::GRAY_300),
        _ => (palette::GRAY_50, palette::GRAY_700),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the filled Call/Delete action buttons.
///
/// `base` and `hover` are the enabled fill colors; both actions share the
/// same gray fill when disabled.
pub fn action(base: Color, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => hover,
            button::Status::Disabled => palette::GRAY_300,
            _ => base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: if matches!(status, button::Status::Disabled) {
                shadow::NONE
            } else {
                shadow::MD
            },
            snap: true,
        }
    }
}

/// Style for the Call button (green when enabled).
pub fn call(theme: &Theme, status: button::Status) -> button::Style {
    action(palette::SUCCESS_500, palette::SUCCESS_600)(theme, status)
}

/// Style for the Delete button (red when enabled).
pub fn delete(theme: &Theme, status: button::Status) -> button::Style {
    action(palette::ERROR_500, palette::ERROR_600)(theme, status)
}

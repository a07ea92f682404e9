// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Window backdrop behind the two cards.
///
/// The color is derived from the active Iced `Theme` background, so the
/// backdrop stays coherent in both light and dark modes without
/// hard-coding colors.
pub fn backdrop(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        ..container::Style::default()
    }
}

/// Rounded white panel card with a drop shadow.
///
/// The cards stay white in both theme modes; only the backdrop behind
/// them follows the theme.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Soft inset card behind the formatted number readout.
pub fn display(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..container::Style::default()
    }
}

/// Blue-tinted note box at the bottom of the instructions panel.
pub fn note(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_50)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..container::Style::default()
    }
}

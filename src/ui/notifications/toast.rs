// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! filled rounded cards in the top-right corner. The card and its text
//! fade together over the closing transition.

use super::manager::Manager;
use super::notification::Notification;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// Toasts carry no interactions, so the message type is whatever the
    /// surrounding view uses.
    pub fn view<'a, M: 'a>(notification: &'a Notification) -> Element<'a, M> {
        let fill = notification.kind().color();
        let alpha = notification.fade();

        let message_widget = Text::new(notification.message())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..palette::WHITE
                }),
            });

        Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::LG])
            .style(move |theme: &Theme| toast_container_style(theme, fill, alpha))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the top-right corner, newest on top.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager) -> Element<'a, M> {
        let toasts: Vec<Element<'a, M>> = manager
            .visible()
            .map(|notification| Self::view(notification))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::LG)
                .into()
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, fill: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..fill })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: shadow::MD.color.a * alpha,
                ..shadow::MD.color
            },
            ..shadow::MD
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::Kind;
    use super::*;

    #[test]
    fn toast_container_style_uses_kind_fill() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, Kind::Success.color(), 1.0);

        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::SUCCESS_500))
        );
    }

    #[test]
    fn toast_container_style_applies_fade_alpha() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, Kind::Failure.color(), 0.5);

        if let Some(iced::Background::Color(bg)) = style.background {
            assert_eq!(bg.a, 0.5);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_is_empty_without_notifications() {
        let manager = Manager::new();
        // Just verify the empty branch renders
        let _: Element<'_, ()> = Toast::view_overlay(&manager);
    }

    #[test]
    fn overlay_renders_visible_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("Call initiated successfully!"));
        manager.push(Notification::failure("Failed to initiate call. Please try again."));

        let _: Element<'_, ()> = Toast::view_overlay(&manager);
    }
}

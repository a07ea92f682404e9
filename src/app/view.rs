// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the two panel
//! cards and stacks any active toasts over the top-right corner.

use super::Message;
use crate::ui::design_tokens::spacing;
use crate::ui::dialer;
use crate::ui::instructions;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Row, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub dialer: &'a dialer::State,
    pub notifications: &'a Manager,
}

/// Renders the instructions panel and dial pad side by side, centered on
/// the backdrop.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panels = Row::new()
        .spacing(spacing::XL)
        .push(instructions::view())
        .push(dialer::view(dialer::ViewContext { state: ctx.dialer }).map(Message::Dialer));

    let backdrop = Container::new(panels)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .style(styles::container::backdrop);

    Stack::new()
        .push(backdrop)
        .push(Toast::view_overlay(ctx.notifications))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;

    #[test]
    fn view_renders_without_toasts() {
        let dialer_state = dialer::State::new();
        let notifications = Manager::new();
        let _element = view(ViewContext {
            dialer: &dialer_state,
            notifications: &notifications,
        });
    }

    #[test]
    fn view_renders_with_active_toasts() {
        let dialer_state = dialer::State::new();
        let mut notifications = Manager::new();
        notifications.push(Notification::success("Call initiated successfully!"));
        notifications.push(Notification::failure("Failed to initiate call. Please try again."));

        let _element = view(ViewContext {
            dialer: &dialer_state,
            notifications: &notifications,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Instructions panel shown next to the dial pad.
//!
//! A static usage guide: three numbered steps plus a note box about the
//! 10-digit limit. The panel emits no messages.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{Column, Container, Text},
    Element, Font, Length,
};

/// Panel title.
const TITLE: &str = "Radiance Aesthetic Clinic";

const STEP_ENTER_TITLE: &str = "1. Enter Phone Number";
const STEP_ENTER_BODY: &str =
    "Click the number buttons or use your keyboard to input a 10-digit phone number.";

const STEP_CORRECT_TITLE: &str = "2. Make Corrections";
const STEP_CORRECT_BODY: &str =
    "Use the delete button or backspace key to correct any mistakes.";

const STEP_CALL_TITLE: &str = "3. Start the Call";
const STEP_CALL_BODY: &str = "Once you've entered all 10 digits, click the \"Call\" button or \
     press Enter to initiate the call.";

const NOTE: &str = "Note: This dialer only accepts 10-digit phone numbers and will \
     automatically format them for better readability.";

/// Render the instructions panel.
#[must_use]
pub fn view<'a, M: 'a>() -> Element<'a, M> {
    let title = Container::new(
        Text::new(TITLE)
            .size(typography::TITLE_LG)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            })
            .style(styles::text::heading),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(build_step(STEP_ENTER_TITLE, STEP_ENTER_BODY))
        .push(build_step(STEP_CORRECT_TITLE, STEP_CORRECT_BODY))
        .push(build_step(STEP_CALL_TITLE, STEP_CALL_BODY))
        .push(build_note());

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

/// Build a numbered usage step: bold heading over body copy.
fn build_step<'a, M: 'a>(title: &'a str, body: &'a str) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title)
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Semibold,
                    ..Font::default()
                })
                .style(styles::text::body),
        )
        .push(Text::new(body).size(typography::BODY_LG).style(styles::text::body))
        .into()
}

/// Build the highlighted note box.
fn build_note<'a, M: 'a>() -> Element<'a, M> {
    let note_text = Text::new(NOTE)
        .size(typography::BODY_LG)
        .font(Font {
            weight: Weight::Medium,
            ..Font::default()
        })
        .style(styles::text::note);

    Container::new(note_text)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::note)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_view_renders() {
        let _element: Element<'_, ()> = view();
    }

    #[test]
    fn copy_mentions_the_ten_digit_limit() {
        assert!(STEP_ENTER_BODY.contains("10-digit"));
        assert!(NOTE.contains("10-digit"));
    }
}

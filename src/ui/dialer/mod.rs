// SPDX-License-Identifier: MPL-2.0
//! Dial pad component.
//!
//! This module owns the keypad input state and renders the dial pad
//! panel: the formatted number readout, the 3x4 key grid, and the
//! Call/Delete action row. Submission itself is the parent's concern;
//! the component only reports that it was requested.

use crate::domain::dialer::{format_for_display, DialedNumber};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, Column, Container, Row, Text},
    Element, Font, Length,
};

/// Keypad layout, left to right, top to bottom.
const KEY_ROWS: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// Dial pad state owned by the root application.
#[derive(Debug, Default)]
pub struct State {
    number: DialedNumber,
}

impl State {
    /// Creates an empty dial pad.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current dial string.
    #[must_use]
    pub fn number(&self) -> &DialedNumber {
        &self.number
    }
}

/// Contextual data needed to render the dial pad.
pub struct ViewContext<'a> {
    pub state: &'a State,
}

/// Messages emitted by the dial pad.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keypad key was activated (pointer or keyboard).
    KeypadPressed(char),
    /// The Delete button or Backspace/Delete key was activated.
    DeletePressed,
    /// The Call button was activated.
    CallPressed,
    /// Enter was pressed on the keyboard.
    EnterPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked to place the call; the parent validates and submits.
    SubmitRequested,
}

/// Process a dial pad message and return the corresponding event.
#[must_use]
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::KeypadPressed(key) => {
            state.number.push(key);
            Event::None
        }
        Message::DeletePressed => {
            state.number.delete_last();
            Event::None
        }
        Message::CallPressed => Event::SubmitRequested,
        Message::EnterPressed => {
            // Enter is a submission proxy, but only once typing has begun
            if state.number.is_empty() {
                Event::None
            } else {
                Event::SubmitRequested
            }
        }
    }
}

/// Render the dial pad panel.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .push(build_display(&ctx))
        .push(build_keypad(&ctx))
        .push(build_actions(&ctx));

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

/// Build the formatted number readout in its inset card.
fn build_display<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let formatted = format_for_display(ctx.state.number.as_str());

    let readout = Container::new(
        Text::new(formatted)
            .size(typography::DISPLAY)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            })
            .style(styles::text::display),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    Container::new(readout)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::display)
        .into()
}

/// Build the 3x4 key grid.
fn build_keypad<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Every key locks once the buffer is full
    let locked = ctx.state.number.is_complete();

    let mut grid = Column::new().spacing(spacing::MD);
    for row_keys in KEY_ROWS {
        let mut row = Row::new().spacing(spacing::MD);
        for key in row_keys {
            row = row.push(build_key(key, locked));
        }
        grid = grid.push(row);
    }

    grid.into()
}

/// Build a single keypad key.
fn build_key<'a>(key: char, locked: bool) -> Element<'a, Message> {
    let label = Container::new(Text::new(key.to_string()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut key_button = button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::KEY_HEIGHT))
        .style(styles::button::keypad);

    if !locked {
        key_button = key_button.on_press(Message::KeypadPressed(key));
    }

    key_button.into()
}

/// Build the Call/Delete action row.
fn build_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let number = &ctx.state.number;

    Row::new()
        .spacing(spacing::MD)
        .push(build_call_button(number.is_complete()))
        .push(build_delete_button(!number.is_empty()))
        .into()
}

/// Build the Call button, enabled only for a complete number.
fn build_call_button<'a>(ready: bool) -> Element<'a, Message> {
    let label = Container::new(
        Text::new("Call")
            .size(typography::BODY_LG)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    let mut call_button = button(label)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ACTION_HEIGHT))
        .style(styles::button::call);

    if ready {
        call_button = call_button.on_press(Message::CallPressed);
    }

    call_button.into()
}

/// Build the Delete button, enabled while the buffer has characters.
fn build_delete_button<'a>(enabled: bool) -> Element<'a, Message> {
    let glyph = Container::new(icons::sized(icons::backspace(), sizing::ICON_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut delete_button = button(glyph)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ACTION_HEIGHT))
        .style(styles::button::delete);

    if enabled {
        delete_button = delete_button.on_press(Message::DeletePressed);
    }

    delete_button.into()
}

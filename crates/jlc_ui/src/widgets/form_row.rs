//! Labeled form rows.

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::theme::{font, spacing, LABEL_WIDTH};

/// Fixed-width label for the left column.
pub fn label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(font::NORMAL)
        .width(Length::Fixed(LABEL_WIDTH))
        .into()
}

/// A labeled text input. The input is read-only when `on_input` is `None`.
pub fn text_row<'a>(
    label_text: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: Option<fn(String) -> Message>,
) -> Element<'a, Message> {
    let mut input = text_input(placeholder, value)
        .size(font::NORMAL)
        .width(Length::Fill);
    if let Some(on_input) = on_input {
        input = input.on_input(on_input);
    }

    row![label(label_text), input]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

/// A labeled text input with a trailing button.
pub fn text_row_with_button<'a>(
    label_text: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: Option<fn(String) -> Message>,
    button_label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let mut input = text_input(placeholder, value)
        .size(font::NORMAL)
        .width(Length::Fill);
    if let Some(on_input) = on_input {
        input = input.on_input(on_input);
    }

    let action = button(text(button_label).size(font::SM))
        .on_press_maybe(on_press)
        .padding([spacing::XS, spacing::SM]);

    row![label(label_text), input, action]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
}

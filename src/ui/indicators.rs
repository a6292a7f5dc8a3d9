// SPDX-License-Identifier: MPL-2.0
//! Indicator dots: one clickable control per slide for direct navigation.

use iced::widget::{button, Row, Space};
use iced::{alignment, Element, Length, Theme};

const DOT_SIZE: f32 = 14.0;
const DOT_SPACING: f32 = 8.0;

/// Renders `count` indicator dots with the `active` one visually marked.
///
/// Activating a dot emits `on_select(its own position)`. The active marking
/// is derived from the arguments on every render, never stored.
pub fn view<'a, Message: Clone + 'a>(
    count: usize,
    active: usize,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let mut dots = Row::new()
        .spacing(DOT_SPACING)
        .align_y(alignment::Vertical::Center);

    for index in 0..count {
        let style: fn(&Theme, button::Status) -> button::Style = if index == active {
            button::primary
        } else {
            button::secondary
        };

        let dot = button(Space::new())
            .width(Length::Fixed(DOT_SIZE))
            .height(Length::Fixed(DOT_SIZE))
            .padding(0)
            .style(style)
            .on_press(on_select(index));

        dots = dots.push(dot);
    }

    dots.into()
}

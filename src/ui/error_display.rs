// SPDX-License-Identifier: MPL-2.0
//! Error panel shown when the page fetch fails.
//!
//! Replaces the whole widget body: a title, the failure message, and nothing
//! else. There is no retry affordance and no partial UI around it.

use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Element, Theme};

/// Renders a centered error panel with a title and the failure message.
pub fn view<'a, Message: 'a>(title: &str, message: &str) -> Element<'a, Message> {
    let heading = Text::new(title.to_string())
        .size(20)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        });

    let body = Text::new(message.to_string()).size(14);

    let content = Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body);

    Container::new(content)
        .max_width(500.0)
        .padding(24)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(iced::Background::Color(palette.background.weak.color)),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            }
        })
        .into()
}

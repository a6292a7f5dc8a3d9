// SPDX-License-Identifier: MPL-2.0
//! Loading view displayed while the page request is outstanding.

use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the centered loading view. No image, no controls.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(Text::new("Loading...").size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

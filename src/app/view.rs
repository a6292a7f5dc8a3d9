// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A pure mapping from `(LoadState, Carousel, slides)` to widgets. Arrow
//! disabled-ness and the active indicator are computed here, never stored.

use super::{App, LoadState, Message, SlideState};
use crate::ui::{error_display, indicators, loading};
use iced::widget::image::Image;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

const STAGE_WIDTH: f32 = 560.0;
const STAGE_HEIGHT: f32 = 360.0;

pub fn view(app: &App) -> Element<'_, Message> {
    let body: Element<'_, Message> = match app.load() {
        LoadState::Idle | LoadState::Loading => loading::view(),
        LoadState::Failed(message) => error_display::view("Something went wrong!", message),
        LoadState::Ready => view_carousel(app),
    };

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_carousel(app: &App) -> Element<'_, Message> {
    let nav = app.carousel();

    let previous = arrow("<", (!nav.is_at_first()).then_some(Message::PreviousImage));
    let next = arrow(">", (!nav.is_at_last()).then_some(Message::NextImage));

    let slide_row = Row::new()
        .spacing(16)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(stage(app))
        .push(next);

    let mut content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(slide_row);

    if let Some(record) = nav.current() {
        content = content.push(Text::new(record.caption(nav.current_index())).size(14));
    }

    if !nav.is_empty() {
        content = content.push(indicators::view(
            nav.len(),
            nav.current_index(),
            Message::JumpTo,
        ));
    }

    content.into()
}

/// The fixed-size area holding the current image (or its placeholder).
fn stage(app: &App) -> Element<'_, Message> {
    let inner: Element<'_, Message> = match app.current_slide() {
        Some(SlideState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(SlideState::Loading | SlideState::NotRequested) => {
            Text::new("Loading...").size(14).into()
        }
        Some(SlideState::Failed(message)) => Text::new(message.clone()).size(14).into(),
        // Ready with an empty page: controls render but there is no image.
        None => Space::new().into(),
    };

    Container::new(inner)
        .width(Length::Fixed(STAGE_WIDTH))
        .height(Length::Fixed(STAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// A navigation arrow. A `None` press target renders it disabled.
fn arrow(label: &str, on_press: Option<Message>) -> Element<'static, Message> {
    button(Text::new(label.to_string()).size(28))
        .padding([6, 12])
        .style(button::text)
        .on_press_maybe(on_press)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! All state transitions live here: the page fetch completing, slide bytes
//! arriving, and the three navigation actions. Results that arrive after the
//! state has moved on are dropped instead of applied.

use super::{App, LoadState, Message, SlideState};
use crate::feed;
use iced::widget::image;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PageLoaded(result) => page_loaded(app, result),
        Message::SlideLoaded { index, result } => {
            slide_loaded(app, index, result);
            Task::none()
        }
        Message::NextImage => {
            if app.carousel.next() {
                request_current_slide(app)
            } else {
                Task::none()
            }
        }
        Message::PreviousImage => {
            if app.carousel.previous() {
                request_current_slide(app)
            } else {
                Task::none()
            }
        }
        Message::JumpTo(index) => {
            if app.carousel.jump_to(index) {
                request_current_slide(app)
            } else {
                Task::none()
            }
        }
    }
}

/// Applies the page fetch result.
///
/// Only an outstanding load may transition the phase; a result arriving in
/// any other phase is stale and dropped.
fn page_loaded(
    app: &mut App,
    result: Result<Vec<feed::ImageRecord>, feed::FetchError>,
) -> Task<Message> {
    if app.load != LoadState::Loading {
        return Task::none();
    }

    match result {
        Ok(records) => {
            app.slides = vec![SlideState::default(); records.len()];
            app.carousel.load(records);
            app.load = LoadState::Ready;
            request_current_slide(app)
        }
        Err(err) => {
            app.load = LoadState::Failed(err.to_string());
            Task::none()
        }
    }
}

/// Applies a slide byte fetch result. Ignored unless that slide is still
/// awaiting bytes at the same index.
fn slide_loaded(app: &mut App, index: usize, result: Result<image::Handle, feed::FetchError>) {
    let Some(slide) = app.slides.get_mut(index) else {
        return;
    };
    if !matches!(slide, SlideState::Loading) {
        return;
    }

    *slide = match result {
        Ok(handle) => SlideState::Ready(handle),
        Err(err) => SlideState::Failed(err.to_string()),
    };
}

/// Requests pixel bytes for the current slide if they have not been asked
/// for yet. Each slide is fetched at most once per run.
fn request_current_slide(app: &mut App) -> Task<Message> {
    let index = app.carousel.current_index();
    let Some(record) = app.carousel.current() else {
        return Task::none();
    };
    let url = record.download_url.clone();

    let Some(slide) = app.slides.get_mut(index) else {
        return Task::none();
    };
    if !matches!(slide, SlideState::NotRequested) {
        return Task::none();
    }
    *slide = SlideState::Loading;

    Task::perform(
        async move { feed::fetch_bytes(&url).await.map(image::Handle::from_bytes) },
        move |result| Message::SlideLoaded { index, result },
    )
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced run loop.
//!
//! The `App` struct owns the three pieces of widget state: the top-level
//! load phase, the navigation carousel, and the per-slide pixel states. All
//! mutation happens in `update` on the UI thread, one message at a time;
//! network futures complete back into messages.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::feed::{self, FeedSource};
use crate::navigation::Carousel;
use iced::widget::image;
use iced::{window, Element, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Top-level phase of the widget. Exactly one holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The page request is outstanding.
    Loading,
    /// The record list is loaded (possibly empty).
    Ready,
    /// The page request failed; carries the human-readable message.
    Failed(String),
}

/// Pixel state of a single slide. Tracked apart from [`LoadState`] so a slow
/// or failed image download never disturbs the navigation machine.
#[derive(Debug, Clone, Default)]
pub enum SlideState {
    /// Bytes have not been asked for yet.
    #[default]
    NotRequested,
    /// The byte request is outstanding.
    Loading,
    /// Decoded handle ready to render.
    Ready(image::Handle),
    /// The byte request failed; carries the message shown in place of the image.
    Failed(String),
}

/// Root application state.
pub struct App {
    source: FeedSource,
    load: LoadState,
    carousel: Carousel,
    slides: Vec<SlideState>,
}

impl Default for App {
    fn default() -> Self {
        Self::with_source(FeedSource::default())
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure, but flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Resolves the feed source: CLI flag over config file over built-in default.
fn resolve_source(flags: &Flags, config: &Config) -> FeedSource {
    FeedSource {
        url: flags
            .url
            .clone()
            .or_else(|| config.url.clone())
            .unwrap_or_else(|| config::DEFAULT_URL.to_string()),
        page: flags.page.or(config.page).unwrap_or(config::DEFAULT_PAGE),
        limit: flags.limit.or(config.limit).unwrap_or(config::DEFAULT_LIMIT),
    }
}

impl App {
    /// Initializes application state and kicks off the one-per-run page fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let mut app = App::with_source(resolve_source(&flags, &config));
        let task = app.begin_loading();
        (app, task)
    }

    /// Creates an idle application bound to the given feed source.
    #[must_use]
    pub fn with_source(source: FeedSource) -> Self {
        Self {
            source,
            load: LoadState::Idle,
            carousel: Carousel::new(),
            slides: Vec::new(),
        }
    }

    /// Enters the `Loading` phase and returns the page fetch task.
    ///
    /// Called exactly once per run, at startup; navigation never re-fetches.
    pub fn begin_loading(&mut self) -> Task<Message> {
        self.load = LoadState::Loading;
        let source = self.source.clone();
        Task::perform(
            async move { feed::fetch_page(&source).await },
            Message::PageLoaded,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        let app_name = "Image Carousel";
        if self.load == LoadState::Ready && !self.carousel.is_empty() {
            format!(
                "{}/{} - {app_name}",
                self.carousel.current_index() + 1,
                self.carousel.len()
            )
        } else {
            app_name.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The configured feed source.
    #[must_use]
    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// The top-level load phase.
    #[must_use]
    pub fn load(&self) -> &LoadState {
        &self.load
    }

    /// The navigation state machine.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Pixel states, one per loaded record.
    #[must_use]
    pub fn slides(&self) -> &[SlideState] {
        &self.slides
    }

    /// Pixel state of the slide at the current index, if any.
    #[must_use]
    pub fn current_slide(&self) -> Option<&SlideState> {
        self.slides.get(self.carousel.current_index())
    }
}

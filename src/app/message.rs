// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::feed::{FetchError, ImageRecord};
use iced::widget::image;

/// Messages consumed by `App::update`. Navigation messages mutate only the
/// index; the two `*Loaded` variants carry async fetch results back in.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the one-per-run page fetch.
    PageLoaded(Result<Vec<ImageRecord>, FetchError>),
    /// Result of fetching the pixel bytes behind one slide.
    SlideLoaded {
        index: usize,
        result: Result<image::Handle, FetchError>,
    },
    /// Advance to the next slide (right arrow).
    NextImage,
    /// Step back to the previous slide (left arrow).
    PreviousImage,
    /// Jump directly to a slide (indicator dot).
    JumpTo(usize),
}

/// Runtime flags passed in from the CLI to override the configured feed.
#[derive(Debug, Default)]
pub struct Flags {
    /// Base endpoint returning a page of image records.
    pub url: Option<String>,
    /// Page number to request (1-based).
    pub page: Option<u32>,
    /// Maximum number of records per page.
    pub limit: Option<u32>,
}

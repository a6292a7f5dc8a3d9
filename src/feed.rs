// SPDX-License-Identifier: MPL-2.0
//! Remote image feed: wire records, request URL building, and the two fetch
//! operations (one page of records, one slide's pixel bytes).
//!
//! The page fetch happens exactly once per run; slide bytes are fetched
//! lazily when a slide first becomes current. Both run as async tasks on the
//! runtime driving the UI and report back through messages, so no state is
//! touched from here.

use serde::Deserialize;
use std::fmt;

/// User agent sent with every outbound request.
const USER_AGENT: &str = concat!("IcedCarousel/", env!("CARGO_PKG_VERSION"));

/// One entry in the fetched image list. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub download_url: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl ImageRecord {
    /// Caption shown under the image: the author when known, otherwise a
    /// positional label ("Image 1" for the first slide).
    #[must_use]
    pub fn caption(&self, position: usize) -> String {
        match self.author.as_deref() {
            Some(author) if !author.is_empty() => author.to_string(),
            _ => format!("Image {}", position + 1),
        }
    }
}

/// Where the page request goes: base URL plus query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSource {
    pub url: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for FeedSource {
    fn default() -> Self {
        Self {
            url: crate::config::DEFAULT_URL.to_string(),
            page: crate::config::DEFAULT_PAGE,
            limit: crate::config::DEFAULT_LIMIT,
        }
    }
}

impl FeedSource {
    /// Full request URL for this source's page.
    #[must_use]
    pub fn page_url(&self) -> String {
        page_url(&self.url, self.page, self.limit)
    }
}

/// Builds the page request URL: `{url}?page={page}&limit={limit}`.
#[must_use]
pub fn page_url(base: &str, page: u32, limit: u32) -> String {
    format!("{base}?page={page}&limit={limit}")
}

/// Result type for feed operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while talking to the feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request never produced a response (DNS, connectivity, TLS).
    Transport(String),
    /// The response body was not a valid record list.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Matches the wording the widget has always shown for bad statuses.
            FetchError::Status(_) => write!(f, "Failed to fetch images"),
            FetchError::Transport(msg) => write!(f, "{msg}"),
            FetchError::Decode(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

fn client() -> FetchResult<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))
}

/// Fetches one page of image records from the feed.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or a body
/// that does not decode as a record list.
pub async fn fetch_page(source: &FeedSource) -> FetchResult<Vec<ImageRecord>> {
    let response = client()?
        .get(source.page_url())
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches the pixel bytes behind a single record's download URL.
///
/// # Errors
///
/// Returns an error on transport failure or a non-success status.
pub async fn fetch_bytes(url: &str) -> FetchResult<Vec<u8>> {
    let response = client()?
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(bytes.to_vec())
}

// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a small image carousel built with the Iced GUI framework.
//!
//! On startup it fetches one page of image records from a remote feed, then
//! shows one image at a time with arrow and indicator-dot navigation.

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod navigation;
pub mod ui;

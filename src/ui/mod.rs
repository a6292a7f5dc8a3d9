// SPDX-License-Identifier: MPL-2.0
//! Visual building blocks shared by the application views.

pub mod error_display;
pub mod indicators;
pub mod loading;

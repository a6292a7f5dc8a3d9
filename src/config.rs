// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving default feed parameters to a `settings.toml` file.
//!
//! Every field is optional: a missing file, a missing field, or unparseable
//! content falls back to the built-in defaults, so a broken config can never
//! keep the application from starting.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCarousel";

/// Endpoint the original widget was written against.
pub const DEFAULT_URL: &str = "https://picsum.photos/v2/list";
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 5;

/// Persisted feed defaults. CLI flags take precedence over these values.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub url: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, and the
//! environment overrides applied on top of it.

use std::{env, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::warn;

pub(crate) const CONFIG_NAME: &str = "cinestream";

const API_KEY_VAR: &str = "TMDB_API_KEY";

/// Where the items of a home screen row come from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum RowSource {
    Trending,
    NowPlaying,
    Genre { id: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowConfig {
    pub(crate) title: String,
    pub(crate) source: RowSource,
}

impl RowConfig {
    fn new(title: &str, source: RowSource) -> Self {
        Self {
            title: title.to_string(),
            source,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub api_key: String,
    pub api_base_url: String,
    pub image_base_url: String,
    pub backdrop_base_url: String,
    pub language: String,
    pub include_adult: bool,
    pub search_debounce_ms: u64,
    pub request_timeout_secs: u64,
    pub(crate) rows: Vec<RowConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_key: String::new(),
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            backdrop_base_url: "https://image.tmdb.org/t/p/original".to_string(),
            language: "en-US".to_string(),
            include_adult: false,
            search_debounce_ms: 500,
            request_timeout_secs: 10,
            rows: vec![
                RowConfig::new("Trending Now", RowSource::Trending),
                RowConfig::new("Action Movies", RowSource::Genre { id: 28 }),
                RowConfig::new("Comedy Movies", RowSource::Genre { id: 35 }),
            ],
        }
    }
}

impl AppConfig {
    pub(crate) fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Replaces the configured API key with `key`, if one is given and not
    /// blank.
    pub(crate) fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key.trim().to_string();
        }
        self
    }

    pub(crate) fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Loads the configuration file, falling back to defaults if it can not be
/// read, then applies environment overrides.
pub fn load_config() -> AppConfig {
    let config = confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {:#}", e);
        AppConfig::default()
    });

    config.with_api_key_override(env::var(API_KEY_VAR).ok())
}

/// Path of the log file, kept beside the configuration file.
pub(crate) fn log_file_path() -> Result<PathBuf, confy::ConfyError> {
    let config_path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(config_path.with_file_name(format!("{CONFIG_NAME}.log")))
}

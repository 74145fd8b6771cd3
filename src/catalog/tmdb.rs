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

//! TMDB v3 REST client.
//!
//! Requests are blocking and are expected to run on a worker thread, never on
//! the UI thread.

use reqwest::blocking::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    catalog::{CatalogClient, CatalogError},
    config::AppConfig,
    model::{CatalogItem, MediaKind, MovieDetail, SearchQuery},
};

/// One page of a listing endpoint. A missing or null `results` field is read
/// as an empty page.
#[derive(Debug, Default, Deserialize)]
struct Page {
    #[serde(default)]
    results: Option<Vec<CatalogItem>>,
}

impl Page {
    fn into_items(self) -> Vec<CatalogItem> {
        self.results.unwrap_or_default()
    }
}

pub(crate) struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: String,
    include_adult: bool,
}

impl TmdbClient {
    pub(crate) fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        if !config.has_api_key() {
            return Err(CatalogError::MissingApiKey);
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            include_adult: config.include_adult,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T, CatalogError> {
        debug!(path, "catalog request");

        let response = self
            .http
            .get(self.endpoint(path))
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .query(params)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.json()?)
    }

    fn listing(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<CatalogItem>, CatalogError> {
        self.get::<Page>(path, params).map(Page::into_items)
    }
}

fn details_path(id: i64, kind: MediaKind) -> String {
    match kind {
        MediaKind::Tv => format!("tv/{id}"),
        _ => format!("movie/{id}"),
    }
}

impl CatalogClient for TmdbClient {
    fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogItem>, CatalogError> {
        self.listing(
            "search/multi",
            &[
                ("include_adult", self.include_adult.to_string()),
                ("query", query.as_str().to_string()),
            ],
        )
    }

    fn details(&self, id: i64, kind: MediaKind) -> Result<MovieDetail, CatalogError> {
        self.get(&details_path(id, kind), &[("append_to_response", "videos".to_string())])
    }

    fn now_playing(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        self.listing("movie/now_playing", &[])
    }

    fn trending(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        self.listing("trending/all/week", &[])
    }

    fn by_genre(&self, genre_id: u32) -> Result<Vec<CatalogItem>, CatalogError> {
        self.listing("discover/movie", &[("with_genres", genre_id.to_string())])
    }
}

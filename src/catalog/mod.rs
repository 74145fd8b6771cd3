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

//! Remote movie catalog access.
//!
//! The [`CatalogClient`] trait is the only way the rest of the application
//! talks to the catalog. The production implementation is [`TmdbClient`],
//! created once at startup and shared with the command worker.

mod tmdb;

pub(crate) use tmdb::TmdbClient;

use thiserror::Error;

use crate::model::{CatalogItem, MediaKind, MovieDetail, SearchQuery};

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("no catalog API key configured")]
    MissingApiKey,

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned HTTP {status} for {path}")]
    Status { status: u16, path: String },
}

pub(crate) trait CatalogClient: Send + Sync {
    /// Searches movies, shows and people matching `query`.
    fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Fetches the full record of a movie or show, including its videos.
    fn details(&self, id: i64, kind: MediaKind) -> Result<MovieDetail, CatalogError>;

    fn now_playing(&self) -> Result<Vec<CatalogItem>, CatalogError>;

    fn trending(&self) -> Result<Vec<CatalogItem>, CatalogError>;

    fn by_genre(&self, genre_id: u32) -> Result<Vec<CatalogItem>, CatalogError>;
}

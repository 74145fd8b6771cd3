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

//! Catalog entries.
//!
//! A [`CatalogItem`] is one entry of a catalog listing, as returned by the
//! multi-search, trending, now playing and genre endpoints.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MediaKind {
    // Listings that only ever contain movies omit `media_type`.
    #[default]
    Movie,
    Tv,
    Person,
    /// Any kind this client does not know about.
    #[serde(other)]
    Other,
}

impl MediaKind {
    pub(crate) fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Tv => "TV",
            MediaKind::Person => "Person",
            MediaKind::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct CatalogItem {
    pub(crate) id: i64,
    #[serde(rename = "backdrop_path", default)]
    pub(crate) image_path: Option<String>,
    #[serde(rename = "media_type", default)]
    pub(crate) kind: MediaKind,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) original_name: Option<String>,
    #[serde(default)]
    pub(crate) overview: Option<String>,
    #[serde(default)]
    pub(crate) release_date: Option<String>,
    #[serde(default)]
    pub(crate) first_air_date: Option<String>,
    #[serde(default)]
    pub(crate) vote_average: Option<f64>,
}

impl CatalogItem {
    /// Title to show for this entry: movies carry a `title`, shows a `name`.
    pub(crate) fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .or(self.original_name.as_deref())
            .unwrap_or("Untitled")
    }

    pub(crate) fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .and_then(|date| date.get(..4))
    }

    /// An entry can be shown only if it has an image and is not a person.
    pub(crate) fn is_displayable(&self) -> bool {
        self.image_path.is_some() && self.kind != MediaKind::Person
    }
}

/// Keeps the displayable entries of a listing, in the order given.
pub(crate) fn displayable(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.into_iter().filter(CatalogItem::is_displayable).collect()
}

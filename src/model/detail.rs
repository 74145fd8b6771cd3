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

//! Full movie or show record, as shown by the banner and the detail modal.

use serde::Deserialize;

const TRAILER_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Genre {
    pub(crate) name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Video {
    pub(crate) key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct VideoList {
    #[serde(default)]
    pub(crate) results: Option<Vec<Video>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct MovieDetail {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) backdrop_path: Option<String>,
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
    #[serde(default)]
    pub(crate) runtime: Option<u32>,
    #[serde(default)]
    pub(crate) genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub(crate) videos: Option<VideoList>,
}

impl MovieDetail {
    pub(crate) fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .or(self.original_name.as_deref())
            .unwrap_or("Untitled")
    }

    pub(crate) fn release(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
            .filter(|date| !date.is_empty())
    }

    /// Link to the first video attached to the record, if any.
    pub(crate) fn trailer_url(&self) -> Option<String> {
        let video = self.videos.as_ref()?.results.as_ref()?.first()?;
        Some(format!("{TRAILER_URL}{}", video.key))
    }

    pub(crate) fn genre_names(&self) -> String {
        self.genres
            .iter()
            .flatten()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

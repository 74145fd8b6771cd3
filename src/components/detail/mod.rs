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

//! Detail modal for a single catalog entry.
//!
//! The modal is built from the listing entry the user picked. Once the full
//! detail record arrives it takes precedence field by field; until then, or
//! if the lookup fails, the listing's own summary is shown.

mod render;

use crate::{
    model::{CatalogItem, MovieDetail},
    util::format::{format_rating, format_runtime, image_url, or_not_available},
};

const NO_OVERVIEW: &str = "No overview available.";

pub(crate) struct DetailModal<'a> {
    item: &'a CatalogItem,
    detail: Option<&'a MovieDetail>,
    backdrop_base_url: &'a str,
}

impl<'a> DetailModal<'a> {
    pub(crate) fn new(item: &'a CatalogItem, detail: Option<&'a MovieDetail>, backdrop_base_url: &'a str) -> Self {
        Self {
            item,
            detail,
            backdrop_base_url,
        }
    }

    fn title(&self) -> &str {
        match self.detail {
            Some(detail) => detail.display_title(),
            None => self.item.display_title(),
        }
    }

    fn rating(&self) -> String {
        let vote_average = self.detail.and_then(|d| d.vote_average).or(self.item.vote_average);
        format_rating(vote_average)
    }

    fn release(&self) -> &str {
        let release = self.detail.and_then(MovieDetail::release).or_else(|| {
            self.item
                .release_date
                .as_deref()
                .or(self.item.first_air_date.as_deref())
        });
        or_not_available(release)
    }

    fn overview(&self) -> &str {
        self.detail
            .and_then(|d| d.overview.as_deref())
            .or(self.item.overview.as_deref())
            .filter(|o| !o.trim().is_empty())
            .unwrap_or(NO_OVERVIEW)
    }

    fn backdrop_url(&self) -> Option<String> {
        let path = self
            .detail
            .and_then(|d| d.backdrop_path.as_deref())
            .or(self.item.image_path.as_deref())?;
        Some(image_url(self.backdrop_base_url, path))
    }

    fn genres(&self) -> Option<String> {
        self.detail.map(MovieDetail::genre_names).filter(|g| !g.is_empty())
    }

    fn runtime(&self) -> Option<String> {
        self.detail.filter(|d| d.runtime.is_some()).map(|d| format_runtime(d.runtime))
    }

    fn trailer_url(&self) -> Option<String> {
        self.detail.and_then(MovieDetail::trailer_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actions::commands::tests::movie,
        model::detail::{Genre, Video, VideoList},
    };

    const BACKDROPS: &str = "https://image.tmdb.org/t/p/original";

    fn detail(id: i64) -> MovieDetail {
        MovieDetail {
            id,
            backdrop_path: Some("/full.jpg".to_string()),
            title: Some("Full Title".to_string()),
            overview: Some("From the detail record.".to_string()),
            release_date: Some("2008-07-16".to_string()),
            vote_average: Some(8.52),
            runtime: Some(152),
            genres: Some(vec![
                Genre { name: "Drama".to_string() },
                Genre { name: "Action".to_string() },
            ]),
            videos: Some(VideoList {
                results: Some(vec![Video { key: "EXeTwQWrcwY".to_string() }]),
            }),
            ..MovieDetail::default()
        }
    }

    #[test]
    fn summary_is_shown_until_detail_arrives() {
        let mut item = movie(1);
        item.overview = Some("From the listing.".to_string());
        item.vote_average = Some(7.0);

        let modal = DetailModal::new(&item, None, BACKDROPS);

        assert_eq!(modal.title(), item.display_title());
        assert_eq!(modal.overview(), "From the listing.");
        assert_eq!(modal.rating(), "7.0");
        assert_eq!(modal.genres(), None);
        assert_eq!(modal.runtime(), None);
        assert_eq!(modal.trailer_url(), None);
    }

    #[test]
    fn detail_takes_precedence() {
        let item = movie(1);
        let detail = detail(1);

        let modal = DetailModal::new(&item, Some(&detail), BACKDROPS);

        assert_eq!(modal.title(), "Full Title");
        assert_eq!(modal.overview(), "From the detail record.");
        assert_eq!(modal.rating(), "8.5");
        assert_eq!(modal.release(), "2008-07-16");
        assert_eq!(modal.genres().as_deref(), Some("Drama, Action"));
        assert_eq!(modal.runtime().as_deref(), Some("2h 32m"));
        assert_eq!(modal.backdrop_url().as_deref(), Some("https://image.tmdb.org/t/p/original/full.jpg"));
        assert_eq!(
            modal.trailer_url().as_deref(),
            Some("https://www.youtube.com/watch?v=EXeTwQWrcwY")
        );
    }

    #[test]
    fn missing_overview_has_placeholder() {
        let mut item = movie(1);
        item.overview = Some("   ".to_string());

        let modal = DetailModal::new(&item, None, BACKDROPS);

        assert_eq!(modal.overview(), NO_OVERVIEW);
    }
}

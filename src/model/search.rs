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

//! Media search management.
//!
//! This module provides the state behind the search view: which request is
//! current, and what the view should display.
//!
//! Every lookup is tagged with a [`RequestToken`] minted by
//! [`SearchPipeline::begin`]. Lookups run on background workers and may
//! complete in any order, so a completion is applied only if its token is
//! still the current one and the pipeline is still waiting for it. Anything
//! else is a stale response and is dropped.

use tracing::{debug, warn};

use crate::{
    catalog::CatalogError,
    model::{CatalogItem, SearchQuery, displayable},
};

/// Identifies one lookup. Tokens only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct RequestToken(u64);

/// What the search view displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum RenderState {
    /// No query yet, or the query was cleared.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The last lookup settled with at least one displayable entry.
    Results(Vec<CatalogItem>),
    /// The last lookup settled with nothing to display, or failed.
    Empty(SearchQuery),
}

#[derive(Debug, Default)]
pub(crate) struct SearchPipeline {
    last_token: u64,
    in_flight: Option<(RequestToken, SearchQuery)>,
    state: RenderState,
}

impl SearchPipeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> &RenderState {
        &self.state
    }

    pub(crate) fn results(&self) -> &[CatalogItem] {
        match &self.state {
            RenderState::Results(items) => items,
            _ => &[],
        }
    }

    /// Starts a lookup for `query`, superseding any lookup still in flight.
    ///
    /// The caller must issue the fetch with the returned token before handing
    /// control back to the event loop.
    pub(crate) fn begin(&mut self, query: SearchQuery) -> RequestToken {
        self.last_token += 1;
        let token = RequestToken(self.last_token);

        debug!(?token, query = %query, "search started");

        self.in_flight = Some((token, query));
        self.state = RenderState::Loading;

        token
    }

    /// Applies the outcome of the lookup identified by `token`.
    ///
    /// Returns `false` when the outcome is stale and was discarded.
    pub(crate) fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<CatalogItem>, CatalogError>,
    ) -> bool {
        if self.state != RenderState::Loading {
            debug!(?token, "search response ignored, no lookup pending");
            return false;
        }

        let query = match self.in_flight.take() {
            Some((current, query)) if current == token => query,
            other => {
                debug!(?token, current = ?other.as_ref().map(|(t, _)| *t), "stale search response discarded");
                self.in_flight = other;
                return false;
            }
        };

        self.state = match outcome {
            Ok(items) => {
                let items = displayable(items);
                if items.is_empty() {
                    RenderState::Empty(query)
                } else {
                    RenderState::Results(items)
                }
            }
            Err(e) => {
                warn!(query = %query, "search failed: {:#}", e);
                RenderState::Empty(query)
            }
        };

        true
    }

    /// Returns to [`RenderState::Idle`]. A lookup still in flight will be
    /// discarded when it completes.
    pub(crate) fn clear(&mut self) {
        self.in_flight = None;
        self.state = RenderState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaKind;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::normalize(text).unwrap()
    }

    fn movie(id: i64, title: &str) -> CatalogItem {
        CatalogItem {
            id,
            image_path: Some(format!("/{id}.jpg")),
            title: Some(title.to_string()),
            ..CatalogItem::default()
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(SearchPipeline::new().state(), &RenderState::Idle);
    }

    #[test]
    fn tokens_increase() {
        let mut pipeline = SearchPipeline::new();

        let first = pipeline.begin(query("a"));
        let second = pipeline.begin(query("ab"));

        assert!(second > first);
        assert_eq!(pipeline.state(), &RenderState::Loading);
    }

    #[test]
    fn matching_response_with_items_shows_results() {
        let mut pipeline = SearchPipeline::new();
        let token = pipeline.begin(query("batman"));

        assert!(pipeline.complete(token, Ok(vec![movie(1, "Batman")])));

        assert_eq!(pipeline.state(), &RenderState::Results(vec![movie(1, "Batman")]));
        assert_eq!(pipeline.results().len(), 1);
    }

    #[test]
    fn only_undisplayable_items_settle_empty() {
        let mut pipeline = SearchPipeline::new();
        let token = pipeline.begin(query("batman"));

        let person = CatalogItem {
            kind: MediaKind::Person,
            ..movie(2, "Adam West")
        };
        let no_image = CatalogItem {
            image_path: None,
            ..movie(1, "Batman")
        };
        pipeline.complete(token, Ok(vec![no_image, person]));

        assert_eq!(pipeline.state(), &RenderState::Empty(query("batman")));
    }

    #[test]
    fn failure_settles_empty_with_query() {
        let mut pipeline = SearchPipeline::new();
        let token = pipeline.begin(query("batman"));

        let error = CatalogError::Status {
            status: 500,
            path: "search/multi".to_string(),
        };
        assert!(pipeline.complete(token, Err(error)));

        assert_eq!(pipeline.state(), &RenderState::Empty(query("batman")));
    }

    #[test]
    fn slow_earlier_response_does_not_overwrite_later_one() {
        let mut pipeline = SearchPipeline::new();

        let t1 = pipeline.begin(query("a"));
        let t2 = pipeline.begin(query("ab"));

        // "ab" resolves first, "a" resolves afterwards.
        assert!(pipeline.complete(t2, Ok(vec![movie(2, "Abyss")])));
        assert!(!pipeline.complete(t1, Ok(vec![movie(1, "Alien")])));

        assert_eq!(pipeline.state(), &RenderState::Results(vec![movie(2, "Abyss")]));
    }

    #[test]
    fn superseded_response_is_dropped_while_newer_is_pending() {
        let mut pipeline = SearchPipeline::new();

        let t1 = pipeline.begin(query("a"));
        let t2 = pipeline.begin(query("ab"));

        assert!(!pipeline.complete(t1, Ok(vec![movie(1, "Alien")])));
        assert_eq!(pipeline.state(), &RenderState::Loading);

        assert!(pipeline.complete(t2, Ok(vec![])));
        assert_eq!(pipeline.state(), &RenderState::Empty(query("ab")));
    }

    #[test]
    fn clearing_discards_in_flight_response() {
        let mut pipeline = SearchPipeline::new();
        let token = pipeline.begin(query("batman"));

        pipeline.clear();

        assert!(!pipeline.complete(token, Ok(vec![movie(1, "Batman")])));
        assert_eq!(pipeline.state(), &RenderState::Idle);
    }

    #[test]
    fn response_after_settling_is_ignored() {
        let mut pipeline = SearchPipeline::new();
        let token = pipeline.begin(query("batman"));

        assert!(pipeline.complete(token, Ok(vec![movie(1, "Batman")])));
        assert!(!pipeline.complete(token, Ok(vec![])));

        assert_eq!(pipeline.results().len(), 1);
    }
}

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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the movie,
//! show and person entries returned by the remote catalog, together with the
//! state that drives the search and detail views.
//!
//! # Organization
//!
//! * [`catalog`]: Catalog entries and the displayable filter.
//! * [`detail`]: The full record behind a single movie or show.
//! * [`query`]: Normalisation of raw search text.
//! * [`search`]: Request tokens and the search render state machine.
//! * [`selection`]: The item currently open in the detail modal.

pub(crate) mod catalog;
pub(crate) mod detail;
pub(crate) mod query;
pub(crate) mod search;
pub(crate) mod selection;

pub(crate) use catalog::{CatalogItem, MediaKind, displayable};
pub(crate) use detail::MovieDetail;
pub(crate) use query::SearchQuery;

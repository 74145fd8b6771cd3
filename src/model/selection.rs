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

//! Detail modal state.
//!
//! A [`Selection`] refers to the chosen entry by id only. The entry itself is
//! looked up in the listing that is currently displayed, so a selection never
//! outlives the entry it points at.

use crate::model::{CatalogItem, MediaKind, MovieDetail};

#[derive(Debug, Default)]
pub(crate) struct Selection {
    selected: Option<(i64, MediaKind)>,
    detail: Option<MovieDetail>,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for `item`.
    pub(crate) fn select(&mut self, item: &CatalogItem) {
        self.selected = Some((item.id, item.kind));
        self.detail = None;
    }

    /// Closes the modal.
    pub(crate) fn close(&mut self) {
        self.selected = None;
        self.detail = None;
    }

    pub(crate) fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub(crate) fn id(&self) -> Option<i64> {
        self.selected.map(|(id, _)| id)
    }

    /// The selected entry, if it is still part of `items`.
    pub(crate) fn resolve<'a>(&self, items: &'a [CatalogItem]) -> Option<&'a CatalogItem> {
        let (id, kind) = self.selected?;
        items.iter().find(|item| item.id == id && item.kind == kind)
    }

    /// Closes the modal if the selected entry is no longer part of `items`.
    pub(crate) fn retain_within(&mut self, items: &[CatalogItem]) {
        if self.is_open() && self.resolve(items).is_none() {
            self.close();
        }
    }

    /// Attaches a fetched detail record, if it belongs to the current
    /// selection. Returns `false` if it does not.
    pub(crate) fn set_detail(&mut self, id: i64, detail: MovieDetail) -> bool {
        if self.id() != Some(id) {
            return false;
        }

        self.detail = Some(detail);
        true
    }

    pub(crate) fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }
}

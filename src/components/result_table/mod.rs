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

//! Interactive result table widget.
//!
//! The table borrows its entries and selection state from the owning view for
//! the duration of one event or one frame, so the view keeps sole ownership
//! of both.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::CatalogItem;

/// What the owning view should do after the table consumed a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResultTableAction {
    Navigated,
    Activate(usize),
}

pub(crate) struct ResultTable<'a> {
    items: &'a [CatalogItem],
    table_state: &'a mut TableState,
    image_base_url: &'a str,
}

impl<'a> ResultTable<'a> {
    pub(crate) fn new(items: &'a [CatalogItem], table_state: &'a mut TableState, image_base_url: &'a str) -> Self {
        Self {
            items,
            table_state,
            image_base_url,
        }
    }

    /// The highlighted row, if it refers to an entry.
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.table_state.selected().filter(|i| *i < self.items.len())
    }

    fn goto_next(&mut self) {
        let len = self.items.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.items.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::actions::commands::tests::movie;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn navigation_wraps_around() {
        let items = vec![movie(1), movie(2), movie(3)];
        let mut state = TableState::default();
        let mut table = ResultTable::new(&items, &mut state, "");

        assert_eq!(table.process_event(&key(KeyCode::Down)), Some(ResultTableAction::Navigated));
        assert_eq!(table.selected_index(), Some(0));

        table.process_event(&key(KeyCode::Char('k')));
        assert_eq!(table.selected_index(), Some(2));

        table.process_event(&key(KeyCode::Char('j')));
        assert_eq!(table.selected_index(), Some(0));

        table.process_event(&key(KeyCode::Char('G')));
        assert_eq!(table.selected_index(), Some(2));

        table.process_event(&key(KeyCode::Char('g')));
        assert_eq!(table.selected_index(), Some(0));
    }

    #[test]
    fn enter_activates_highlighted_row() {
        let items = vec![movie(1), movie(2)];
        let mut state = TableState::default().with_selected(Some(1));
        let mut table = ResultTable::new(&items, &mut state, "");

        assert_eq!(table.process_event(&key(KeyCode::Enter)), Some(ResultTableAction::Activate(1)));
    }

    #[test]
    fn empty_table_ignores_keys() {
        let items: Vec<CatalogItem> = vec![];
        let mut state = TableState::default();
        let mut table = ResultTable::new(&items, &mut state, "");

        table.process_event(&key(KeyCode::Down));
        table.process_event(&key(KeyCode::Char('G')));

        assert_eq!(table.selected_index(), None);
        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn stale_highlight_is_not_a_selection() {
        let items = vec![movie(1)];
        let mut state = TableState::default().with_selected(Some(4));
        let table = ResultTable::new(&items, &mut state, "");

        assert_eq!(table.selected_index(), None);
    }
}

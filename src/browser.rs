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

//! Home view state.
//!
//! The home view shows a banner for one movie now playing and a stack of
//! rows, one per configured listing. Each row keeps its own highlighted
//! entry and the user moves between rows, then within the active row.
//! The banner and every row are fetched independently, so any of them can
//! arrive, or fail, in any order. Each reload bumps a generation number
//! carried by its requests; responses from an earlier reload are dropped.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;
use tracing::{debug, warn};

use crate::{
    actions::{commands::AppCommand, events::AppEventProcessor},
    catalog::CatalogError,
    config::{AppConfig, RowSource},
    model::{CatalogItem, MovieDetail, displayable, selection::Selection},
};

pub(crate) struct HomeRow {
    pub(crate) title: String,
    source: RowSource,
    pub(crate) items: Vec<CatalogItem>,
    pub(crate) state: ListState,
}

impl HomeRow {
    fn selected_item(&self) -> Option<&CatalogItem> {
        self.items.get(self.state.selected()?)
    }
}

pub(crate) struct HomeBrowser {
    generation: u64,
    pub(crate) banner: Option<MovieDetail>,
    pub(crate) rows: Vec<HomeRow>,
    pub(crate) active_row: usize,
    pub(crate) selection: Selection,
    pub(crate) backdrop_base_url: String,
}

impl HomeBrowser {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let rows = config
            .rows
            .iter()
            .map(|row| HomeRow {
                title: row.title.clone(),
                source: row.source.clone(),
                items: vec![],
                state: ListState::default(),
            })
            .collect();

        Self {
            generation: 0,
            banner: None,
            rows,
            active_row: 0,
            selection: Selection::new(),
            backdrop_base_url: config.backdrop_base_url.clone(),
        }
    }

    /// Requests the banner and every row, superseding any earlier reload.
    pub(crate) fn reload(&mut self, command_tx: &Sender<AppCommand>) -> Result<()> {
        self.generation += 1;
        let generation = self.generation;

        debug!(generation, rows = self.rows.len(), "reloading home view");

        command_tx.send(AppCommand::GetBanner { generation })?;
        for (index, row) in self.rows.iter().enumerate() {
            command_tx.send(AppCommand::GetRow { index, generation, source: row.source.clone() })?;
        }

        Ok(())
    }

    fn is_current(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "stale home response discarded");
            return false;
        }
        true
    }

    pub(crate) fn on_banner_ready(&mut self, generation: u64, banner: Result<Option<MovieDetail>, CatalogError>) {
        if !self.is_current(generation) {
            return;
        }

        self.banner = match banner {
            Ok(banner) => banner,
            Err(e) => {
                warn!("Failed to fetch banner: {:#}", e);
                None
            }
        };
    }

    pub(crate) fn on_row_ready(
        &mut self,
        index: usize,
        generation: u64,
        items: Result<Vec<CatalogItem>, CatalogError>,
    ) {
        if !self.is_current(generation) {
            return;
        }

        let Some(row) = self.rows.get_mut(index) else {
            warn!(index, "response for unknown row ignored");
            return;
        };

        row.items = match items {
            Ok(items) => displayable(items),
            Err(e) => {
                warn!(row = %row.title, "Failed to fetch row: {:#}", e);
                vec![]
            }
        };
        row.state.select((!row.items.is_empty()).then_some(0));

        if self.selection.is_open() && self.selected_detail_item().is_none() {
            self.selection.close();
        }
    }

    /// Attaches a detail record if the modal is showing that entry.
    pub(crate) fn on_details_ready(&mut self, id: i64, detail: MovieDetail) -> bool {
        self.selection.set_detail(id, detail)
    }

    pub(crate) fn close_detail(&mut self) {
        self.selection.close();
    }

    /// The entry the detail modal refers to, if it is still listed.
    pub(crate) fn selected_detail_item(&self) -> Option<&CatalogItem> {
        self.rows.iter().find_map(|row| self.selection.resolve(&row.items))
    }

    pub(crate) fn selected_item(&self) -> Option<&CatalogItem> {
        self.rows.get(self.active_row)?.selected_item()
    }

    pub(crate) fn next_row(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        self.active_row = if self.active_row >= len - 1 { 0 } else { self.active_row + 1 };
    }

    pub(crate) fn previous_row(&mut self) {
        let len = self.rows.len();
        if len == 0 { return; }
        self.active_row = if self.active_row == 0 { len - 1 } else { self.active_row - 1 };
    }

    pub(crate) fn next_item(&mut self) {
        if let Some(row) = self.rows.get_mut(self.active_row) {
            Self::next(&mut row.state, row.items.len());
        }
    }

    pub(crate) fn previous_item(&mut self) {
        if let Some(row) = self.rows.get_mut(self.active_row) {
            Self::previous(&mut row.state, row.items.len());
        }
    }

    fn open_selected(&mut self, command_tx: &Sender<AppCommand>) -> Result<()> {
        let Some(item) = self.rows.get(self.active_row).and_then(HomeRow::selected_item) else {
            return Ok(());
        };

        self.selection.select(item);
        command_tx.send(AppCommand::GetDetails { id: item.id, kind: item.kind })?;

        Ok(())
    }

    fn next(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        state.select(Some(i));
    }

    fn previous(state: &mut ListState, len: usize) {
        if len == 0 { return; }
        let i = match state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        state.select(Some(i));
    }
}

impl AppEventProcessor for HomeBrowser {
    fn process_event(&mut self, event: &Event, command_tx: &Sender<AppCommand>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.selection.is_open() {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                    self.selection.close();
                    Ok(true)
                }
                _ => Ok(true),
            };
        }

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next_row(),
            KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
            KeyCode::Char('l') | KeyCode::Right => self.next_item(),
            KeyCode::Char('h') | KeyCode::Left => self.previous_item(),

            KeyCode::Enter => self.open_selected(command_tx)?,
            KeyCode::Char('r') => self.reload(command_tx)?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{actions::commands::tests::movie, model::MediaKind};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn browser() -> (HomeBrowser, Sender<AppCommand>, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (HomeBrowser::new(&AppConfig::default()), command_tx, command_rx)
    }

    fn person(id: i64) -> CatalogItem {
        CatalogItem {
            kind: MediaKind::Person,
            ..movie(id)
        }
    }

    #[test]
    fn reload_requests_banner_and_every_row() {
        let (mut home, command_tx, command_rx) = browser();

        home.reload(&command_tx).unwrap();

        let commands: Vec<AppCommand> = command_rx.try_iter().collect();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], AppCommand::GetBanner { generation: 1 }));
        assert!(matches!(commands[1], AppCommand::GetRow { index: 0, generation: 1, source: RowSource::Trending }));
        assert!(matches!(commands[2], AppCommand::GetRow { index: 1, generation: 1, source: RowSource::Genre { id: 28 } }));
        assert!(matches!(commands[3], AppCommand::GetRow { index: 2, generation: 1, source: RowSource::Genre { id: 35 } }));
    }

    #[test]
    fn rows_keep_only_displayable_items() {
        let (mut home, ..) = browser();
        let mut no_image = movie(3);
        no_image.image_path = None;

        home.on_row_ready(1, 0, Ok(vec![movie(1), person(2), no_image, movie(4)]));

        let ids: Vec<i64> = home.rows[1].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 4]);
        assert_eq!(home.rows[1].state.selected(), Some(0));
    }

    #[test]
    fn failed_row_renders_empty() {
        let (mut home, ..) = browser();

        home.on_row_ready(0, 0, Ok(vec![movie(1)]));
        home.on_row_ready(0, 0, Err(CatalogError::MissingApiKey));

        assert!(home.rows[0].items.is_empty());
        assert_eq!(home.rows[0].state.selected(), None);
    }

    #[test]
    fn responses_from_an_earlier_reload_are_dropped() {
        let (mut home, command_tx, _command_rx) = browser();

        home.reload(&command_tx).unwrap();
        home.reload(&command_tx).unwrap();

        home.on_row_ready(0, 2, Ok(vec![movie(2)]));
        home.on_row_ready(0, 1, Ok(vec![movie(1)]));
        home.on_banner_ready(1, Ok(Some(MovieDetail::default())));

        let ids: Vec<i64> = home.rows[0].items.iter().map(|i| i.id).collect();
        assert_eq!(ids, [2]);
        assert!(home.banner.is_none());
    }

    #[test]
    fn unknown_row_is_ignored() {
        let (mut home, ..) = browser();

        home.on_row_ready(9, 0, Ok(vec![movie(1)]));

        assert!(home.rows.iter().all(|row| row.items.is_empty()));
    }

    #[test]
    fn failed_banner_renders_nothing() {
        let (mut home, ..) = browser();
        home.banner = Some(MovieDetail::default());

        home.on_banner_ready(0, Err(CatalogError::MissingApiKey));

        assert!(home.banner.is_none());
    }

    #[test]
    fn navigation_moves_between_and_within_rows() {
        let (mut home, command_tx, _command_rx) = browser();
        home.on_row_ready(0, 0, Ok(vec![movie(1), movie(2)]));
        home.on_row_ready(1, 0, Ok(vec![movie(3)]));

        home.process_event(&key(KeyCode::Right), &command_tx).unwrap();
        assert_eq!(home.selected_item().map(|i| i.id), Some(2));

        home.process_event(&key(KeyCode::Char('l')), &command_tx).unwrap();
        assert_eq!(home.selected_item().map(|i| i.id), Some(1));

        home.process_event(&key(KeyCode::Down), &command_tx).unwrap();
        assert_eq!(home.active_row, 1);
        assert_eq!(home.selected_item().map(|i| i.id), Some(3));

        home.process_event(&key(KeyCode::Char('k')), &command_tx).unwrap();
        home.process_event(&key(KeyCode::Char('k')), &command_tx).unwrap();
        assert_eq!(home.active_row, 2);
        assert_eq!(home.selected_item(), None);
    }

    #[test]
    fn enter_opens_detail_and_requests_it() {
        let (mut home, command_tx, command_rx) = browser();
        home.on_row_ready(0, 0, Ok(vec![movie(1), movie(2)]));

        home.process_event(&key(KeyCode::Right), &command_tx).unwrap();
        home.process_event(&key(KeyCode::Enter), &command_tx).unwrap();

        assert_eq!(home.selected_detail_item().map(|i| i.id), Some(2));
        assert!(matches!(command_rx.try_recv(), Ok(AppCommand::GetDetails { id: 2, kind: MediaKind::Movie })));

        assert!(home.on_details_ready(2, MovieDetail::default()));
        assert!(!home.on_details_ready(1, MovieDetail::default()));

        // Keys go to the modal while it is open.
        assert!(home.process_event(&key(KeyCode::Char('x')), &command_tx).unwrap());
        assert!(home.process_event(&key(KeyCode::Esc), &command_tx).unwrap());
        assert!(!home.selection.is_open());
    }

    #[test]
    fn modal_closes_when_entry_leaves_its_row() {
        let (mut home, command_tx, _command_rx) = browser();
        home.on_row_ready(0, 0, Ok(vec![movie(1)]));
        home.process_event(&key(KeyCode::Enter), &command_tx).unwrap();

        home.on_row_ready(0, 0, Ok(vec![movie(5)]));

        assert!(!home.selection.is_open());
    }

    #[test]
    fn unhandled_keys_fall_through() {
        let (mut home, command_tx, _command_rx) = browser();

        assert!(!home.process_event(&key(KeyCode::Char('q')), &command_tx).unwrap());
        assert!(!home.process_event(&key(KeyCode::Char('2')), &command_tx).unwrap());
    }
}

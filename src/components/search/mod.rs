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

//! Search view state.
//!
//! Keystrokes edit the query input. Each edit is handed to a [`Debouncer`],
//! and only a value that has been left alone for the configured delay becomes
//! a lookup. Settled text is normalised: blank text clears the results
//! without a lookup, anything else starts a new lookup through the
//! [`SearchPipeline`], which decides whether its completion is still wanted.

mod event;
mod render;

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use ratatui::widgets::TableState;
use tui_input::Input;

use crate::{
    actions::commands::AppCommand,
    catalog::CatalogError,
    components::ResultTable,
    config::AppConfig,
    model::{
        CatalogItem, MovieDetail, SearchQuery,
        search::{RequestToken, SearchPipeline},
        selection::Selection,
    },
    util::debounce::Debouncer,
};

pub(crate) struct SearchView {
    pub(crate) input: Input,
    input_focused: bool,
    debouncer: Debouncer<String>,
    pub(crate) pipeline: SearchPipeline,
    pub(crate) table_state: TableState,
    pub(crate) selection: Selection,
    image_base_url: String,
    backdrop_base_url: String,
}

impl SearchView {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            input: Input::default(),
            input_focused: false,
            debouncer: Debouncer::new(config.search_debounce(), String::new()),
            pipeline: SearchPipeline::new(),
            table_state: TableState::default(),
            selection: Selection::new(),
            image_base_url: config.image_base_url.clone(),
            backdrop_base_url: config.backdrop_base_url.clone(),
        }
    }

    /// Whether keystrokes currently go to the query input.
    pub(crate) fn captures_text(&self) -> bool {
        self.input_focused && !self.selection.is_open()
    }

    pub(crate) fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn focus_results(&mut self) {
        self.input_focused = false;
        if self.table_state.selected().is_none() && !self.pipeline.results().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// When the pending query text is due to settle.
    pub(crate) fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Starts a lookup for the pending query text if it has settled at `now`.
    pub(crate) fn poll_debounce(&mut self, now: Instant, command_tx: &Sender<AppCommand>) -> Result<()> {
        match self.debouncer.poll(now) {
            Some(text) => self.apply_query(&text, command_tx),
            None => Ok(()),
        }
    }

    /// Replaces the query text, as if the user had typed it at `now`.
    pub(crate) fn set_text(&mut self, text: String, now: Instant, command_tx: &Sender<AppCommand>) -> Result<()> {
        self.input = Input::new(text);
        self.input_changed(now, command_tx)
    }

    fn input_changed(&mut self, now: Instant, command_tx: &Sender<AppCommand>) -> Result<()> {
        match self.debouncer.update(self.input.value().to_string(), now) {
            Some(text) => self.apply_query(&text, command_tx),
            None => Ok(()),
        }
    }

    /// Settles the pending query text without waiting for the delay.
    fn submit(&mut self, command_tx: &Sender<AppCommand>) -> Result<()> {
        match self.debouncer.flush() {
            Some(text) => self.apply_query(&text, command_tx),
            None => Ok(()),
        }
    }

    /// Reacts to settled query text.
    fn apply_query(&mut self, text: &str, command_tx: &Sender<AppCommand>) -> Result<()> {
        self.selection.close();
        self.table_state.select(None);

        match SearchQuery::normalize(text) {
            Some(query) => {
                let token = self.pipeline.begin(query.clone());
                command_tx.send(AppCommand::Search { token, query })?;
            }
            None => self.pipeline.clear(),
        }

        Ok(())
    }

    pub(crate) fn on_search_completed(&mut self, token: RequestToken, outcome: Result<Vec<CatalogItem>, CatalogError>) {
        if !self.pipeline.complete(token, outcome) {
            return;
        }

        let results = self.pipeline.results();
        self.table_state.select((!results.is_empty()).then_some(0));
        self.selection.retain_within(results);
    }

    /// Opens the detail modal for the entry at `index` and requests its
    /// detail record.
    fn open(&mut self, index: usize, command_tx: &Sender<AppCommand>) -> Result<()> {
        let Some(item) = self.pipeline.results().get(index) else {
            return Ok(());
        };

        self.selection.select(item);
        command_tx.send(AppCommand::GetDetails { id: item.id, kind: item.kind })?;

        Ok(())
    }

    /// Attaches a detail record if the modal is showing that entry.
    pub(crate) fn on_details_ready(&mut self, id: i64, detail: MovieDetail) -> bool {
        self.selection.set_detail(id, detail)
    }

    /// Drops pending query text and any open modal, and returns to idle.
    pub(crate) fn teardown(&mut self) {
        self.debouncer.cancel();
        self.selection.close();
        self.pipeline.clear();
    }

    pub(crate) fn results_widget(&mut self) -> ResultTable<'_> {
        ResultTable::new(self.pipeline.results(), &mut self.table_state, &self.image_base_url)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::mpsc::{self, Receiver},
        time::Duration,
    };

    use super::*;
    use crate::{actions::commands::tests::movie, model::search::RenderState};

    fn view() -> (SearchView, Sender<AppCommand>, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (SearchView::new(&AppConfig::default()), command_tx, command_rx)
    }

    fn settle(view: &mut SearchView, text: &str, command_tx: &Sender<AppCommand>) -> Instant {
        let t0 = Instant::now();
        view.set_text(text.to_string(), t0, command_tx).unwrap();
        view.poll_debounce(t0 + Duration::from_secs(1), command_tx).unwrap();
        t0
    }

    fn sent_search(command_rx: &Receiver<AppCommand>) -> Option<(RequestToken, SearchQuery)> {
        command_rx.try_iter().find_map(|command| match command {
            AppCommand::Search { token, query } => Some((token, query)),
            _ => None,
        })
    }

    #[test]
    fn nothing_is_sent_before_the_delay() {
        let (mut view, command_tx, command_rx) = view();
        let t0 = Instant::now();

        view.set_text("b".to_string(), t0, &command_tx).unwrap();
        view.set_text("ba".to_string(), t0 + Duration::from_millis(10), &command_tx).unwrap();
        view.set_text("bat".to_string(), t0 + Duration::from_millis(20), &command_tx).unwrap();
        view.poll_debounce(t0 + Duration::from_millis(300), &command_tx).unwrap();

        assert!(command_rx.try_recv().is_err());
        assert_eq!(view.debounce_deadline(), Some(t0 + Duration::from_millis(520)));

        view.poll_debounce(t0 + Duration::from_millis(520), &command_tx).unwrap();

        let (_, query) = sent_search(&command_rx).unwrap();
        assert_eq!(query.as_str(), "bat");
        assert_eq!(view.pipeline.state(), &RenderState::Loading);
    }

    #[test]
    fn blank_text_clears_without_lookup() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "batman", &command_tx);
        assert!(sent_search(&command_rx).is_some());

        settle(&mut view, "   ", &command_tx);

        assert!(sent_search(&command_rx).is_none());
        assert_eq!(view.pipeline.state(), &RenderState::Idle);
    }

    #[test]
    fn query_is_trimmed() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "  batman ", &command_tx);

        let (_, query) = sent_search(&command_rx).unwrap();
        assert_eq!(query.as_str(), "batman");
    }

    #[test]
    fn late_completion_is_ignored() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "bat", &command_tx);
        let (first, _) = sent_search(&command_rx).unwrap();
        settle(&mut view, "batman", &command_tx);
        let (second, _) = sent_search(&command_rx).unwrap();

        view.on_search_completed(second, Ok(vec![movie(2)]));
        view.on_search_completed(first, Ok(vec![movie(1)]));

        assert_eq!(view.pipeline.results(), &[movie(2)]);
        assert_eq!(view.table_state.selected(), Some(0));
    }

    #[test]
    fn completion_after_clear_is_ignored() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "batman", &command_tx);
        let (token, _) = sent_search(&command_rx).unwrap();
        settle(&mut view, "", &command_tx);

        view.on_search_completed(token, Ok(vec![movie(1)]));

        assert_eq!(view.pipeline.state(), &RenderState::Idle);
    }

    #[test]
    fn opening_an_entry_requests_its_detail() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "batman", &command_tx);
        let (token, _) = sent_search(&command_rx).unwrap();
        view.on_search_completed(token, Ok(vec![movie(1), movie(2)]));

        view.open(1, &command_tx).unwrap();

        assert!(view.selection.is_open());
        assert!(matches!(command_rx.try_recv(), Ok(AppCommand::GetDetails { id: 2, .. })));

        assert!(!view.on_details_ready(1, MovieDetail::default()));
        assert!(view.on_details_ready(2, MovieDetail { id: 2, ..MovieDetail::default() }));
        assert!(view.selection.detail().is_some());
    }

    #[test]
    fn new_query_closes_the_modal() {
        let (mut view, command_tx, command_rx) = view();

        settle(&mut view, "batman", &command_tx);
        let (token, _) = sent_search(&command_rx).unwrap();
        view.on_search_completed(token, Ok(vec![movie(1)]));
        view.open(0, &command_tx).unwrap();

        settle(&mut view, "superman", &command_tx);

        assert!(!view.selection.is_open());
    }

    #[test]
    fn teardown_drops_pending_text() {
        let (mut view, command_tx, command_rx) = view();
        let t0 = Instant::now();

        view.set_text("batman".to_string(), t0, &command_tx).unwrap();
        view.teardown();
        view.poll_debounce(t0 + Duration::from_secs(1), &command_tx).unwrap();

        assert!(command_rx.try_recv().is_err());
        assert_eq!(view.pipeline.state(), &RenderState::Idle);
    }
}

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

//! Event routing for the search view.
//!
//! While the detail modal is open it takes every key. Otherwise keys go to
//! the query input when it has focus, and to the result table when it does
//! not.

use std::{sync::mpsc::Sender, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::{commands::AppCommand, events::AppEventProcessor},
    components::{ResultTableAction, SearchView},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: &Event, command_tx: &Sender<AppCommand>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
            return Ok(false);
        }

        if self.selection.is_open() {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q')) {
                self.selection.close();
            }
            return Ok(true);
        }

        if self.input_focused {
            match key_event.code {
                KeyCode::Enter => {
                    self.submit(command_tx)?;
                    self.focus_results();
                }
                KeyCode::Esc | KeyCode::Down | KeyCode::Tab => self.focus_results(),
                _ => {
                    if self.input.handle_event(event).is_some() {
                        self.input_changed(Instant::now(), command_tx)?;
                    }
                }
            }
            return Ok(true);
        }

        if matches!(key_event.code, KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab) {
            self.focus_input();
            return Ok(true);
        }

        match self.results_widget().process_event(event) {
            Some(ResultTableAction::Activate(index)) => {
                self.open(index, command_tx)?;
                Ok(true)
            }
            Some(ResultTableAction::Navigated) => Ok(true),
            None => Ok(false),
        }
    }
}

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

//! Command-line input logic and state management.
//!
//! Pressing `:` activates the command line. Keys then edit its text until
//! `Enter` runs the command or `Esc` abandons it. Commands:
//!
//! * `q`: quit.
//! * `home`, `1`: show the home view.
//! * `search [text]`, `2`: show the search view, optionally replacing the
//!   query text.
//! * `reload`: fetch the home banner and rows again.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::{debug, warn};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, actions::commands::AppCommand};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles `event`, returning `true` if the command line consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, command_tx: &Sender<AppCommand>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => self.deactivate(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if let Err(e) = self.run_command(&buffer, command_tx) {
                    warn!("Failed to run command '{}': {:#}", buffer, e);
                }
                self.deactivate();
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.input.reset();
    }

    fn run_command(&self, buffer: &str, command_tx: &Sender<AppCommand>) -> Result<()> {
        match parse_command(buffer) {
            Some(command) => {
                debug!(?command, "running command");
                command_tx.send(command)?;
            }
            None if buffer.is_empty() => {}
            None => warn!("Unknown command: {}", buffer),
        }

        Ok(())
    }
}

fn parse_command(buffer: &str) -> Option<AppCommand> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        ["q"] => AppCommand::ExitApplication,

        ["home"] | ["1"] => AppCommand::SetMainView(MainView::Home),

        ["search"] | ["2"] => AppCommand::SetMainView(MainView::Search),
        ["search", text_parts @ ..] => AppCommand::SetSearchText(text_parts.join(" ")),

        ["reload"] => AppCommand::ReloadHome,

        _ => return None,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_known_commands() {
        assert!(matches!(parse_command("q"), Some(AppCommand::ExitApplication)));
        assert!(matches!(parse_command("home"), Some(AppCommand::SetMainView(MainView::Home))));
        assert!(matches!(parse_command("1"), Some(AppCommand::SetMainView(MainView::Home))));
        assert!(matches!(parse_command("2"), Some(AppCommand::SetMainView(MainView::Search))));
        assert!(matches!(parse_command("search"), Some(AppCommand::SetMainView(MainView::Search))));
        assert!(matches!(parse_command("reload"), Some(AppCommand::ReloadHome)));
    }

    #[test]
    fn search_text_is_rejoined() {
        let Some(AppCommand::SetSearchText(text)) = parse_command("search  the   dark knight") else {
            panic!("expected search text");
        };
        assert_eq!(text, "the dark knight");
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse_command("").is_none());
        assert!(parse_command("play").is_none());
        assert!(parse_command("q now").is_none());
    }

    #[test]
    fn colon_activates_and_enter_runs() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('r')), &command_tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &command_tx));
        assert!(commander.active());

        for c in "reload".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &command_tx));
        }
        assert!(commander.handle_event(&key(KeyCode::Enter), &command_tx));

        assert!(matches!(command_rx.try_recv(), Ok(AppCommand::ReloadHome)));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn escape_abandons_the_command() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &command_tx);
        commander.handle_event(&key(KeyCode::Char('q')), &command_tx);
        commander.handle_event(&key(KeyCode::Esc), &command_tx);

        assert!(command_rx.try_recv().is_err());
        assert!(!commander.active());
    }
}

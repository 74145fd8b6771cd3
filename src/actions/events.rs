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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog responses), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and sends commands to the background worker.
//! 3. **Settle**: Pending debounced search text is promoted once due. The
//!    loop waits on the channel no longer than the debounce deadline, so the
//!    search fires on time without a timer thread.
//! 4. **Render**: After each pass, the UI is re-drawn using the `ratatui`
//!    terminal.
//!
//! All application state is owned and mutated by this loop only.

use std::{
    io::Stdout,
    sync::mpsc::{RecvTimeoutError, Sender},
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, error, info, warn};

use crate::{
    App, MainView,
    actions::commands::AppCommand,
    catalog::CatalogError,
    model::{CatalogItem, MovieDetail, search::RequestToken},
    render::draw,
};

/// Longest wait between redraws when nothing is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),
    SetSearchText(String),
    ReloadHome,

    SearchCompleted {
        token: RequestToken,
        outcome: Result<Vec<CatalogItem>, CatalogError>,
    },
    DetailsReady {
        id: i64,
        detail: Result<MovieDetail, CatalogError>,
    },
    BannerReady {
        generation: u64,
        banner: Result<Option<MovieDetail>, CatalogError>,
    },
    RowReady {
        index: usize,
        generation: u64,
        items: Result<Vec<CatalogItem>, CatalogError>,
    },

    ExitApplication,

    Error(String),
}

/// Implemented by views that consume keyboard input.
pub(crate) trait AppEventProcessor {
    /// Handles `event`, returning `false` if the view did not consume it.
    fn process_event(&mut self, event: &Event, command_tx: &Sender<AppCommand>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    loop {
        let timeout = app
            .search_view
            .debounce_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_TICK);

        match app.event_rx.recv_timeout(timeout) {
            Ok(AppEvent::ExitApplication) => break,
            Ok(event) => handle_event(app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        app.search_view.poll_debounce(Instant::now(), &app.command_tx)?;

        // Render after every pass
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SetMainView(main_view) => app.set_main_view(main_view),
        AppEvent::SetSearchText(text) => {
            app.set_main_view(MainView::Search);
            app.search_view.set_text(text, Instant::now(), &app.command_tx)?;
        }
        AppEvent::ReloadHome => app.home_view.reload(&app.command_tx)?,

        AppEvent::SearchCompleted { token, outcome } => app.search_view.on_search_completed(token, outcome),
        AppEvent::DetailsReady { id, detail } => {
            // Both views may have the same entry open.
            match detail {
                Ok(detail) => {
                    let shown = app.search_view.on_details_ready(id, detail.clone());
                    let shown = app.home_view.on_details_ready(id, detail) || shown;
                    if !shown {
                        debug!(id, "Detail record arrived after its modal closed");
                    }
                }
                Err(e) => warn!(id, "Failed to fetch details: {:#}", e),
            }
        }
        AppEvent::BannerReady { generation, banner } => app.home_view.on_banner_ready(generation, banner),
        AppEvent::RowReady { index, generation, items } => app.home_view.on_row_ready(index, generation, items),

        AppEvent::Error(message) => error!("{}", message),

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Keys go first to the command line, then to the active view, and finally to
/// the global bindings if the view did not consume them.
///
/// # Errors
///
/// Returns an error if a command fails to send to the background worker.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    let captures_text = app.main_view == MainView::Search && app.search_view.captures_text();
    if !captures_text && app.commander.handle_event(&event, &app.command_tx) {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Home => app.home_view.process_event(&event, &app.command_tx)?,
        MainView::Search => app.search_view.process_event(&event, &app.command_tx)?,
    };

    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
            info!("exit requested");
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('1'), _) => app.set_main_view(MainView::Home),
        (KeyCode::Char('2'), _) => app.set_main_view(MainView::Search),
        (KeyCode::Char('/'), _) => {
            app.set_main_view(MainView::Search);
            app.search_view.focus_input();
        }

        _ => {}
    }

    Ok(())
}

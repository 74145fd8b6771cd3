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

//! # CineStream TUI.
//!
//! A terminal-based movie and TV show browser backed by a remote catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background request layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all application state, manages the terminal
//!   lifecycle and renders the UI.
//! * **Background Workers** run the blocking catalog requests and report
//!   back with events.
//! * **Event Loops** capture user input and debounce timers to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod browser;
mod catalog;
mod commander;
mod components;
mod config;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Instant,
};
use tracing::info;

use crate::{
    actions::{
        commands::{self, AppCommand},
        events::{AppEvent, process_events},
    },
    browser::HomeBrowser,
    catalog::{CatalogClient, TmdbClient},
    commander::Commander,
    components::SearchView,
    config::AppConfig,
    theme::Theme,
};

/// Browse and search movies and TV shows from the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Initial search text; opens the search view.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Home,
    Search,
}

/// Application state.
struct App {
    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub search_view: SearchView,
    pub home_view: HomeBrowser,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: &AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            main_view: MainView::Home,
            event_tx,
            event_rx,
            command_tx,
            search_view: SearchView::new(config),
            home_view: HomeBrowser::new(config),
            commander: Commander::new(),
        }
    }

    pub fn set_main_view(&mut self, main_view: MainView) {
        self.main_view = main_view;
        if main_view == MainView::Search {
            self.search_view.focus_input();
        }
    }

    /// Cancels pending search work and resets the views.
    fn teardown(&mut self) {
        self.search_view.teardown();
        self.home_view.close_detail();
    }
}

/// The entry point of the application.
///
/// Loads the configuration, builds the catalog client, sets up the
/// communication channels, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init().context("Failed to initialise logging")?;

    let config = config::load_config();
    if !config.has_api_key() {
        bail!("No catalog API key configured: set TMDB_API_KEY or api_key in the configuration file");
    }

    let client: Arc<dyn CatalogClient> =
        Arc::new(TmdbClient::new(&config).context("Failed to create catalog client")?);

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(&config, command_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, client, command_rx, cli.query);
    app.teardown();
    restore_terminal(&mut terminal);

    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    util::term::set_terminal_bg(app.theme.background_colour).context("Failed to set terminal background")?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort and
/// does not return a result, as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A command worker to process asynchronous [`AppCommand`]s.
/// * An input thread to poll for system keyboard events.
///
/// It then requests the home screen content, seeds the search text if one was
/// given, and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: Arc<dyn CatalogClient>,
    command_rx: Receiver<AppCommand>,
    initial_query: Option<String>,
) -> Result<()> {
    // Spawn a background worker to process application commands asynchronously.
    let command_event_tx = app.event_tx.clone();
    commands::spawn_command_worker(client, command_rx, command_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });

    // Initial trigger to populate the home screen from the catalog
    app.home_view.reload(&app.command_tx)?;

    if let Some(text) = initial_query {
        app.set_main_view(MainView::Search);
        app.search_view.set_text(text, Instant::now(), &app.command_tx)?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

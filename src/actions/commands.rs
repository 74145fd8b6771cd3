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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to keep blocking catalog
//! requests off the main UI thread. A dispatcher thread receives
//! [`AppCommand`]s and runs each catalog request on a thread of its own, so a
//! slow lookup never holds up the ones issued after it. Results are sent back
//! to the application as [`AppEvent`]s, errors included: the worker never
//! decides what a failure means for the UI.

use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

use anyhow::Result;
use rand::{rng, seq::IndexedRandom};
use tracing::{debug, error};

use crate::{
    MainView,
    actions::events::AppEvent,
    catalog::{CatalogClient, CatalogError},
    config::RowSource,
    model::{MediaKind, MovieDetail, SearchQuery, search::RequestToken},
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    SetMainView(MainView),
    SetSearchText(String),
    ReloadHome,
    ExitApplication,

    Search { token: RequestToken, query: SearchQuery },
    GetDetails { id: i64, kind: MediaKind },
    GetBanner { generation: u64 },
    GetRow { index: usize, generation: u64, source: RowSource },
}

impl AppCommand {
    fn is_remote(&self) -> bool {
        matches!(
            self,
            AppCommand::Search { .. }
                | AppCommand::GetDetails { .. }
                | AppCommand::GetBanner { .. }
                | AppCommand::GetRow { .. }
        )
    }
}

/// Spawns the background thread that processes application commands.
///
/// # Arguments
///
/// * `client` - The catalog client shared by all requests.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    client: Arc<dyn CatalogClient>,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            if command.is_remote() {
                let client = Arc::clone(&client);
                let event_tx = event_tx.clone();
                thread::spawn(move || run_command(client.as_ref(), command, &event_tx));
            } else {
                run_command(client.as_ref(), command, &event_tx);
            }
        }

        debug!("command channel closed, worker exiting");
    });
}

fn run_command(client: &dyn CatalogClient, command: AppCommand, event_tx: &Sender<AppEvent>) {
    if let Err(e) = handle_command(client, command, event_tx) {
        error!("Command failed: {:#}", e);
        let _ = event_tx.send(AppEvent::Error(e.to_string()));
    }
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(
    client: &dyn CatalogClient,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::SetMainView(main_view) => event_tx.send(AppEvent::SetMainView(main_view))?,
        AppCommand::SetSearchText(text) => event_tx.send(AppEvent::SetSearchText(text))?,
        AppCommand::ReloadHome => event_tx.send(AppEvent::ReloadHome)?,
        AppCommand::ExitApplication => event_tx.send(AppEvent::ExitApplication)?,

        AppCommand::Search { token, query } => {
            let outcome = client.search(&query);
            event_tx.send(AppEvent::SearchCompleted { token, outcome })?;
        }
        AppCommand::GetDetails { id, kind } => {
            let detail = client.details(id, kind);
            event_tx.send(AppEvent::DetailsReady { id, detail })?;
        }
        AppCommand::GetBanner { generation } => {
            let banner = fetch_banner(client);
            event_tx.send(AppEvent::BannerReady { generation, banner })?;
        }
        AppCommand::GetRow { index, generation, source } => {
            let items = match source {
                RowSource::Trending => client.trending(),
                RowSource::NowPlaying => client.now_playing(),
                RowSource::Genre { id } => client.by_genre(id),
            };
            event_tx.send(AppEvent::RowReady { index, generation, items })?;
        }
    }

    Ok(())
}

/// Picks one of the movies now playing at random and fetches its details.
fn fetch_banner(client: &dyn CatalogClient) -> Result<Option<MovieDetail>, CatalogError> {
    let now_playing = client.now_playing()?;

    match now_playing.choose(&mut rng()) {
        Some(movie) => client.details(movie.id, MediaKind::Movie).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Mutex, mpsc};

    use super::*;
    use crate::model::{CatalogItem, search::SearchPipeline};

    /// In-memory catalog. Every request is recorded; `fail` makes every
    /// request return an HTTP error.
    #[derive(Default)]
    pub(crate) struct FakeCatalog {
        pub(crate) items: Vec<CatalogItem>,
        pub(crate) fail: bool,
        pub(crate) calls: Mutex<Vec<String>>,
    }

    impl FakeCatalog {
        fn respond<T>(&self, call: String, value: T) -> Result<T, CatalogError> {
            self.calls.lock().unwrap().push(call.clone());
            if self.fail {
                return Err(CatalogError::Status { status: 503, path: call });
            }
            Ok(value)
        }
    }

    impl CatalogClient for FakeCatalog {
        fn search(&self, query: &SearchQuery) -> Result<Vec<CatalogItem>, CatalogError> {
            self.respond(format!("search {query}"), self.items.clone())
        }

        fn details(&self, id: i64, kind: MediaKind) -> Result<MovieDetail, CatalogError> {
            let detail = MovieDetail {
                id,
                title: Some(format!("Detail {id}")),
                ..MovieDetail::default()
            };
            self.respond(format!("details {id} {kind:?}"), detail)
        }

        fn now_playing(&self) -> Result<Vec<CatalogItem>, CatalogError> {
            self.respond("now_playing".to_string(), self.items.clone())
        }

        fn trending(&self) -> Result<Vec<CatalogItem>, CatalogError> {
            self.respond("trending".to_string(), self.items.clone())
        }

        fn by_genre(&self, genre_id: u32) -> Result<Vec<CatalogItem>, CatalogError> {
            self.respond(format!("genre {genre_id}"), self.items.clone())
        }
    }

    pub(crate) fn movie(id: i64) -> CatalogItem {
        CatalogItem {
            id,
            image_path: Some(format!("/{id}.jpg")),
            title: Some(format!("Movie {id}")),
            ..CatalogItem::default()
        }
    }

    fn token_for(text: &str) -> (RequestToken, SearchQuery) {
        let query = SearchQuery::normalize(text).unwrap();
        let token = SearchPipeline::new().begin(query.clone());
        (token, query)
    }

    #[test]
    fn search_completion_carries_request_token() {
        let client = FakeCatalog {
            items: vec![movie(1)],
            ..FakeCatalog::default()
        };
        let (event_tx, event_rx) = mpsc::channel();
        let (token, query) = token_for("batman");

        handle_command(&client, AppCommand::Search { token, query }, &event_tx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::SearchCompleted { token: got, outcome } => {
                assert_eq!(got, token);
                assert_eq!(outcome.unwrap(), vec![movie(1)]);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(*client.calls.lock().unwrap(), ["search batman"]);
    }

    #[test]
    fn search_failure_is_forwarded_not_raised() {
        let client = FakeCatalog {
            fail: true,
            ..FakeCatalog::default()
        };
        let (event_tx, event_rx) = mpsc::channel();
        let (token, query) = token_for("batman");

        assert!(handle_command(&client, AppCommand::Search { token, query }, &event_tx).is_ok());

        assert!(matches!(
            event_rx.try_recv().unwrap(),
            AppEvent::SearchCompleted { outcome: Err(CatalogError::Status { status: 503, .. }), .. }
        ));
    }

    #[test]
    fn rows_use_their_source() {
        let client = FakeCatalog::default();
        let (event_tx, event_rx) = mpsc::channel();

        for (index, source) in [RowSource::Trending, RowSource::Genre { id: 28 }, RowSource::NowPlaying]
            .into_iter()
            .enumerate()
        {
            handle_command(&client, AppCommand::GetRow { index, generation: 3, source }, &event_tx).unwrap();
        }

        assert_eq!(*client.calls.lock().unwrap(), ["trending", "genre 28", "now_playing"]);
        assert!(matches!(event_rx.try_recv().unwrap(), AppEvent::RowReady { index: 0, generation: 3, .. }));
    }

    #[test]
    fn banner_is_a_now_playing_movie_with_details() {
        let client = FakeCatalog {
            items: vec![movie(7)],
            ..FakeCatalog::default()
        };

        let banner = fetch_banner(&client).unwrap().unwrap();

        assert_eq!(banner.id, 7);
        assert_eq!(*client.calls.lock().unwrap(), ["now_playing", "details 7 Movie"]);
    }

    #[test]
    fn no_banner_when_nothing_is_playing() {
        let client = FakeCatalog::default();

        assert!(fetch_banner(&client).unwrap().is_none());
    }

    #[test]
    fn worker_delivers_results_over_channel() {
        let client: Arc<dyn CatalogClient> = Arc::new(FakeCatalog {
            items: vec![movie(3)],
            ..FakeCatalog::default()
        });
        let (command_tx, command_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        spawn_command_worker(client, command_rx, event_tx);
        command_tx
            .send(AppCommand::GetDetails { id: 3, kind: MediaKind::Movie })
            .unwrap();

        let event = event_rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap();
        assert!(matches!(event, AppEvent::DetailsReady { id: 3, detail: Ok(_) }));
    }
}

//! Leaderboard loading state.
//!
//! [`TopRacersQuery`] runs one fetch per activation on a worker thread and
//! exposes the outcome as a [`LoadState`]. Results arrive over an mpsc
//! channel and are picked up by [`TopRacersQuery::poll`] from the UI loop.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::client::{FetchError, RacerSource};
use super::models::Racer;

/// Outcome of the leaderboard fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Racer>),
    Failed(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Fetched racers, only once loaded
    pub fn data(&self) -> Option<&[Racer]> {
        match self {
            LoadState::Loaded(racers) => Some(racers),
            _ => None,
        }
    }

    #[allow(dead_code)] // Used in tests
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// A single in-flight (or settled) leaderboard fetch
pub struct TopRacersQuery {
    state: LoadState,
    rx: Option<Receiver<Result<Vec<Racer>, FetchError>>>,
    fetched_at: Option<DateTime<Utc>>,
}

impl TopRacersQuery {
    /// Start fetching from `source` on a background thread
    pub fn activate<S: RacerSource>(source: S) -> Self {
        info!("Starting leaderboard fetch");
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = source.fetch();
            // Receiver is gone if the view was torn down first
            let _ = tx.send(result);
        });

        TopRacersQuery {
            state: LoadState::Loading,
            rx: Some(rx),
            fetched_at: None,
        }
    }

    /// Pick up the fetch result if it has arrived. Never blocks.
    pub fn poll(&mut self) -> &LoadState {
        let Some(rx) = &self.rx else {
            return &self.state;
        };

        let settled = match rx.try_recv() {
            Ok(Ok(racers)) => {
                debug!(count = racers.len(), "Leaderboard loaded");
                LoadState::Loaded(racers)
            }
            Ok(Err(err)) => {
                warn!(error = %err, "Leaderboard fetch failed");
                LoadState::Failed(err)
            }
            Err(TryRecvError::Empty) => return &self.state,
            Err(TryRecvError::Disconnected) => {
                warn!("Leaderboard worker exited without a result");
                LoadState::Failed(FetchError::new("fetch worker exited without a result"))
            }
        };

        self.state = settled;
        self.rx = None;
        self.fetched_at = Some(Utc::now());
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// When the fetch settled, if it has
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

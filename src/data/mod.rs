//! Data layer for the leaderboard.
//!
//! Handles fetching racers from the API, tracking the fetch lifecycle, and
//! session-local bookmarks.

mod bookmarks;
mod client;
mod models;
mod query;

pub use bookmarks::BookmarkSet;
#[cfg(test)]
pub use bookmarks::{BOOKMARK_LABEL, REMOVE_BOOKMARK_LABEL};
pub use client::{FetchError, RacerClient, RacerSource};
pub use models::Racer;
pub use query::{LoadState, TopRacersQuery};

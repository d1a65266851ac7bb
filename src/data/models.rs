//! Data models for the leaderboard served by the racers API.

use serde::{Deserialize, Serialize};

/// A competitor on the leaderboard, as returned by `GET /api/top-racers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Racer {
    pub id: String,
    pub name: String,
    pub country: String,
    pub points: i64,
}

impl Racer {
    #[allow(dead_code)] // Used in tests
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        points: i64,
    ) -> Self {
        Racer {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            points,
        }
    }

    /// One-line description used by both the TUI rows and `list` output
    pub fn summary(&self) -> String {
        format!("{} / {} / {} pts", self.name, self.country, self.points)
    }
}

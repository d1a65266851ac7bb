//! Session-scoped racer bookmarks.
//!
//! Bookmarks are keyed by racer ID and live only as long as the view that
//! owns them. Nothing here is persisted.

pub const BOOKMARK_LABEL: &str = "Bookmark";
pub const REMOVE_BOOKMARK_LABEL: &str = "Remove Bookmark";

/// Ordered set of bookmarked racer IDs (no duplicates)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    /// Create a new empty bookmark set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a racer ID. Returns false if it was already bookmarked.
    #[allow(dead_code)] // Used in tests
    pub fn insert(&mut self, racer_id: &str) -> bool {
        if self.contains(racer_id) {
            return false;
        }
        self.ids.push(racer_id.to_string());
        true
    }

    /// Remove a racer ID. Returns false if it was not bookmarked.
    pub fn remove(&mut self, racer_id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != racer_id);
        self.ids.len() != before
    }

    /// Toggle a racer's bookmark. Returns true if the racer is now bookmarked.
    pub fn toggle(&mut self, racer_id: &str) -> bool {
        if self.remove(racer_id) {
            false
        } else {
            self.ids.push(racer_id.to_string());
            true
        }
    }

    pub fn contains(&self, racer_id: &str) -> bool {
        self.ids.iter().any(|id| id == racer_id)
    }

    /// Label for the toggle control of the given racer
    pub fn label_for(&self, racer_id: &str) -> &'static str {
        if self.contains(racer_id) {
            REMOVE_BOOKMARK_LABEL
        } else {
            BOOKMARK_LABEL
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Bookmarked IDs in the order they were added
    #[allow(dead_code)] // Used in tests
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

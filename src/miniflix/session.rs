//! Transient per-process state: the watchlist and the feedback log.
//!
//! Neither collection is persisted. A [`Session`] is owned by whoever hosts
//! the core (the API facade in practice) and is dropped when that host
//! ends; every handler receives it explicitly rather than reaching into
//! ambient global state.

use crate::error::{MiniflixError, Result};
use crate::model::FeedbackEntry;
use serde::{Deserialize, Serialize};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Ordered set of catalog item ids the user is tracking.
///
/// Insertion order is display order; an id appears at most once. All
/// operations are total—adding a tracked id or removing an untracked one
/// is a no-op, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Watchlist {
    items: Vec<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent. Returns whether the id was actually added.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id.to_string());
        true
    }

    /// Remove if present. Returns whether the id was tracked.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    /// Tracked ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Append-only log of feedback entries. No edit or delete operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append. On failure no partial entry is recorded.
    pub fn submit(&mut self, author: &str, rating: u8, comment: &str) -> Result<FeedbackEntry> {
        let author = author.trim();
        let comment = comment.trim();

        if author.is_empty() {
            return Err(MiniflixError::Validation("name must not be empty".into()));
        }
        if comment.is_empty() {
            return Err(MiniflixError::Validation("comment must not be empty".into()));
        }
        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(MiniflixError::Validation(format!(
                "rating must be between {} and {}",
                RATING_MIN, RATING_MAX
            )));
        }

        let entry = FeedbackEntry::new(author.to_string(), rating, comment.to_string());
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Entries most-recent-first.
    pub fn list_recent(&self) -> Vec<&FeedbackEntry> {
        self.entries.iter().rev().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The state one hosting session owns: watchlist plus feedback log.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub watchlist: Watchlist,
    pub feedback: FeedbackLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_contains() {
        let mut wl = Watchlist::new();
        assert!(wl.add("the_matrix.png"));
        assert!(wl.contains("the_matrix.png"));
    }

    #[test]
    fn remove_then_not_contains() {
        let mut wl = Watchlist::new();
        wl.add("the_matrix.png");
        assert!(wl.remove("the_matrix.png"));
        assert!(!wl.contains("the_matrix.png"));
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut wl = Watchlist::new();
        wl.add("heat.jpg");
        assert!(!wl.add("heat.jpg"));
        assert_eq!(wl.len(), 1);
    }

    #[test]
    fn removing_untracked_id_is_a_noop() {
        let mut wl = Watchlist::new();
        wl.add("heat.jpg");
        assert!(!wl.remove("alien.png"));
        assert_eq!(wl.len(), 1);
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut wl = Watchlist::new();
        wl.add("b.png");
        wl.add("a.png");
        wl.add("c.png");
        let ids: Vec<&str> = wl.iter().collect();
        assert_eq!(ids, vec!["b.png", "a.png", "c.png"]);
    }

    #[test]
    fn submit_records_entry_fields() {
        let mut log = FeedbackLog::new();
        let entry = log.submit("Alice", 5, "Loved it").unwrap();
        assert_eq!(entry.author, "Alice");
        assert_eq!(entry.rating, 5);
        assert_eq!(entry.comment, "Loved it");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn submit_rejects_blank_author_without_appending() {
        let mut log = FeedbackLog::new();
        let err = log.submit("", 3, "great").unwrap_err();
        assert!(matches!(err, MiniflixError::Validation(_)));
        assert!(log.is_empty());
    }

    #[test]
    fn submit_rejects_whitespace_only_comment() {
        let mut log = FeedbackLog::new();
        assert!(log.submit("Bob", 3, "   ").is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn submit_rejects_out_of_range_ratings() {
        let mut log = FeedbackLog::new();
        assert!(log.submit("Bob", 0, "meh").is_err());
        assert!(log.submit("Bob", 6, "wow").is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn list_recent_is_reverse_chronological() {
        let mut log = FeedbackLog::new();
        log.submit("Alice", 4, "first").unwrap();
        log.submit("Bob", 5, "second").unwrap();
        let recent = log.list_recent();
        assert_eq!(recent[0].comment, "second");
        assert_eq!(recent[1].comment, "first");
    }
}

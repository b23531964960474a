//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all MiniFlix operations regardless of the UI hosting
//! them.
//!
//! It owns the three things a session needs:
//! - the storage backend (generic, so tests run against `InMemoryStore`)
//! - the [`Session`] holding the transient watchlist and feedback log
//! - the random source used by the sampling views, seedable for
//!   reproducible output
//!
//! The facade does no business logic and no I/O of its own—it dispatches
//! and returns structured `Result<CmdResult>` values.

use crate::commands;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::MediaStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The main API facade for MiniFlix operations.
///
/// Generic over `MediaStore` to allow different storage backends. All UI
/// clients (CLI, web, etc.) should interact through this API.
pub struct MiniflixApi<S: MediaStore> {
    store: S,
    session: Session,
    rng: StdRng,
}

impl<S: MediaStore> MiniflixApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed constructor for reproducible sampling (tests, demos).
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            session: Session::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn home(&mut self, featured: usize) -> Result<CmdResult> {
        commands::home::run(&self.store, &self.session, &mut self.rng, featured)
    }

    pub fn library(&self) -> Result<CmdResult> {
        commands::library::run(&self.store, &self.session)
    }

    pub fn trending(&mut self, count: usize) -> Result<CmdResult> {
        commands::trending::run(&self.store, &self.session, &mut self.rng, count)
    }

    pub fn upload(&mut self, name: &str, bytes: &[u8]) -> Result<CmdResult> {
        commands::upload::run(&mut self.store, name, bytes)
    }

    pub fn watchlist_add(&mut self, id: &str) -> Result<CmdResult> {
        commands::watchlist::add(&mut self.session, id)
    }

    pub fn watchlist_remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::watchlist::remove(&mut self.session, id)
    }

    pub fn watchlist(&self) -> Result<CmdResult> {
        commands::watchlist::list(&self.store, &self.session)
    }

    pub fn submit_feedback(&mut self, author: &str, rating: u8, comment: &str) -> Result<CmdResult> {
        commands::feedback::submit(&mut self.session, author, rating, comment)
    }

    pub fn feedback(&self) -> Result<CmdResult> {
        commands::feedback::list_recent(&self.session)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn seeded_api(seed: u64) -> MiniflixApi<InMemoryStore> {
        let store = InMemoryStore::with_posters([
            "a.png", "b.png", "c.png", "d.png", "e.png", "f.png", "g.png", "h.png",
        ]);
        MiniflixApi::with_seed(store, seed)
    }

    #[test]
    fn seeded_apis_feature_the_same_selection() {
        let first: Vec<String> = seeded_api(42)
            .home(5)
            .unwrap()
            .listed_items
            .into_iter()
            .map(|d| d.item.id)
            .collect();
        let second: Vec<String> = seeded_api(42)
            .home(5)
            .unwrap()
            .listed_items
            .into_iter()
            .map(|d| d.item.id)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn watchlist_flows_through_the_facade() {
        let mut api = seeded_api(1);
        api.watchlist_add("a.png").unwrap();
        api.watchlist_add("b.png").unwrap();
        api.watchlist_remove("a.png").unwrap();

        let listed = api.watchlist().unwrap().listed_items;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.id, "b.png");
    }

    #[test]
    fn uploads_show_up_in_the_library() {
        let mut api = MiniflixApi::with_seed(InMemoryStore::new(), 1);
        api.upload("the_matrix.png", b"bytes").unwrap();

        let listed = api.library().unwrap().listed_items;
        assert_eq!(listed[0].item.display_name, "The Matrix");
    }

    #[test]
    fn feedback_round_trips_through_the_facade() {
        let mut api = MiniflixApi::with_seed(InMemoryStore::new(), 1);
        api.submit_feedback("Alice", 5, "Loved it").unwrap();

        let entries = api.feedback().unwrap().feedback_entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "Loved it");
    }
}

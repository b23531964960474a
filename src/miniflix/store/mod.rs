//! # Storage Layer
//!
//! The [`MediaStore`] trait abstracts the poster storage location so the
//! rest of the crate never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a flat directory of image
//!   files. Scans are stateless directory listings re-run on demand; the
//!   directory itself is created lazily on the first upload.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No
//!   filesystem, deterministic listing order.
//!
//! Uploads write bytes verbatim and overwrite silently on a name
//! collision; format validation happens in the command layer before the
//! store is touched.

use crate::error::Result;
use crate::model::MediaItem;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for poster storage.
pub trait MediaStore {
    /// All supported posters at the storage location, in listing order.
    /// The order is not guaranteed stable across calls if the underlying
    /// storage changes.
    fn scan(&self) -> Result<Vec<MediaItem>>;

    /// Write poster bytes verbatim under `name`, overwriting silently if
    /// the name is already taken. Callers validate the format first; the
    /// new item is visible on the next scan.
    fn store_poster(&mut self, name: &str, bytes: &[u8]) -> Result<MediaItem>;

    /// Storage path for an id, for hosts that display the binary content.
    fn poster_path(&self, id: &str) -> Result<PathBuf>;
}

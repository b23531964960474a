use super::MediaStore;
use crate::error::{MiniflixError, Result};
use crate::model::{self, MediaItem};
use std::fs;
use std::path::{Path, PathBuf};

/// Poster storage backed by a flat directory of image files.
///
/// External actors may add or remove files directly; every scan re-reads
/// the directory, so such edits show up on the next listing. Only file
/// names and extensions are inspected, never image content.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MiniflixError::StorageUnavailable)?;
        }
        Ok(())
    }
}

impl MediaStore for FileStore {
    fn scan(&self) -> Result<Vec<MediaItem>> {
        // A storage location that doesn't exist yet scans as empty
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(MiniflixError::StorageUnavailable)?;
        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(MiniflixError::StorageUnavailable)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if model::is_supported(name) {
                    items.push(MediaItem::from_file_name(name, path.clone()));
                }
            }
        }
        Ok(items)
    }

    fn store_poster(&mut self, name: &str, bytes: &[u8]) -> Result<MediaItem> {
        self.ensure_dir()?;
        let path = self.root.join(name);
        fs::write(&path, bytes).map_err(MiniflixError::StorageUnavailable)?;
        Ok(MediaItem::from_file_name(name, path))
    }

    fn poster_path(&self, id: &str) -> Result<PathBuf> {
        Ok(self.root.join(id))
    }
}

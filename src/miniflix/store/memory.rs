use super::MediaStore;
use crate::error::Result;
use crate::model::{self, MediaItem};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory poster storage for tests.
///
/// No persistence; listing order is name order, which keeps tests
/// deterministic without a filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with named posters; content is irrelevant to the core.
    pub fn with_posters<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for name in names {
            store.files.insert(name.into(), Vec::new());
        }
        store
    }

    /// Every stored file name, supported or not.
    pub fn file_names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    pub fn bytes(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }
}

impl MediaStore for InMemoryStore {
    fn scan(&self) -> Result<Vec<MediaItem>> {
        Ok(self
            .files
            .keys()
            .filter(|name| model::is_supported(name.as_str()))
            .map(|name| MediaItem::from_file_name(name, PathBuf::from(name)))
            .collect())
    }

    fn store_poster(&mut self, name: &str, bytes: &[u8]) -> Result<MediaItem> {
        self.files.insert(name.to_string(), bytes.to_vec());
        Ok(MediaItem::from_file_name(name, PathBuf::from(name)))
    }

    fn poster_path(&self, id: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_filters_unsupported_names() {
        let store = InMemoryStore::with_posters(["a.png", "b.gif", "c.jpeg"]);
        let ids: Vec<String> = store.scan().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a.png", "c.jpeg"]);
    }

    #[test]
    fn store_poster_keeps_bytes() {
        let mut store = InMemoryStore::new();
        store.store_poster("x.jpg", b"bytes").unwrap();
        assert_eq!(store.bytes("x.jpg"), Some(&b"bytes"[..]));
    }
}

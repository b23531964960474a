use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Poster formats the catalog recognizes, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Whether a file name carries a supported poster extension.
pub fn is_supported(file_name: &str) -> bool {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"),
        None => false,
    }
}

/// One poster in the catalog. Produced by a scan, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// The file name; unique within a scan.
    pub id: String,
    /// Human-readable title derived from the id.
    pub display_name: String,
    /// Where the binary content lives; never mutated.
    pub storage_ref: PathBuf,
}

impl MediaItem {
    pub fn from_file_name(file_name: &str, storage_ref: PathBuf) -> Self {
        Self {
            id: file_name.to_string(),
            display_name: display_name(file_name),
            storage_ref,
        }
    }
}

/// Title derivation: extension stripped, underscores become spaces, each
/// word title-cased. `the_matrix.png` -> `The Matrix`.
pub fn display_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);

    stem.replace('_', " ")
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// One immutable user-submitted rating/comment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub author: String,
    /// In `[1, 5]`; enforced at submission.
    pub rating: u8,
    pub comment: String,
    /// Wall-clock submission time.
    pub submitted_at: DateTime<Local>,
}

impl FeedbackEntry {
    pub fn new(author: String, rating: u8, comment: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            rating,
            comment,
            submitted_at: Local::now(),
        }
    }
}

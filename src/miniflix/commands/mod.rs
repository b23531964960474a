use crate::model::{FeedbackEntry, MediaItem};

pub mod feedback;
pub mod helpers;
pub mod home;
pub mod library;
pub mod trending;
pub mod upload;
pub mod watchlist;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a listing: a catalog item plus its 1-based position and the
/// session state a host needs to render add/remove affordances.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: usize,
    pub item: MediaItem,
    pub in_watchlist: bool,
    /// False for a watchlisted id whose file is no longer in the catalog
    /// (the storage folder can be edited outside the app).
    pub in_catalog: bool,
}

impl DisplayItem {
    pub fn new(index: usize, item: MediaItem, in_watchlist: bool) -> Self {
        Self {
            index,
            item,
            in_watchlist,
            in_catalog: true,
        }
    }

    pub fn missing(index: usize, item: MediaItem) -> Self {
        Self {
            index,
            item,
            in_watchlist: true,
            in_catalog: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<DisplayItem>,
    pub affected_item: Option<MediaItem>,
    pub feedback_entries: Vec<FeedbackEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_affected_item(mut self, item: MediaItem) -> Self {
        self.affected_item = Some(item);
        self
    }

    pub fn with_feedback_entries(mut self, entries: Vec<FeedbackEntry>) -> Self {
        self.feedback_entries = entries;
        self
    }
}

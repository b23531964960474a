use super::helpers::scan_degraded;
use super::{CmdMessage, CmdResult, DisplayItem};
use crate::error::Result;
use crate::model::MediaItem;
use crate::session::Session;
use crate::store::MediaStore;
use std::collections::HashMap;

/// Track an item. Adding an already-tracked id is a no-op, not an error.
pub fn add(session: &mut Session, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.watchlist.add(id) {
        result.add_message(CmdMessage::success("Added to Watchlist!"));
    } else {
        result.add_message(CmdMessage::info("Already in your watchlist."));
    }
    Ok(result)
}

/// Stop tracking an item. Removing an untracked id is a no-op.
pub fn remove(session: &mut Session, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.watchlist.remove(id) {
        result.add_message(CmdMessage::success("Removed from Watchlist."));
    } else {
        result.add_message(CmdMessage::info("Not in your watchlist."));
    }
    Ok(result)
}

/// Tracked items in insertion order. An id whose file was removed from the
/// storage folder externally is still listed, marked missing; dropping it
/// stays an explicit user action.
pub fn list<S: MediaStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.watchlist.is_empty() {
        result.add_message(CmdMessage::info("Your watchlist is empty."));
        return Ok(result);
    }

    let catalog = scan_degraded(store, &mut result)?.unwrap_or_default();
    let by_id: HashMap<&str, &MediaItem> =
        catalog.iter().map(|item| (item.id.as_str(), item)).collect();

    let mut listed = Vec::with_capacity(session.watchlist.len());
    for (i, id) in session.watchlist.iter().enumerate() {
        match by_id.get(id) {
            Some(item) => listed.push(DisplayItem::new(i + 1, (*item).clone(), true)),
            None => {
                let item = MediaItem::from_file_name(id, store.poster_path(id)?);
                listed.push(DisplayItem::missing(i + 1, item));
            }
        }
    }

    Ok(result.with_listed_items(listed))
}

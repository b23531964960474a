use super::helpers::{annotate, scan_degraded};
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::MediaStore;

/// The full catalog in listing order, with watchlist markers.
pub fn run<S: MediaStore>(store: &S, session: &Session) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let items = match scan_degraded(store, &mut result)? {
        Some(items) => items,
        None => return Ok(result),
    };

    if items.is_empty() {
        result.add_message(CmdMessage::info("No movies found yet!"));
        return Ok(result);
    }

    Ok(result.with_listed_items(annotate(items, session)))
}

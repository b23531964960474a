use super::helpers::{annotate, sample_items, scan_degraded};
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::Session;
use crate::store::MediaStore;
use rand::Rng;

/// A randomized ranking; listing positions double as trending ranks.
pub fn run<S: MediaStore, R: Rng>(
    store: &S,
    session: &Session,
    rng: &mut R,
    count: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let items = match scan_degraded(store, &mut result)? {
        Some(items) => items,
        None => return Ok(result),
    };

    if items.is_empty() {
        result.add_message(CmdMessage::info("No movies found!"));
        return Ok(result);
    }

    let picked = sample_items(&items, count, rng);
    Ok(result.with_listed_items(annotate(picked, session)))
}

use super::{CmdMessage, CmdResult};
use crate::error::{MiniflixError, Result};
use crate::model;
use crate::store::MediaStore;

/// Store a new poster. The format check runs before storage is touched, so
/// a rejected upload leaves the file listing unchanged.
pub fn run<S: MediaStore>(store: &mut S, name: &str, bytes: &[u8]) -> Result<CmdResult> {
    if !model::is_supported(name) {
        return Err(MiniflixError::UnsupportedFormat(name.to_string()));
    }

    let item = store.store_poster(name, bytes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie Added! ({})",
        item.display_name
    )));
    Ok(result.with_affected_item(item))
}

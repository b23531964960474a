use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FeedbackEntry;
use crate::session::Session;

/// Submit a rating/comment. Validation failures surface as errors and
/// leave the log untouched.
pub fn submit(session: &mut Session, author: &str, rating: u8, comment: &str) -> Result<CmdResult> {
    let entry = session.feedback.submit(author, rating, comment)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Thanks for your feedback!"));
    Ok(result.with_feedback_entries(vec![entry]))
}

/// Every entry, most-recent-first.
pub fn list_recent(session: &Session) -> Result<CmdResult> {
    let entries: Vec<FeedbackEntry> = session.feedback.list_recent().into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if entries.is_empty() {
        result.add_message(CmdMessage::info("No feedback yet."));
    }
    Ok(result.with_feedback_entries(entries))
}

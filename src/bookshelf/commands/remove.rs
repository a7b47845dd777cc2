use crate::commands::{CmdMessage, CmdResult, Outcome};
use crate::shelf::Shelf;
use tracing::debug;

/// Removes every book titled `title`, not just the first.
pub fn run(shelf: &mut Shelf, title: &str) -> CmdResult {
    let removed = shelf.remove_title(title);
    debug!(%title, removed, remaining = shelf.len(), "remove by title");

    if removed == 0 {
        return CmdResult::from_outcome(Outcome::BookNotFound);
    }

    let mut result = CmdResult::from_outcome(Outcome::BookRemoved);
    if removed > 1 {
        result.add_message(CmdMessage::info(format!(
            "{} books titled {:?} removed",
            removed, title
        )));
    }
    result
}

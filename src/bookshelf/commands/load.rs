use crate::commands::{CmdResult, Outcome};
use crate::error::CatalogError;
use crate::shelf::Shelf;
use crate::store::BookStore;
use std::path::Path;
use tracing::{debug, warn};

/// Replaces the shelf with the document at `path`.
///
/// The shelf is only touched once the whole document has decoded.
pub fn run<S: BookStore>(shelf: &mut Shelf, store: &S, path: &Path) -> CmdResult {
    let books = match store.read_books(path) {
        Ok(books) => books,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "load failed");
            let outcome = match e {
                CatalogError::FileNotFound(_) => Outcome::FileNotFound,
                CatalogError::Decode(_) => Outcome::JsonReadError,
                CatalogError::Io(io) => Outcome::LoadFailed(io.to_string()),
                other => Outcome::LoadFailed(other.to_string()),
            };
            return CmdResult::from_outcome(outcome);
        }
    };

    debug!(path = %path.display(), count = books.len(), replaced = shelf.len(), "books loaded");
    shelf.replace(books);
    CmdResult::from_outcome(Outcome::BooksLoaded)
}

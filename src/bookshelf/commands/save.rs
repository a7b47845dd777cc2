use crate::commands::{CmdResult, Outcome};
use crate::error::CatalogError;
use crate::shelf::Shelf;
use crate::store::BookStore;
use std::path::Path;
use tracing::{debug, warn};

pub fn run<S: BookStore>(shelf: &Shelf, store: &mut S, path: &Path) -> CmdResult {
    match store.write_books(path, shelf.books()) {
        Ok(()) => {
            debug!(path = %path.display(), count = shelf.len(), "books saved");
            CmdResult::from_outcome(Outcome::BooksSaved)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "save failed");
            CmdResult::from_outcome(Outcome::SaveFailed(describe(e)))
        }
    }
}

fn describe(err: CatalogError) -> String {
    match err {
        CatalogError::Io(e) => e.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ShelfFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn writes_whole_shelf() {
        let shelf = ShelfFixture::new().with_marquez().shelf;
        let mut store = InMemoryStore::new();
        let path = Path::new("libros.json");

        let result = run(&shelf, &mut store, path);

        assert_eq!(result.outcome, Some(Outcome::BooksSaved));
        assert_eq!(store.read_books(path).unwrap(), shelf.books());
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let shelf = ShelfFixture::new().with_marquez().shelf;
        let before = shelf.clone();
        let mut store = InMemoryStore::read_only();

        let result = run(&shelf, &mut store, Path::new("libros.json"));

        assert_eq!(
            result.outcome,
            Some(Outcome::SaveFailed("store is read-only".into()))
        );
        assert_eq!(shelf, before);
    }

    #[test]
    fn empty_shelf_saves_empty_array() {
        let mut store = InMemoryStore::new();
        let path = Path::new("empty.json");
        run(&Shelf::new(), &mut store, path);
        assert_eq!(store.raw(path), Some("[]"));
    }
}

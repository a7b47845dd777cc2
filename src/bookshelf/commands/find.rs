use crate::commands::CmdResult;
use crate::shelf::Shelf;
use tracing::debug;

/// Exact title match, ignoring case.
pub fn by_title(shelf: &Shelf, title: &str) -> CmdResult {
    let found = shelf.by_title(title);
    debug!(%title, matches = found.len(), "searched by title");
    CmdResult::default().with_listed_books(found)
}

/// Author substring match, ignoring case.
pub fn by_author(shelf: &Shelf, fragment: &str) -> CmdResult {
    let found = shelf.by_author(fragment);
    debug!(%fragment, matches = found.len(), "searched by author");
    CmdResult::default().with_listed_books(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ShelfFixture;

    #[test]
    fn title_search_ignores_case() {
        let shelf = ShelfFixture::new().with_marquez().shelf;
        let result = by_title(&shelf, "cien AÑOS de soledad");
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].year, 1967);
        assert!(result.outcome.is_none());
    }

    #[test]
    fn title_search_is_exact() {
        let shelf = ShelfFixture::new().with_marquez().shelf;
        assert!(by_title(&shelf, "Cien años").listed_books.is_empty());
        assert!(by_title(&shelf, "El perfume").listed_books.is_empty());
    }

    #[test]
    fn title_search_returns_every_duplicate() {
        let shelf = ShelfFixture::new()
            .with_book("X", "First")
            .with_book("Other", "Second")
            .with_book("x", "Third")
            .shelf;
        let authors: Vec<_> = by_title(&shelf, "X")
            .listed_books
            .into_iter()
            .map(|b| b.author)
            .collect();
        assert_eq!(authors, vec!["First", "Third"]);
    }

    #[test]
    fn author_search_matches_fragment() {
        let shelf = ShelfFixture::new()
            .with_marquez()
            .with_book("El perfume", "Patrick Süskind")
            .shelf;
        assert_eq!(by_author(&shelf, "gabriel").listed_books.len(), 2);
        assert_eq!(by_author(&shelf, "Gabriel García Márquez").listed_books.len(), 2);
        assert_eq!(by_author(&shelf, "süsk").listed_books.len(), 1);
        assert!(by_author(&shelf, "Borges").listed_books.is_empty());
    }

    #[test]
    fn author_search_preserves_order() {
        let shelf = ShelfFixture::new().with_marquez().shelf;
        let titles: Vec<_> = by_author(&shelf, "márquez")
            .listed_books
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Cien años de soledad", "El amor en los tiempos del cólera"]
        );
    }
}

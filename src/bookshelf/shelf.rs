use crate::model::Book;

/// The ordered sequence of books behind a catalog.
///
/// Insertion order is preserved and is the order of every listing, search
/// result and saved file. Lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn by_title(&self, title: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.title_matches(title))
            .cloned()
            .collect()
    }

    pub fn by_author(&self, fragment: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.author_contains(fragment))
            .cloned()
            .collect()
    }

    /// Drops every book with a matching title, returning how many went.
    pub fn remove_title(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|b| !b.title_matches(title));
        before - self.books.len()
    }

    /// Swaps in a whole new sequence.
    pub fn replace(&mut self, books: Vec<Book>) {
        self.books = books;
    }
}

impl From<Vec<Book>> for Shelf {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

use super::{decode_books, encode_books, BookStore};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Documents are kept as encoded text so a raw document can be planted with
/// [`InMemoryStore::put_raw`] and decoded exactly like a file would be.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<PathBuf, String>,
    read_only: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes fail with a permission error.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn put_raw(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    pub fn raw(&self, path: &Path) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }
}

impl BookStore for InMemoryStore {
    fn write_books(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        if self.read_only {
            return Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        let content = encode_books(books)?;
        self.documents.insert(path.to_path_buf(), content);
        Ok(())
    }

    fn read_books(&self, path: &Path) -> Result<Vec<Book>> {
        let content = self
            .documents
            .get(path)
            .ok_or_else(|| CatalogError::FileNotFound(path.to_path_buf()))?;
        decode_books(content)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Book;
    use crate::shelf::Shelf;

    pub struct ShelfFixture {
        pub shelf: Shelf,
    }

    impl Default for ShelfFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ShelfFixture {
        pub fn new() -> Self {
            Self {
                shelf: Shelf::new(),
            }
        }

        /// The two García Márquez novels used across the test suite.
        pub fn with_marquez(mut self) -> Self {
            self.shelf.push(Book::new(
                "Cien años de soledad",
                "Gabriel García Márquez",
                "Novela",
                1967,
            ));
            self.shelf.push(Book::new(
                "El amor en los tiempos del cólera",
                "Gabriel García Márquez",
                "Novela",
                1985,
            ));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.shelf.push(Book::new(
                    format!("Test Book {}", i + 1),
                    format!("Author {}", i + 1),
                    "Test",
                    2000 + i as i64,
                ));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            self.shelf.push(Book::new(title, author, "Novela", 2000));
            self
        }
    }
}

//! # Storage Layer
//!
//! The [`BookStore`] trait is how a catalog reaches its persisted documents.
//! A document is a whole catalog: it is always written and read in one piece.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: real files on disk
//!   - UTF-8 JSON array, 4-space indentation
//!   - Non-ASCII text written as-is
//!
//! - [`memory::InMemoryStore`]: documents kept in a map, for tests
//!   - Stores the raw JSON text, so missing and malformed documents fail
//!     the same way files do
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "titulo": "Cien años de soledad",
//!         "autor": "Gabriel García Márquez",
//!         "genero": "Novela",
//!         "anio": 1967
//!     }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::model::Book;
use serde::Serialize;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait BookStore {
    /// Write the whole sequence to `path`, replacing what was there.
    fn write_books(&mut self, path: &Path, books: &[Book]) -> Result<()>;

    /// Read a whole sequence back.
    ///
    /// Must return [`CatalogError::FileNotFound`] when nothing exists at
    /// `path` and [`CatalogError::Decode`] when the document is malformed.
    fn read_books(&self, path: &Path) -> Result<Vec<Book>>;
}

/// Encodes books in the catalog file format.
pub fn encode_books(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut ser)
        .map_err(CatalogError::Serialization)?;
    String::from_utf8(buf)
        .map_err(|e| CatalogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Decodes a catalog document, accepting any whitespace.
pub fn decode_books(content: &str) -> Result<Vec<Book>> {
    serde_json::from_str(content).map_err(CatalogError::Decode)
}

use super::{decode_books, encode_books, BookStore};
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Catalog documents as JSON files on disk.
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    create_dirs: bool,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create missing parent directories on write.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if !self.create_dirs {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CatalogError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for JsonFileStore {
    fn write_books(&mut self, path: &Path, books: &[Book]) -> Result<()> {
        self.ensure_parent(path)?;
        let content = encode_books(books)?;
        fs::write(path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    fn read_books(&self, path: &Path) -> Result<Vec<Book>> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::FileNotFound(path.to_path_buf()),
            // Valid files are UTF-8; anything else is a malformed document.
            ErrorKind::InvalidData => CatalogError::Decode(serde_json::Error::io(e)),
            _ => CatalogError::Io(e),
        })?;
        decode_books(&content)
    }
}

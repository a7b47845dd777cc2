//! # API Facade
//!
//! [`Catalog`] is the single entry point for catalog operations. It owns the
//! [`Shelf`] and a [`BookStore`], and dispatches each call to its command in
//! `commands/*.rs`.
//!
//! Every operation returns a plain value: an [`Outcome`] for operations that
//! change or persist the catalog, a `Vec<Book>` for searches. Nothing here
//! returns `Err` or panics on bad input, a missing file, or an I/O failure.
//!
//! ## Generic Over BookStore
//!
//! - Production: `Catalog<JsonFileStore>` (what [`Catalog::new`] builds)
//! - Testing: `Catalog<InMemoryStore>`
//!
//! Catalogs share nothing: each value owns its books.

use crate::commands::{self, CmdResult};
use crate::model::{Book, YearInput};
use crate::shelf::Shelf;
use crate::store::fs::JsonFileStore;
use crate::store::BookStore;
use std::path::Path;

pub struct Catalog<S: BookStore = JsonFileStore> {
    shelf: Shelf,
    store: S,
}

impl Catalog<JsonFileStore> {
    /// An empty catalog persisting to real files.
    pub fn new() -> Self {
        Self::with_store(JsonFileStore::new())
    }
}

impl Default for Catalog<JsonFileStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BookStore> Catalog<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            shelf: Shelf::new(),
            store,
        }
    }

    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<YearInput>,
    ) -> Outcome {
        let result = self.add_cmd(title, author, genre, year);
        outcome_of(result)
    }

    /// Like [`Catalog::add`], keeping every message for display.
    pub fn add_cmd(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: impl Into<YearInput>,
    ) -> CmdResult {
        commands::add::run(
            &mut self.shelf,
            title.into(),
            author.into(),
            genre.into(),
            year.into(),
        )
    }

    pub fn find_by_title(&self, title: &str) -> Vec<Book> {
        commands::find::by_title(&self.shelf, title).listed_books
    }

    pub fn find_by_author(&self, fragment: &str) -> Vec<Book> {
        commands::find::by_author(&self.shelf, fragment).listed_books
    }

    pub fn remove(&mut self, title: &str) -> Outcome {
        outcome_of(self.remove_cmd(title))
    }

    pub fn remove_cmd(&mut self, title: &str) -> CmdResult {
        commands::remove::run(&mut self.shelf, title)
    }

    pub fn save<P: AsRef<Path>>(&mut self, destination: P) -> Outcome {
        outcome_of(commands::save::run(
            &self.shelf,
            &mut self.store,
            destination.as_ref(),
        ))
    }

    /// Replaces this catalog's books with the document at `source`.
    pub fn load<P: AsRef<Path>>(&mut self, source: P) -> Outcome {
        outcome_of(commands::load::run(
            &mut self.shelf,
            &self.store,
            source.as_ref(),
        ))
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.shelf)
    }

    pub fn books(&self) -> &[Book] {
        self.shelf.books()
    }

    pub fn len(&self) -> usize {
        self.shelf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelf.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

// Every mutating command sets an outcome; a missing one is a command bug.
fn outcome_of(result: CmdResult) -> Outcome {
    debug_assert!(result.outcome.is_some(), "command returned no outcome");
    result.outcome.unwrap_or(Outcome::BookNotFound)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, Outcome};

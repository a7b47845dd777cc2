//! # Command Layer
//!
//! One module per catalog operation. Commands take the shelf and a store,
//! and return a [`CmdResult`]. They never return `Err`: every failure from
//! the model or the store is logged and turned into an [`Outcome`] here.

use crate::model::Book;
use std::fmt;

pub mod add;
pub mod config;
pub mod find;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a mutating or persisting operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    BookAdded,
    InvalidYear,
    BookRemoved,
    BookNotFound,
    BooksSaved,
    SaveFailed(String),
    BooksLoaded,
    FileNotFound,
    JsonReadError,
    LoadFailed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::BookAdded | Outcome::BookRemoved | Outcome::BooksSaved | Outcome::BooksLoaded
        )
    }

    pub fn level(&self) -> MessageLevel {
        match self {
            Outcome::BookAdded
            | Outcome::BookRemoved
            | Outcome::BooksSaved
            | Outcome::BooksLoaded => MessageLevel::Success,
            Outcome::InvalidYear | Outcome::BookNotFound | Outcome::FileNotFound => {
                MessageLevel::Warning
            }
            Outcome::SaveFailed(_) | Outcome::JsonReadError | Outcome::LoadFailed(_) => {
                MessageLevel::Error
            }
        }
    }

    pub fn to_message(&self) -> CmdMessage {
        CmdMessage {
            level: self.level(),
            content: self.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BookAdded => write!(f, "Book added"),
            Outcome::InvalidYear => write!(f, "Invalid year"),
            Outcome::BookRemoved => write!(f, "Book removed"),
            Outcome::BookNotFound => write!(f, "Book not found"),
            Outcome::BooksSaved => write!(f, "Books saved"),
            Outcome::SaveFailed(e) => write!(f, "Error saving books: {}", e),
            Outcome::BooksLoaded => write!(f, "Books loaded"),
            Outcome::FileNotFound => write!(f, "File not found"),
            Outcome::JsonReadError => write!(f, "Error reading the JSON file"),
            Outcome::LoadFailed(e) => write!(f, "Error loading books: {}", e),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Option<Outcome>,
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    /// A result carrying `outcome`, with its text as the first message.
    pub fn from_outcome(outcome: Outcome) -> Self {
        let mut result = Self::default();
        result.add_message(outcome.to_message());
        result.outcome = Some(outcome);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }
}

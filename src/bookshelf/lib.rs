//! # Bookshelf Architecture
//!
//! Bookshelf is a small **book catalog library**: an ordered, in-memory
//! collection of [`model::Book`] records with add, title lookup, author
//! lookup, removal, and whole-catalog JSON persistence. The `bookshelf`
//! binary is a thin client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints outcomes, sets up logging       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - `Catalog<S>`: one method per catalog operation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Business logic, turns every failure into an `Outcome`    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shelf (shelf.rs) and Storage (store/)                      │
//! │  - Ordered `Vec<Book>`; `BookStore` trait with file and     │
//! │    in-memory implementations                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors Stop at the Command Layer
//!
//! `model` and `store` return [`error::Result`]. Commands match on the
//! error and produce an [`commands::Outcome`] (or an empty search result),
//! so no public `Catalog` operation returns `Err` or panics because of user
//! input or the file system.
//!
//! ## Logging
//!
//! The library emits `tracing` events and never installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Catalog` facade
//! - [`commands`]: Business logic and outcomes
//! - [`shelf`]: The ordered book sequence
//! - [`store`]: Persistence abstraction and implementations
//! - [`model`]: `Book` and year coercion
//! - [`config`]: Configuration for the CLI
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod shelf;
pub mod store;

pub use api::Catalog;
pub use commands::Outcome;
pub use model::{Book, YearInput};

//! # bookshelf_core
//!
//! A small library for keeping a personal book catalog in a JSON file.
//!
//! ## Features
//!
//! - **Book records**: title, author, year, genre and read status, validated on entry
//! - **Flat-file persistence**: the whole catalog is rewritten atomically after every change
//! - **Graceful start**: a missing or corrupt library file simply loads as an empty catalog
//! - **Search and statistics**: case-insensitive keyword search by title or author,
//!   and a read percentage over the whole catalog
//! - **Command dispatch**: a front-end agnostic [`command::Command`] type so a CLI,
//!   TUI or web handler can drive the same session
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookshelf_core::search::SearchField;
//! use bookshelf_core::shelf::{Shelf, ShelfManager};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shelf = Shelf::open(Shelf::default_path());
//! let mut session = ShelfManager::load(shelf);
//!
//! session.add("Dune", "Frank Herbert", 1965, "SciFi", false)?;
//!
//! for book in session.search("herbert", SearchField::Author) {
//!     println!("{book}");
//! }
//!
//! let stats = session.statistics();
//! println!("{} books, {:.2}% read", stats.total, stats.percent_read);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`domain`]**: the [`domain::Book`] record and its validation
//! - **[`catalog`]**: the in-memory list and the pure operations over it
//! - **[`search`]**: search fields and keyword matching
//! - **[`shelf`]**: the JSON file backend and the session that owns a catalog
//! - **[`command`]**: command dispatch for front ends
//! - **[`config`]**: settings resolution for the `bookshelf` binary
//! - **[`error`]**: unified error handling
//!
//! ## Error Handling
//!
//! Fallible operations return [`BookshelfResult<T>`], wrapping [`BookshelfError`].
//! Sub-module errors convert automatically, so `?` works throughout.
//!
//! ```rust,no_run
//! use bookshelf_core::shelf::{Shelf, ShelfManager};
//! use bookshelf_core::BookshelfResult;
//!
//! fn add_one(session: &mut ShelfManager) -> BookshelfResult<()> {
//!     // An empty author is a validation error, converted into BookshelfError.
//!     session.add("Untitled draft", "", 2024, "", false)?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod search;
pub mod shelf;

/// Re-exports the most commonly used types for convenience.
pub use error::{BookshelfError, BookshelfResult};

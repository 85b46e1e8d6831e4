//! Persistence and session management for a book catalog.
//!
//! - [`storage`] holds [`Shelf`], the JSON file a catalog lives in.
//! - [`manager`] holds [`ShelfManager`], one session that loads a shelf once
//!   and saves it after every change.

pub mod manager;
pub mod storage;

pub use manager::ShelfManager;
pub use storage::{Shelf, ShelfError};

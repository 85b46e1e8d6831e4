//! Keyword search over catalog fields.
//!
//! Matching is a case-insensitive substring test against one field of each
//! book. There is no index; every search is a linear scan that keeps the
//! catalog order.
//!
//! # Usage
//!
//! ```rust
//! use bookshelf_core::catalog::Catalog;
//! use bookshelf_core::domain::Book;
//! use bookshelf_core::search::SearchField;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut catalog = Catalog::default();
//! catalog.push(Book::new("Dune", "Frank Herbert", 1965, "SciFi", false)?);
//!
//! let field: SearchField = "author".parse()?;
//! let hits = catalog.search("herbert", field);
//! assert_eq!(hits.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::domain::Book;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search field '{0}', expected 'title' or 'author'")]
pub struct UnknownField(pub String);

/// The book field a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    /// Returns the value of this field on `book`.
    pub fn value<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
        }
    }
}

impl FromStr for SearchField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => f.write_str("title"),
            SearchField::Author => f.write_str("author"),
        }
    }
}

/// Returns `true` if `keyword` occurs in the chosen field of `book`, ignoring case.
///
/// An empty keyword is a substring of every value and therefore matches
/// every book.
pub fn matches(book: &Book, keyword: &str, field: SearchField) -> bool {
    field
        .value(book)
        .to_lowercase()
        .contains(&keyword.to_lowercase())
}

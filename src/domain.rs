use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Earliest publication year accepted for a book.
pub const MIN_YEAR: i32 = 0;
/// Latest publication year accepted for a book.
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title and Author are required!")]
    EmptyTitle,
    #[error("Title and Author are required!")]
    EmptyAuthor,
    #[error("publication year {0} is outside {MIN_YEAR}..={MAX_YEAR}")]
    YearOutOfRange(i32),
}

/// A single catalog entry.
///
/// Serialized as a flat JSON object with the keys `title`, `author`,
/// `year`, `genre` and `read`. The title is the identity key and is
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Builds a validated book record.
    ///
    /// Title and author must be non-empty, and the year must fall within
    /// [`MIN_YEAR`]..=[`MAX_YEAR`]. Values are stored exactly as given; a
    /// whitespace-only title or author counts as present.
    ///
    /// Returns [`ValidationError`] describing the first field that fails.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Book, ValidationError> {
        let title = title.into();
        let author = author.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange(year));
        }

        Ok(Book {
            title,
            author,
            year,
            genre: genre.into(),
            read,
        })
    }

    /// Returns `true` if `title` names this book, ignoring case.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.read { "Read" } else { "Unread" };
        write!(
            f,
            "*{}* by {} ({}) - {} - {}",
            self.title, self.author, self.year, self.genre, status
        )
    }
}

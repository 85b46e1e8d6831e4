use crate::domain::Book;
use crate::search::{self, SearchField};
use std::fmt;

/// The ordered, in-memory list of books for one session.
///
/// Insertion order is preserved and duplicate titles are allowed. Nothing
/// here touches disk; persistence is handled by [`crate::shelf::storage::Shelf`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

/// Aggregate counts over a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub total: usize,
    pub read: usize,
    /// `100 * read / total`, or `0.0` for an empty catalog.
    pub percent_read: f64,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Catalog { books }
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Appends a book to the end of the catalog. No duplicate check is made.
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book whose title equals `title`, ignoring case.
    ///
    /// Returns how many books were dropped. Zero is a valid outcome, so
    /// calling this twice with the same title leaves the same catalog as
    /// calling it once.
    pub fn remove_title(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| !book.has_title(title));
        before - self.books.len()
    }

    /// Returns the books whose `field` contains `keyword`, in catalog order.
    ///
    /// See [`search::matches`] for the matching rules.
    pub fn search(&self, keyword: &str, field: SearchField) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| search::matches(book, keyword, field))
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        let read = self.books.iter().filter(|book| book.read).count();
        let percent_read = if total > 0 {
            read as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Statistics {
            total,
            read,
            percent_read,
        }
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Catalog::new(books)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Books: {}", self.total)?;
        write!(f, "Percentage Read: {:.2}%", self.percent_read)
    }
}

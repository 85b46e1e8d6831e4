use crate::catalog::{Catalog, Statistics};
use crate::domain::Book;
use crate::error::BookshelfError;
use crate::search::SearchField;
use crate::shelf::storage::Shelf;
use tracing::info;

/// A session over a single [`Shelf`].
///
/// Owns the shelf and the in-memory [`Catalog`] loaded from it. Every
/// mutating method writes the whole catalog back to the shelf before
/// returning, so the file and the catalog never disagree.
pub struct ShelfManager {
    shelf: Shelf,
    catalog: Catalog,
}

impl ShelfManager {
    /// Opens a session by loading the shelf once.
    ///
    /// A missing or corrupt shelf produces an empty session rather than an
    /// error.
    pub fn load(shelf: Shelf) -> Self {
        let catalog = Catalog::from(shelf.load());
        ShelfManager { shelf, catalog }
    }

    /// Returns the shelf backing this session.
    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    /// Returns the in-memory catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds a book to the end of the catalog and saves.
    ///
    /// # Errors
    /// Returns [`BookshelfError::Validation`] if title or author is empty or the
    /// year is out of range; the catalog is left untouched in that case.
    /// Returns [`BookshelfError::Shelf`] if the catalog cannot be written.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
        read: bool,
    ) -> Result<&Book, BookshelfError> {
        let book = Book::new(title, author, year, genre, read)?;
        let added = self.commit(|catalog| {
            catalog.push(book);
            catalog.len() - 1
        })?;

        info!(title, author, year, "added book");
        Ok(&self.catalog.books()[added])
    }

    /// Removes every book titled `title` (ignoring case) and saves.
    ///
    /// The catalog is saved even when nothing matched. Returns the number of
    /// books removed.
    ///
    /// # Errors
    /// Returns [`BookshelfError::Shelf`] if the catalog cannot be written.
    pub fn remove(&mut self, title: &str) -> Result<usize, BookshelfError> {
        let removed = self.commit(|catalog| catalog.remove_title(title))?;

        info!(title, removed, "removed books");
        Ok(removed)
    }

    /// Returns the books whose `field` contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str, field: SearchField) -> Vec<&Book> {
        self.catalog.search(keyword, field)
    }

    /// Returns every book in insertion order.
    pub fn list(&self) -> &[Book] {
        self.catalog.books()
    }

    /// Returns the total count and read percentage.
    pub fn statistics(&self) -> Statistics {
        self.catalog.statistics()
    }

    /// Empties the catalog and persists the empty list.
    ///
    /// # Errors
    /// Returns [`BookshelfError::Shelf`] if the shelf cannot be written.
    pub fn reset(&mut self) -> Result<(), BookshelfError> {
        self.shelf.reset()?;
        self.catalog = Catalog::default();

        info!(path = %self.shelf.path.display(), "library reset");
        Ok(())
    }

    /// Applies `change` to a copy of the catalog, saves the copy, and only then
    /// swaps it in. A failed save leaves the session as it was.
    fn commit<T>(&mut self, change: impl FnOnce(&mut Catalog) -> T) -> Result<T, BookshelfError> {
        let mut next = self.catalog.clone();
        let out = change(&mut next);
        self.shelf.save(next.books())?;
        self.catalog = next;
        Ok(out)
    }
}

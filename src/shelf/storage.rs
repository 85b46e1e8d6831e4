use crate::domain::Book;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// File name used for the library when no explicit path is configured.
pub const DEFAULT_FILE_NAME: &str = "library.json";

#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize library: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to replace library file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// The persistence backend for a catalog: a single JSON file.
///
/// A `Shelf` only knows where the file lives. It holds no books itself; the
/// session that owns it keeps the in-memory catalog.
#[derive(Debug, Clone)]
pub struct Shelf {
    pub path: PathBuf,
}

impl Shelf {
    /// Binds a shelf to `path`. Nothing is read or created on disk yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the default library location, `~/Documents/bookshelf/library.json`.
    ///
    /// Falls back to `./library.json` when the user's documents directory
    /// cannot be determined.
    pub fn default_path() -> PathBuf {
        match dirs::document_dir() {
            Some(docs) => docs.join("bookshelf").join(DEFAULT_FILE_NAME),
            None => PathBuf::from(DEFAULT_FILE_NAME),
        }
    }

    /// Reads every book stored on the shelf.
    ///
    /// A missing file, an unreadable file, or contents that are not a JSON
    /// list of books all yield an empty list. Nothing is surfaced to the
    /// caller; a fresh session simply starts empty.
    pub fn load(&self) -> Vec<Book> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no library file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "library file unreadable, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Book>>(&raw) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "loaded library");
                books
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "library file is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the shelf with `books`.
    ///
    /// The whole list is serialized and written to a temporary file next to
    /// the target, which is then renamed in place. The parent directory is
    /// created if it does not exist.
    ///
    /// # Errors
    /// - [`ShelfError::Serialize`] if the books cannot be encoded
    /// - [`ShelfError::Io`] if the directory or temp file cannot be written
    /// - [`ShelfError::Persist`] if the final rename fails
    pub fn save(&self, books: &[Book]) -> Result<(), ShelfError> {
        let data = serde_json::to_vec(books)?;
        Self::write_atomic(&self.path, &data)?;
        debug!(path = %self.path.display(), count = books.len(), "saved library");
        Ok(())
    }

    /// Persists an empty library, discarding whatever was stored.
    pub fn reset(&self) -> Result<(), ShelfError> {
        self.save(&[])
    }

    fn write_atomic(path: &Path, data: &[u8]) -> Result<(), ShelfError> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        tmp.persist(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_ends_with_library_file() {
        assert!(Shelf::default_path().ends_with(DEFAULT_FILE_NAME));
    }

    #[test]
    fn save_creates_missing_parent_directories() -> Result<(), ShelfError> {
        let tmpdir = TempDir::new()?;
        let shelf = Shelf::open(tmpdir.path().join("nested/deeper/library.json"));

        shelf.save(&[])?;

        assert!(shelf.path.exists());
        assert_eq!(fs::read_to_string(&shelf.path)?, "[]");
        Ok(())
    }

    #[test]
    fn non_list_json_loads_empty() -> Result<(), ShelfError> {
        let tmpdir = TempDir::new()?;
        let shelf = Shelf::open(tmpdir.path().join("library.json"));
        fs::write(&shelf.path, r#"{"title":"not a list"}"#)?;

        assert!(shelf.load().is_empty());
        Ok(())
    }
}

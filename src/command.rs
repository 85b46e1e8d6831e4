//! Front-end agnostic command dispatch.
//!
//! A front end turns user input into a [`Command`], hands it to
//! [`ShelfManager::dispatch`], and renders the returned [`Outcome`]. Nothing
//! in here knows how input is collected or how output is shown.

use crate::catalog::Statistics;
use crate::domain::Book;
use crate::error::BookshelfError;
use crate::search::SearchField;
use crate::shelf::manager::ShelfManager;
use std::fmt;
use tracing::debug;

/// Publication year used when the caller does not give one.
pub const DEFAULT_YEAR: i32 = 2024;

/// One operation against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        author: String,
        year: i32,
        genre: String,
        read: bool,
    },
    Remove {
        title: String,
    },
    Search {
        keyword: String,
        field: SearchField,
    },
    List,
    Stats,
    Reset,
}

/// The result of a dispatched [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Book),
    /// `count` may be zero; removing an unknown title still succeeds.
    Removed { title: String, count: usize },
    Matches(Vec<Book>),
    Listing(Vec<Book>),
    Stats(Statistics),
    Reset,
}

impl Command {
    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
            Command::Search { .. } => "search",
            Command::List => "list",
            Command::Stats => "stats",
            Command::Reset => "reset",
        }
    }
}

impl Outcome {
    /// The headline message shown to the user for this outcome, if any.
    ///
    /// Search and listing outcomes only carry a message when they are empty;
    /// otherwise the books themselves are the output.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Added(_) => Some("Book added successfully!"),
            Outcome::Removed { .. } => Some("Book removed successfully!"),
            Outcome::Matches(books) if books.is_empty() => Some("No matching books found."),
            Outcome::Listing(books) if books.is_empty() => Some("Your library is empty!"),
            Outcome::Reset => Some("Library data reset!"),
            Outcome::Matches(_) | Outcome::Listing(_) | Outcome::Stats(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Matches(books) | Outcome::Listing(books) if !books.is_empty() => {
                let lines: Vec<String> = books.iter().map(Book::to_string).collect();
                f.write_str(&lines.join("\n"))
            }
            Outcome::Stats(stats) => write!(f, "{stats}"),
            _ => f.write_str(self.message().unwrap_or_default()),
        }
    }
}

impl ShelfManager {
    /// Runs `command` against this session.
    ///
    /// # Errors
    /// Propagates whatever the underlying operation returns: validation
    /// failures from `add`, and write failures from any mutating command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, BookshelfError> {
        debug!(command = command.name(), "dispatching");

        let outcome = match command {
            Command::Add {
                title,
                author,
                year,
                genre,
                read,
            } => Outcome::Added(self.add(&title, &author, year, &genre, read)?.clone()),
            Command::Remove { title } => {
                let count = self.remove(&title)?;
                Outcome::Removed { title, count }
            }
            Command::Search { keyword, field } => {
                Outcome::Matches(self.search(&keyword, field).into_iter().cloned().collect())
            }
            Command::List => Outcome::Listing(self.list().to_vec()),
            Command::Stats => Outcome::Stats(self.statistics()),
            Command::Reset => {
                self.reset()?;
                Outcome::Reset
            }
        };

        Ok(outcome)
    }
}

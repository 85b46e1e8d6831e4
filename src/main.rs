//! `bookshelf` - command-line front end for a personal book catalog.

use anyhow::{Context, Result};
use bookshelf_core::BookshelfError;
use bookshelf_core::command::{Command, DEFAULT_YEAR};
use bookshelf_core::config::Settings;
use bookshelf_core::search::SearchField;
use bookshelf_core::shelf::{Shelf, ShelfManager};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "bookshelf", about = "Manage a personal book catalog", version)]
struct Cli {
    #[clap(subcommand)]
    command: CliCommand,

    /// Library file to use (overrides config and BOOKSHELF_LIBRARY)
    #[clap(long, global = true)]
    library: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (overrides config and BOOKSHELF_LOG)
    #[clap(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Add a book to the end of the catalog
    Add {
        title: String,
        author: String,

        /// Publication year
        #[clap(long, default_value_t = DEFAULT_YEAR)]
        year: i32,

        #[clap(long, default_value = "")]
        genre: String,

        /// Mark the book as already read
        #[clap(long)]
        read: bool,
    },

    /// Remove every book with this title (case-insensitive)
    Remove { title: String },

    /// Search books by keyword
    Search {
        keyword: String,

        /// Field to search: title or author
        #[clap(long, default_value = "title")]
        by: SearchField,
    },

    /// Show every book in the catalog
    List,

    /// Show catalog statistics
    Stats,

    /// Delete all books from the catalog
    Reset,
}

impl From<CliCommand> for Command {
    fn from(cmd: CliCommand) -> Self {
        match cmd {
            CliCommand::Add {
                title,
                author,
                year,
                genre,
                read,
            } => Command::Add {
                title,
                author,
                year,
                genre,
                read,
            },
            CliCommand::Remove { title } => Command::Remove { title },
            CliCommand::Search { keyword, by } => Command::Search {
                keyword,
                field: by,
            },
            CliCommand::List => Command::List,
            CliCommand::Stats => Command::Stats,
            CliCommand::Reset => Command::Reset,
        }
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn initialize_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves settings from file and `env`, then applies the CLI flags on top.
fn resolve_settings<F>(cli: &Cli, env: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::resolve(cli.config.as_deref(), env)
        .context("failed to load bookshelf settings")?;

    if let Some(path) = &cli.library {
        settings.library_path = path.clone();
    }
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }

    Ok(settings)
}

/// Runs one command against `session`, writing results to `out` and user
/// errors to `err`.
///
/// An empty title to remove is refused before dispatch. That and validation
/// failures produce a message on `err` and [`ExitCode::FAILURE`]. Storage
/// failures are returned as errors.
fn run(
    session: &mut ShelfManager,
    command: CliCommand,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    if let CliCommand::Remove { title } = &command {
        if title.is_empty() {
            writeln!(err, "Please enter a book title.")?;
            return Ok(ExitCode::FAILURE);
        }
    }

    match session.dispatch(command.into()) {
        Ok(outcome) => {
            writeln!(out, "{outcome}")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(BookshelfError::Validation(e)) => {
            writeln!(err, "{e}")?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "failed to update library at {}",
                session.shelf().path.display()
            )
        }),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli, |key| std::env::var(key).ok())?;

    initialize_tracing(&settings.log_level);
    debug!(library = %settings.library_path.display(), "using library");

    let mut session = ShelfManager::load(Shelf::open(&settings.library_path));
    run(
        &mut session,
        cli.command,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

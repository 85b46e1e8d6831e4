use crate::shelf::storage::Shelf;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the library file location.
pub const LIBRARY_ENV: &str = "BOOKSHELF_LIBRARY";
/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "BOOKSHELF_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub library_path: PathBuf,
    pub log_level: String,
}

/// Keys accepted in the TOML config file. All optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    library_path: Option<PathBuf>,
    log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_path: Shelf::default_path(),
            log_level: "info".into(),
        }
    }
}

impl Settings {
    /// Default config file location, `<config dir>/bookshelf/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bookshelf").join("config.toml"))
    }

    /// Resolves settings from the process environment.
    ///
    /// See [`Settings::resolve`] for precedence.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(config_path, |key| std::env::var(key).ok())
    }

    /// Resolves settings from defaults, a config file and `env`.
    ///
    /// Later sources win: defaults, then the file, then `env`. When
    /// `config_path` is given the file must exist and parse. Without it the
    /// default location is tried and silently skipped if absent.
    pub fn resolve<F>(config_path: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        let file = match config_path {
            Some(path) => Some(read_file(path)?),
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => Some(read_file(&path)?),
                _ => None,
            },
        };

        if let Some(file) = file {
            if let Some(path) = file.library_path {
                settings.library_path = path;
            }
            if let Some(level) = file.log_level {
                settings.log_level = level;
            }
        }

        if let Some(path) = env(LIBRARY_ENV).filter(|v| !v.trim().is_empty()) {
            settings.library_path = PathBuf::from(path);
        }
        if let Some(level) = env(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            settings.log_level = level;
        }

        Ok(settings)
    }
}

fn read_file(path: &Path) -> Result<FileSettings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

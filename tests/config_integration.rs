use bookshelf_core::config::{ConfigError, LIBRARY_ENV, LOG_ENV, Settings};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn file_values_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmpdir = TempDir::new()?;
    let config = tmpdir.path().join("config.toml");
    fs::write(
        &config,
        "library_path = \"/srv/books/library.json\"\nlog_level = \"debug\"\n",
    )?;

    let settings = Settings::resolve(Some(config.as_path()), no_env)?;

    assert_eq!(settings.library_path, PathBuf::from("/srv/books/library.json"));
    assert_eq!(settings.log_level, "debug");

    Ok(())
}

#[test]
fn partial_file_keeps_remaining_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmpdir = TempDir::new()?;
    let config = tmpdir.path().join("config.toml");
    fs::write(&config, "log_level = \"warn\"\n")?;

    let settings = Settings::resolve(Some(config.as_path()), no_env)?;

    assert_eq!(settings.library_path, Settings::default().library_path);
    assert_eq!(settings.log_level, "warn");

    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmpdir = TempDir::new()?;
    let config = tmpdir.path().join("config.toml");
    fs::write(&config, "library_path = \"from-file.json\"\n")?;

    let env: HashMap<&str, &str> = [(LIBRARY_ENV, "from-env.json"), (LOG_ENV, "trace")]
        .into_iter()
        .collect();
    let settings = Settings::resolve(Some(config.as_path()), |key| {
        env.get(key).map(|v| v.to_string())
    })?;

    assert_eq!(settings.library_path, PathBuf::from("from-env.json"));
    assert_eq!(settings.log_level, "trace");

    Ok(())
}

#[test]
fn blank_environment_values_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let tmpdir = TempDir::new()?;
    let config = tmpdir.path().join("config.toml");
    fs::write(&config, "log_level = \"error\"\n")?;

    let settings = Settings::resolve(Some(config.as_path()), |_| Some("  ".to_string()))?;

    assert_eq!(settings.log_level, "error");

    Ok(())
}

#[test]
fn explicit_missing_config_is_an_error() {
    let result = Settings::resolve(Some(std::path::Path::new("/no/such/config.toml")), no_env);
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn invalid_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let tmpdir = TempDir::new()?;
    let config = tmpdir.path().join("config.toml");
    fs::write(&config, "shelf_color = \"blue\"\n")?;

    let result = Settings::resolve(Some(config.as_path()), no_env);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));

    Ok(())
}

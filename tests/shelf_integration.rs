use bookshelf_core::domain::Book;
use bookshelf_core::shelf::{Shelf, ShelfError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Helper: a shelf inside a fresh temp dir so runs don't collide
fn temp_shelf() -> Result<(TempDir, Shelf), ShelfError> {
    let tmpdir = TempDir::new()?;
    let shelf = Shelf::open(tmpdir.path().join("library.json"));
    Ok((tmpdir, shelf))
}

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("1984", "George Orwell", 1949, "Dystopian", true).unwrap(),
        Book::new("Dune", "Frank Herbert", 1965, "", false).unwrap(),
        Book::new("dune", "Frank Herbert", 1965, "SciFi", true).unwrap(),
    ]
}

#[test]
fn missing_file_loads_empty() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;

    assert!(!shelf.path.exists());
    assert!(shelf.load().is_empty());

    Ok(())
}

#[test]
fn malformed_file_loads_empty() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    fs::write(&shelf.path, "{ this is not json")?;

    assert!(shelf.load().is_empty());

    Ok(())
}

#[test]
fn wrongly_shaped_records_load_empty() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    fs::write(&shelf.path, r#"[{"title": "Dune", "year": "nineteen"}]"#)?;

    assert!(shelf.load().is_empty());

    Ok(())
}

#[test]
fn save_then_load_preserves_values_and_order() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    let books = sample_books();

    shelf.save(&books)?;

    let reopened = Shelf::open(&shelf.path);
    assert_eq!(reopened.load(), books);

    Ok(())
}

#[test]
fn empty_catalog_round_trips() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;

    shelf.save(&[])?;

    assert!(shelf.path.exists());
    assert!(shelf.load().is_empty());

    Ok(())
}

#[test]
fn save_overwrites_previous_contents() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    let books = sample_books();

    shelf.save(&books)?;
    shelf.save(&books[..1])?;

    assert_eq!(shelf.load(), books[..1].to_vec());

    Ok(())
}

#[test]
fn stored_file_uses_flat_record_keys() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    shelf.save(&sample_books()[..1])?;

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&shelf.path)?)?;
    assert_eq!(
        raw,
        serde_json::json!([{
            "title": "1984",
            "author": "George Orwell",
            "year": 1949,
            "genre": "Dystopian",
            "read": true
        }])
    );

    Ok(())
}

#[test]
fn reset_persists_an_empty_list() -> Result<(), ShelfError> {
    let (_tmpdir, shelf) = temp_shelf()?;
    shelf.save(&sample_books())?;

    shelf.reset()?;

    assert_eq!(fs::read_to_string(&shelf.path)?, "[]");
    assert!(shelf.load().is_empty());

    Ok(())
}

#[test]
fn save_into_unwritable_location_fails() -> Result<(), ShelfError> {
    let tmpdir = TempDir::new()?;
    let blocker = tmpdir.path().join("not-a-dir");
    fs::write(&blocker, "plain file")?;

    let shelf = Shelf::open(blocker.join("library.json"));

    assert!(shelf.save(&sample_books()).is_err());

    Ok(())
}

//! Error case tests
//!
//! Verifies error handling for the conditions the pipeline promises to
//! report explicitly.

use std::path::Path;
use tempfile::tempdir;
use yardproof::catalog::{load_catalog, Footprint, Product};
use yardproof::error::YardproofError;
use yardproof::matcher::match_product;
use yardproof::render::{render_layout, RecordingSurface, RenderOptions};
use yardproof::scanner;

/// Scanning a nonexistent folder
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(matches!(result, Err(YardproofError::FolderNotFound(_))));
}

/// An empty folder is not an error, just empty
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path(), false);

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// Matching against an empty catalog
#[test]
fn test_match_empty_catalog() {
    let result = match_product("castle.png", &[]);
    assert!(matches!(result, Err(YardproofError::EmptyCatalog)));
}

/// Loading a missing catalog file
#[test]
fn test_load_missing_catalog() {
    let result = load_catalog(Path::new("/nonexistent/products.json"));
    assert!(matches!(result, Err(YardproofError::FileNotFound(_))));
}

/// Loading malformed catalog JSON
#[test]
fn test_load_malformed_catalog() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("products.json");
    std::fs::write(&path, "{broken").unwrap();

    let result = load_catalog(&path);
    assert!(matches!(result, Err(YardproofError::JsonParse(_))));
}

/// A malformed product fails at render time, before any drawing
#[test]
fn test_render_invalid_product() {
    let product = Product {
        id: None,
        name: "Broken".to_string(),
        setup_area: Footprint {
            length: 0.0,
            width: 18.0,
            height: None,
            sq_ft: 0.0,
        },
        actual_size: Footprint {
            length: 15.0,
            width: 13.0,
            height: None,
            sq_ft: 195.0,
        },
        ..Default::default()
    };

    let mut surface = RecordingSurface::new();
    let result = render_layout(
        &mut surface,
        &product,
        &RenderOptions::default(),
        chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    );

    assert!(matches!(result, Err(YardproofError::InvalidProduct(_))));
    assert!(surface.calls.is_empty());
}

/// Error messages carry the offending context
#[test]
fn test_error_display() {
    let errors = vec![
        YardproofError::Config("missing setting".to_string()),
        YardproofError::EmptyCatalog,
        YardproofError::InvalidProduct("Broken: zero width".to_string()),
        YardproofError::Render("font not found".to_string()),
        YardproofError::FileNotFound("products.json".to_string()),
        YardproofError::FolderNotFound("/path/to/photos".to_string()),
        YardproofError::NoImagesFound("/path/to/photos".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

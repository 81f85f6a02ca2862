//! Gallery persistence tests
//!
//! Verifies the processed-uploads cache: save/load round trips, hash
//! lookups and the cached/uncached split used by batch runs.

use tempfile::tempdir;
use yardproof::catalog::Product;
use yardproof::gallery::{compute_file_hash, filter_cached_images, GalleryEntry, GalleryFile};
use yardproof::matcher::{MatchConfidence, MatchResult};
use yardproof::scanner::ImageInfo;

fn result(name: &str) -> MatchResult {
    MatchResult {
        product: Product {
            name: name.to_string(),
            ..Default::default()
        },
        match_confidence: MatchConfidence::High,
        match_score: 0.9,
        match_reason: "Strong filename match".to_string(),
    }
}

fn entry(file_name: &str, png: &[u8]) -> GalleryEntry {
    GalleryEntry::new(
        file_name.to_string(),
        png.len() as u64,
        result("Castle"),
        png,
        "2026-08-07T00:00:00Z".to_string(),
    )
}

/// An empty folder has an empty gallery
#[test]
fn test_gallery_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let gallery = GalleryFile::load(dir.path());

    assert_eq!(gallery.len(), 0);
    assert!(gallery.is_empty());
}

/// Save then reload keeps entries intact
#[test]
fn test_gallery_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut gallery = GalleryFile::load(dir.path());
    gallery.insert("abc123".to_string(), entry("castle.png", b"fake png"));
    gallery.save(dir.path()).expect("gallery save failed");

    let loaded = GalleryFile::load(dir.path());
    assert_eq!(loaded.len(), 1);

    let cached = loaded.get("abc123").expect("entry not found");
    assert_eq!(cached.file_name, "castle.png");
    assert_eq!(cached.result.product.name, "Castle");
    assert_eq!(cached.layout_png_bytes().unwrap(), b"fake png");
}

/// Hit and miss lookups
#[test]
fn test_gallery_hit_and_miss() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut gallery = GalleryFile::load(dir.path());
    gallery.insert("known_hash".to_string(), entry("cached.png", b"png"));

    assert!(gallery.get("known_hash").is_some());
    assert!(gallery.get("unknown_hash").is_none());
}

/// A corrupt gallery file falls back to empty instead of failing
#[test]
fn test_gallery_corrupt_file_regenerates() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(GalleryFile::gallery_path(dir.path()), "{not json").unwrap();

    let gallery = GalleryFile::load(dir.path());
    assert!(gallery.is_empty());
}

/// Clear removes the file and reports whether one existed
#[test]
fn test_gallery_clear() {
    let dir = tempdir().expect("Failed to create temp dir");

    assert!(!GalleryFile::clear(dir.path()).unwrap());

    let gallery = GalleryFile::default();
    gallery.save(dir.path()).unwrap();
    assert!(GalleryFile::clear(dir.path()).unwrap());
    assert!(!GalleryFile::gallery_path(dir.path()).exists());
}

/// Batch split: known content is cached, new content is pending
#[test]
fn test_filter_cached_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    let cached_path = dir.path().join("cached.png");
    let new_path = dir.path().join("new.png");
    std::fs::write(&cached_path, b"cached bytes").unwrap();
    std::fs::write(&new_path, b"new bytes").unwrap();

    let mut gallery = GalleryFile::load(dir.path());
    let cached_hash = compute_file_hash(&cached_path).unwrap();
    gallery.insert(cached_hash, entry("cached.png", b"png"));

    let images = vec![
        ImageInfo {
            path: cached_path,
            file_name: "cached.png".to_string(),
            file_size: 12,
        },
        ImageInfo {
            path: new_path,
            file_name: "new.png".to_string(),
            file_size: 9,
        },
    ];

    let (cached, pending) = filter_cached_images(&images, &gallery);

    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].file_name, "cached.png");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].0.file_name, "new.png");
    assert!(!pending[0].1.is_empty());
}

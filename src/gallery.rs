//! Persisted results gallery
//!
//! Local key-value cache of processed uploads, keyed by the SHA-256 of
//! the original file so a re-uploaded image skips matching and
//! rendering. One JSON file per upload folder; the rendered layout PNG
//! is stored base64-encoded alongside the match result, mirroring the
//! site's browser-side gallery storage.

use crate::error::Result;
use crate::matcher::MatchResult;
use crate::scanner::ImageInfo;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const GALLERY_FILE_NAME: &str = ".yardproof-gallery.json";

/// Gallery file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryFile {
    /// Version (compatibility check)
    version: u32,
    /// File hash -> processed entry
    entries: HashMap<String, GalleryEntry>,
}

/// One processed upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub file_name: String,
    pub file_size: u64,
    /// Match result for the upload
    pub result: MatchResult,
    /// Rendered layout PNG, base64
    pub layout_png: String,
    /// RFC 3339 timestamp of generation
    pub generated_at: String,
}

impl GalleryEntry {
    pub fn new(
        file_name: String,
        file_size: u64,
        result: MatchResult,
        layout_png_bytes: &[u8],
        generated_at: String,
    ) -> Self {
        Self {
            file_name,
            file_size,
            result,
            layout_png: BASE64.encode(layout_png_bytes),
            generated_at,
        }
    }

    /// Decode the stored layout PNG
    pub fn layout_png_bytes(&self) -> Option<Vec<u8>> {
        BASE64.decode(&self.layout_png).ok()
    }
}

impl GalleryFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn gallery_path(folder: &Path) -> PathBuf {
        folder.join(GALLERY_FILE_NAME)
    }

    /// Load the gallery for a folder
    ///
    /// Unreadable, corrupt, or version-mismatched files fall back to an
    /// empty gallery; the cache regenerates on the next run.
    pub fn load(folder: &Path) -> Self {
        let path = Self::gallery_path(folder);
        if !path.exists() {
            return Self::default();
        }

        let file = match File::open(&path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, GalleryFile>(reader) {
            Ok(gallery) => {
                if gallery.version != Self::CURRENT_VERSION {
                    eprintln!("Gallery version mismatch, regenerating");
                    return Self::default();
                }
                gallery
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let path = Self::gallery_path(folder);
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn get(&self, hash: &str) -> Option<&GalleryEntry> {
        self.entries.get(hash)
    }

    pub fn insert(&mut self, hash: String, entry: GalleryEntry) {
        self.entries.insert(hash, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delete the gallery file; Ok(false) when none existed
    pub fn clear(folder: &Path) -> Result<bool> {
        let path = Self::gallery_path(folder);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }
}

impl Default for GalleryFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// SHA-256 of a file's contents, hex-encoded
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}

/// Split scanned images into cached entries and files still to process
pub fn filter_cached_images<'a>(
    images: &'a [ImageInfo],
    gallery: &GalleryFile,
) -> (Vec<GalleryEntry>, Vec<(&'a ImageInfo, String)>) {
    let mut cached = Vec::new();
    let mut uncached = Vec::new();

    for image in images {
        let hash = match compute_file_hash(&image.path) {
            Ok(h) => h,
            Err(_) => {
                // Unreadable now; let the pipeline surface the real error
                uncached.push((image, String::new()));
                continue;
            }
        };

        match gallery.get(&hash) {
            Some(entry) => cached.push(entry.clone()),
            None => uncached.push((image, hash)),
        }
    }

    (cached, uncached)
}

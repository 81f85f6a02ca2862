//! Upload folder scanning
//!
//! Finds the image files a batch run should process. Only PNG/JPEG
//! uploads are accepted, and anything over the upload size cap is
//! reported and skipped rather than failing the batch.

use crate::error::{Result, YardproofError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub file_size: u64,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// Upload size cap: 10 MB, same as the site's uploader
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Scan a folder for image files, sorted by file name
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(YardproofError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let file_size = entry.metadata().map(|m| m.len()).unwrap_or(0);

                images.push(ImageInfo {
                    path: path.to_path_buf(),
                    file_name,
                    file_size,
                });
            }
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// Rejection reason for an upload, `None` when acceptable
pub fn validate_upload(image: &ImageInfo) -> Option<String> {
    if image.file_size > MAX_UPLOAD_BYTES {
        return Some(format!(
            "{}: File too large. Max 10MB.",
            image.file_name
        ));
    }
    None
}

//! Layout export
//!
//! Naming and writing of finished layout images. The slug doubles as
//! the SEO download filename the site serves, so its shape is fixed:
//! hyphenated lower-case name plus a `-virtual-layout-{w}x{h}.png`
//! suffix.

use crate::catalog::Product;
use crate::error::Result;
use crate::render::LayoutImage;
use regex::Regex;
use std::path::{Path, PathBuf};

/// URL/filename-safe slug of a product name
///
/// Lower-cases, strips everything but word characters / whitespace /
/// hyphens, turns whitespace runs into single hyphens, collapses
/// repeated hyphens and trims hyphens at both ends.
pub fn slugify(name: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_WORD_RE: Regex = Regex::new(r"[^\w\s-]").unwrap();
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
        static ref HYPHEN_RUN_RE: Regex = Regex::new(r"-+").unwrap();
    }

    let lowered = name.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Download filename for a product's layout at a canvas size
pub fn seo_filename(product: &Product, canvas_width: u32, canvas_height: u32) -> String {
    format!(
        "{}-virtual-layout-{}x{}.png",
        slugify(&product.name),
        canvas_width,
        canvas_height
    )
}

/// Write a layout image under its SEO filename, returning the path
pub fn write_layout(layout: &LayoutImage, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(seo_filename(
        &layout.product,
        layout.width,
        layout.height,
    ));
    std::fs::write(&path, &layout.png)?;
    Ok(path)
}

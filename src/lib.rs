//! Yardproof core library
//!
//! Product matching and virtual layout generation for a bounce-house
//! rental catalog: tokenize an uploaded photo's filename, score it
//! against the product list, and render a schematic layout image for
//! the best match.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod gallery;
pub mod matcher;
pub mod render;
pub mod scanner;

pub use catalog::{load_catalog, Category, Footprint, Product};
pub use error::{Result, YardproofError};
pub use export::{seo_filename, slugify};
pub use matcher::{match_product, MatchConfidence, MatchResult};
pub use render::{generate_virtual_layout, render_layout, LayoutImage, RenderOptions};

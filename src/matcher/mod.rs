//! Product matching engine
//!
//! Matches an uploaded photo filename against the product catalog:
//! tokenize the filename, score every product, pick the best and band
//! the score into a confidence tier. Always produces a result - even a
//! zero-score match - so rendering downstream always has a product;
//! callers surface low confidence as "please verify", not as a failure.

pub mod score;
pub mod tokenize;
pub mod types;

pub use score::{calculate_match_score, levenshtein_distance};
pub use tokenize::tokenize_filename;
pub use types::{MatchConfidence, MatchResult};

use crate::catalog::Product;
use crate::error::{Result, YardproofError};

/// Scores above this are high confidence (strict bound)
const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Scores above this (and not high) are medium confidence (strict bound)
const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Match a filename against the catalog
///
/// The catalog must be non-empty. Ties are broken by catalog order: the
/// first product reaching the maximum score wins, which keeps results
/// stable across runs for identical input.
pub fn match_product(filename: &str, catalog: &[Product]) -> Result<MatchResult> {
    let first = catalog.first().ok_or(YardproofError::EmptyCatalog)?;
    let tokens = tokenize_filename(filename);

    let mut best = first;
    let mut best_score = calculate_match_score(&tokens, first);

    for product in &catalog[1..] {
        let score = calculate_match_score(&tokens, product);
        if score > best_score {
            best = product;
            best_score = score;
        }
    }

    let confidence = band_confidence(best_score);

    Ok(MatchResult {
        product: best.clone(),
        match_confidence: confidence,
        match_score: best_score,
        match_reason: confidence.reason().to_string(),
    })
}

/// Map a score to its confidence tier (strict lower bounds)
fn band_confidence(score: f64) -> MatchConfidence {
    if score > HIGH_CONFIDENCE_THRESHOLD {
        MatchConfidence::High
    } else if score > MEDIUM_CONFIDENCE_THRESHOLD {
        MatchConfidence::Medium
    } else {
        MatchConfidence::Low
    }
}

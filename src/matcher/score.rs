//! Match scoring
//!
//! Accumulates per-token evidence against a product name and clamps the
//! sum to [0, 1]. Three signals per token:
//! - whole-name substring hit (+0.3)
//! - per-word bidirectional substring hit (+0.2 each word)
//! - edit distance to the whole name below 5 (+0.1)
//!
//! The edit-distance signal is a near-duplicate heuristic against the
//! entire name; it rarely fires for long names but catches short ones.

use crate::catalog::Product;

/// Weight for a token appearing verbatim inside the product name
const NAME_SUBSTRING_WEIGHT: f64 = 0.3;
/// Weight per product-name word overlapping the token in either direction
const WORD_OVERLAP_WEIGHT: f64 = 0.2;
/// Weight for a whole-name edit distance under the threshold
const FUZZY_WEIGHT: f64 = 0.1;
/// Edit distances below this count as a fuzzy hit
const FUZZY_DISTANCE_CUTOFF: usize = 5;

/// Score a token sequence against one product
///
/// Deterministic and total over well-formed input; the raw sum is
/// truncated to 1.0, never rescaled.
pub fn calculate_match_score(tokens: &[String], product: &Product) -> f64 {
    let product_name = product.name.to_lowercase();
    let product_words: Vec<&str> = product_name.split_whitespace().collect();

    let mut score = 0.0;

    for token in tokens {
        if product_name.contains(token.as_str()) {
            score += NAME_SUBSTRING_WEIGHT;
        }

        for word in &product_words {
            if word.contains(token.as_str()) || token.contains(word) {
                score += WORD_OVERLAP_WEIGHT;
            }
        }

        if levenshtein_distance(token, &product_name) < FUZZY_DISTANCE_CUTOFF {
            score += FUZZY_WEIGHT;
        }
    }

    score.min(1.0)
}

/// Levenshtein edit distance (insert/delete/substitute, unit cost)
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b_len {
        matrix[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}

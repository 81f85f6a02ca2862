//! Filename tokenization
//!
//! Turns an uploaded image filename into the word tokens used for
//! scoring. Marketing boilerplate the site puts in every filename
//! ("bounce", "house", "rental", the state name) carries no signal and
//! is dropped, as are fragments of one or two characters.

use regex::Regex;

/// Words present in nearly every upload; useless for discrimination
const STOP_WORDS: &[&str] = &[
    "bounce",
    "house",
    "rental",
    "ri",
    "rhode",
    "island",
    "inflatable",
];

/// Tokenize a filename for matching
///
/// Strips a trailing image extension, splits on `-`/`_`/whitespace
/// runs, lowercases, then drops short tokens and stop words. Original
/// left-to-right order is preserved and duplicates are kept.
pub fn tokenize_filename(filename: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref EXTENSION_RE: Regex = Regex::new(r"(?i)\.(png|jpg|jpeg)$").unwrap();
        static ref SEPARATOR_RE: Regex = Regex::new(r"[-_\s]+").unwrap();
    }

    let stem = EXTENSION_RE.replace(filename, "");

    SEPARATOR_RE
        .split(&stem)
        .map(|t| t.to_lowercase())
        .filter(|t| t.chars().count() > 2 && !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_extension_and_stop_words() {
        assert_eq!(tokenize_filename("Castle-Bounce_House.PNG"), vec!["castle"]);
    }

    #[test]
    fn test_tokenize_extension_case_insensitive() {
        assert_eq!(tokenize_filename("pirate-ship.JpEg"), vec!["pirate", "ship"]);
        assert_eq!(tokenize_filename("pirate-ship.jpg"), vec!["pirate", "ship"]);
    }

    #[test]
    fn test_tokenize_only_trailing_extension_removed() {
        // ".png" in the middle is an ordinary token boundary, not an extension
        assert_eq!(
            tokenize_filename("castle.png-backup.png"),
            vec!["castle.png", "backup"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize_filename("a-bb-combo-42.jpg"), vec!["combo"]);
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        assert_eq!(
            tokenize_filename("mega_castle_mega.png"),
            vec!["mega", "castle", "mega"]
        );
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(
            tokenize_filename("Pirate Ship-2024_final.jpeg"),
            vec!["pirate", "ship", "2024", "final"]
        );
    }

    #[test]
    fn test_tokenize_all_stop_words_yields_empty() {
        assert!(tokenize_filename("bounce-house-rental-ri.png").is_empty());
    }
}

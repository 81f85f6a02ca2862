//! Matcher behavior through the public API
//!
//! Covers the tokenizer, score clamping, confidence banding and the
//! first-wins tie-break.

use yardproof::catalog::{Category, Footprint, Product};
use yardproof::matcher::{
    calculate_match_score, match_product, tokenize_filename, MatchConfidence,
};

fn product(id: u32, name: &str) -> Product {
    Product {
        id: Some(id),
        name: name.to_string(),
        category: Category::BounceHouse,
        setup_area: Footprint {
            length: 20.0,
            width: 18.0,
            height: Some(16.0),
            sq_ft: 360.0,
        },
        actual_size: Footprint {
            length: 15.0,
            width: 13.0,
            height: Some(14.0),
            sq_ft: 195.0,
        },
    }
}

/// Extension and stop words never reach scoring
#[test]
fn test_tokenizer_reference_case() {
    assert_eq!(tokenize_filename("Castle-Bounce_House.PNG"), vec!["castle"]);
}

/// Same input, same score, every time
#[test]
fn test_scoring_is_deterministic() {
    let p = product(1, "Pirate Ship Castle");
    let tokens = tokenize_filename("pirate-ship-2024.jpg");

    let first = calculate_match_score(&tokens, &p);
    for _ in 0..10 {
        assert_eq!(calculate_match_score(&tokens, &p), first);
    }
}

/// Raw accumulation above 1.0 is truncated, never rescaled
#[test]
fn test_score_clamped_to_unit_range() {
    let p = product(1, "Pirate Ship Castle Combo");
    let tokens = tokenize_filename("pirate-ship-castle-combo-pirate-ship.png");

    let score = calculate_match_score(&tokens, &p);
    assert_eq!(score, 1.0);
}

/// A catalog of many products: every score stays in [0, 1]
#[test]
fn test_all_scores_in_unit_range() {
    let catalog = vec![
        product(1, "Pirate Ship Castle"),
        product(2, "Tropical Water Slide"),
        product(3, "Princess Palace Combo"),
        product(4, "Sports Arena"),
    ];

    for filename in [
        "pirate-ship.png",
        "frozen-princess-palace-combo.jpg",
        "unrelated-photo-123.jpeg",
        "sports.png",
    ] {
        let tokens = tokenize_filename(filename);
        for p in &catalog {
            let score = calculate_match_score(&tokens, p);
            assert!((0.0..=1.0).contains(&score), "{filename} vs {}", p.name);
        }
    }
}

/// Two products with the same top score: catalog order decides
#[test]
fn test_tie_break_is_stable() {
    let catalog = vec![
        product(10, "Rainbow Castle"),
        product(20, "Rainbow Castle"),
        product(30, "Rainbow Castle"),
    ];

    for _ in 0..5 {
        let result = match_product("rainbow-castle.jpg", &catalog).unwrap();
        assert_eq!(result.product.id, Some(10));
    }
}

/// A pirate ship upload against a pirate ship product matches high
#[test]
fn test_pirate_ship_scenario_matches_high() {
    let catalog = vec![Product {
        id: Some(1),
        name: "Pirate Ship Castle".to_string(),
        category: Category::BounceHouse,
        setup_area: Footprint {
            length: 20.0,
            width: 18.0,
            height: None,
            sq_ft: 360.0,
        },
        actual_size: Footprint {
            length: 15.0,
            width: 13.0,
            height: None,
            sq_ft: 195.0,
        },
    }];

    let tokens = tokenize_filename("pirate-ship-2024.jpg");
    assert_eq!(tokens, vec!["pirate", "ship", "2024"]);

    let result = match_product("pirate-ship-2024.jpg", &catalog).unwrap();
    assert_eq!(result.match_confidence, MatchConfidence::High);
    assert!(result.match_score > 0.7);
    assert_eq!(result.match_reason, "Strong filename match");
}

/// A garbage filename still returns the best (low) match
#[test]
fn test_unmatched_filename_returns_low_not_error() {
    let catalog = vec![product(1, "Pirate Ship Castle")];
    let result = match_product("IMG_0000.png", &catalog).unwrap();

    assert_eq!(result.match_confidence, MatchConfidence::Low);
    assert_eq!(result.match_reason, "Weak match - please verify");
}

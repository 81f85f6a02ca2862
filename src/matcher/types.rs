use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Confidence tier summarizing a match score for end-user display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    /// Fixed user-facing reason string for the tier
    pub fn reason(&self) -> &'static str {
        match self {
            MatchConfidence::High => "Strong filename match",
            MatchConfidence::Medium => "Partial filename match",
            MatchConfidence::Low => "Weak match - please verify",
        }
    }
}

impl std::fmt::Display for MatchConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchConfidence::High => write!(f, "high"),
            MatchConfidence::Medium => write!(f, "medium"),
            MatchConfidence::Low => write!(f, "low"),
        }
    }
}

/// Result of matching a filename against the catalog
///
/// A copy of the matched product plus score metadata. Created fresh per
/// match call and immutable afterwards; persistence is a caller concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub product: Product,
    pub match_confidence: MatchConfidence,
    pub match_score: f64,
    pub match_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_reason() {
        assert_eq!(MatchConfidence::High.reason(), "Strong filename match");
        assert_eq!(
            MatchConfidence::Low.reason(),
            "Weak match - please verify"
        );
    }

    #[test]
    fn test_match_result_serialize_camel_case() {
        let result = MatchResult {
            product: Product {
                name: "Castle Bounce".to_string(),
                ..Default::default()
            },
            match_confidence: MatchConfidence::High,
            match_score: 0.9,
            match_reason: MatchConfidence::High.reason().to_string(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"matchConfidence\":\"high\""));
        assert!(json.contains("\"matchScore\":0.9"));
        assert!(json.contains("\"name\":\"Castle Bounce\""));
    }
}

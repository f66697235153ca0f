use serde::{Deserialize, Serialize};
use std::fmt;

/// The ranking policies a caller can ask for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Popularity,
    ContentBased,
    Hybrid,
}

impl StrategyKind {
    /// Resolve a requested strategy name. Matching is case-insensitive and
    /// ignores surrounding whitespace.
    ///
    /// This mapping is total: empty, missing or unrecognized names resolve
    /// to [`StrategyKind::Popularity`] so a caller always gets some
    /// recommendation rather than an error.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "popular" | "popularity" => StrategyKind::Popularity,
            "content" | "content_based" | "content-based" => StrategyKind::ContentBased,
            "hybrid" | "mixed" | "mix" | "combined" => StrategyKind::Hybrid,
            _ => StrategyKind::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Popularity => "popularity",
            StrategyKind::ContentBased => "content_based",
            StrategyKind::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonyms() {
        assert_eq!(StrategyKind::from_name("popular"), StrategyKind::Popularity);
        for name in ["content", "content_based", "content-based"] {
            assert_eq!(StrategyKind::from_name(name), StrategyKind::ContentBased, "{name}");
        }
        for name in ["hybrid", "mixed", "mix", "combined"] {
            assert_eq!(StrategyKind::from_name(name), StrategyKind::Hybrid, "{name}");
        }
    }

    #[test]
    fn test_case_and_whitespace_ignored() {
        assert_eq!(StrategyKind::from_name("  Content-Based "), StrategyKind::ContentBased);
        assert_eq!(StrategyKind::from_name("HYBRID"), StrategyKind::Hybrid);
    }

    #[test]
    fn test_unknown_defaults_to_popularity() {
        assert_eq!(StrategyKind::from_name(""), StrategyKind::Popularity);
        assert_eq!(StrategyKind::from_name("   "), StrategyKind::Popularity);
        assert_eq!(StrategyKind::from_name("collaborative"), StrategyKind::Popularity);
    }
}

use serde::{Deserialize, Serialize};

/// Queries longer than this are cut down by the extractor
pub const MAX_TERMS_LEN: usize = 80;

/// Which extraction strategy produced a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    BrandModel,
    FeatureType,
    Keywords,
    TitleCleaned,
}

/// How much to trust a generated query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Numeric rank for ordering: high=2, medium=1, low=0
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::High => 2,
            Confidence::Medium => 1,
            Confidence::Low => 0,
        }
    }
}

/// A candidate search query with its provenance and confidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStrategy {
    pub strategy: StrategyKind,
    pub terms: String,
    pub confidence: Confidence,
}

impl SearchStrategy {
    pub fn new(strategy: StrategyKind, terms: String, confidence: Confidence) -> Self {
        Self {
            strategy,
            terms,
            confidence,
        }
    }
}

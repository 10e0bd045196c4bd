//! Cleaned-title strategy: the raw title minus listing hype.

use crate::models::search::MAX_TERMS_LEN;
use crate::models::{Confidence, Item, SearchStrategy, StrategyKind};

/// Filler words sellers pad titles with; they hurt search relevance and
/// are stripped case-insensitively.
pub const NOISE_WORDS: &[&str] = &[
    "rare", "vintage", "excellent", "fast", "free", "shipping", "must", "see", "look", "wow",
];

pub fn extract(item: &Item) -> Option<SearchStrategy> {
    let cleaned = clean_title(&item.title);
    if cleaned.is_empty() {
        return None;
    }
    Some(SearchStrategy::new(
        StrategyKind::TitleCleaned,
        cleaned,
        Confidence::Medium,
    ))
}

/// Strip noise words from a title, collapse whitespace, and cut to the
/// query length cap on a word boundary. Casing and order of the kept
/// words are preserved.
pub fn clean_title(title: &str) -> String {
    let kept: Vec<&str> = title
        .split_whitespace()
        .filter(|word| !is_noise(word))
        .collect();
    super::join_capped(&kept, MAX_TERMS_LEN)
}

fn is_noise(word: &str) -> bool {
    let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
    NOISE_WORDS.iter().any(|noise| bare.eq_ignore_ascii_case(noise))
}

//! Keyword strategy mined from the item description.

use crate::models::search::MAX_TERMS_LEN;
use crate::models::{Confidence, Item, SearchStrategy, StrategyKind};
use std::collections::{HashMap, HashSet};

const MIN_WORD_LEN: usize = 3;
const MIN_REPEATED_LEN: usize = 4;
const REPEAT_THRESHOLD: usize = 2;
const MAX_KEYWORDS: usize = 6;

/// Mine the description for capitalized proper nouns, then for terms the
/// seller repeats. Words already present in `covered` (queries built from
/// the specifics) and title noise words are skipped. Low confidence: free
/// text is the weakest signal the item carries.
pub fn extract(item: &Item, covered: &HashSet<String>) -> Option<SearchStrategy> {
    if item.description.trim().is_empty() {
        return None;
    }

    let words: Vec<&str> = item
        .description
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in &words {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    let mut picked: Vec<&str> = Vec::new();
    let mut picked_lower: HashSet<String> = HashSet::new();

    // Proper nouns first, in the order the description mentions them
    for &word in &words {
        if picked.len() >= MAX_KEYWORDS {
            break;
        }
        if !word.chars().next().map_or(false, char::is_uppercase) {
            continue;
        }
        let lower = word.to_lowercase();
        if covered.contains(&lower) || is_noise(&lower) || picked_lower.contains(&lower) {
            continue;
        }
        picked_lower.insert(lower);
        picked.push(word);
    }

    // Then longer terms the description repeats
    for &word in &words {
        if picked.len() >= MAX_KEYWORDS {
            break;
        }
        let lower = word.to_lowercase();
        if word.chars().count() < MIN_REPEATED_LEN
            || counts.get(&lower).copied().unwrap_or(0) < REPEAT_THRESHOLD
        {
            continue;
        }
        if covered.contains(&lower) || is_noise(&lower) || picked_lower.contains(&lower) {
            continue;
        }
        picked_lower.insert(lower);
        picked.push(word);
    }

    if picked.is_empty() {
        return None;
    }

    Some(SearchStrategy::new(
        StrategyKind::Keywords,
        super::join_capped(&picked, MAX_TERMS_LEN),
        Confidence::Low,
    ))
}

fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_noise(lower: &str) -> bool {
    super::title::NOISE_WORDS.contains(&lower)
}

//! Search term extraction: one module per strategy.
//!
//! Each strategy inspects a different slice of the item (specifics,
//! description, title) and yields at most one candidate query.

pub mod brand_model;
pub mod feature_type;
pub mod keywords;
pub mod title;

pub use title::{clean_title, NOISE_WORDS};

use crate::models::{Item, SearchStrategy};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Derive candidate search queries from an item, best first.
///
/// Strategies are generated in a fixed order (brand/model, feature/type,
/// keywords, cleaned title) and then stably sorted by descending
/// confidence, so equal-confidence entries keep generation order. Never
/// empty when the item has a non-empty title.
pub fn extract_search_terms(item: &Item) -> Vec<SearchStrategy> {
    let mut strategies = Vec::new();

    if let Some(strategy) = brand_model::extract(item) {
        strategies.push(strategy);
    }
    if let Some(strategy) = feature_type::extract(item) {
        strategies.push(strategy);
    }

    // Words the specifics-based queries already cover; the description
    // miner skips these to avoid redundant queries.
    let covered: HashSet<String> = strategies
        .iter()
        .flat_map(|s| s.terms.split_whitespace())
        .map(|word| word.to_lowercase())
        .collect();

    if let Some(strategy) = keywords::extract(item, &covered) {
        strategies.push(strategy);
    }
    if let Some(strategy) = title::extract(item) {
        strategies.push(strategy);
    }

    strategies.sort_by_key(|s| Reverse(s.confidence.rank()));
    strategies
}

/// Join words into a query, stopping before the length cap is crossed
pub(crate) fn join_capped(words: &[&str], cap: usize) -> String {
    let mut terms = String::new();
    for word in words {
        let needed = if terms.is_empty() {
            word.chars().count()
        } else {
            word.chars().count() + 1
        };
        if terms.chars().count() + needed > cap {
            break;
        }
        if !terms.is_empty() {
            terms.push(' ');
        }
        terms.push_str(word);
    }
    terms
}

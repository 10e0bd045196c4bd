//! Feature/type strategy from domain-indicative item specifics.

use crate::models::search::MAX_TERMS_LEN;
use crate::models::{Confidence, Item, SearchStrategy, StrategyKind};

/// Specifics that describe what kind of thing the item is
const FEATURE_FIELDS: &[&str] = &["Type", "Material", "Era"];

pub fn extract(item: &Item) -> Option<SearchStrategy> {
    let parts: Vec<&str> = FEATURE_FIELDS
        .iter()
        .filter_map(|field| item.specific(field))
        .collect();

    if parts.is_empty() {
        return None;
    }

    Some(SearchStrategy::new(
        StrategyKind::FeatureType,
        super::join_capped(&parts, MAX_TERMS_LEN),
        Confidence::Medium,
    ))
}

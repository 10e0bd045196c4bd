//! Brand/model strategy from item specifics.

use crate::models::{Confidence, Item, SearchStrategy, StrategyKind};

const BRAND_FIELDS: &[&str] = &["Brand"];
const MODEL_FIELDS: &[&str] = &["Model", "Character"];

/// Build a query from the Brand and Model (or Character) specifics.
///
/// Both present yields high confidence; one alone is still a usable
/// medium-confidence query. Absent specifics yield no strategy at all.
pub fn extract(item: &Item) -> Option<SearchStrategy> {
    let brand = first_specific(item, BRAND_FIELDS);
    let model = first_specific(item, MODEL_FIELDS);

    let (terms, confidence) = match (brand, model) {
        (Some(brand), Some(model)) => (format!("{} {}", brand, model), Confidence::High),
        (Some(brand), None) => (brand.to_string(), Confidence::Medium),
        (None, Some(model)) => (model.to_string(), Confidence::Medium),
        (None, None) => return None,
    };

    Some(SearchStrategy::new(
        StrategyKind::BrandModel,
        terms,
        confidence,
    ))
}

fn first_specific<'a>(item: &'a Item, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| item.specific(field))
}

//! Unit tests for the feature/type strategy

use pricetrix::extraction::feature_type;
use pricetrix::models::{Confidence, Item, StrategyKind};

fn create_item(specifics: &[(&str, &str)]) -> Item {
    let mut item = Item::new("Some listing".to_string());
    for (name, value) in specifics {
        item = item.with_specific(name.to_string(), value.to_string());
    }
    item
}

#[test]
fn test_joins_feature_fields_in_fixed_order() {
    let item = create_item(&[("Era", "Victorian"), ("Type", "Mantel Clock"), ("Material", "Brass")]);
    let strategy = feature_type::extract(&item).unwrap();
    assert_eq!(strategy.strategy, StrategyKind::FeatureType);
    assert_eq!(strategy.confidence, Confidence::Medium);
    assert_eq!(strategy.terms, "Mantel Clock Brass Victorian");
}

#[test]
fn test_subset_of_fields() {
    let item = create_item(&[("Material", "Brass")]);
    let strategy = feature_type::extract(&item).unwrap();
    assert_eq!(strategy.terms, "Brass");
}

#[test]
fn test_no_feature_fields_yields_no_strategy() {
    let item = create_item(&[("Brand", "Seiko")]);
    assert!(feature_type::extract(&item).is_none());
}

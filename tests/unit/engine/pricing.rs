//! Unit tests for pricing orchestration

use chrono::Utc;
use pricetrix::config::Config;
use pricetrix::engine::{AnalysisRequest, PricingEngine};
use pricetrix::error::{PricingError, SamplingError};
use pricetrix::models::{Item, SoldItem, StrategyKind};
use pricetrix::sampling::{PlaceholderSampler, SoldItemSampler};
use std::collections::HashMap;

/// Sampler that returns the same canned prices for every query
struct FixedSampler {
    prices: Vec<f64>,
}

impl SoldItemSampler for FixedSampler {
    fn fetch_sold_items(&self, terms: &str, limit: usize) -> Result<Vec<SoldItem>, SamplingError> {
        Ok(self
            .prices
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, &price)| SoldItem::new(format!("{} {}", terms, i + 1), price, Utc::now()))
            .collect())
    }
}

/// Sampler with per-query results; unknown queries find nothing
struct ScriptedSampler {
    results: HashMap<String, Vec<f64>>,
}

impl SoldItemSampler for ScriptedSampler {
    fn fetch_sold_items(&self, terms: &str, limit: usize) -> Result<Vec<SoldItem>, SamplingError> {
        let prices = self.results.get(terms).cloned().unwrap_or_default();
        Ok(prices
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, &price)| SoldItem::new(format!("{} {}", terms, i + 1), price, Utc::now()))
            .collect())
    }
}

struct FailingSampler;

impl SoldItemSampler for FailingSampler {
    fn fetch_sold_items(&self, _terms: &str, _limit: usize) -> Result<Vec<SoldItem>, SamplingError> {
        Err(SamplingError::new("connection timed out".to_string()))
    }
}

fn create_item() -> Item {
    Item::new("Seiko SKX007 Automatic Dive Watch".to_string())
        .with_specific("Brand".to_string(), "Seiko".to_string())
        .with_specific("Model".to_string(), "SKX007".to_string())
}

#[test]
fn test_successful_analysis() {
    let engine = PricingEngine::new(
        Config::default(),
        FixedSampler {
            prices: vec![50.0, 100.0, 150.0],
        },
    );
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(result.success);
    assert!(result.message.is_none());
    assert_eq!(result.successful_strategy, Some(StrategyKind::BrandModel));
    assert_eq!(result.sold_items.len(), 3);
    let analysis = result.price_analysis.unwrap();
    assert_eq!(analysis.median_price, 100.0);
    assert_eq!(result.markup_percent, Some(15.0));
    assert_eq!(result.suggested_price, Some(115.0));
}

#[test]
fn test_insufficient_sample_reports_counts() {
    let engine = PricingEngine::new(
        Config::default(),
        FixedSampler {
            prices: vec![40.0, 60.0],
        },
    );
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(!result.success);
    assert!(result.price_analysis.is_none());
    assert!(result.suggested_price.is_none());
    let message = result.message.unwrap();
    assert!(message.contains("2"), "message was: {}", message);
    assert!(message.contains("3"), "message was: {}", message);
    // The shortfall sample is kept so a human can inspect what was found
    assert_eq!(result.sold_items.len(), 2);
}

#[test]
fn test_falls_back_to_next_strategy() {
    // The best-confidence query comes up short, so the next one is tried;
    // the winner is recorded on the result.
    let mut results = HashMap::new();
    results.insert("Seiko SKX007".to_string(), vec![40.0, 60.0]);
    results.insert(
        "Seiko SKX007 Automatic Dive Watch".to_string(),
        vec![80.0, 100.0, 120.0, 140.0],
    );
    let engine = PricingEngine::new(Config::default(), ScriptedSampler { results });
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(result.success);
    assert_eq!(result.successful_strategy, Some(StrategyKind::TitleCleaned));
    assert_eq!(result.sold_items.len(), 4);
}

#[test]
fn test_all_strategies_short_reports_first_attempt() {
    // When every query falls short, the shortfall reported is the first
    // (best-confidence) attempt's.
    let mut results = HashMap::new();
    results.insert("Seiko SKX007".to_string(), vec![40.0]);
    results.insert(
        "Seiko SKX007 Automatic Dive Watch".to_string(),
        vec![80.0, 100.0],
    );
    let engine = PricingEngine::new(Config::default(), ScriptedSampler { results });
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(!result.success);
    assert_eq!(result.sold_items.len(), 1);
    let message = result.message.unwrap();
    assert!(message.contains("1"), "message was: {}", message);
}

#[test]
fn test_explicit_terms_used_verbatim() {
    let engine = PricingEngine::new(
        Config::default(),
        FixedSampler {
            prices: vec![10.0, 20.0, 30.0],
        },
    );
    let request = AnalysisRequest::for_terms(vec!["omega seamaster 300m".to_string()]);
    let result = engine.analyze(&request).unwrap();

    assert!(result.success);
    assert_eq!(result.search_terms.len(), 1);
    assert_eq!(result.search_terms[0].terms, "omega seamaster 300m");
    assert_eq!(result.successful_strategy, Some(StrategyKind::Keywords));
}

#[test]
fn test_markup_override_per_call() {
    let engine = PricingEngine::new(
        Config::default(),
        FixedSampler {
            prices: vec![50.0, 100.0, 150.0],
        },
    );
    let request = AnalysisRequest::for_item(create_item()).with_markup_percent(10.0);
    let result = engine.analyze(&request).unwrap();

    assert_eq!(result.markup_percent, Some(10.0));
    assert_eq!(result.suggested_price, Some(110.0));
}

#[test]
fn test_sample_limit_is_clamped() {
    let engine = PricingEngine::new(
        Config::default(),
        FixedSampler {
            prices: (1..=40).map(|n| n as f64).collect(),
        },
    );
    let request = AnalysisRequest::for_item(create_item()).with_sample_limit(40);
    let result = engine.analyze(&request).unwrap();

    assert!(result.success);
    assert_eq!(result.sold_items.len(), 20);
}

#[test]
fn test_no_input_is_an_error() {
    let engine = PricingEngine::new(Config::default(), FixedSampler { prices: vec![] });
    let err = engine.analyze(&AnalysisRequest::default()).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput { .. }));
}

#[test]
fn test_unusable_item_is_an_error() {
    let engine = PricingEngine::new(Config::default(), FixedSampler { prices: vec![] });
    let request = AnalysisRequest::for_item(Item::new("".to_string()));
    let err = engine.analyze(&request).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput { .. }));
}

#[test]
fn test_blank_explicit_terms_are_an_error() {
    let engine = PricingEngine::new(Config::default(), FixedSampler { prices: vec![] });
    let request = AnalysisRequest::for_terms(vec!["  ".to_string(), "".to_string()]);
    let err = engine.analyze(&request).unwrap_err();
    assert!(matches!(err, PricingError::InvalidInput { .. }));
}

#[test]
fn test_placeholder_sampler_finds_nothing() {
    let engine = PricingEngine::new(Config::default(), PlaceholderSampler);
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(!result.success);
    assert!(result.sold_items.is_empty());
    let message = result.message.unwrap();
    assert!(message.contains("0"), "message was: {}", message);
}

#[test]
fn test_sampler_failure_becomes_insufficient_result() {
    let engine = PricingEngine::new(Config::default(), FailingSampler);
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();

    assert!(!result.success);
    assert!(result.sold_items.is_empty());
}

#[test]
fn test_sampler_failure_raises_when_configured() {
    let config = Config {
        fail_on_sampling_error: true,
        ..Config::default()
    };
    let engine = PricingEngine::new(config, FailingSampler);
    let err = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap_err();
    assert!(matches!(err, PricingError::Sampling(_)));
}

#[test]
fn test_min_results_is_configurable() {
    let config = Config {
        min_results: 2,
        ..Config::default()
    };
    let engine = PricingEngine::new(
        config,
        FixedSampler {
            prices: vec![40.0, 60.0],
        },
    );
    let result = engine.analyze(&AnalysisRequest::for_item(create_item())).unwrap();
    assert!(result.success);
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::search::{SearchStrategy, StrategyKind};
use crate::models::sold::SoldItem;

/// Descriptive statistics over a sold-item sample.
///
/// For any non-empty sample: `min_price <= median_price <= max_price` and
/// `average_price` lies within `[min_price, max_price]`. `std_deviation`
/// is the sample standard deviation (n-1), 0 for a single observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAnalysis {
    pub count: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub average_price: f64,
    pub median_price: f64,
    pub std_deviation: f64,
}

/// Terminal output of one analysis run. Not persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub search_terms: Vec<SearchStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_strategy: Option<StrategyKind>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sold_items: Vec<SoldItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_analysis: Option<PriceAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percent: Option<f64>,
    pub analyzed_at: DateTime<Utc>,
}

impl PricingResult {
    pub fn succeeded(
        search_terms: Vec<SearchStrategy>,
        successful_strategy: StrategyKind,
        sold_items: Vec<SoldItem>,
        price_analysis: PriceAnalysis,
        suggested_price: f64,
        markup_percent: f64,
    ) -> Self {
        Self {
            success: true,
            message: None,
            search_terms,
            successful_strategy: Some(successful_strategy),
            sold_items,
            price_analysis: Some(price_analysis),
            suggested_price: Some(suggested_price),
            markup_percent: Some(markup_percent),
            analyzed_at: Utc::now(),
        }
    }

    pub fn failed(
        message: String,
        search_terms: Vec<SearchStrategy>,
        sold_items: Vec<SoldItem>,
    ) -> Self {
        Self {
            success: false,
            message: Some(message),
            search_terms,
            successful_strategy: None,
            sold_items,
            price_analysis: None,
            suggested_price: None,
            markup_percent: None,
            analyzed_at: Utc::now(),
        }
    }
}

//! Simulated sold-listing source.
//!
//! Demonstration stand-in for a real sold-listings search: each query maps
//! to a hidden base price, and samples scatter around it. Prices, dates,
//! conditions and shipping are randomized per call, so repeat analyses are
//! not reproducible with this sampler.

use chrono::{Duration, Utc};
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::analysis::round_to_cents;
use crate::error::SamplingError;
use crate::models::{ItemCondition, SoldItem};
use crate::sampling::{SoldItemSampler, MAX_SAMPLE_LIMIT};

/// Samples scatter up to this fraction around the hidden base price
const PRICE_JITTER: f64 = 0.3;
/// No simulated listing sells below this
const PRICE_FLOOR: f64 = 5.0;
/// Chance a simulated listing shipped free
const FREE_SHIPPING_RATE: f64 = 0.4;

pub struct SimulatedSampler {
    days_back: i64,
}

impl SimulatedSampler {
    pub fn new() -> Self {
        Self::with_days_back(90)
    }

    /// Restrict simulated sold dates to the last `days_back` days
    pub fn with_days_back(days_back: i64) -> Self {
        Self {
            days_back: days_back.max(1),
        }
    }

    /// Hidden base price for a query, stable across calls so the same
    /// search scatters around the same center
    fn base_price(terms: &str) -> f64 {
        let mut hasher = DefaultHasher::new();
        terms.to_lowercase().hash(&mut hasher);
        20.0 + (hasher.finish() % 180) as f64
    }
}

impl SoldItemSampler for SimulatedSampler {
    fn fetch_sold_items(&self, terms: &str, limit: usize) -> Result<Vec<SoldItem>, SamplingError> {
        if terms.trim().is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.min(MAX_SAMPLE_LIMIT);
        let base = Self::base_price(terms);
        let mut rng = rand::thread_rng();
        let mut items = Vec::with_capacity(limit);

        for n in 0..limit {
            let jitter = rng.gen_range(-PRICE_JITTER..=PRICE_JITTER);
            let price = round_to_cents((base * (1.0 + jitter)).max(PRICE_FLOOR));

            let days_ago = rng.gen_range(0..self.days_back);
            let sold_date = Utc::now() - Duration::days(days_ago);

            let conditions = ItemCondition::all();
            let condition = conditions[rng.gen_range(0..conditions.len())];

            let shipping_cost = if rng.gen_bool(FREE_SHIPPING_RATE) {
                0.0
            } else {
                round_to_cents(rng.gen_range(3.0..15.0))
            };

            items.push(
                SoldItem::new(format!("{} (sold listing {})", terms, n + 1), price, sold_date)
                    .with_condition(condition)
                    .with_shipping_cost(shipping_cost),
            );
        }

        Ok(items)
    }
}

impl Default for SimulatedSampler {
    fn default() -> Self {
        Self::new()
    }
}

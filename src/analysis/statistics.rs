//! Descriptive statistics over a sold-item sample.

use crate::analysis::math;
use crate::models::{PriceAnalysis, SoldItem};

/// Compute min/max/mean/median/std-dev over the sample prices.
///
/// Returns `None` for an empty sample; the engine enforces its minimum
/// sample size before calling, so insufficiency never reaches here as a
/// panic.
pub fn analyze_prices(sold_items: &[SoldItem]) -> Option<PriceAnalysis> {
    if sold_items.is_empty() {
        return None;
    }

    let prices: Vec<f64> = sold_items.iter().map(|item| item.price).collect();

    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average_price = math::mean(&prices)?;
    let median_price = math::median(&prices)?;
    let std_deviation = math::sample_std_dev(&prices)?;

    Some(PriceAnalysis {
        count: sold_items.len(),
        min_price,
        max_price,
        average_price,
        median_price,
        std_deviation,
    })
}

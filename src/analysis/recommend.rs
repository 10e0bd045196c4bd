//! Median-based price recommendation.

use crate::models::PriceAnalysis;

/// Suggest a listing price: median sold price plus the given markup,
/// rounded to cents. The median resists the outliers that show up in any
/// scrape of sold listings, which is why it is the base rather than the
/// mean.
pub fn suggest_price(analysis: &PriceAnalysis, markup_percent: f64) -> f64 {
    round_to_cents(analysis.median_price * (1.0 + markup_percent / 100.0))
}

/// Round a price to 2 decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Sold-item sampler interface for future data source integration.
//!
//! The engine only ever sees this trait; swapping the simulated source for
//! a real marketplace search API must not touch the statistics or
//! recommendation layers.

pub mod simulated;

pub use simulated::SimulatedSampler;

use crate::error::SamplingError;
use crate::models::SoldItem;

/// Hard upper bound on how many sold listings any sampler may return
pub const MAX_SAMPLE_LIMIT: usize = 20;

pub trait SoldItemSampler {
    /// Fetch up to `limit` comparable sold listings for a query.
    ///
    /// A query matching nothing yields an empty vec, not an error; the
    /// caller decides whether the sample is sufficient.
    fn fetch_sold_items(&self, terms: &str, limit: usize) -> Result<Vec<SoldItem>, SamplingError>;
}

/// Sampler that never finds anything; wiring stub for tests and callers
/// without a data source.
pub struct PlaceholderSampler;

impl SoldItemSampler for PlaceholderSampler {
    fn fetch_sold_items(&self, _terms: &str, _limit: usize) -> Result<Vec<SoldItem>, SamplingError> {
        Ok(Vec::new())
    }
}

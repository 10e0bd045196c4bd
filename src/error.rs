//! Typed errors for the pricing engine

use thiserror::Error;

/// Errors raised by [`crate::engine::PricingEngine::analyze`].
///
/// Insufficient sample sizes are not errors: they come back as a
/// `success: false` [`crate::models::PricingResult`] so callers can show the
/// shortfall without error-handling boilerplate.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Neither explicit search terms nor the item yielded a usable query
    #[error("no usable search terms: {reason}")]
    InvalidInput { reason: String },

    /// A sampler failure, propagated only when the engine is configured
    /// to raise instead of treating it as an empty sample
    #[error("sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

impl PricingError {
    pub fn invalid_input(reason: &str) -> Self {
        Self::InvalidInput {
            reason: reason.to_string(),
        }
    }
}

/// Failure surfaced by a sampler implementation (network, parse, rate limit).
///
/// Real data sources own their retry/backoff and collapse whatever went
/// wrong into a single message for the orchestration layer.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SamplingError {
    pub message: String,
}

impl SamplingError {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

//! Price suggestion engine for sold-listing analysis.
//!
//! Derives ranked search queries from a listing item, samples comparable
//! sold listings through a pluggable [`sampling::SoldItemSampler`], computes
//! descriptive statistics over the sample, and recommends a listing price
//! with a configurable markup.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod models;
pub mod sampling;

pub use config::Config;
pub use engine::{AnalysisRequest, PricingEngine};
pub use error::{PricingError, SamplingError};

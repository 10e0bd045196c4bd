//! Statistics and price recommendation over sold-item samples.

pub mod math;
pub mod recommend;
pub mod statistics;

pub use recommend::{round_to_cents, suggest_price};
pub use statistics::analyze_prices;

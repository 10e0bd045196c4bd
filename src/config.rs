//! Engine configuration loaded from the environment with sane defaults

use std::env;

/// Tunables for a [`crate::engine::PricingEngine`].
///
/// Threaded into the engine constructor rather than read as process-wide
/// state, so engines stay testable and reentrant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Markup applied on top of the median sold price, in percent
    pub default_markup_percent: f64,
    /// How many sold listings to request per query
    pub max_results: usize,
    /// Minimum sample size before statistics are computed
    pub min_results: usize,
    /// Recency window for the sampler, in days
    pub days_back: i64,
    /// Raise sampler failures instead of treating them as empty samples
    pub fail_on_sampling_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_markup_percent: 15.0,
            max_results: 10,
            min_results: 3,
            days_back: 90,
            fail_on_sampling_error: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_markup_percent: env_parse("MARKUP_PERCENT", defaults.default_markup_percent),
            max_results: env_parse("MAX_RESULTS", defaults.max_results),
            min_results: env_parse("MIN_RESULTS", defaults.min_results),
            days_back: env_parse("DAYS_BACK", defaults.days_back),
            fail_on_sampling_error: env_parse(
                "FAIL_ON_SAMPLING_ERROR",
                defaults.fail_on_sampling_error,
            ),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Current runtime environment name (production, sandbox, development)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

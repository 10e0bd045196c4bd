//! Pricing engine: extraction, sampling with strategy fallback,
//! statistics, recommendation.

use tracing::{debug, warn};

use crate::analysis::{analyze_prices, suggest_price};
use crate::config::Config;
use crate::engine::request::AnalysisRequest;
use crate::error::PricingError;
use crate::extraction::extract_search_terms;
use crate::models::{Confidence, PricingResult, SearchStrategy, SoldItem, StrategyKind};
use crate::sampling::{SoldItemSampler, MAX_SAMPLE_LIMIT};

pub struct PricingEngine<S: SoldItemSampler> {
    config: Config,
    sampler: S,
}

impl<S: SoldItemSampler> PricingEngine<S> {
    pub fn new(config: Config, sampler: S) -> Self {
        Self { config, sampler }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one full analysis.
    ///
    /// Candidate queries are tried best-confidence first; the first one
    /// reaching `min_results` sold listings wins and is recorded on the
    /// result. When every query comes up short, the shortfall of the first
    /// attempt is reported as a `success: false` result, never as an error.
    /// Only unusable input (no derivable query) is an `Err`.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<PricingResult, PricingError> {
        let strategies = self.resolve_strategies(request)?;
        let limit = request
            .sample_limit
            .unwrap_or(self.config.max_results)
            .min(MAX_SAMPLE_LIMIT);
        let markup_percent = request
            .markup_percent
            .unwrap_or(self.config.default_markup_percent);

        let mut first_attempt: Option<Vec<SoldItem>> = None;

        for strategy in &strategies {
            let sold_items = match self.sampler.fetch_sold_items(&strategy.terms, limit) {
                Ok(items) => items,
                Err(err) => {
                    if self.config.fail_on_sampling_error {
                        return Err(err.into());
                    }
                    warn!(
                        strategy = ?strategy.strategy,
                        error = %err,
                        "sampler failed for {:?}, treating as no results",
                        strategy.strategy
                    );
                    Vec::new()
                }
            };

            debug!(
                strategy = ?strategy.strategy,
                terms = %strategy.terms,
                count = sold_items.len(),
                "sampled {} sold listings for {:?}",
                sold_items.len(),
                strategy.strategy
            );

            if sold_items.len() >= self.config.min_results {
                if let Some(price_analysis) = analyze_prices(&sold_items) {
                    let suggested = suggest_price(&price_analysis, markup_percent);
                    debug!(
                        strategy = ?strategy.strategy,
                        suggested_price = suggested,
                        "analysis complete"
                    );
                    return Ok(PricingResult::succeeded(
                        strategies.clone(),
                        strategy.strategy,
                        sold_items,
                        price_analysis,
                        suggested,
                        markup_percent,
                    ));
                }
            }

            if first_attempt.is_none() {
                first_attempt = Some(sold_items);
            }
        }

        let found = first_attempt.unwrap_or_default();
        let message = format!(
            "found {} sold listings, need at least {}; retry with different search terms",
            found.len(),
            self.config.min_results
        );
        Ok(PricingResult::failed(message, strategies, found))
    }

    /// Turn the request into an ordered list of queries to try.
    ///
    /// Explicit terms are taken as-is (keyword strategies in given order);
    /// otherwise the item goes through extraction. Neither yielding a
    /// query is an input error, caught before any sampling work.
    fn resolve_strategies(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Vec<SearchStrategy>, PricingError> {
        if let Some(terms) = &request.search_terms {
            let strategies: Vec<SearchStrategy> = terms
                .iter()
                .filter(|t| !t.trim().is_empty())
                .map(|t| {
                    SearchStrategy::new(StrategyKind::Keywords, t.clone(), Confidence::High)
                })
                .collect();
            if strategies.is_empty() {
                return Err(PricingError::invalid_input("search terms are all blank"));
            }
            return Ok(strategies);
        }

        match &request.item {
            Some(item) => {
                let strategies = extract_search_terms(item);
                if strategies.is_empty() {
                    return Err(PricingError::invalid_input(
                        "item has no title, specifics or description to search by",
                    ));
                }
                Ok(strategies)
            }
            None => Err(PricingError::invalid_input(
                "provide search terms or an item",
            )),
        }
    }
}

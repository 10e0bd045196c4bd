//! Analysis request model.

use crate::models::Item;

/// One analysis invocation: either explicit search terms or an item to
/// derive them from, plus per-call overrides for markup and sample size.
/// When both sources are present, explicit terms win.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub search_terms: Option<Vec<String>>,
    pub item: Option<Item>,
    pub markup_percent: Option<f64>,
    pub sample_limit: Option<usize>,
}

impl AnalysisRequest {
    pub fn for_item(item: Item) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }

    pub fn for_terms(search_terms: Vec<String>) -> Self {
        Self {
            search_terms: Some(search_terms),
            ..Self::default()
        }
    }

    pub fn with_markup_percent(mut self, markup_percent: f64) -> Self {
        self.markup_percent = Some(markup_percent);
        self
    }

    pub fn with_sample_limit(mut self, sample_limit: usize) -> Self {
        self.sample_limit = Some(sample_limit);
        self
    }
}

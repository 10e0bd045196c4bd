use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A listing item to be priced. Immutable input to analysis, typically
/// deserialized from the surrounding application's queue file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_specifics: HashMap<String, String>,
}

impl Item {
    pub fn new(title: String) -> Self {
        Self {
            title,
            description: String::new(),
            item_specifics: HashMap::new(),
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    pub fn with_specific(mut self, name: String, value: String) -> Self {
        self.item_specifics.insert(name, value);
        self
    }

    /// Look up an item specific by name, ignoring case. Blank values count
    /// as absent.
    pub fn specific(&self, name: &str) -> Option<&str> {
        self.item_specifics
            .iter()
            .find(|(key, value)| key.eq_ignore_ascii_case(name) && !value.trim().is_empty())
            .map(|(_, value)| value.as_str())
    }
}

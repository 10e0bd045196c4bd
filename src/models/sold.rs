use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition of a comparable sold listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    New,
    LikeNew,
    Good,
    Acceptable,
    ForParts,
}

impl ItemCondition {
    /// All conditions a listing can carry
    pub fn all() -> [ItemCondition; 5] {
        [
            ItemCondition::New,
            ItemCondition::LikeNew,
            ItemCondition::Good,
            ItemCondition::Acceptable,
            ItemCondition::ForParts,
        ]
    }
}

/// A comparable sold listing. Ephemeral, produced per analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldItem {
    pub title: String,
    pub price: f64,
    pub sold_date: DateTime<Utc>,
    pub condition: ItemCondition,
    pub shipping_cost: f64,
}

impl SoldItem {
    pub fn new(title: String, price: f64, sold_date: DateTime<Utc>) -> Self {
        Self {
            title,
            price,
            sold_date,
            condition: ItemCondition::Good,
            shipping_cost: 0.0,
        }
    }

    pub fn with_condition(mut self, condition: ItemCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_shipping_cost(mut self, shipping_cost: f64) -> Self {
        self.shipping_cost = shipping_cost;
        self
    }
}

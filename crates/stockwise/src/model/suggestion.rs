/// A reorder recommendation produced by the suggestion engine.
///
/// # Actor Framework
/// Implements [`ActorEntity`](resource_actor::ActorEntity) in
/// [`crate::suggestion_actor`]. Suggestions are keyed by the SKU they refer
/// to, so a product has at most one live suggestion.
use crate::model::{Category, Sku};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Open,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub sku: Sku,
    pub product_name: String,
    pub category: Category,
    pub supplier: String,
    pub current_stock: u32,
    pub predicted_demand: f64,
    pub suggested_quantity: u32,
    /// 0 to 100.
    pub confidence: u8,
    pub urgency: Urgency,
    /// Human-readable reasons, highest weight first.
    pub contributing_factors: Vec<String>,
    /// `max_stock - current_stock` at evaluation time; bounds `modify`.
    pub capacity: u32,
    pub status: SuggestionStatus,
}

impl Suggestion {
    pub fn is_open(&self) -> bool {
        self.status == SuggestionStatus::Open
    }
}

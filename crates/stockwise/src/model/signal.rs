use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        })
    }
}

/// A special event (holiday sale, local festival) expected to move demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub impact: Impact,
    /// Categories the event affects. Empty means every category.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Event {
    pub fn new(name: impl Into<String>, impact: Impact) -> Self {
        Self {
            name: name.into(),
            impact,
            categories: Vec::new(),
        }
    }

    pub fn for_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn applies_to(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Forecast inputs for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandSignal {
    /// Expected units sold over the planning period.
    pub predicted_demand: f64,
    /// Temperature forecast in °C.
    pub temperature: f64,
    #[serde(default)]
    pub active_events: Vec<Event>,
    /// Share of the history bonus to grant, 0 to 1. `None` falls back to
    /// the engine's calibration constant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_weight: Option<f64>,
}

impl DemandSignal {
    pub fn new(predicted_demand: f64, temperature: f64) -> Self {
        Self {
            predicted_demand,
            temperature,
            active_events: Vec::new(),
            history_weight: None,
        }
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.active_events.push(event);
        self
    }

    pub fn with_history_weight(mut self, weight: f64) -> Self {
        self.history_weight = Some(weight);
        self
    }
}

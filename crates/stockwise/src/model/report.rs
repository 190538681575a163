//! Read-only aggregates served by the dashboard and analytics routes.

use crate::engine::EngineConfig;
use crate::model::{
    CatalogItem, Event, HistoricalData, Observation, Order, OrderId, OrderSource, OrderStatus,
    Suggestion, Urgency,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub total_value: f64,
    pub open_suggestions: usize,
    pub pending_orders: usize,
}

impl DashboardMetrics {
    pub fn compute(items: &[CatalogItem], suggestions: &[Suggestion], orders: &[Order]) -> Self {
        let total_value: f64 = items.iter().map(CatalogItem::stock_value).sum();
        Self {
            total_products: items.len(),
            low_stock_items: items.iter().filter(|i| i.stock.is_low()).count(),
            out_of_stock_items: items.iter().filter(|i| i.stock.is_out_of_stock()).count(),
            total_value: (total_value * 100.0).round() / 100.0,
            open_suggestions: suggestions.iter().filter(|s| s.is_open()).count(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
        }
    }
}

/// Current engine calibration plus the context it is being fed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFactors {
    pub engine: EngineConfig,
    /// Mean temperature forecast across the catalog; `None` when empty.
    pub average_temperature: Option<f64>,
    /// Distinct active events, by name, in first-seen order.
    pub special_events: Vec<Event>,
}

impl ModelFactors {
    pub fn compute(engine: EngineConfig, items: &[CatalogItem]) -> Self {
        let average_temperature = if items.is_empty() {
            None
        } else {
            let sum: f64 = items.iter().map(|i| i.signal.temperature).sum();
            Some(sum / items.len() as f64)
        };

        let mut special_events: Vec<Event> = Vec::new();
        for event in items.iter().flat_map(|i| &i.signal.active_events) {
            if !special_events.iter().any(|e| e.name == event.name) {
                special_events.push(event.clone());
            }
        }

        Self {
            engine,
            average_temperature,
            special_events,
        }
    }
}

/// Confidence bands, highest first, as `(label, lowest score in band)`.
const CONFIDENCE_BANDS: [(&str, u8); 5] = [
    ("90-100%", 90),
    ("80-89%", 80),
    ("70-79%", 70),
    ("60-69%", 60),
    ("0-59%", 0),
];

const RECENT_DECISIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrgencyBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// An accepted suggestion, as the order it produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub product_name: String,
    pub quantity: u32,
    pub priority: Urgency,
    pub status: OrderStatus,
}

/// How the engine is currently scoring, and what came of its advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInsights {
    /// Open suggestions per confidence band; every band is listed.
    pub confidence_distribution: Vec<ConfidenceBand>,
    pub urgency_breakdown: UrgencyBreakdown,
    /// Mean confidence of open suggestions; `None` when there are none.
    pub average_confidence: Option<f64>,
    /// Forecast accuracy over the recorded history.
    pub historical_accuracy: Option<f64>,
    /// Latest accepted suggestions, newest first.
    pub recent_decisions: Vec<Decision>,
}

impl ModelInsights {
    pub fn compute(suggestions: &[Suggestion], orders: &[Order], history: &[Observation]) -> Self {
        let open: Vec<&Suggestion> = suggestions.iter().filter(|s| s.is_open()).collect();

        let mut confidence_distribution: Vec<ConfidenceBand> = CONFIDENCE_BANDS
            .iter()
            .map(|(range, _)| ConfidenceBand {
                range: range.to_string(),
                count: 0,
            })
            .collect();
        let mut urgency_breakdown = UrgencyBreakdown::default();
        for suggestion in &open {
            if let Some(band) = CONFIDENCE_BANDS
                .iter()
                .position(|(_, floor)| suggestion.confidence >= *floor)
            {
                confidence_distribution[band].count += 1;
            }
            match suggestion.urgency {
                Urgency::High => urgency_breakdown.high += 1,
                Urgency::Medium => urgency_breakdown.medium += 1,
                Urgency::Low => urgency_breakdown.low += 1,
            }
        }

        let average_confidence = if open.is_empty() {
            None
        } else {
            let sum: f64 = open.iter().map(|s| f64::from(s.confidence)).sum();
            Some((sum / open.len() as f64 * 100.0).round() / 100.0)
        };

        let mut accepted: Vec<&Order> = orders
            .iter()
            .filter(|o| o.source == OrderSource::Suggestion)
            .collect();
        accepted.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));
        let recent_decisions = accepted
            .into_iter()
            .take(RECENT_DECISIONS)
            .map(|o| Decision {
                order_id: o.id,
                date: o.order_date,
                product_name: o.product_name.clone(),
                quantity: o.quantity,
                priority: o.priority,
                status: o.status,
            })
            .collect();

        Self {
            confidence_distribution,
            urgency_breakdown,
            average_confidence,
            historical_accuracy: HistoricalData::compute(history).overall_accuracy,
            recent_decisions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, DemandSignal, Impact, Product, Sku, StockLevel, SuggestionStatus};

    fn item(sku: &str, current: u32, reorder: u32, price: f64, temp: f64) -> CatalogItem {
        CatalogItem::new(
            Product::new(sku, sku, Category::Pantry, price, "Acme"),
            StockLevel::new(current, 0, reorder, 100),
            DemandSignal::new(10.0, temp).with_event(Event::new("Holiday Sale", Impact::High)),
        )
    }

    #[test]
    fn dashboard_counts_low_and_out_of_stock_separately() {
        let items = vec![
            item("A", 0, 10, 2.0, 20.0),
            item("B", 5, 10, 2.0, 20.0),
            item("C", 50, 10, 1.5, 20.0),
        ];
        let metrics = DashboardMetrics::compute(&items, &[], &[]);
        assert_eq!(metrics.total_products, 3);
        assert_eq!(metrics.out_of_stock_items, 1);
        assert_eq!(metrics.low_stock_items, 1);
        assert_eq!(metrics.total_value, 85.0);
    }

    #[test]
    fn model_factors_average_temperature_and_dedupe_events() {
        let items = vec![item("A", 1, 1, 1.0, 20.0), item("B", 1, 1, 1.0, 30.0)];
        let factors = ModelFactors::compute(EngineConfig::default(), &items);
        assert_eq!(factors.average_temperature, Some(25.0));
        assert_eq!(factors.special_events.len(), 1);

        let empty = ModelFactors::compute(EngineConfig::default(), &[]);
        assert_eq!(empty.average_temperature, None);
    }

    fn suggestion(sku: &str, confidence: u8, urgency: Urgency, status: SuggestionStatus) -> Suggestion {
        Suggestion {
            sku: Sku::new(sku),
            product_name: sku.to_string(),
            category: Category::Pantry,
            supplier: "Acme".to_string(),
            current_stock: 1,
            predicted_demand: 10.0,
            suggested_quantity: 10,
            confidence,
            urgency,
            contributing_factors: Vec::new(),
            capacity: 50,
            status,
        }
    }

    fn order(id: u32, day: u32, source: OrderSource) -> Order {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        Order {
            id: OrderId(id),
            sku: Sku::new("A"),
            product_name: format!("product {id}"),
            supplier: "Acme".to_string(),
            quantity: 5,
            status: OrderStatus::Pending,
            priority: Urgency::Medium,
            source,
            order_date: date,
            expected_delivery: date,
            total_cost: 5.0,
        }
    }

    #[test]
    fn insights_band_open_suggestions_only() {
        let suggestions = vec![
            suggestion("A", 95, Urgency::High, SuggestionStatus::Open),
            suggestion("B", 90, Urgency::High, SuggestionStatus::Open),
            suggestion("C", 75, Urgency::Low, SuggestionStatus::Open),
            suggestion("D", 40, Urgency::Medium, SuggestionStatus::Open),
            suggestion("E", 85, Urgency::High, SuggestionStatus::Rejected),
        ];
        let insights = ModelInsights::compute(&suggestions, &[], &[]);

        let counts: Vec<_> = insights
            .confidence_distribution
            .iter()
            .map(|b| (b.range.as_str(), b.count))
            .collect();
        assert_eq!(
            counts,
            vec![("90-100%", 2), ("80-89%", 0), ("70-79%", 1), ("60-69%", 0), ("0-59%", 1)]
        );
        assert_eq!(
            insights.urgency_breakdown,
            UrgencyBreakdown { high: 2, medium: 1, low: 1 }
        );
        assert_eq!(insights.average_confidence, Some(75.0));
        assert_eq!(insights.historical_accuracy, None);
    }

    #[test]
    fn insights_list_newest_accepted_orders() {
        let orders: Vec<Order> = (1..=7)
            .map(|id| order(id, id, OrderSource::Suggestion))
            .chain([order(8, 20, OrderSource::Manual)])
            .collect();
        let history = vec![Observation::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "A",
            90,
            100,
        )];
        let insights = ModelInsights::compute(&[], &orders, &history);

        let ids: Vec<_> = insights.recent_decisions.iter().map(|d| d.order_id.0).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        assert_eq!(insights.average_confidence, None);
        assert_eq!(insights.historical_accuracy, Some(90.0));
    }
}

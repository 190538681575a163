/// Represents a purchase order placed with a supplier.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`crate::order_actor`] for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{Sku, Urgency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Accepts both the display form (`order_7`) and the bare number (`7`).
impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("order_").unwrap_or(s).parse().map(OrderId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// pending → confirmed | cancelled, confirmed → delivered | cancelled.
    /// Delivered and cancelled are terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Delivered) | (Confirmed, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        })
    }
}

/// How the order came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    Suggestion,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub sku: Sku,
    pub product_name: String,
    pub supplier: String,
    pub quantity: u32,
    pub status: OrderStatus,
    /// Urgency of the suggestion at acceptance time. Never updated.
    pub priority: Urgency,
    pub source: OrderSource,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub total_cost: f64,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub enum OrderCreate {
    /// Accept the open suggestion for this SKU and order its quantity.
    FromSuggestion(Sku),
    /// Order a product directly.
    Manual {
        sku: Sku,
        quantity: u32,
        priority: Urgency,
    },
}

//! Entity trait implementation for the Order domain type.
//!
//! Orders orchestrate their own creation: `on_create` reads the product from
//! the catalog and, for suggestion-backed orders, accepts the suggestion. The
//! catalog is read first, so a missing product never consumes a suggestion.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, SuggestionClient};
use crate::model::{Order, OrderCreate, OrderId, OrderSource, OrderStatus, Urgency};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use resource_actor::ActorEntity;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (SuggestionClient, CatalogClient);
    type Error = OrderError;

    /// Builds a pending order dated today. Product details, cost and
    /// delivery date are filled in by `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let (sku, quantity, priority, source) = match params {
            OrderCreate::FromSuggestion(sku) => (sku, 0, Urgency::Low, OrderSource::Suggestion),
            OrderCreate::Manual {
                sku, quantity: 0, ..
            } => {
                return Err(OrderError::InvalidQuantity(format!(
                    "an order for {sku} needs at least one unit"
                )))
            }
            OrderCreate::Manual {
                sku,
                quantity,
                priority,
            } => (sku, quantity, priority, OrderSource::Manual),
        };

        let today = Utc::now().date_naive();
        Ok(Self {
            id,
            sku,
            product_name: String::new(),
            supplier: String::new(),
            quantity,
            status: OrderStatus::Pending,
            priority,
            source,
            order_date: today,
            expected_delivery: today,
            total_cost: 0.0,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (suggestions, catalog) = ctx;

        let item = catalog
            .get_item(self.sku.clone())
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) => OrderError::ProductNotFound(self.sku.to_string()),
                other => OrderError::Catalog(other),
            })?;

        if self.source == OrderSource::Suggestion {
            let accepted = suggestions.accept(self.sku.clone()).await?;
            self.quantity = accepted.suggested_quantity;
            self.priority = accepted.urgency;
        }

        self.expected_delivery = self
            .order_date
            .checked_add_days(Days::new(u64::from(item.product.lead_time_days)))
            .unwrap_or(NaiveDate::MAX);
        let cost = f64::from(self.quantity) * item.product.unit_price;
        self.total_cost = (cost * 100.0).round() / 100.0;
        self.product_name = item.product.name;
        self.supplier = item.product.supplier.name;
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match update {}
    }

    /// # Actions
    /// - `UpdateStatus`: applies a workflow transition. Re-applying the
    ///   current status is a no-op; `delivered` restocks the catalog first
    ///   and the status only changes if that succeeds.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<Order, Self::Error> {
        let (_, catalog) = ctx;
        match action {
            OrderAction::UpdateStatus(next) if next == self.status => Ok(self.clone()),
            OrderAction::UpdateStatus(next) => {
                if !self.status.can_transition_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                if next == OrderStatus::Delivered {
                    let level = catalog.receive_stock(self.sku.clone(), self.quantity).await?;
                    info!(order = %self.id, sku = %self.sku, level, "Delivery restocked catalog");
                }
                self.status = next;
                Ok(self.clone())
            }
        }
    }
}

use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, OrderClient, SuggestionClient};
use crate::engine::{self, EngineConfig, SuggestionFilter};
use crate::model::{
    CatalogItem, DashboardMetrics, DemandSignal, HistoricalData, ModelFactors, ModelInsights,
    Observation, Order, OrderId, OrderStatus, Sku, StockLevel, Suggestion, Urgency,
};
use crate::order_actor::OrderError;
use crate::suggestion_actor::SuggestionError;
use resource_actor::ActorClient;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument};

/// Any failure surfaced by an [`Inventory`] operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The operations the HTTP layer (and tests) drive, over the three actor
/// clients. Cheap to clone.
///
/// Writes that change what the engine would say (stock levels, signals,
/// temperature, deliveries) re-run it before returning.
///
/// A refresh takes several actor round trips, so refreshes and the writes
/// that trigger them hold `refresh_gate` for their whole duration. Two
/// overlapping writes therefore leave the suggestion set matching the last
/// catalog state, never a mix of both scans.
#[derive(Clone)]
pub struct Inventory {
    pub catalog: CatalogClient,
    pub suggestions: SuggestionClient,
    pub orders: OrderClient,
    engine: Arc<EngineConfig>,
    refresh_gate: Arc<Mutex<()>>,
    history: Arc<RwLock<Vec<Observation>>>,
}

impl Inventory {
    pub fn new(
        catalog: CatalogClient,
        suggestions: SuggestionClient,
        orders: OrderClient,
        engine: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            suggestions,
            orders,
            engine: Arc::new(engine),
            refresh_gate: Arc::new(Mutex::new(())),
            history: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    /// Loads catalog records, replacing any with the same SKU.
    #[instrument(skip_all, fields(count = items.len()))]
    pub async fn seed(&self, items: Vec<CatalogItem>) -> Result<usize, InventoryError> {
        let count = items.len();
        for item in items {
            self.catalog.insert_item(item).await?;
        }
        info!("Catalog seeded");
        Ok(count)
    }

    /// Appends predicted-vs-actual observations to the forecast record.
    pub async fn record_history(&self, observations: Vec<Observation>) -> usize {
        let count = observations.len();
        self.history.write().await.extend(observations);
        count
    }

    /// Re-evaluates the whole catalog and replaces the suggestion set.
    ///
    /// Fresh suggestions overwrite their SKU's previous entry (resetting any
    /// override or resolution); SKUs that no longer warrant a suggestion are
    /// removed afterwards, so readers never observe an empty set mid-refresh.
    #[instrument(skip(self))]
    pub async fn refresh_suggestions(&self) -> Result<usize, InventoryError> {
        let _gate = self.refresh_gate.lock().await;
        self.refresh_locked().await
    }

    /// Caller must hold `refresh_gate`.
    async fn refresh_locked(&self) -> Result<usize, InventoryError> {
        let fresh = engine::scan(&self.catalog, &self.engine).await?;
        let live: HashSet<Sku> = fresh.iter().map(|s| s.sku.clone()).collect();
        let count = fresh.len();

        for suggestion in fresh {
            self.suggestions.insert(suggestion).await?;
        }
        for stale in self.suggestions.list().await? {
            if !live.contains(&stale.sku) {
                match self.suggestions.delete(stale.sku).await {
                    Ok(()) | Err(SuggestionError::NotFound(_)) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }

        info!(count, "Suggestions refreshed");
        Ok(count)
    }

    /// Open suggestions matching `filter`, most urgent first.
    pub async fn list_suggestions(
        &self,
        filter: &SuggestionFilter,
    ) -> Result<Vec<Suggestion>, InventoryError> {
        let all = self.suggestions.list().await?;
        Ok(engine::select(all, filter))
    }

    pub async fn accept_suggestion(&self, sku: Sku) -> Result<Order, InventoryError> {
        let id = self.orders.accept_suggestion(sku).await?;
        Ok(self.orders.get_order(id).await?)
    }

    pub async fn reject_suggestion(&self, sku: Sku) -> Result<(), InventoryError> {
        Ok(self.suggestions.reject(sku).await?)
    }

    pub async fn modify_suggestion(&self, sku: Sku, quantity: u32) -> Result<Suggestion, InventoryError> {
        Ok(self.suggestions.modify(sku, quantity).await?)
    }

    pub async fn place_order(
        &self,
        sku: Sku,
        quantity: u32,
        priority: Urgency,
    ) -> Result<Order, InventoryError> {
        let id = self.orders.place_order(sku, quantity, priority).await?;
        Ok(self.orders.get_order(id).await?)
    }

    /// Applies a status change. A first delivery restocks the catalog and
    /// refreshes suggestions.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, InventoryError> {
        let _gate = self.refresh_gate.lock().await;
        let previous = self.orders.get_order(id).await?.status;
        let order = self.orders.update_status(id, status).await?;
        if order.status == OrderStatus::Delivered && previous != OrderStatus::Delivered {
            self.refresh_locked().await?;
        }
        Ok(order)
    }

    pub async fn set_stock_level(&self, sku: Sku, stock: StockLevel) -> Result<CatalogItem, InventoryError> {
        let _gate = self.refresh_gate.lock().await;
        let item = self.catalog.set_stock_level(sku, stock).await?;
        self.refresh_locked().await?;
        Ok(item)
    }

    pub async fn set_signal(&self, sku: Sku, signal: DemandSignal) -> Result<CatalogItem, InventoryError> {
        let _gate = self.refresh_gate.lock().await;
        let item = self.catalog.set_signal(sku, signal).await?;
        self.refresh_locked().await?;
        Ok(item)
    }

    /// Sets the temperature forecast of every record, then refreshes.
    /// Returns the number of records updated.
    #[instrument(skip(self))]
    pub async fn set_temperature(&self, temperature: f64) -> Result<usize, InventoryError> {
        if !temperature.is_finite() {
            return Err(CatalogError::InvalidSignal(
                "temperature forecast must be finite".to_string(),
            )
            .into());
        }
        let _gate = self.refresh_gate.lock().await;
        let items = self.catalog.list_items().await?;
        for item in &items {
            self.catalog
                .set_temperature(item.sku().clone(), temperature)
                .await?;
        }
        self.refresh_locked().await?;
        Ok(items.len())
    }

    pub async fn dashboard(&self) -> Result<DashboardMetrics, InventoryError> {
        let items = self.catalog.list_items().await?;
        let suggestions = self.suggestions.list().await?;
        let orders = self.orders.list_orders().await?;
        Ok(DashboardMetrics::compute(&items, &suggestions, &orders))
    }

    pub async fn model_factors(&self) -> Result<ModelFactors, InventoryError> {
        let items = self.catalog.list_items().await?;
        Ok(ModelFactors::compute(self.engine_config().clone(), &items))
    }

    pub async fn historical_data(&self) -> HistoricalData {
        HistoricalData::compute(&self.history.read().await)
    }

    pub async fn model_insights(&self) -> Result<ModelInsights, InventoryError> {
        let suggestions = self.suggestions.list().await?;
        let orders = self.orders.list_orders().await?;
        let history = self.history.read().await;
        Ok(ModelInsights::compute(&suggestions, &orders, &history))
    }
}

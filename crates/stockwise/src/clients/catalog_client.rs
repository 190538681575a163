//! # Catalog Client
//!
//! Provides a high‑level API for interacting with the `Catalog` actor.
//! It wraps a `ResourceClient<CatalogItem>` and exposes domain‑specific methods.
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError};
use crate::model::{CatalogItem, CatalogUpdate, DemandSignal, Sku, StockLevel};
use crate::repository::InventoryRepository;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

#[async_trait]
impl ActorClient<CatalogItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<CatalogItem> {
        &self.inner
    }

    /// Missing records become `NotFound`; entity failures keep their variant.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(sku) => CatalogError::NotFound(sku),
            other => other
                .entity_error::<CatalogError>()
                .unwrap_or_else(|| CatalogError::ActorCommunicationError(other.to_string())),
        }
    }
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<CatalogItem>) -> Self {
        Self { inner }
    }

    /// Stores a record under its SKU, returning the record it replaced.
    #[instrument(skip(self, item), fields(sku = %item.sku()))]
    pub async fn insert_item(&self, item: CatalogItem) -> Result<Option<CatalogItem>, CatalogError> {
        debug!("Sending request");
        self.inner
            .insert(item.sku().clone(), item)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, sku: Sku) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .get(sku.clone())
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| CatalogError::NotFound(sku.to_string()))
    }

    /// All records, sorted by SKU.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let mut items = self.list().await?;
        items.sort_by(|a, b| a.sku().cmp(b.sku()));
        Ok(items)
    }

    #[instrument(skip(self))]
    pub async fn set_stock_level(&self, sku: Sku, stock: StockLevel) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(sku, CatalogUpdate::StockLevel(stock))
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, signal))]
    pub async fn set_signal(&self, sku: Sku, signal: DemandSignal) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(sku, CatalogUpdate::Signal(signal))
            .await
            .map_err(Self::map_error)
    }

    /// Adds delivered units. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn receive_stock(&self, sku: Sku, quantity: u32) -> Result<u32, CatalogError> {
        debug!("Receiving {} units for {}", quantity, sku);
        match self.action(sku, CatalogAction::ReceiveStock(quantity)).await? {
            CatalogActionResult::ReceiveStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_temperature(&self, sku: Sku, temperature: f64) -> Result<(), CatalogError> {
        match self.action(sku, CatalogAction::SetTemperature(temperature)).await? {
            CatalogActionResult::SetTemperature(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn action(&self, sku: Sku, action: CatalogAction) -> Result<CatalogActionResult, CatalogError> {
        self.inner
            .perform_action(sku, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: CatalogActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl InventoryRepository for CatalogClient {
    async fn list_skus(&self) -> Result<Vec<Sku>, CatalogError> {
        let mut skus: Vec<Sku> = self
            .inner
            .list()
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .map(|(sku, _)| sku)
            .collect();
        skus.sort();
        Ok(skus)
    }

    async fn get_item(&self, sku: &Sku) -> Result<CatalogItem, CatalogError> {
        CatalogClient::get_item(self, sku.clone()).await
    }
}

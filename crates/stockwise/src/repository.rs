//! # Inventory Repository
//!
//! The read capability the suggestion engine needs from the catalog. The
//! running system implements it with [`CatalogClient`](crate::clients::CatalogClient);
//! tests implement it over a plain map.

use crate::catalog_actor::CatalogError;
use crate::model::{CatalogItem, DemandSignal, Sku, StockLevel};
use async_trait::async_trait;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Every SKU currently in the catalog.
    async fn list_skus(&self) -> Result<Vec<Sku>, CatalogError>;

    /// Product, stock and signal of one SKU, read together.
    async fn get_item(&self, sku: &Sku) -> Result<CatalogItem, CatalogError>;

    async fn get_stock(&self, sku: &Sku) -> Result<StockLevel, CatalogError> {
        Ok(self.get_item(sku).await?.stock)
    }

    async fn get_signal(&self, sku: &Sku) -> Result<DemandSignal, CatalogError> {
        Ok(self.get_item(sku).await?.signal)
    }
}

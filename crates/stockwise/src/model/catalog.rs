/// One row of the inventory record store.
///
/// # Actor Framework
/// Implements [`ActorEntity`](resource_actor::ActorEntity) in
/// [`crate::catalog_actor`], keyed by the product's [`Sku`]. Keeping stock and
/// signal in one entity means a single `Get` returns a consistent snapshot of
/// both.
use crate::model::{DemandSignal, Product, Sku, StockLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub product: Product,
    pub stock: StockLevel,
    pub signal: DemandSignal,
}

impl CatalogItem {
    pub fn new(product: Product, stock: StockLevel, signal: DemandSignal) -> Self {
        Self {
            product,
            stock,
            signal,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.product.sku
    }

    /// `current_stock × unit_price`.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.stock.current_stock) * self.product.unit_price
    }
}

/// Replacement payloads accepted by the catalog actor.
#[derive(Debug, Clone)]
pub enum CatalogUpdate {
    StockLevel(StockLevel),
    Signal(DemandSignal),
}

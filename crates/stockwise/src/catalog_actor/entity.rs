//! Entity trait implementation for catalog records.
//!
//! Records are keyed by SKU and always inserted, never created from a
//! generated id, so `Create` is uninhabited. Every write path validates the
//! record with the engine's input checks, so the engine never sees a record
//! the catalog accepted as broken.

use super::actions::{CatalogAction, CatalogActionResult};
use super::error::CatalogError;
use crate::engine::{validate_signal, validate_stock};
use crate::model::{CatalogItem, CatalogUpdate, Sku};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for CatalogItem {
    type Id = Sku;
    type Create = Infallible;
    type Update = CatalogUpdate;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(_id: Sku, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    /// Validates stock and signal before the record is stored.
    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        validate_stock(&self.stock)?;
        validate_signal(&self.signal)?;
        Ok(())
    }

    /// Replaces the stock level or the demand signal.
    async fn on_update(&mut self, update: CatalogUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {
            CatalogUpdate::StockLevel(stock) => {
                validate_stock(&stock)?;
                self.stock = stock;
            }
            CatalogUpdate::Signal(signal) => {
                validate_signal(&signal)?;
                self.signal = signal;
            }
        }
        Ok(())
    }

    /// # Actions
    /// - `ReceiveStock`: adds a delivery, returns the new level
    /// - `SetTemperature`: replaces the temperature forecast
    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogActionResult, Self::Error> {
        match action {
            CatalogAction::ReceiveStock(0) => Err(CatalogError::InvalidQuantity(format!(
                "cannot receive zero units of {}",
                self.product.sku
            ))),
            CatalogAction::ReceiveStock(quantity) => {
                self.stock.current_stock = self.stock.current_stock.saturating_add(quantity);
                Ok(CatalogActionResult::ReceiveStock(self.stock.current_stock))
            }
            CatalogAction::SetTemperature(temperature) => {
                let mut signal = self.signal.clone();
                signal.temperature = temperature;
                validate_signal(&signal)?;
                self.signal = signal;
                Ok(CatalogActionResult::SetTemperature(()))
            }
        }
    }
}

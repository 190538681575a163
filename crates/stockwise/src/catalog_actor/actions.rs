//! Custom actions for the Catalog actor.
//!
//! Operations on a [`CatalogItem`](crate::model::CatalogItem) beyond replacing
//! its stock level or signal wholesale.

/// Custom actions for catalog records.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Adds delivered units to the current stock.
    ///
    /// # Errors
    /// Fails for a quantity of zero.
    ReceiveStock(u32),
    /// Replaces the temperature forecast of the record's signal.
    SetTemperature(f64),
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    /// Stock level after the delivery
    ReceiveStock(u32),
    SetTemperature(()),
}

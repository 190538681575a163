use serde::{Deserialize, Serialize};

/// On-hand inventory thresholds for one product.
///
/// Valid when `safety_stock <= reorder_point <= max_stock` and `max_stock > 0`;
/// the engine checks this before evaluating (see [`crate::engine::validate_stock`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub current_stock: u32,
    pub safety_stock: u32,
    pub reorder_point: u32,
    pub max_stock: u32,
}

impl StockLevel {
    pub fn new(current_stock: u32, safety_stock: u32, reorder_point: u32, max_stock: u32) -> Self {
        Self {
            current_stock,
            safety_stock,
            reorder_point,
            max_stock,
        }
    }

    /// Units that still fit before `max_stock` is reached.
    pub fn capacity(&self) -> u32 {
        self.max_stock.saturating_sub(self.current_stock)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock == 0
    }

    /// In stock, but under the reorder point.
    pub fn is_low(&self) -> bool {
        self.current_stock > 0 && self.current_stock < self.reorder_point
    }
}

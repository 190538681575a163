//! Catalog identity of a product: its SKU, category and supplier.
//!
//! Products are imported with the catalog seed and never change afterwards;
//! stock and demand live next to them in a [`CatalogItem`](crate::model::CatalogItem).

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stock keeping unit. Unique and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(pub String);

impl Sku {
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Generated ids for catalog-keyed actors. Records are normally inserted
/// under their own SKU, so this only shows up for ad-hoc entries.
impl From<u32> for Sku {
    fn from(id: u32) -> Self {
        Self(format!("SKU-{id:05}"))
    }
}

impl From<&str> for Sku {
    fn from(sku: &str) -> Self {
        Self(sku.to_string())
    }
}

impl Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Fruits")]
    Produce,
    Dairy,
    Bakery,
    Frozen,
    Beverages,
    Meat,
    Pantry,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Bakery => "Bakery",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Meat => "Meat",
            Category::Pantry => "Pantry",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Supplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub category: Category,
    pub unit_price: f64,
    pub supplier: Supplier,
    /// Days between placing an order and its delivery.
    pub lead_time_days: u32,
}

impl Product {
    /// Creates a product with an uncontacted supplier and a one-day lead time.
    pub fn new(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        category: Category,
        unit_price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            category,
            unit_price,
            supplier: Supplier::new(supplier),
            lead_time_days: 1,
        }
    }

    pub fn with_lead_time(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }
}

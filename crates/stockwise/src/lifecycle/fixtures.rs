//! Catalog seed data.
//!
//! [`demo_catalog`] is the built-in store used when no seed file is
//! configured. With the default engine configuration it yields five open
//! suggestions (three high, two medium) and three products that need
//! nothing. [`demo_history`] is the forecast record served alongside it.

use crate::config::ConfigError;
use crate::model::{
    CatalogItem, Category, DemandSignal, Event, Impact, Observation, Product, StockLevel, Supplier,
};
use chrono::NaiveDate;
use std::path::Path;

fn holiday_sale() -> Event {
    Event::new("Holiday Sale", Impact::High)
}

fn local_festival() -> Event {
    Event::new("Local Festival", Impact::Medium).for_categories([Category::Meat, Category::Produce])
}

/// The demo store: eight products across seven categories.
pub fn demo_catalog() -> Vec<CatalogItem> {
    let mut bananas = Product::new(
        "BAN-001",
        "Organic Bananas",
        Category::Produce,
        0.89,
        "Fresh Farms Inc.",
    )
    .with_lead_time(2);
    bananas.supplier = Supplier {
        name: "Fresh Farms Inc.".to_string(),
        phone: "(555) 123-4567".to_string(),
        email: "john@freshfarms.com".to_string(),
    };

    vec![
        CatalogItem::new(
            bananas,
            StockLevel::new(45, 30, 50, 200),
            DemandSignal::new(120.0, 33.0),
        ),
        CatalogItem::new(
            Product::new("MLK-002", "Whole Milk 2%", Category::Dairy, 1.20, "Dairy Co."),
            StockLevel::new(12, 20, 40, 150),
            DemandSignal::new(85.0, 22.0),
        ),
        CatalogItem::new(
            Product::new("BRD-003", "Whole Grain Bread", Category::Bakery, 2.49, "Bakery Fresh"),
            StockLevel::new(8, 15, 30, 120),
            DemandSignal::new(95.0, 22.0).with_event(holiday_sale()),
        ),
        CatalogItem::new(
            Product::new("EGG-004", "Free Range Eggs", Category::Dairy, 3.99, "Sunny Side Farms"),
            StockLevel::new(90, 20, 40, 160),
            DemandSignal::new(60.0, 22.0),
        ),
        CatalogItem::new(
            Product::new("PEA-005", "Frozen Peas", Category::Frozen, 1.79, "Polar Foods"),
            StockLevel::new(0, 10, 25, 100),
            DemandSignal::new(40.0, 22.0),
        ),
        CatalogItem::new(
            Product::new("COF-006", "Ground Coffee", Category::Beverages, 7.49, "Bean Traders")
                .with_lead_time(3),
            StockLevel::new(35, 10, 30, 80),
            DemandSignal::new(30.0, 22.0),
        ),
        CatalogItem::new(
            Product::new("CHK-007", "Chicken Breast", Category::Meat, 5.99, "Prairie Meats")
                .with_lead_time(2),
            StockLevel::new(28, 15, 30, 90),
            DemandSignal::new(45.0, 22.0)
                .with_event(holiday_sale())
                .with_event(local_festival()),
        ),
        CatalogItem::new(
            Product::new("RCE-008", "Basmati Rice", Category::Pantry, 2.19, "Grain House")
                .with_lead_time(3),
            StockLevel::new(60, 20, 40, 150),
            DemandSignal::new(35.0, 22.0),
        ),
    ]
}

/// Reads a JSON array of catalog records.
pub fn load_seed(path: &Path) -> Result<Vec<CatalogItem>, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    parse_seed(&source)
}

pub fn parse_seed(source: &str) -> Result<Vec<CatalogItem>, ConfigError> {
    serde_json::from_str(source).map_err(|e| ConfigError::Json(e.to_string()))
}

/// Five consecutive January days for bananas and milk, then one day a month
/// through May for the rest of the range.
pub fn demo_history() -> Vec<Observation> {
    const RECORDS: [((i32, u32, u32), &str, u32, u32); 18] = [
        ((2024, 1, 1), "Organic Bananas", 60, 58),
        ((2024, 1, 1), "Whole Milk 2%", 40, 40),
        ((2024, 1, 2), "Organic Bananas", 63, 60),
        ((2024, 1, 2), "Whole Milk 2%", 42, 42),
        ((2024, 1, 3), "Organic Bananas", 55, 57),
        ((2024, 1, 3), "Whole Milk 2%", 40, 40),
        ((2024, 1, 4), "Organic Bananas", 66, 64),
        ((2024, 1, 4), "Whole Milk 2%", 44, 44),
        ((2024, 1, 5), "Organic Bananas", 69, 66),
        ((2024, 1, 5), "Whole Milk 2%", 46, 46),
        ((2024, 2, 1), "Whole Grain Bread", 30, 32),
        ((2024, 2, 1), "Free Range Eggs", 20, 20),
        ((2024, 3, 1), "Whole Grain Bread", 28, 30),
        ((2024, 3, 1), "Ground Coffee", 10, 11),
        ((2024, 4, 1), "Free Range Eggs", 22, 21),
        ((2024, 4, 1), "Organic Bananas", 70, 72),
        ((2024, 5, 1), "Whole Milk 2%", 45, 47),
        ((2024, 5, 1), "Ground Coffee", 12, 12),
    ];

    RECORDS
        .iter()
        .filter_map(|&((y, m, d), product, predicted, actual)| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| Observation::new(date, product, predicted, actual))
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// Stock availability at a single warehouse.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    /// Warehouse identifier, e.g. "WH_NYC".
    pub warehouse_id: String,
    /// Human-readable warehouse name.
    pub warehouse_name: String,
    /// Region and site label, e.g. "East Coast - NYC".
    pub location: String,
    /// Units on hand, never negative.
    pub quantity: u32,
    /// Derived at construction: `quantity > 0`.
    pub is_available: bool,
}

impl StockLevel {
    /// Builds a level with the availability flag derived from the quantity.
    pub fn new(
        warehouse_id: impl Into<String>,
        warehouse_name: impl Into<String>,
        location: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            warehouse_id: warehouse_id.into(),
            warehouse_name: warehouse_name.into(),
            location: location.into(),
            quantity,
            is_available: quantity > 0,
        }
    }
}

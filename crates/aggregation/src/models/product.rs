use serde::{Deserialize, Serialize};

use super::{Category, PriceQuote, StockLevel};

/// Aggregated view of one product across every responding provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Caller-supplied product id.
    pub id: String,
    /// Display name derived from the id.
    pub name: String,
    /// Description derived from the id.
    pub description: String,
    /// Deterministic category assignment.
    pub category: Category,
    /// One quote per successful price provider, in registry order.
    pub prices: Vec<PriceQuote>,
    /// Warehouse levels from every successful stock provider, concatenated
    /// in registry order with each provider's payload order preserved.
    pub stock_levels: Vec<StockLevel>,
}

impl Product {
    /// Builds the identity scaffold for a product id.
    ///
    /// Identity fields are pure functions of the id and need no provider
    /// input, so this never fails. The price and stock lists start empty
    /// and are filled in by the aggregation fan-out; a product whose
    /// providers all failed is this scaffold unchanged.
    pub fn for_id(product_id: &str) -> Self {
        Self {
            id: product_id.to_string(),
            name: format!("Product {product_id}"),
            description: format!("Description for product {product_id}"),
            category: Category::for_product(product_id),
            prices: Vec::new(),
            stock_levels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffold_derives_identity_from_id() {
        let product = Product::for_id("PROD-0042");

        assert_eq!(product.id, "PROD-0042");
        assert_eq!(product.name, "Product PROD-0042");
        assert_eq!(product.description, "Description for product PROD-0042");
        assert_eq!(product.category, Category::for_product("PROD-0042"));
        assert!(product.prices.is_empty());
        assert!(product.stock_levels.is_empty());
    }

    #[test]
    fn ids_are_opaque_and_case_sensitive() {
        let upper = Product::for_id("ABC");
        let lower = Product::for_id("abc");
        assert_ne!(upper.id, lower.id);
        assert_eq!(upper.name, "Product ABC");
        assert_eq!(lower.name, "Product abc");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let product = Product::for_id("PROD-0001");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], "PROD-0001");
        assert!(json.get("stockLevels").is_some());
        assert!(json.get("prices").is_some());
        assert!(json.get("category").is_some());
    }
}

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// Batch aggregation request.
///
/// The request boundary validates the id count before the engine sees it;
/// the engine itself accepts any list. Both include flags default to `true`
/// when omitted from the payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationRequest {
    /// Products to aggregate, in the order the response will echo back.
    pub product_ids: Vec<ProductId>,
    /// Fan out to price providers for each product.
    #[serde(default = "default_include")]
    pub include_prices: bool,
    /// Fan out to stock providers for each product.
    #[serde(default = "default_include")]
    pub include_stock: bool,
}

fn default_include() -> bool {
    true
}

impl AggregationRequest {
    /// Request for the given ids with both sections included.
    pub fn for_ids(product_ids: Vec<ProductId>) -> Self {
        Self {
            product_ids,
            include_prices: true,
            include_stock: true,
        }
    }

    /// The per-product fetch options this request implies.
    pub fn options(&self) -> FetchOptions {
        FetchOptions {
            include_prices: self.include_prices,
            include_stock: self.include_stock,
        }
    }
}

/// Which provider kinds a per-product aggregation fans out to.
///
/// An excluded section is never dispatched, not fetched and discarded, so
/// excluding one also removes its latency contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub include_prices: bool,
    pub include_stock: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            include_prices: true,
            include_stock: true,
        }
    }
}

/// Batch aggregation response.
///
/// The serialized field names are a compatibility contract with existing
/// consumers: `products`, `totalRequested`, `totalSuccessful`,
/// `elapsedMillis` and `errors`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResponse {
    /// Aggregated products, in request order with failed ids omitted.
    pub products: Vec<Product>,
    /// How many ids the request carried.
    pub total_requested: usize,
    /// How many products were produced.
    pub total_successful: usize,
    /// Wall-clock duration of the whole batch, first dispatch to last
    /// completion.
    pub elapsed_millis: u64,
    /// One diagnostic string per product that failed outright.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_flags_default_to_true() {
        let request: AggregationRequest =
            serde_json::from_str(r#"{"productIds":["PROD-0001"]}"#).unwrap();

        assert_eq!(request.product_ids, vec!["PROD-0001".to_string()]);
        assert!(request.include_prices);
        assert!(request.include_stock);
    }

    #[test]
    fn include_flags_can_be_disabled() {
        let request: AggregationRequest = serde_json::from_str(
            r#"{"productIds":["PROD-0001"],"includePrices":false,"includeStock":true}"#,
        )
        .unwrap();

        assert!(!request.include_prices);
        assert!(request.include_stock);
        assert_eq!(
            request.options(),
            FetchOptions {
                include_prices: false,
                include_stock: true
            }
        );
    }

    #[test]
    fn response_serializes_contract_field_names() {
        let response = AggregationResponse {
            products: vec![Product::for_id("PROD-0001")],
            total_requested: 2,
            total_successful: 1,
            elapsed_millis: 317,
            errors: vec!["Failed to process product PROD-0002: boom".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["totalRequested"], 2);
        assert_eq!(json["totalSuccessful"], 1);
        assert_eq!(json["elapsedMillis"], 317);
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
    }
}

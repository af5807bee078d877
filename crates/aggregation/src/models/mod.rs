//! Data model for aggregated product responses.
//!
//! - [`Product`] - per-product aggregate assembled from provider responses
//! - [`PriceQuote`] / [`StockLevel`] - attributed provider payloads
//! - [`Category`] - deterministic taxonomy assignment
//! - [`AggregationRequest`] / [`AggregationResponse`] - batch envelope

mod category;
mod price;
mod product;
mod request;
mod stock;
mod types;

pub use category::Category;
pub use price::PriceQuote;
pub use product::Product;
pub use request::{AggregationRequest, AggregationResponse, FetchOptions};
pub use stock::StockLevel;
pub use types::ProductId;

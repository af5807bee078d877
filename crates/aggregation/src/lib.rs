//! Skufeed Aggregation Crate
//!
//! This crate assembles per-product price and stock data from multiple
//! independent provider feeds into a single aggregated response.
//!
//! # Overview
//!
//! The aggregation crate provides:
//! - Capability traits for price and stock providers
//! - A fixed, ordered provider registry
//! - A fan-out/fan-in engine with partial-failure tolerance
//! - Batch aggregation with timing diagnostics
//! - Simulated provider feeds for development and benchmarks
//!
//! # Architecture
//!
//! ```text
//! +---------------------+
//! | AggregationRequest  |  (K product ids + fetch options)
//! +---------------------+
//!           |
//!           v
//! +---------------------+
//! |  AggregatorService  |  (one task per product)
//! +---------------------+
//!           |
//!           v
//! +---------------------+
//! |  ProviderRegistry   |  (ordered capability sets)
//! +---------------------+
//!      |           |
//!      v           v
//! +--------+  +--------+
//! | Price  |  | Stock  |  (one task per provider, all concurrent)
//! | feeds  |  | feeds  |
//! +--------+  +--------+
//!      |           |
//!      v           v
//! +---------------------+
//! |      Product        |  (quotes + stock levels, attributed)
//! +---------------------+
//! ```
//!
//! Failures stay local. A failing or panicking provider costs the product
//! exactly one payload, and a faulted product costs the batch exactly one
//! diagnostic string. The batch call itself only fails on external
//! cancellation.
//!
//! # Core Types
//!
//! - [`Product`] - aggregated view of one product
//! - [`PriceQuote`] / [`StockLevel`] - attributed provider payloads
//! - [`AggregationRequest`] / [`AggregationResponse`] - batch envelope
//! - [`ProviderRegistry`] - ordered capability sets
//! - [`AggregatorService`] - the fan-out/fan-in engine

pub mod aggregate;
pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

mod hash;

// Re-export commonly used types at the crate root
pub use aggregate::{AggregatorService, AggregatorServiceTrait};
pub use errors::{AggregateError, ProviderError};
pub use models::{
    AggregationRequest, AggregationResponse, Category, FetchOptions, PriceQuote, Product,
    ProductId, StockLevel,
};
pub use provider::simulated::{
    PriceModel, SimulatedPriceProvider, SimulatedStockProvider, SimulationProfile,
};
pub use provider::{PriceProvider, ProviderOutcome, StockProvider};
pub use registry::ProviderRegistry;

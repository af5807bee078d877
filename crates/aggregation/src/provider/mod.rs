//! Provider capability traits and the built-in simulated feeds.
//!
//! This module contains:
//! - The `PriceProvider` and `StockProvider` traits that all data sources
//!   implement
//! - Simulated feeds with configurable latency and failure behavior, used
//!   for development and benchmarks

mod traits;

pub mod simulated;

pub use traits::{PriceProvider, ProviderOutcome, StockProvider};

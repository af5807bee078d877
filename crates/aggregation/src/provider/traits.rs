//! Provider trait definitions.
//!
//! This module defines the `PriceProvider` and `StockProvider` traits that
//! all data sources must implement. The two capabilities are separate
//! traits; a source offering both registers twice.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::ProviderError;
use crate::models::{PriceQuote, StockLevel};

/// Outcome of a single provider call.
pub type ProviderOutcome<T> = Result<T, ProviderError>;

/// Trait for price data sources.
///
/// Implement this trait to add a pricing feed. The registry dispatches to
/// every registered implementation concurrently; a failing implementation
/// costs the aggregate its quote, nothing more.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use skufeed_aggregation::{PriceProvider, PriceQuote, ProviderOutcome};
/// use tokio_util::sync::CancellationToken;
///
/// struct MyFeed {
///     endpoint: String,
/// }
///
/// #[async_trait]
/// impl PriceProvider for MyFeed {
///     fn id(&self) -> &'static str {
///         "MY_FEED"
///     }
///
///     fn name(&self) -> &'static str {
///         "My Feed"
///     }
///
///     async fn get_price(
///         &self,
///         product_id: &str,
///         cancel: &CancellationToken,
///     ) -> ProviderOutcome<PriceQuote> {
///         // ... fetch and build the quote
///     }
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "PRICEWATCH" or "BESTPRICE".
    /// Carried on every quote and used in logs.
    fn id(&self) -> &'static str;

    /// Human-readable name, carried on every quote.
    fn name(&self) -> &'static str;

    /// Fetch the current price for a product.
    ///
    /// Implementations must watch `cancel` and return
    /// [`ProviderError::Cancelled`] promptly once it fires instead of
    /// finishing the fetch. Failures are returned as outcomes, not panics;
    /// a panicking implementation is still contained by the engine.
    async fn get_price(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> ProviderOutcome<PriceQuote>;
}

/// Trait for stock data sources.
///
/// One provider may cover several warehouses; its payload is the full
/// per-warehouse breakdown, already ordered the way the provider wants it
/// presented.
#[async_trait]
pub trait StockProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Fetch warehouse stock levels for a product.
    ///
    /// Same cancellation contract as [`PriceProvider::get_price`].
    async fn get_stock(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> ProviderOutcome<Vec<StockLevel>>;
}

//! Fan-out/fan-in aggregation over the registered providers.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

use crate::errors::{AggregateError, ProviderError};
use crate::models::{
    AggregationRequest, AggregationResponse, FetchOptions, PriceQuote, Product, StockLevel,
};
use crate::registry::ProviderRegistry;

/// Aggregation operations exposed to the request boundary.
#[async_trait]
pub trait AggregatorServiceTrait: Send + Sync {
    /// Aggregates every requested product concurrently.
    ///
    /// Provider failures are absorbed per product and a faulted product
    /// task becomes a diagnostic string in the response, so the call always
    /// produces a response; the only `Err` it returns is
    /// [`AggregateError::Cancelled`].
    async fn aggregate_batch(
        &self,
        request: AggregationRequest,
        cancel: CancellationToken,
    ) -> Result<AggregationResponse, AggregateError>;

    /// Aggregates one product with both sections included.
    ///
    /// Identity fields never depend on provider responses, so this always
    /// yields a product unless the token cancels the call. "Not found" is
    /// not a concept at this layer.
    async fn aggregate_single(
        &self,
        product_id: &str,
        cancel: CancellationToken,
    ) -> Result<Product, AggregateError>;
}

/// Aggregation engine over a fixed provider registry.
///
/// Cloning is cheap; clones share the registry.
#[derive(Clone)]
pub struct AggregatorService {
    registry: Arc<ProviderRegistry>,
}

impl AggregatorService {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Assembles one product: scaffold from the id, then the price and
    /// stock fan-outs running concurrently with each other.
    async fn assemble_product(
        &self,
        product_id: &str,
        options: FetchOptions,
        cancel: &CancellationToken,
    ) -> Product {
        let mut product = Product::for_id(product_id);

        let (prices, stock_levels) = tokio::join!(
            self.collect_prices(product_id, options, cancel),
            self.collect_stock_levels(product_id, options, cancel),
        );

        product.prices = prices;
        product.stock_levels = stock_levels;
        product
    }

    /// Price fan-out. Every provider task is spawned before the first join,
    /// so section latency tracks the slowest provider, not the sum. A
    /// skipped section dispatches nothing at all.
    async fn collect_prices(
        &self,
        product_id: &str,
        options: FetchOptions,
        cancel: &CancellationToken,
    ) -> Vec<PriceQuote> {
        if !options.include_prices {
            return Vec::new();
        }

        let providers = self.registry.price_providers();
        let handles: Vec<_> = providers
            .iter()
            .map(|provider| {
                let provider = Arc::clone(provider);
                let product_id = product_id.to_string();
                let cancel = cancel.clone();
                tokio::spawn(async move { provider.get_price(&product_id, &cancel).await })
            })
            .collect();

        let joined = join_all(handles).await;

        // Join order equals spawn order, so quotes land in registry order.
        let mut quotes = Vec::with_capacity(providers.len());
        for (provider, outcome) in providers.iter().zip(joined) {
            match flatten(outcome) {
                Ok(quote) => quotes.push(quote),
                Err(err) => {
                    warn!(
                        "Price provider {} produced no quote for {}: {}",
                        provider.id(),
                        product_id,
                        err
                    );
                }
            }
        }
        quotes
    }

    /// Stock fan-out. Successful payloads are concatenated in registry
    /// order with each provider's own warehouse order preserved; levels are
    /// never merged or deduplicated.
    async fn collect_stock_levels(
        &self,
        product_id: &str,
        options: FetchOptions,
        cancel: &CancellationToken,
    ) -> Vec<StockLevel> {
        if !options.include_stock {
            return Vec::new();
        }

        let providers = self.registry.stock_providers();
        let handles: Vec<_> = providers
            .iter()
            .map(|provider| {
                let provider = Arc::clone(provider);
                let product_id = product_id.to_string();
                let cancel = cancel.clone();
                tokio::spawn(async move { provider.get_stock(&product_id, &cancel).await })
            })
            .collect();

        let joined = join_all(handles).await;

        let mut levels = Vec::new();
        for (provider, outcome) in providers.iter().zip(joined) {
            match flatten(outcome) {
                Ok(payload) => levels.extend(payload),
                Err(err) => {
                    warn!(
                        "Stock provider {} produced no levels for {}: {}",
                        provider.id(),
                        product_id,
                        err
                    );
                }
            }
        }
        levels
    }

    /// Runs the whole batch without watching the cancellation token; the
    /// public wrapper races this future against it.
    async fn run_batch(
        &self,
        request: &AggregationRequest,
        cancel: &CancellationToken,
    ) -> AggregationResponse {
        let options = request.options();
        let total_requested = request.product_ids.len();

        debug!("Aggregating batch of {} products", total_requested);
        let started = Instant::now();

        let handles: Vec<_> = request
            .product_ids
            .iter()
            .map(|product_id| {
                let service = self.clone();
                let product_id = product_id.clone();
                let cancel = cancel.clone();
                tokio::spawn(async move {
                    service.assemble_product(&product_id, options, &cancel).await
                })
            })
            .collect();

        let joined = join_all(handles).await;
        let elapsed_millis = started.elapsed().as_millis() as u64;

        // Join order equals request order, which is the response contract.
        let mut products = Vec::with_capacity(total_requested);
        let mut errors = Vec::new();
        for (product_id, outcome) in request.product_ids.iter().zip(joined) {
            match outcome {
                Ok(product) => products.push(product),
                Err(fault) => {
                    warn!("Product task for {} faulted: {}", product_id, fault);
                    errors.push(format!("Failed to process product {product_id}: {fault}"));
                }
            }
        }

        let total_successful = products.len();
        debug!(
            "Batch done: {}/{} products in {}ms",
            total_successful, total_requested, elapsed_millis
        );

        AggregationResponse {
            products,
            total_requested,
            total_successful,
            elapsed_millis,
            errors,
        }
    }
}

#[async_trait]
impl AggregatorServiceTrait for AggregatorService {
    async fn aggregate_batch(
        &self,
        request: AggregationRequest,
        cancel: CancellationToken,
    ) -> Result<AggregationResponse, AggregateError> {
        // A token already cancelled at entry short-circuits before any
        // provider is dispatched.
        if cancel.is_cancelled() {
            return Err(AggregateError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(AggregateError::Cancelled),
            response = self.run_batch(&request, &cancel) => Ok(response),
        }
    }

    async fn aggregate_single(
        &self,
        product_id: &str,
        cancel: CancellationToken,
    ) -> Result<Product, AggregateError> {
        if cancel.is_cancelled() {
            return Err(AggregateError::Cancelled);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(AggregateError::Cancelled),
            product = self.assemble_product(product_id, FetchOptions::default(), &cancel) => {
                Ok(product)
            }
        }
    }
}

/// Collapses a joined provider task into one outcome. A panicked task
/// surfaces as its `JoinError` and is handled exactly like a structured
/// provider failure.
fn flatten<T>(joined: Result<Result<T, ProviderError>, JoinError>) -> Result<T, ProviderError> {
    match joined {
        Ok(outcome) => outcome,
        Err(fault) => Err(ProviderError::Faulted {
            message: fault.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_passes_outcomes_through() {
        let ok: Result<Result<u32, ProviderError>, JoinError> = Ok(Ok(7));
        assert_eq!(flatten(ok).unwrap(), 7);

        let err: Result<Result<u32, ProviderError>, JoinError> =
            Ok(Err(ProviderError::Cancelled));
        assert!(matches!(flatten(err), Err(ProviderError::Cancelled)));
    }

    #[tokio::test]
    async fn flatten_converts_join_errors_to_faults() {
        let handle = tokio::spawn(async { panic!("boom") });
        let joined: Result<Result<u32, ProviderError>, JoinError> =
            match handle.await {
                Ok(_) => unreachable!(),
                Err(fault) => Err(fault),
            };

        match flatten(joined) {
            Err(ProviderError::Faulted { message }) => assert!(message.contains("panic")),
            other => panic!("expected Faulted, got {other:?}"),
        }
    }
}

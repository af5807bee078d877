//! Registry of the provider capabilities available to the engine.

use std::sync::Arc;

use crate::provider::simulated::{SimulatedPriceProvider, SimulatedStockProvider};
use crate::provider::{PriceProvider, StockProvider};

/// Fixed, process-lifetime set of provider capabilities, partitioned by
/// kind.
///
/// Registration order is preserved and observable: it is the order the
/// aggregation fan-out dispatches in, and therefore the order quotes and
/// stock levels appear on an aggregated product. The set is immutable
/// after construction, so readers share it without locking.
pub struct ProviderRegistry {
    price_providers: Vec<Arc<dyn PriceProvider>>,
    stock_providers: Vec<Arc<dyn StockProvider>>,
}

impl ProviderRegistry {
    /// Builds a registry over the given capability sets. Either set may be
    /// empty; aggregation over an empty set yields empty payload lists.
    pub fn new(
        price_providers: Vec<Arc<dyn PriceProvider>>,
        stock_providers: Vec<Arc<dyn StockProvider>>,
    ) -> Self {
        Self {
            price_providers,
            stock_providers,
        }
    }

    /// Registry pre-loaded with the five simulated feeds, the composition
    /// the server runs with.
    pub fn with_simulated_feeds() -> Self {
        Self::new(
            vec![
                Arc::new(SimulatedPriceProvider::pricewatch()),
                Arc::new(SimulatedPriceProvider::bestprice()),
                Arc::new(SimulatedPriceProvider::premiumdeals()),
            ],
            vec![
                Arc::new(SimulatedStockProvider::east_coast()),
                Arc::new(SimulatedStockProvider::west_coast()),
            ],
        )
    }

    /// Registered price capabilities, in registration order.
    pub fn price_providers(&self) -> &[Arc<dyn PriceProvider>] {
        &self.price_providers
    }

    /// Registered stock capabilities, in registration order.
    pub fn stock_providers(&self) -> &[Arc<dyn StockProvider>] {
        &self.stock_providers
    }

    /// Looks up a price capability by its stable id.
    pub fn get_price_provider(&self, id: &str) -> Option<&Arc<dyn PriceProvider>> {
        self.price_providers.iter().find(|p| p.id() == id)
    }

    /// Looks up a stock capability by its stable id.
    pub fn get_stock_provider(&self, id: &str) -> Option<&Arc<dyn StockProvider>> {
        self.stock_providers.iter().find(|p| p.id() == id)
    }
}

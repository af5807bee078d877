use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::ProviderError;
use crate::hash::stable_hash;
use crate::models::StockLevel;
use crate::provider::{ProviderOutcome, StockProvider};

use super::{rolls_failure, simulate_latency, SimulationProfile};

/// Simulated inventory feed covering a fixed set of warehouses.
///
/// Quantities are a deterministic function of product id and warehouse
/// code, so the same product reports the same stock picture on every call.
pub struct SimulatedStockProvider {
    id: &'static str,
    name: &'static str,
    profile: SimulationProfile,
    region: &'static str,
    warehouses: &'static [&'static str],
    quantity_cap: u64,
}

impl SimulatedStockProvider {
    pub fn new(
        id: &'static str,
        name: &'static str,
        profile: SimulationProfile,
        region: &'static str,
        warehouses: &'static [&'static str],
        quantity_cap: u64,
    ) -> Self {
        Self {
            id,
            name,
            profile,
            region,
            warehouses,
            quantity_cap,
        }
    }

    /// "East Coast Inventory": NYC/BOS/MIA/ATL, occasionally down.
    pub fn east_coast() -> Self {
        Self::new(
            "STOCK_EAST",
            "East Coast Inventory",
            SimulationProfile::with_latency_ms(250, 600).failing(0.05),
            "East Coast",
            &["NYC", "BOS", "MIA", "ATL"],
            100,
        )
    }

    /// "West Coast Inventory": LAX/SEA/SFO/PHX, never fails.
    pub fn west_coast() -> Self {
        Self::new(
            "STOCK_WEST",
            "West Coast Inventory",
            SimulationProfile::with_latency_ms(200, 500),
            "West Coast",
            &["LAX", "SEA", "SFO", "PHX"],
            150,
        )
    }

    /// One level per covered warehouse, in coverage order.
    fn levels_for(&self, product_id: &str) -> Vec<StockLevel> {
        self.warehouses
            .iter()
            .map(|code| {
                let quantity =
                    (stable_hash(&format!("{product_id}{code}")) % self.quantity_cap) as u32;
                StockLevel::new(
                    format!("WH_{code}"),
                    format!("{code} Distribution Center"),
                    format!("{} - {code}", self.region),
                    quantity,
                )
            })
            .collect()
    }
}

#[async_trait]
impl StockProvider for SimulatedStockProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    async fn get_stock(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> ProviderOutcome<Vec<StockLevel>> {
        simulate_latency(&self.profile, cancel).await?;

        if rolls_failure(&self.profile) {
            return Err(ProviderError::Unavailable {
                provider: self.id.to_string(),
                message: format!("{} service unavailable", self.name),
            });
        }

        Ok(self.levels_for(product_id))
    }
}

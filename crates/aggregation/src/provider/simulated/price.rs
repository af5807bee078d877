use async_trait::async_trait;
use rand::Rng;
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;

use crate::errors::ProviderError;
use crate::hash::stable_hash;
use crate::models::PriceQuote;
use crate::provider::{PriceProvider, ProviderOutcome};

use super::{rolls_failure, simulate_latency, SimulationProfile, SIMULATED_CURRENCY};

/// How a simulated feed turns the hashed base price into a quote.
///
/// The base is `stable_hash(product_id) % 1000`; the model scales it,
/// adds a flat offset, then adds a random jitter below `jitter_tenths`
/// tenths of the currency unit. Jitter keeps consecutive quotes from
/// being byte-identical, the way a live pricing feed behaves.
#[derive(Clone, Copy, Debug)]
pub struct PriceModel {
    /// Scale applied to the hashed base. `1` quotes list price.
    pub scale: Decimal,
    /// Flat amount added after scaling.
    pub offset: Decimal,
    /// Exclusive upper bound of the random jitter, in tenths.
    pub jitter_tenths: u32,
}

impl Default for PriceModel {
    fn default() -> Self {
        Self {
            scale: Decimal::ONE,
            offset: Decimal::ZERO,
            jitter_tenths: 0,
        }
    }
}

/// Simulated pricing feed.
///
/// The named constructors build the three shipped personalities; `new`
/// accepts any profile and model, which tests use for instant feeds.
pub struct SimulatedPriceProvider {
    id: &'static str,
    name: &'static str,
    profile: SimulationProfile,
    model: PriceModel,
}

impl SimulatedPriceProvider {
    pub fn new(
        id: &'static str,
        name: &'static str,
        profile: SimulationProfile,
        model: PriceModel,
    ) -> Self {
        Self {
            id,
            name,
            profile,
            model,
        }
    }

    /// "PriceWatch API": mid-band latency, occasionally down.
    pub fn pricewatch() -> Self {
        Self::new(
            "PRICEWATCH",
            "PriceWatch API",
            SimulationProfile::with_latency_ms(200, 500).failing(0.05),
            PriceModel {
                scale: Decimal::ONE,
                offset: Decimal::from(10),
                jitter_tenths: 50,
            },
        )
    }

    /// "BestPrice API": slowest feed, never fails.
    pub fn bestprice() -> Self {
        Self::new(
            "BESTPRICE",
            "BestPrice API",
            SimulationProfile::with_latency_ms(300, 700),
            PriceModel {
                scale: Decimal::ONE,
                offset: Decimal::from(5),
                jitter_tenths: 30,
            },
        )
    }

    /// "PremiumDeals API": fastest feed, quotes 10% below list.
    pub fn premiumdeals() -> Self {
        Self::new(
            "PREMIUMDEALS",
            "PremiumDeals API",
            SimulationProfile::with_latency_ms(150, 350),
            PriceModel {
                // 0.9
                scale: Decimal::new(9, 1),
                offset: Decimal::ZERO,
                jitter_tenths: 20,
            },
        )
    }

    /// Deterministic part of the quote for a product id.
    fn base_price(&self, product_id: &str) -> Decimal {
        Decimal::from(stable_hash(product_id) % 1_000) * self.model.scale + self.model.offset
    }

    fn quote_price(&self, product_id: &str) -> Decimal {
        let jitter = if self.model.jitter_tenths == 0 {
            Decimal::ZERO
        } else {
            let tenths = rand::thread_rng().gen_range(0..self.model.jitter_tenths);
            Decimal::new(i64::from(tenths), 1)
        };
        self.base_price(product_id) + jitter
    }
}

#[async_trait]
impl PriceProvider for SimulatedPriceProvider {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    async fn get_price(
        &self,
        product_id: &str,
        cancel: &CancellationToken,
    ) -> ProviderOutcome<PriceQuote> {
        simulate_latency(&self.profile, cancel).await?;

        if rolls_failure(&self.profile) {
            return Err(ProviderError::Unavailable {
                provider: self.id.to_string(),
                message: format!("{} temporarily unavailable", self.name),
            });
        }

        Ok(PriceQuote::new(
            self.id,
            self.name,
            self.quote_price(product_id),
            SIMULATED_CURRENCY,
        ))
    }
}

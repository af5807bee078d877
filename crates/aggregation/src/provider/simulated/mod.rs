//! Simulated provider feeds.
//!
//! These stand in for the external pricing and inventory services. Each
//! feed has its own latency band and failure rate, and derives payload data
//! deterministically from the product id, so repeated calls agree on the
//! data while latency and failures stay unpredictable like a live
//! dependency.

mod price;
mod stock;

pub use price::{PriceModel, SimulatedPriceProvider};
pub use stock::SimulatedStockProvider;

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::errors::ProviderError;

/// Currency every simulated feed quotes in.
pub const SIMULATED_CURRENCY: &str = "USD";

/// Latency band and failure rate of one simulated feed.
#[derive(Clone, Copy, Debug)]
pub struct SimulationProfile {
    /// Lower latency bound.
    pub latency_min: Duration,
    /// Upper latency bound, inclusive.
    pub latency_max: Duration,
    /// Probability in `0.0..=1.0` that a call fails after its latency.
    pub failure_rate: f64,
}

impl SimulationProfile {
    /// Profile with the given latency band in milliseconds and no failures.
    pub const fn with_latency_ms(min: u64, max: u64) -> Self {
        Self {
            latency_min: Duration::from_millis(min),
            latency_max: Duration::from_millis(max),
            failure_rate: 0.0,
        }
    }

    /// Same band, with the given failure probability.
    pub fn failing(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    /// Zero latency, never failing. Keeps tests fast and deterministic.
    pub const fn instant() -> Self {
        Self::with_latency_ms(0, 0)
    }
}

/// Sleeps for a random duration inside the profile's band, racing the
/// cancellation token. The sleep models the upstream round trip; a token
/// that fires mid-sleep aborts the call with [`ProviderError::Cancelled`].
async fn simulate_latency(
    profile: &SimulationProfile,
    cancel: &CancellationToken,
) -> Result<(), ProviderError> {
    if cancel.is_cancelled() {
        return Err(ProviderError::Cancelled);
    }

    let latency = random_latency(profile);
    tokio::select! {
        _ = cancel.cancelled() => Err(ProviderError::Cancelled),
        _ = tokio::time::sleep(latency) => Ok(()),
    }
}

/// Rolls the profile's failure probability for one call.
fn rolls_failure(profile: &SimulationProfile) -> bool {
    profile.failure_rate > 0.0 && rand::thread_rng().gen::<f64>() < profile.failure_rate
}

fn random_latency(profile: &SimulationProfile) -> Duration {
    let min = profile.latency_min.as_millis() as u64;
    let max = profile.latency_max.as_millis() as u64;
    if max <= min {
        return profile.latency_min;
    }
    Duration::from_millis(rand::thread_rng().gen_range(min..=max))
}

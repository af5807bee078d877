use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use skufeed_aggregation::{AggregatorService, AggregatorServiceTrait, ProviderRegistry};

/// Shared state handed to every request handler.
pub struct AppState {
    pub aggregator: Arc<dyn AggregatorServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SKUFEED_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the process-lifetime state: the simulated provider registry and
/// the aggregation engine over it.
pub fn build_state() -> Arc<AppState> {
    let registry = Arc::new(ProviderRegistry::with_simulated_feeds());
    let aggregator: Arc<dyn AggregatorServiceTrait> = Arc::new(AggregatorService::new(registry));
    Arc::new(AppState { aggregator })
}

//! Aggregation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use skufeed_aggregation::{AggregationRequest, AggregationResponse, Product};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Hard cap on batch size; larger requests are rejected before any fan-out.
const MAX_BATCH_SIZE: usize = 50;

/// Benchmark batches are clamped to this many synthetic products.
const MAX_BENCHMARK_PRODUCTS: i64 = 20;

async fn aggregate_products(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AggregationRequest>,
) -> ApiResult<Json<AggregationResponse>> {
    if request.product_ids.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one product ID is required.".to_string(),
        ));
    }
    if request.product_ids.len() > MAX_BATCH_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Maximum {MAX_BATCH_SIZE} products per request."
        )));
    }

    tracing::info!(
        "Received aggregation request for {} products",
        request.product_ids.len()
    );

    // Dropping the handler future (client disconnect, timeout) trips the
    // guard and cancels all in-flight provider work for this request.
    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    let response = state.aggregator.aggregate_batch(request, cancel).await?;
    Ok(Json(response))
}

async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Product>> {
    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    let product = state.aggregator.aggregate_single(&product_id, cancel).await?;
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarkParams {
    /// May be out of range or negative; the handler clamps it.
    #[serde(default = "default_benchmark_count")]
    product_count: i64,
}

fn default_benchmark_count() -> i64 {
    10
}

/// Timing report for one synthetic batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarkReport {
    product_count: usize,
    elapsed_millis: u64,
    successful_products: usize,
    average_millis_per_product: f64,
    errors: Vec<String>,
}

async fn run_benchmark(
    Query(params): Query<BenchmarkParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BenchmarkReport>> {
    let product_count = params.product_count.clamp(1, MAX_BENCHMARK_PRODUCTS) as usize;
    let product_ids = (1..=product_count).map(|i| format!("PROD-{i:04}")).collect();

    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    let response = state
        .aggregator
        .aggregate_batch(AggregationRequest::for_ids(product_ids), cancel)
        .await?;

    Ok(Json(BenchmarkReport {
        product_count,
        elapsed_millis: response.elapsed_millis,
        successful_products: response.total_successful,
        average_millis_per_product: response.elapsed_millis as f64 / product_count as f64,
        errors: response.errors,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products/aggregate", post(aggregate_products))
        .route("/products/benchmark", get(run_benchmark))
        .route("/products/{product_id}", get(get_product))
}

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use skufeed_aggregation::{
    AggregatorService, AggregatorServiceTrait, PriceModel, ProviderRegistry,
    SimulatedPriceProvider, SimulatedStockProvider, SimulationProfile,
};
use skufeed_server::{api::app_router, build_state, config::Config, AppState};

/// State over two instant price feeds and one two-warehouse stock feed, so
/// the tests stay fast and payload shapes stay predictable.
fn instant_state() -> Arc<AppState> {
    let registry = ProviderRegistry::new(
        vec![
            Arc::new(SimulatedPriceProvider::new(
                "P1",
                "Feed One",
                SimulationProfile::instant(),
                PriceModel::default(),
            )),
            Arc::new(SimulatedPriceProvider::new(
                "P2",
                "Feed Two",
                SimulationProfile::instant(),
                PriceModel::default(),
            )),
        ],
        vec![Arc::new(SimulatedStockProvider::new(
            "S1",
            "Test Inventory",
            SimulationProfile::instant(),
            "Test Region",
            &["AAA", "BBB"],
            100,
        ))],
    );
    let aggregator: Arc<dyn AggregatorServiceTrait> =
        Arc::new(AggregatorService::new(Arc::new(registry)));
    Arc::new(AppState { aggregator })
}

fn test_router(state: Arc<AppState>) -> axum::Router {
    app_router(state, &Config::from_env())
}

fn aggregate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/products/aggregate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let app = test_router(build_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn aggregate_returns_the_contract_fields() {
    let app = test_router(instant_state());

    let response = app
        .oneshot(aggregate_request(serde_json::json!({
            "productIds": ["PROD-0001", "PROD-0002"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["totalRequested"], 2);
    assert_eq!(json["totalSuccessful"], 2);
    assert!(json["elapsedMillis"].is_u64());
    assert_eq!(json["errors"].as_array().unwrap().len(), 0);

    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"], "PROD-0001");
    assert_eq!(products[0]["name"], "Product PROD-0001");
    assert_eq!(products[0]["prices"].as_array().unwrap().len(), 2);
    assert_eq!(products[0]["prices"][0]["providerId"], "P1");
    assert_eq!(products[0]["stockLevels"].as_array().unwrap().len(), 2);
    assert_eq!(products[0]["stockLevels"][0]["warehouseId"], "WH_AAA");
}

#[tokio::test]
async fn aggregate_rejects_an_empty_batch() {
    let app = test_router(instant_state());

    let response = app
        .oneshot(aggregate_request(serde_json::json!({ "productIds": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "At least one product ID is required.");
}

#[tokio::test]
async fn aggregate_rejects_an_oversized_batch() {
    let app = test_router(instant_state());

    let ids: Vec<String> = (1..=51).map(|i| format!("PROD-{i:04}")).collect();
    let response = app
        .oneshot(aggregate_request(serde_json::json!({ "productIds": ids })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["message"], "Maximum 50 products per request.");
}

#[tokio::test]
async fn aggregate_defaults_the_include_flags() {
    let app = test_router(instant_state());

    let response = app
        .oneshot(aggregate_request(serde_json::json!({
            "productIds": ["PROD-0001"],
            "includeStock": false
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let product = &json["products"][0];
    // Prices defaulted on, stock explicitly off.
    assert_eq!(product["prices"].as_array().unwrap().len(), 2);
    assert_eq!(product["stockLevels"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn single_product_route_builds_the_product() {
    let app = test_router(instant_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/PROD-0042")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["id"], "PROD-0042");
    assert_eq!(json["name"], "Product PROD-0042");
    assert_eq!(json["description"], "Description for product PROD-0042");
    assert_eq!(json["prices"].as_array().unwrap().len(), 2);
    assert_eq!(json["stockLevels"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn benchmark_clamps_the_product_count() {
    let app = test_router(instant_state());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/benchmark?productCount=999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["productCount"], 20);
    assert_eq!(json["successfulProducts"], 20);
    assert!(json["elapsedMillis"].is_u64());
    assert!(json["averageMillisPerProduct"].is_number());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/products/benchmark?productCount=-5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = response_json(response).await;
    assert_eq!(json["productCount"], 1);
}

//! Integration tests for `FulfillmentClient::resolve`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the happy paths (no stores, one store,
//! multi-part accumulation) and every error variant `resolve` can propagate.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pickupwatch_fulfillment::{FulfillmentClient, FulfillmentError};

/// Builds a client suitable for tests: 5-second timeout, zero courtesy delay.
fn test_client(server: &MockServer) -> FulfillmentClient {
    FulfillmentClient::new(&server.uri(), 5, "pickupwatch-test/0.1", 0)
        .expect("failed to build test FulfillmentClient")
}

/// Vendor response body with the given stores nested at the real payload path.
fn pickup_body(stores: serde_json::Value) -> serde_json::Value {
    json!({
        "body": {
            "content": {
                "pickupMessage": {
                    "stores": stores
                }
            }
        }
    })
}

/// One store record reporting `part` with the given pickup status.
fn store_json(name: &str, distance: &str, part: &str, pickup_display: &str) -> serde_json::Value {
    json!({
        "storeName": name,
        "storeDistanceWithUnit": distance,
        "makeReservationUrl": "https://www.apple.com/shop/reserve-start",
        "reservationUrl": format!("https://www.apple.com/shop/reserve/{name}"),
        "partsAvailability": {
            part: {
                "storePickEligible": true,
                "pickupDisplay": pickup_display,
                "partNumber": part
            }
        }
    })
}

#[tokio::test]
async fn resolve_returns_empty_when_vendor_reports_no_stores() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stores = client
        .resolve("Chicago, IL", &["MU693LL/A"])
        .await
        .expect("empty store list is a normal outcome");

    assert!(stores.is_empty());
}

#[tokio::test]
async fn resolve_maps_available_store_through_the_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .and(query_param("parts.0", "MU693LL/A"))
        .and(query_param("location", "Chicago, IL"))
        .and(query_param("cppart", "UNLOCKED/US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([
            store_json("Apple Michigan Avenue", "0.5 mi", "MU693LL/A", "available")
        ]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stores = client
        .resolve("Chicago, IL", &["MU693LL/A"])
        .await
        .expect("expected a successful resolve");

    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].name, "Apple Michigan Avenue");
    assert_eq!(stores[0].distance, "0.5 mi");
    assert_eq!(stores[0].model, "iPhone 15 Pro Max 256GB Blue Titanium");
    assert_eq!(stores[0].storage, "256gb");
    assert_eq!(
        stores[0].reservation_url,
        "https://www.apple.com/shop/reserve/Apple Michigan Avenue"
    );
}

#[tokio::test]
async fn resolve_excludes_unavailable_and_unlisted_stores() {
    let server = MockServer::start().await;

    // Three stores: available, explicitly unavailable, and one that does not
    // list the queried part at all. Only the first may survive.
    let other_part_store = store_json("Apple Grand Central", "2.1 mi", "MU6E3LL/A", "available");
    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([
            store_json("Apple Michigan Avenue", "0.5 mi", "MU693LL/A", "available"),
            store_json("Apple Lincoln Park", "3.2 mi", "MU693LL/A", "unavailable"),
            other_part_store
        ]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stores = client
        .resolve("Chicago, IL", &["MU693LL/A"])
        .await
        .expect("expected a successful resolve");

    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].name, "Apple Michigan Avenue");
}

#[tokio::test]
async fn resolve_accumulates_in_part_order_then_vendor_order() {
    let server = MockServer::start().await;

    // 512GB probe answers with two stores, 256GB probe with one. Catalog
    // order puts the 256GB match first regardless of response contents.
    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .and(query_param("parts.0", "MU693LL/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([
            store_json("Apple Michigan Avenue", "0.5 mi", "MU693LL/A", "available")
        ]))))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .and(query_param("parts.0", "MU6E3LL/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([
            store_json("Apple Lincoln Park", "3.2 mi", "MU6E3LL/A", "available"),
            store_json("Apple Old Orchard", "9.8 mi", "MU6E3LL/A", "available")
        ]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let stores = client
        .resolve("Chicago, IL", &["MU693LL/A", "MU6E3LL/A"])
        .await
        .expect("expected a successful resolve");

    let names: Vec<&str> = stores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        ["Apple Michigan Avenue", "Apple Lincoln Park", "Apple Old Orchard"],
        "outer order must be part order, inner order vendor order"
    );
    assert_eq!(stores[0].storage, "256gb");
    assert_eq!(stores[1].storage, "512gb");
}

#[tokio::test]
async fn resolve_fails_loudly_on_schema_mismatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": {}})))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.resolve("Chicago, IL", &["MU693LL/A"]).await;

    assert!(
        matches!(result, Err(FulfillmentError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn resolve_fails_loudly_on_unknown_pickup_display() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([
            store_json("Apple Michigan Avenue", "0.5 mi", "MU693LL/A", "ineligible")
        ]))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.resolve("Chicago, IL", &["MU693LL/A"]).await;

    assert!(
        matches!(result, Err(FulfillmentError::Deserialize { .. })),
        "a pickupDisplay outside the closed set must fail the run, got: {result:?}"
    );
}

#[tokio::test]
async fn resolve_propagates_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.resolve("Chicago, IL", &["MU693LL/A"]).await;

    assert!(
        matches!(result, Err(FulfillmentError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn resolve_aborts_remaining_probes_after_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .and(query_param("parts.0", "MU693LL/A"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    // The second part must never be probed once the first probe fails.
    Mock::given(method("GET"))
        .and(path("/shop/fulfillment-messages"))
        .and(query_param("parts.0", "MU6E3LL/A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pickup_body(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .resolve("Chicago, IL", &["MU693LL/A", "MU6E3LL/A"])
        .await;

    assert!(result.is_err());
}

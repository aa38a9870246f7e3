//! HTTP-level tests driving the router against an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use dukaan_api_server::{router, AppState};
use dukaan_db::{Database, DbConfig};

async fn test_app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    router(AppState { db })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_liveness() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"API Running");
}

#[tokio::test]
async fn test_create_shop_requires_name() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/shops",
        Some(json!({ "phone": "9876543210" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");
}

#[tokio::test]
async fn test_create_and_get_shop() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/shops",
        Some(json!({ "name": "Gold House", "address": "MG Road" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/shops/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Gold House");
    assert_eq!(fetched["address"], "MG Road");
}

#[tokio::test]
async fn test_get_unknown_id_is_404() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4().to_string();

    for resource in ["shops", "customers", "items", "transactions", "bills"] {
        let (status, body) =
            send(&app, Method::GET, &format!("/api/{resource}/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{resource}");
        assert!(body["error"].as_str().unwrap().ends_with("not found"));
    }
}

#[tokio::test]
async fn test_malformed_id_is_400() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/shops/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid format"));
}

#[tokio::test]
async fn test_bad_enum_value_is_400() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "transactionType": "Cheque" })),
    )
    .await;

    // Deserialization failures are validation errors: 400, never 422,
    // with the underlying message in the standard error body.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("unknown variant `Cheque`"), "{message}");
}

#[tokio::test]
async fn test_malformed_json_body_is_400() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/shops")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_transaction_requires_type() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "totalAmount": 118000 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "transactionType is required");
}

#[tokio::test]
async fn test_deleting_shop_leaves_customer_with_null_ref() {
    let app = test_app().await;

    let (_, shop) = send(
        &app,
        Method::POST,
        "/api/shops",
        Some(json!({ "name": "Gold House" })),
    )
    .await;
    let shop_id = shop["id"].as_str().unwrap().to_string();

    let (_, customer) = send(
        &app,
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "A. Kumar", "shop": shop_id })),
    )
    .await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    // Resolved before the delete
    let (status, view) = send(&app, Method::GET, &format!("/api/customers/{customer_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["shop"]["name"], "Gold House");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/shops/{shop_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    // Customer survives; the dangling reference resolves to null
    let (status, view) = send(&app, Method::GET, &format!("/api/customers/{customer_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["name"], "A. Kumar");
    assert!(view["shop"].is_null());
}

#[tokio::test]
async fn test_inconsistent_bill_totals_are_accepted() {
    let app = test_app().await;

    // One line item of ₹500.00, but totals that bear no relation to it
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/bills",
        Some(json!({
            "serialNo": "B001",
            "items": [{ "itemName": "Ring", "quantity": 1, "price": 50000 }],
            "totalAmountWithoutTax": 1,
            "taxAmount": 2,
            "totalAmount": 3
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/bills/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["totalAmountWithoutTax"], 1);
    assert_eq!(fetched["taxAmount"], 2);
    assert_eq!(fetched["totalAmount"], 3);
}

#[tokio::test]
async fn test_bill_rejects_negative_line_item() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/bills",
        Some(json!({
            "serialNo": "B001",
            "items": [{ "itemName": "Ring", "quantity": -1, "price": 50000 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "quantity must be non-negative");
}

#[tokio::test]
async fn test_partial_update_merges() {
    let app = test_app().await;

    let (_, item) = send(
        &app,
        Method::POST,
        "/api/items",
        Some(json!({ "name": "Chain", "quantity": 5, "price": 250000, "quality": "22K" })),
    )
    .await;
    let id = item["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/items/{id}"),
        Some(json!({ "price": 260000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 260000);
    // Untouched fields keep their stored values
    assert_eq!(updated["name"], "Chain");
    assert_eq!(updated["quantity"], 5);
    assert_eq!(updated["quality"], "22K");
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let app = test_app().await;
    let missing = uuid::Uuid::new_v4().to_string();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/shops/{missing}"),
        Some(json!({ "name": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shop not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = test_app().await;

    let (_, item) = send(
        &app,
        Method::POST,
        "/api/items",
        Some(json!({ "name": "Bangle" })),
    )
    .await;
    let id = item["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item deleted");

    let (status, _) = send(&app, Method::GET, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/items/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_to_end_billing_flow() {
    let app = test_app().await;

    let (_, shop) = send(
        &app,
        Method::POST,
        "/api/shops",
        Some(json!({ "name": "Gold House" })),
    )
    .await;
    let shop_id = shop["id"].as_str().unwrap().to_string();

    let (_, customer) = send(
        &app,
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "A. Kumar", "shop": shop_id })),
    )
    .await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    // Client-side totals for 2 × ₹500.00 at 18% GST
    let (status, bill) = send(
        &app,
        Method::POST,
        "/api/bills",
        Some(json!({
            "serialNo": "B001",
            "customer": customer_id,
            "items": [{ "itemName": "Ring", "quantity": 2, "price": 50000, "quality": "22K" }],
            "totalAmountWithoutTax": 100000,
            "taxAmount": 18000,
            "totalAmount": 118000,
            "transactionType": "Cash"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let bill_id = bill["id"].as_str().unwrap().to_string();

    let (status, view) = send(&app, Method::GET, &format!("/api/bills/{bill_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["serialNo"], "B001");
    assert_eq!(view["customer"]["name"], "A. Kumar");
    assert_eq!(view["items"][0]["itemName"], "Ring");
    assert_eq!(view["totalAmountWithoutTax"], 100000);
    assert_eq!(view["taxAmount"], 18000);
    assert_eq!(view["totalAmount"], 118000);
    assert_eq!(view["transactionType"], "Cash");
}

#[tokio::test]
async fn test_dashboard_aggregates() {
    let app = test_app().await;

    for (serial, subtotal, tax, total) in [("B001", 100000, 18000, 118000), ("B002", 50000, 9000, 59000)] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/bills",
            Some(json!({
                "serialNo": serial,
                "items": [
                    { "itemName": "Ring", "quantity": 1, "price": 30000, "quality": "22K" },
                    { "itemName": "Chain", "quantity": 2, "price": 10000 }
                ],
                "totalAmountWithoutTax": subtotal,
                "taxAmount": tax,
                "totalAmount": total
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, _) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "transactionType": "Banking", "totalAmount": 59000 })),
    )
    .await;

    let (status, dashboard) = send(&app, Method::GET, "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(dashboard["summary"]["totalAmountWithoutTax"], 150000);
    assert_eq!(dashboard["summary"]["totalTaxAmount"], 27000);
    assert_eq!(dashboard["summary"]["totalAmount"], 177000);
    assert_eq!(dashboard["summary"]["totalTransactions"], 1);

    // Two bills, each with a qty-1 and qty-2 line
    assert_eq!(
        dashboard["priceByQuantity"],
        json!([
            { "quantity": 1, "price": 60000 },
            { "quantity": 2, "price": 20000 }
        ])
    );
    assert_eq!(
        dashboard["qualityDistribution"],
        json!([
            { "name": "22K", "value": 2 },
            { "name": "Unknown", "value": 2 }
        ])
    );
}

#[tokio::test]
async fn test_transaction_resolves_references() {
    let app = test_app().await;

    let (_, customer) = send(
        &app,
        Method::POST,
        "/api/customers",
        Some(json!({ "name": "A. Kumar" })),
    )
    .await;
    let customer_id = customer["id"].as_str().unwrap().to_string();

    let (_, item) = send(
        &app,
        Method::POST,
        "/api/items",
        Some(json!({ "name": "Ring", "price": 50000 })),
    )
    .await;
    let item_id = item["id"].as_str().unwrap().to_string();

    let (status, tx) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({
            "transactionType": "Cash",
            "customer": customer_id,
            "item": item_id,
            "totalAmountWithoutTax": 50000,
            "taxAmount": 9000,
            "totalAmount": 59000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let tx_id = tx["id"].as_str().unwrap().to_string();

    let (status, view) = send(&app, Method::GET, &format!("/api/transactions/{tx_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["customer"]["name"], "A. Kumar");
    assert_eq!(view["item"]["name"], "Ring");
    assert_eq!(view["totalAmount"], 59000);
}

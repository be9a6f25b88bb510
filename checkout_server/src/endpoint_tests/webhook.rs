use actix_web::{http::StatusCode, web, web::ServiceConfig};
use checkout_engine::OrderFlowApi;
use serde_json::{json, Value};
use shopify_api::ShopifyApiError;

use super::helpers::{post_json, stored_order};
use crate::{
    endpoint_tests::mocks::{MockForwarder, MockOrderStoreBackend},
    routes::CoinbaseWebhookRoute,
};

fn charge_event(event_type: &str, order_id: Value) -> Value {
    json!({
        "event": {
            "id": "1",
            "type": event_type,
            "data": { "metadata": { "order_id": order_id } }
        }
    })
}

#[actix_web::test]
async fn pending_charge_creates_a_paid_shopify_order() {
    let _ = env_logger::try_init().ok();
    let mut store = MockOrderStoreBackend::new();
    store
        .expect_fetch_order_by_order_id()
        .withf(|id| id.as_str() == "4910")
        .returning(|id| Ok(Some(stored_order(id.as_str()))));
    let mut forwarder = MockForwarder::new();
    forwarder
        .expect_forward_order()
        .withf(|order| {
            // Quantity is pinned to 1 and the variant gid prefix is stripped on this path
            order.line_items[0].quantity == 1 &&
                order.line_items[0].variant_id.as_deref() == Some("42") &&
                order.financial_status == "paid" &&
                order.shipping_address.country_code.as_deref() == Some("US")
        })
        .returning(|_| Ok(json!({ "order": { "id": 450789469 } })));
    let (status, _, body) =
        post_json("/webhook/coinbase", charge_event("charge:pending", json!(4910.0)), configure(store, forwarder))
            .await;
    assert_eq!(status, StatusCode::OK);
    // The Shopify response body is relayed verbatim
    assert_eq!(body, r#"{"order":{"id":450789469}}"#);
}

#[actix_web::test]
async fn other_event_types_are_acknowledged_and_ignored() {
    let _ = env_logger::try_init().ok();
    // No expectations on either mock: nothing may be stored or forwarded
    let store = MockOrderStoreBackend::new();
    let forwarder = MockForwarder::new();
    let (status, _, body) =
        post_json("/webhook/coinbase", charge_event("charge:confirmed", json!("4910")), configure(store, forwarder))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Event type not handled");
}

#[actix_web::test]
async fn envelope_without_an_event_is_acknowledged() {
    let _ = env_logger::try_init().ok();
    let store = MockOrderStoreBackend::new();
    let forwarder = MockForwarder::new();
    let (status, _, body) = post_json("/webhook/coinbase", json!({}), configure(store, forwarder)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Event type not handled");
}

#[actix_web::test]
async fn unknown_order_id_is_an_error() {
    let _ = env_logger::try_init().ok();
    let mut store = MockOrderStoreBackend::new();
    store.expect_fetch_order_by_order_id().returning(|_| Ok(None));
    // The forwarder must not be called for an order we never stored
    let forwarder = MockForwarder::new();
    let (status, _, body) =
        post_json("/webhook/coinbase", charge_event("charge:pending", json!("9999")), configure(store, forwarder))
            .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error creating Shopify order");
}

#[actix_web::test]
async fn pending_charge_without_an_order_id_is_an_error() {
    let _ = env_logger::try_init().ok();
    let store = MockOrderStoreBackend::new();
    let forwarder = MockForwarder::new();
    let payload = json!({ "event": { "type": "charge:pending", "data": { "metadata": {} } } });
    let (status, _, body) = post_json("/webhook/coinbase", payload, configure(store, forwarder)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error creating Shopify order");
}

#[actix_web::test]
async fn shopify_rejection_is_an_error() {
    let _ = env_logger::try_init().ok();
    let mut store = MockOrderStoreBackend::new();
    store.expect_fetch_order_by_order_id().returning(|id| Ok(Some(stored_order(id.as_str()))));
    let mut forwarder = MockForwarder::new();
    forwarder.expect_forward_order().returning(|_| {
        Err(ShopifyApiError::QueryError { status: 422, message: "line_items cannot be blank".to_string() })
    });
    let (status, _, body) =
        post_json("/webhook/coinbase", charge_event("charge:pending", json!("4910")), configure(store, forwarder))
            .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error creating Shopify order");
}

fn configure(store: MockOrderStoreBackend, forwarder: MockForwarder) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let orders_api = OrderFlowApi::new(store);
        cfg.service(CoinbaseWebhookRoute::<MockOrderStoreBackend, MockForwarder>::new())
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(forwarder));
    }
}

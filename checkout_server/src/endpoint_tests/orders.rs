use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use checkout_engine::{InsertedOrder, OrderFlowApi, StoreError};

use super::helpers::{order_submission_json, post_json, send_request};
use crate::{endpoint_tests::mocks::MockOrderStoreBackend, routes::OrderIntakeRoute};

#[actix_web::test]
async fn submitted_order_is_stored() {
    let _ = env_logger::try_init().ok();
    let mut store = MockOrderStoreBackend::new();
    store
        .expect_insert_order()
        .withf(|order| {
            // The numeric order id arrives normalized
            order.order_id.as_str() == "4910" &&
                order.total == "129.99" &&
                order.shipping_info.email == "alice@example.com" &&
                order.cart_items.len() == 1
        })
        .returning(|_| Ok(InsertedOrder { order_id: 1, customer_id: 1 }));
    let (status, _, body) = post_json("/api/order", order_submission_json(), configure(store)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"message":"Order saved successfully"}"#);
}

#[actix_web::test]
async fn store_failure_is_a_generic_500() {
    let _ = env_logger::try_init().ok();
    let mut store = MockOrderStoreBackend::new();
    store.expect_insert_order().returning(|_| Err(StoreError::DatabaseError("disk is full".to_string())));
    let (status, _, body) = post_json("/api/order", order_submission_json(), configure(store)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to save order"}"#);
    // The backend detail is never surfaced to the caller
    assert!(!body.contains("disk is full"));
}

#[actix_web::test]
async fn non_post_requests_are_rejected() {
    let _ = env_logger::try_init().ok();
    // No expectations: the request must be rejected before the store is touched
    let store = MockOrderStoreBackend::new();
    let req = TestRequest::get().uri("/api/order");
    let (status, headers, body) = send_request(req, configure(store)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers.get("Allow").unwrap(), "POST");
    assert_eq!(body, "Method GET Not Allowed");
}

#[actix_web::test]
async fn malformed_payloads_are_a_500() {
    let _ = env_logger::try_init().ok();
    let store = MockOrderStoreBackend::new();
    let req = TestRequest::post().uri("/api/order").insert_header(("Content-Type", "application/json")).set_payload("{");
    let (status, _, _) = send_request(req, configure(store)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

fn configure(store: MockOrderStoreBackend) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let orders_api = OrderFlowApi::new(store);
        cfg.service(OrderIntakeRoute::<MockOrderStoreBackend>::new()).app_data(web::Data::new(orders_api));
    }
}

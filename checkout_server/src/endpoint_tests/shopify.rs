use actix_web::{http::StatusCode, test::TestRequest, web, web::ServiceConfig};
use serde_json::json;
use shopify_api::ShopifyApiError;

use super::helpers::{order_submission_json, post_json, send_request};
use crate::{endpoint_tests::mocks::MockForwarder, routes::CreateShopifyOrderRoute};

#[actix_web::test]
async fn direct_submission_is_forwarded_as_submitted() {
    let _ = env_logger::try_init().ok();
    let mut forwarder = MockForwarder::new();
    forwarder
        .expect_forward_order()
        .withf(|order| {
            // Quantities are propagated and variant ids are not sent on this path
            order.line_items[0].quantity == 2 &&
                order.line_items[0].variant_id.is_none() &&
                order.financial_status == "paid" &&
                order.shipping_address.country.as_deref() == Some("US") &&
                order.shipping_address.country_code.is_none()
        })
        .returning(|_| Ok(json!({ "order": { "id": 450789469 } })));
    let (status, _, body) = post_json("/api/shopify_order", order_submission_json(), configure(forwarder)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"order":{"id":450789469}}"#);
}

#[actix_web::test]
async fn forwarding_failure_is_a_generic_500() {
    let _ = env_logger::try_init().ok();
    let mut forwarder = MockForwarder::new();
    forwarder.expect_forward_order().returning(|_| Err(ShopifyApiError::RestResponseError("timed out".to_string())));
    let (status, _, body) = post_json("/api/shopify_order", order_submission_json(), configure(forwarder)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to create Shopify order"}"#);
}

#[actix_web::test]
async fn non_post_requests_are_rejected() {
    let _ = env_logger::try_init().ok();
    let forwarder = MockForwarder::new();
    let req = TestRequest::delete().uri("/api/shopify_order");
    let (status, headers, body) = send_request(req, configure(forwarder)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(headers.get("Allow").unwrap(), "POST");
    assert_eq!(body, "Method DELETE Not Allowed");
}

fn configure(forwarder: MockForwarder) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.service(CreateShopifyOrderRoute::<MockForwarder>::new()).app_data(web::Data::new(forwarder));
    }
}

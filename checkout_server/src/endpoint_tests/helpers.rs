use actix_web::{
    body::MessageBody,
    http::{header::HeaderMap, StatusCode},
    test,
    test::TestRequest,
    web::ServiceConfig,
    App,
};
use checkout_engine::db_types::{CartItem, OrderId, OrderRecord, OrderStatusType, ShippingInfo};
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::ServerError;

/// Sends the given request against an app configured by `configure`, mirroring the json
/// extractor wiring of the real server.
pub async fn send_request(
    req: TestRequest,
    configure: impl FnOnce(&mut ServiceConfig),
) -> (StatusCode, HeaderMap, String) {
    let app = App::new()
        .app_data(
            actix_web::web::JsonConfig::default()
                .error_handler(|err, _req| ServerError::InvalidRequestBody(err.to_string()).into()),
        )
        .configure(configure);
    let service = test::init_service(app).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let headers = res.headers().clone();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, headers, body)
}

pub async fn post_json(
    path: &str,
    body: Value,
    configure: impl FnOnce(&mut ServiceConfig),
) -> (StatusCode, HeaderMap, String) {
    send_request(TestRequest::post().uri(path).set_json(body), configure).await
}

pub fn order_submission_json() -> Value {
    json!({
        "orderId": 4910.0,
        "total": "129.99",
        "shippingInfo": {
            "name": "Alice van der Berg",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
            "country": "US",
            "email": "alice@example.com"
        },
        "cartItems": [
            { "variantId": "gid://shopify/ProductVariant/42", "title": "Tee", "price": "129.99", "quantity": 2 }
        ]
    })
}

pub fn stored_order(order_id: &str) -> OrderRecord {
    OrderRecord {
        id: 1,
        customer_id: 1,
        order_id: OrderId(order_id.to_string()),
        total: "129.99".to_string(),
        status: OrderStatusType::Pending,
        cart_items: vec![CartItem {
            variant_id: Some("gid://shopify/ProductVariant/42".to_string()),
            title: "Tee".to_string(),
            price: "129.99".to_string(),
            quantity: Some(2),
        }],
        shipping_info: ShippingInfo {
            name: "Alice van der Berg".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
            country: "US".to_string(),
            email: "alice@example.com".to_string(),
        },
        customer_email: "alice@example.com".to_string(),
        created_at: Utc::now(),
    }
}

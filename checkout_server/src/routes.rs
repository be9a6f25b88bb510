//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! All three JSON endpoints are POST-only. The route structs register the handler for POST and reject every
//! other method with a 405 carrying an `Allow: POST` header, before any request processing happens.

use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use checkout_engine::{OrderFlowApi, OrderFlowError, OrderStore};
use log::*;
use serde_json::json;
use shopify_api::OrderForwarder;

use crate::{
    data_objects::{CoinbaseWebhook, OrderSubmission, CHARGE_PENDING},
    integrations::shopify::{shopify_order_from_record, shopify_order_from_submission},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => Post $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .route(actix_web::web::post().to($name::< $( [< T $bounds:camel >], )+>))
                    .default_service(actix_web::web::to($crate::routes::method_not_allowed));
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

/// Fallback for non-POST requests on the JSON routes.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!("💻️ Rejecting {} {}. Only POST is supported on this route", req.method(), req.path());
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .body(format!("Method {} Not Allowed", req.method()))
}

//----------------------------------------------   Order intake  ----------------------------------------------------
route!(order_intake => Post "/api/order" impl OrderStore);
/// Route handler for the order intake endpoint.
///
/// The storefront checkout POSTs the order here after creating the Coinbase charge. The order is stored,
/// pending a payment confirmation, and a customer record is created from the shipping details in the same
/// transaction. Nothing is forwarded to Shopify on this path.
pub async fn order_intake<B: OrderStore>(
    body: web::Json<OrderSubmission>,
    api: web::Data<OrderFlowApi<B>>,
) -> HttpResponse {
    let submission = body.into_inner();
    debug!("📦️ Received order submission for order {}", submission.order_id);
    match api.save_new_order(submission.into()).await {
        Ok(inserted) => {
            info!("📦️ Saved order {} for customer {}", inserted.order_id, inserted.customer_id);
            HttpResponse::Ok().json(json!({ "message": "Order saved successfully" }))
        },
        Err(e) => {
            error!("📦️ Could not save order. {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to save order" }))
        },
    }
}

//----------------------------------------------   Payment confirmation  --------------------------------------------
route!(coinbase_webhook => Post "/webhook/coinbase" impl OrderStore, OrderForwarder);
/// Route handler for Coinbase Commerce charge events.
///
/// Only `charge:pending` events are acted on; everything else is acknowledged with a 200 so that Coinbase
/// does not retry. For a pending charge, the order id is read from the charge metadata, the stored order is
/// looked up, and a paid Shopify order is created from it. The Shopify response body is relayed to the caller
/// on success.
pub async fn coinbase_webhook<B: OrderStore, F: OrderForwarder>(
    body: web::Json<CoinbaseWebhook>,
    api: web::Data<OrderFlowApi<B>>,
    forwarder: web::Data<F>,
) -> HttpResponse {
    let hook = body.into_inner();
    let event_type = hook.event.as_ref().map(|e| e.event_type.as_str());
    if event_type != Some(CHARGE_PENDING) {
        debug!("💰️ Ignoring webhook event of type {}", event_type.unwrap_or("<none>"));
        return HttpResponse::Ok().body("Event type not handled");
    }
    let Some(order_id) = hook.order_id().cloned() else {
        warn!("💰️ Received a {CHARGE_PENDING} event without an order id in its metadata");
        return HttpResponse::InternalServerError().body("Error creating Shopify order");
    };
    info!("💰️ Payment detected for order {order_id}");
    let record = match api.order_for_payment(&order_id).await {
        Ok(record) => record,
        Err(OrderFlowError::OrderNotFound(id)) => {
            warn!("💰️ No stored order matches {id}. The Shopify order will not be created.");
            return HttpResponse::InternalServerError().body("Error creating Shopify order");
        },
        Err(e) => {
            error!("💰️ Could not look up order {order_id}. {e}");
            return HttpResponse::InternalServerError().body("Error creating Shopify order");
        },
    };
    let order = shopify_order_from_record(&record);
    match forwarder.forward_order(&order).await {
        Ok(response) => {
            info!("💰️ Created Shopify order for order {order_id}");
            HttpResponse::Ok().json(response)
        },
        Err(e) => {
            error!("💰️ Shopify rejected the order for {order_id}. {e}");
            HttpResponse::InternalServerError().body("Error creating Shopify order")
        },
    }
}

//----------------------------------------------   Direct forward  --------------------------------------------------
route!(create_shopify_order => Post "/api/shopify_order" impl OrderForwarder);
/// Route handler for the direct order forwarder.
///
/// Creates a Shopify order straight from the checkout payload, bypassing the order store. The order id in the
/// payload is used for logging only.
pub async fn create_shopify_order<F: OrderForwarder>(
    body: web::Json<OrderSubmission>,
    forwarder: web::Data<F>,
) -> HttpResponse {
    let submission = body.into_inner();
    debug!("🛍️ Forwarding order {} directly to Shopify", submission.order_id);
    let order = shopify_order_from_submission(&submission);
    match forwarder.forward_order(&order).await {
        Ok(response) => {
            info!("🛍️ Created Shopify order for order {}", submission.order_id);
            HttpResponse::Ok().json(response)
        },
        Err(e) => {
            error!("🛍️ Could not create Shopify order for {}. {e}", submission.order_id);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to create Shopify order" }))
        },
    }
}

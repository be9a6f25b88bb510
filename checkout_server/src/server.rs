use std::time::Duration;

use actix_cors::Cors;
use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use checkout_engine::{OrderFlowApi, SqliteDatabase};
use log::info;
use shopify_api::ShopifyApi;

use crate::{
    config::{CorsConfig, ServerConfig},
    errors::ServerError,
    routes::{health, CoinbaseWebhookRoute, CreateShopifyOrderRoute, OrderIntakeRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.migrate_on_startup {
        db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
        info!("🗃️ Database migrations are up to date");
    }
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let shopify_api =
        ShopifyApi::new(config.shopify_config.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(db.clone());
        let cors = build_cors(&config.cors);
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("ccb::access_log"))
            .wrap(cors)
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(shopify_api.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ServerError::InvalidRequestBody(err.to_string()).into()
            }))
            .service(health)
            .service(OrderIntakeRoute::<SqliteDatabase>::new())
            .service(CoinbaseWebhookRoute::<SqliteDatabase, ShopifyApi>::new())
            .service(CreateShopifyOrderRoute::<ShopifyApi>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

fn build_cors(config: &CorsConfig) -> Cors {
    let methods = config.allowed_methods.iter().map(String::as_str).collect::<Vec<_>>();
    let mut cors = Cors::default().allowed_methods(methods).allow_any_header();
    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{config::ShopifyConfig, data_objects::NewShopifyOrder, ShopifyApiError};

/// The seam between the HTTP handlers and the Shopify Admin API. Handlers are generic over this trait so the
/// endpoint tests can drop in a mock instead of the network.
#[allow(async_fn_in_trait)]
pub trait OrderForwarder {
    /// Create an order on the downstream store. The raw response body is returned so callers can relay it.
    async fn forward_order(&self, order: &NewShopifyOrder) -> Result<Value, ShopifyApiError>;
}

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let val = HeaderValue::from_str(config.admin_access_token.reveal().as_str())
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        headers.insert("X-Shopify-Access-Token", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, ShopifyApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| ShopifyApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
            Err(ShopifyApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://{}/admin/api/{}{path}", self.config.shop, self.config.api_version)
    }

    /// POSTs the order to `/orders.json` and returns the response body.
    pub async fn create_order(&self, order: &NewShopifyOrder) -> Result<Value, ShopifyApiError> {
        let body = serde_json::json!({ "order": order });
        debug!("Creating order on {} with {} line items", self.config.shop, order.line_items.len());
        let result = self.rest_query::<Value, Value>(Method::POST, "/orders.json", Some(body)).await?;
        info!("Created order on {}", self.config.shop);
        Ok(result)
    }
}

impl OrderForwarder for ShopifyApi {
    async fn forward_order(&self, order: &NewShopifyOrder) -> Result<Value, ShopifyApiError> {
        self.create_order(order).await
    }
}

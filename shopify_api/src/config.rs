use ccb_common::Secret;
use log::*;

#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// The host of the Shopify storefront, e.g. "my-shop.myshopify.com".
    pub shop: String,
    pub admin_access_token: Secret<String>,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new_from_env_or_default() -> Self {
        let shop = std::env::var("CCB_SHOPIFY_STORE_URL").unwrap_or_else(|_| {
            warn!("CCB_SHOPIFY_STORE_URL not set, using (probably useless) default");
            "example.myshopify.com".to_string()
        });
        let api_version = std::env::var("CCB_SHOPIFY_API_VERSION").unwrap_or_else(|_| {
            warn!("CCB_SHOPIFY_API_VERSION not set, using 2023-01 as default");
            "2023-01".to_string()
        });
        let admin_access_token = Secret::new(std::env::var("CCB_SHOPIFY_ACCESS_TOKEN").unwrap_or_else(|_| {
            warn!("CCB_SHOPIFY_ACCESS_TOKEN not set, using (probably useless) default");
            "shpat_00000000000000".to_string()
        }));
        Self { shop, admin_access_token, api_version }
    }
}

use std::env;

use ccb_common::parse_boolean_flag;
use log::*;
use shopify_api::ShopifyConfig;

const DEFAULT_CCB_HOST: &str = "127.0.0.1";
const DEFAULT_CCB_PORT: u16 = 8360;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// If true, any pending database migrations are applied when the server starts.
    pub migrate_on_startup: bool,
    /// Browser CORS policy for the checkout frontend.
    pub cors: CorsConfig,
    /// Shopify storefront configuration
    pub shopify_config: ShopifyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_CCB_HOST.to_string(),
            port: DEFAULT_CCB_PORT,
            database_url: String::default(),
            migrate_on_startup: true,
            cors: CorsConfig::default(),
            shopify_config: ShopifyConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("CCB_HOST").ok().unwrap_or_else(|| DEFAULT_CCB_HOST.into());
        let port = env::var("CCB_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for CCB_PORT. {e} Using the default, {DEFAULT_CCB_PORT}, instead."
                    );
                    DEFAULT_CCB_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_CCB_PORT);
        let database_url = env::var("CCB_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ CCB_DATABASE_URL is not set. The server will not be able to store orders.");
            String::default()
        });
        let migrate_on_startup = parse_boolean_flag(env::var("CCB_MIGRATE_ON_STARTUP").ok(), true);
        let cors = CorsConfig::from_env_or_default();
        let shopify_config = ShopifyConfig::new_from_env_or_default();
        Self { host, port, database_url, migrate_on_startup, cors, shopify_config }
    }
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// The origins that may call the JSON endpoints from a browser. A single `*` entry allows any origin.
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: vec!["*".to_string()], allowed_methods: vec!["POST".to_string()] }
    }
}

impl CorsConfig {
    pub fn from_env_or_default() -> Self {
        let allowed_origins = env::var("CCB_CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|s| split_csv(&s))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                info!("🪛️ CCB_CORS_ALLOWED_ORIGINS is not set. Allowing any origin.");
                vec!["*".to_string()]
            });
        let allowed_methods = env::var("CCB_CORS_ALLOWED_METHODS")
            .ok()
            .map(|s| split_csv(&s))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| vec!["POST".to_string()]);
        Self { allowed_origins, allowed_methods }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',').map(|p| p.trim().to_string()).filter(|p| !p.is_empty()).collect()
}

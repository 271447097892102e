use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub services: ServicesConfig,
    /// Shared secret for caller token verification
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

/// Base URLs of the downstream services plus the per-call timeout.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServicesConfig {
    pub orders_url: String,
    pub payments_url: String,
    /// Includes the `/products` path prefix of the product service.
    pub products_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            orders_url: "http://orders-svc.api".to_string(),
            payments_url: "http://payments-svc.api".to_string(),
            products_url: "http://product-svc.api/products".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_jwt_secret() -> String {
    "mysecretkey".to_string()
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        let mut config: AppConfig =
            serde_yaml::from_str(&content).expect("Failed to parse config yaml");
        config.apply_env_overrides();
        config
    }

    /// Deployment environments override service endpoints and the token
    /// secret without editing the config file.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("ORDER_SERVICE_URL") {
            self.services.orders_url = v;
        }
        if let Ok(v) = std::env::var("PAYMENTS_SERVICE_URL") {
            self.services.payments_url = v;
        }
        if let Ok(v) = std::env::var("PRODUCTS_SERVICE_URL") {
            self.services.products_url = v;
        }
        if let Ok(v) = std::env::var("JWT_SECRET") {
            self.jwt_secret = v;
        }
    }
}

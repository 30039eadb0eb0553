//! API runtime configuration.

use dealership_infra::DbConfig;
use dealership_infra::config::env_string;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:2000";
const DEFAULT_AUTH_TOKEN: &str = "0000";

/// Everything the binary needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address (`BIND_ADDR`).
    pub bind_addr: String,
    /// Value every request must carry in the `authorize` header (`AUTH_TOKEN`).
    pub auth_token: String,
    pub db: DbConfig,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_string("BIND_ADDR", DEFAULT_BIND_ADDR),
            auth_token: env_string("AUTH_TOKEN", DEFAULT_AUTH_TOKEN),
            db: DbConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            auth_token: DEFAULT_AUTH_TOKEN.to_string(),
            db: DbConfig::in_memory(),
        }
    }
}

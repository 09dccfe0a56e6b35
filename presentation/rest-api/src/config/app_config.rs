use super::{
    cors_config, database_config::StoreConfig, security_config::SecurityConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub security: SecurityConfig,
    pub store: StoreConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            security: SecurityConfig::from_env(),
            store: StoreConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}

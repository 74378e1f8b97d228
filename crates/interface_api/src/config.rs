//! API configuration

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for authentication
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// URL of the external authorization endpoint
    pub authorizer_url: String,
    /// Timeout for authorization calls, in seconds
    pub authorizer_timeout_secs: u64,
    /// Username accepted by the static credential verifier
    pub auth_username: String,
    /// Password accepted by the static credential verifier
    pub auth_password: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            authorizer_url: domain_contracting::adapters::external_authorizer::DEFAULT_ENDPOINT
                .to_string(),
            authorizer_timeout_secs: 10,
            auth_username: "admin".to_string(),
            auth_password: "change-me-in-production".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

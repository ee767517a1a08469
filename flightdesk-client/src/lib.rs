pub mod app_config;
pub mod http_gateway;

pub use app_config::{Config, GatewayConfig};
pub use http_gateway::HttpFlightGateway;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Unset means requests may wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Layers `config/default`, `config/{RUN_MODE}`, `config/local`, an
    /// optional explicit file, then `FLIGHTDESK__*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ClientError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path));
        }

        let settings: Config = builder
            .add_source(config::Environment::with_prefix("FLIGHTDESK").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder().set_default("gateway.base_url", DEFAULT_BASE_URL)
}

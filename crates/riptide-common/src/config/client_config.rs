//! Client configuration
//!
//! Loads configuration from environment variables (with `.env` support).

use std::env;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Configuration for one client instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WebSocket gateway URL
    pub gateway_url: String,
    /// REST API base URL
    pub api_url: String,
    /// File-storage (attachment) base URL
    pub autumn_url: String,
    /// Bot token used for the gateway handshake and REST calls
    pub token: String,
    /// Heartbeat period in seconds
    pub heartbeat_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// `RIPTIDE_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            gateway_url: env::var("RIPTIDE_GATEWAY_URL").unwrap_or_else(|_| default_gateway_url()),
            api_url: env::var("RIPTIDE_API_URL").unwrap_or_else(|_| default_api_url()),
            autumn_url: env::var("RIPTIDE_AUTUMN_URL").unwrap_or_else(|_| default_autumn_url()),
            token: env::var("RIPTIDE_TOKEN").map_err(|_| ConfigError::MissingVar("RIPTIDE_TOKEN"))?,
            heartbeat_secs: match env::var("RIPTIDE_HEARTBEAT_SECS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RIPTIDE_HEARTBEAT_SECS", raw))?,
                Err(_) => default_heartbeat_secs(),
            },
        })
    }

    /// Build a config with explicit values (tests, embedded use)
    pub fn new(gateway_url: impl Into<String>, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into(),
            api_url: api_url.into(),
            autumn_url: default_autumn_url(),
            token: token.into(),
            heartbeat_secs: default_heartbeat_secs(),
        }
    }
}

// Default value functions
fn default_gateway_url() -> String {
    "wss://ws.revolt.chat?format=json".to_string()
}

fn default_api_url() -> String {
    "https://api.revolt.chat".to_string()
}

fn default_autumn_url() -> String {
    "https://autumn.revolt.chat".to_string()
}

fn default_heartbeat_secs() -> u64 {
    20
}

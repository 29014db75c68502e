//! Service configuration
//!
//! Layered loading: `frontdesk.toml` (optional) overridden by `FRONTDESK_*`
//! environment variables. All sections carry serde defaults so an empty
//! config file is valid.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Knowledge base settings
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5001
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via RUST_LOG
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Knowledge base configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Question/answer pairs preloaded at startup
    #[serde(default)]
    pub seed: Vec<SeedFact>,
}

/// A seeded question/answer pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFact {
    pub question: String,
    pub answer: String,
}

impl Config {
    /// Load configuration from `frontdesk.toml` and the environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("frontdesk").required(false))
            .add_source(config::Environment::with_prefix("FRONTDESK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

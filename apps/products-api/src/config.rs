//! Configuration for Products API

use core_config::{
    airtable::AirtableConfig, server::ServerConfig, tracing::LogConfig, ConfigError, FromEnv,
};

pub use core_config::Environment;

/// Application configuration, loaded once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub log: LogConfig,
    pub server: ServerConfig,
    pub airtable: AirtableConfig,
    /// Comma-separated CORS origins; any origin when unset
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let log = LogConfig::from_env(&environment)?;
        let server = ServerConfig::from_env()?;
        let airtable = AirtableConfig::from_env()?;

        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .filter(|origins| !origins.trim().is_empty());

        Ok(Self {
            environment,
            log,
            server,
            airtable,
            cors_allowed_origin,
        })
    }
}

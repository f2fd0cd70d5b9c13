use crate::{env_or_default, env_parse_or, env_required, ConfigError, FromEnv};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE_NAME: &str = "Produtos";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Airtable record store configuration
#[derive(Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_name: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl AirtableConfig {
    pub fn new(api_key: String, base_id: String) -> Self {
        Self {
            api_key,
            base_id,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_key", &"<redacted>")
            .field("base_id", &self.base_id)
            .field("table_name", &self.table_name)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for AirtableConfig {
    /// Requires AIRTABLE_API_KEY and AIRTABLE_BASE_ID (no defaults)
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("AIRTABLE_API_KEY")?;
        let base_id = env_required("AIRTABLE_BASE_ID")?;
        let timeout_secs = env_parse_or("AIRTABLE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self::new(api_key, base_id)
            .with_table_name(env_or_default("AIRTABLE_TABLE_NAME", DEFAULT_TABLE_NAME))
            .with_api_url(env_or_default("AIRTABLE_API_URL", DEFAULT_API_URL))
            .with_timeout(Duration::from_secs(timeout_secs)))
    }
}

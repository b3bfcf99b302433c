use crate::error::ConfigError;
use serde_derive::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("AppConfig", err)),
    }
}

fn default_source_url() -> String {
    "https://api.airtable.com/v0".to_string()
}

/// Location of the table to export and the credential used to read it.
#[derive(Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    pub base_id: String,
    pub table_id: String,
    pub api_key: String,
}

impl SourceConfig {
    /// Listing endpoint for the configured table.
    pub fn records_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.url.trim_end_matches('/'),
            self.base_id,
            self.table_id
        )
    }

    fn validate(self) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("base_id", &self.base_id),
            ("table_id", &self.table_id),
            ("api_key", &self.api_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }
        Ok(self)
    }
}

// api_key stays out of logs
impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("url", &self.url)
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub(crate) fn load_source_config() -> Result<SourceConfig, ConfigError> {
    match envy::prefixed("AIRTABLE_").from_env::<SourceConfig>() {
        Ok(config) => config.validate(),
        Err(err) => Err(ConfigError::env_parse("SourceConfig", err)),
    }
}

fn default_max_pages() -> usize {
    1000
}

fn default_request_timeout_sec() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

#[derive(Deserialize, Debug, Clone)]
pub struct CollectorConfig {
    // upper bound on pages fetched in one run
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    #[serde(default = "default_request_timeout_sec")]
    pub request_timeout_sec: u64,
    // retries per page on transient failures, 0 disables
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl CollectorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_sec)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_pages == 0 {
            return Err(ConfigError::invalid("max_pages", "must be at least 1"));
        }
        if self.request_timeout_sec == 0 {
            return Err(ConfigError::invalid(
                "request_timeout_sec",
                "must be at least 1",
            ));
        }
        Ok(self)
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            request_timeout_sec: default_request_timeout_sec(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

pub fn load_collector_config() -> Result<CollectorConfig, ConfigError> {
    match envy::prefixed("COLLECTOR_").from_env::<CollectorConfig>() {
        Ok(config) => config.validate(),
        Err(err) => Err(ConfigError::env_parse("CollectorConfig", err)),
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ExportConfig {
    // write the JSON array here instead of stdout
    pub output_path: Option<String>,
}

pub fn load_export_config() -> Result<ExportConfig, ConfigError> {
    match envy::prefixed("EXPORT_").from_env::<ExportConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("ExportConfig", err)),
    }
}

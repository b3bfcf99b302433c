//! Configuration utilities for testing.

use crate::config::{CollectorConfig, SourceConfig};

/// Builder for creating test source configurations.
#[derive(Debug)]
pub struct TestSourceConfigBuilder {
    url: String,
    base_id: String,
    table_id: String,
    api_key: String,
}

impl TestSourceConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            url: "http://test.local/v0".to_string(),
            base_id: "appTestBase".to_string(),
            table_id: "tblTestTable".to_string(),
            api_key: "test_api_key".to_string(),
        }
    }

    /// Sets the API base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn build(self) -> SourceConfig {
        SourceConfig {
            url: self.url,
            base_id: self.base_id,
            table_id: self.table_id,
            api_key: self.api_key,
        }
    }
}

/// Collector settings for tests: no retries, short timeout.
pub fn test_collector_config() -> CollectorConfig {
    CollectorConfig {
        max_pages: 100,
        request_timeout_sec: 5,
        max_retries: 0,
        retry_backoff_ms: 1,
    }
}

/// Sets environment variables for the lifetime of the guard.
///
/// Previous values are restored on drop. Callers must be `#[serial]`.
pub struct EnvGuard {
    originals: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn set(vars: &[(&str, &str)]) -> Self {
        let originals = vars
            .iter()
            .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
            .collect();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self { originals }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in &self.originals {
            match original {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}

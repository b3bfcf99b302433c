use crate::config::{CollectorConfig, SourceConfig};
use crate::error::FetchError;
use crate::model::Page;
use crate::source::pagination::PageSource;
use crate::source::retry::RetryPolicy;
use async_trait::async_trait;
use reqwest::Client as HttpClient;

/// HTTP client for the listing endpoint of one table.
pub struct Client {
    http_client: HttpClient,
    config: SourceConfig,
    retry: RetryPolicy,
}

impl Client {
    pub fn new(config: SourceConfig, collector_config: &CollectorConfig) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(collector_config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http_client,
            config,
            retry: RetryPolicy::from_config(collector_config),
        })
    }

    /// Issues a single GET for one page, without retrying.
    async fn get_page(&self, offset: Option<&str>) -> Result<Page, FetchError> {
        let url = self.config.records_url();
        let mut request = self
            .http_client
            .get(&url)
            .bearer_auth(&self.config.api_key);
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        tracing::debug!("GET {} (offset: {:?})", url, offset);
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::http_status(status, body));
        }
        serde_json::from_str(&body).map_err(FetchError::response_format)
    }
}

#[async_trait]
impl PageSource for Client {
    async fn fetch_page(&self, offset: Option<&str>) -> Result<Page, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_page(offset).await {
                Ok(page) => return Ok(page),
                Err(err) if err.is_transient() && attempt < self.retry.max_retries => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        "Page request failed: {}, attempt {}/{}, retrying in {:?}",
                        err,
                        attempt + 1,
                        self.retry.max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

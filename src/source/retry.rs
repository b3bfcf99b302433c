use crate::config::CollectorConfig;
use std::time::Duration;

const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Bounded exponential backoff for transient page fetch failures.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound on any single delay
    pub max_backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &CollectorConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_backoff: config.retry_backoff(),
            max_backoff: MAX_BACKOFF,
        }
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

//! Retry support for flaky live-network integration tests.
//!
//! The harness re-runs an operation only while it fails with a transport
//! flake ([`SignError::is_retryable`]). Validation and remote API errors are
//! returned on the first attempt; retrying them would only mask real
//! failures.

use crate::errors::SignResult;
use std::time::Duration;
use tracing::warn;

/// Retries an operation a fixed number of times on transient failures.
#[derive(Debug, Clone)]
pub struct RetryHarness {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay between attempts.
    pub backoff: Duration,
}

impl Default for RetryHarness {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

impl RetryHarness {
    /// Creates a harness with the given attempt bound.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Sets the delay between attempts.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Executes an operation, retrying transport-level failures.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> SignResult<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = SignResult<T>>,
    {
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    attempt += 1;

                    if !error.is_retryable() || attempt >= self.max_attempts {
                        return Err(error);
                    }

                    warn!(attempt, %error, "transient failure, retrying");
                    tokio::time::sleep(self.backoff).await;
                }
            }
        }
    }
}

//! Retrying fetch for HTTP transport
//!
//! Wraps one logical request in a bounded number of physical attempts. The
//! pacing comes from `chronos-core`; this module decides which outcomes are
//! worth another attempt.

use crate::error::{Result, TransportError};
use crate::traits::{HttpRequest, HttpResponse, Transport};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use chronos_core::retry::{BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder};

/// HTTP retry policy.
///
/// A wrapper around `ExponentialBackoff` with the HTTP defaults.
///
/// # Default Configuration
///
/// - `max_retries`: 5 physical attempts
/// - `initial_delay`: 1s
/// - `multiplier`: 2 (1s, 2s, 4s, 8s between attempts)
/// - no jitter, no cap
///
/// # Examples
///
/// ```rust
/// use chronos_transport::http::RetryPolicy;
/// use chronos_transport::http::retry::BackoffStrategy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_retries(), 5);
///
/// let fast = RetryPolicy::builder()
///     .max_retries(3)
///     .initial_delay(Duration::from_millis(10))
///     .build();
/// assert_eq!(fast.calculate_delay(1), Duration::from_millis(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    inner: ExponentialBackoff,
}

impl RetryPolicy {
    /// Create a new builder for configuring HTTP retry policy.
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Check if a transport error should be retried.
    ///
    /// Retryable errors are the network-level ones: timeouts, connection
    /// failures and low-level HTTP failures. Serialization errors, invalid
    /// requests and status-code errors are not.
    pub fn is_retryable(error: &TransportError) -> bool {
        match error {
            TransportError::Timeout => true,
            TransportError::Connection(_) => true,
            TransportError::Http(_) => true,

            TransportError::Api { .. } => false,
            TransportError::MaxRetriesExceeded { .. } => false,
            TransportError::Serialization(_) => false,
            TransportError::InvalidRequest(_) => false,
            TransportError::Other(_) => false,
        }
    }

    /// Check if a response status should be retried.
    ///
    /// 429 (rate limited) and every 5xx are transient. Other 4xx are not.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429 || status >= 500
    }

    /// Get the underlying ExponentialBackoff instance.
    pub fn inner(&self) -> &ExponentialBackoff {
        &self.inner
    }

    /// Calculate delay for a given attempt number.
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        self.inner.next_delay(attempt).unwrap_or(Duration::ZERO)
    }

    /// Send `request` through `transport`, retrying per this policy.
    ///
    /// See [`fetch_with_retry`].
    pub async fn fetch<T>(&self, transport: &T, request: &HttpRequest) -> Result<HttpResponse>
    where
        T: Transport + ?Sized,
    {
        fetch_with_retry(transport, request, self).await
    }
}

impl BackoffStrategy for RetryPolicy {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        self.inner.next_delay(attempt)
    }

    fn max_retries(&self) -> u32 {
        self.inner.max_retries()
    }
}

/// Perform one logical request with up to `backoff.max_retries()` physical attempts.
///
/// For each attempt:
///
/// 1. A network-level error is retried after `next_delay(attempt)` while
///    attempts remain; on the last attempt the original error is returned.
/// 2. A 429 or 5xx response is retried the same way. On the last attempt it is
///    not retried and falls through to the status check below.
/// 3. Any other non-2xx status fails immediately with
///    [`TransportError::Api`], which carries the final response.
/// 4. A 2xx response is returned.
///
/// Errors that are not network-level are returned without retrying.
pub async fn fetch_with_retry<T, B>(
    transport: &T,
    request: &HttpRequest,
    backoff: &B,
) -> Result<HttpResponse>
where
    T: Transport + ?Sized,
    B: BackoffStrategy + ?Sized,
{
    let max_retries = backoff.max_retries().max(1);
    let started = Instant::now();

    for attempt in 0..max_retries {
        let has_remaining = attempt + 1 < max_retries;

        debug!(
            method = %request.method,
            attempt,
            max_retries,
            body_size = request.body.as_ref().map(Vec::len),
            "Sending HTTP request"
        );

        let response = match transport.send_http(request.clone()).await {
            Ok(response) => response,
            Err(err) if has_remaining && RetryPolicy::is_retryable(&err) => {
                warn!(
                    attempt,
                    error = %err,
                    delay_ms = backoff.next_delay(attempt).map(|d| d.as_millis()),
                    "Network error, retrying"
                );
                backoff.wait(attempt).await;
                continue;
            }
            Err(err) => {
                warn!(
                    attempt,
                    error = %err,
                    elapsed_ms = started.elapsed().as_millis(),
                    "HTTP request failed"
                );
                return Err(err);
            }
        };

        if has_remaining && RetryPolicy::is_retryable_status(response.status) {
            warn!(
                attempt,
                status = response.status,
                delay_ms = backoff.next_delay(attempt).map(|d| d.as_millis()),
                "Retryable status, retrying"
            );
            backoff.wait(attempt).await;
            continue;
        }

        if !response.is_success() {
            warn!(
                attempt,
                status = response.status,
                body = %response.text(),
                elapsed_ms = started.elapsed().as_millis(),
                "HTTP request failed"
            );
            return Err(TransportError::Api {
                status: response.status,
                response: Box::new(response),
            });
        }

        info!(
            status = response.status,
            retries = attempt,
            elapsed_ms = started.elapsed().as_millis(),
            body_size = response.body.len(),
            "HTTP request succeeded"
        );
        return Ok(response);
    }

    Err(TransportError::MaxRetriesExceeded {
        attempts: max_retries,
    })
}

/// Builder for HTTP retry policies.
#[derive(Debug, Default)]
pub struct RetryPolicyBuilder {
    inner: ExponentialBackoffBuilder,
}

impl RetryPolicyBuilder {
    /// Set the total number of physical attempts (at least 1).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.inner = self.inner.max_retries(max_retries);
        self
    }

    /// Set the delay after the first failed attempt.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.inner = self.inner.initial_delay(delay);
        self
    }

    /// Cap every delay.
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.inner = self.inner.max_delay(delay);
        self
    }

    /// Set the growth factor between delays.
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.inner = self.inner.multiplier(multiplier);
        self
    }

    /// Build the retry policy.
    pub fn build(self) -> RetryPolicy {
        RetryPolicy {
            inner: self.inner.build(),
        }
    }
}

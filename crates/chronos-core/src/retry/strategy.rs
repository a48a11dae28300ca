//! The pacing contract used by retry loops.

use async_trait::async_trait;
use std::time::Duration;

/// A strategy for pacing retries of a failed operation.
///
/// Implementations decide how many physical attempts a caller may make and how
/// long to wait between them. They do not decide *whether* a failure is worth
/// retrying; that classification belongs to the caller, which knows what a
/// failure looks like (a dropped connection, a 503, ...).
///
/// # Examples
///
/// ```rust
/// use chronos_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() {
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(3)
///     .initial_delay(Duration::from_millis(10))
///     .build();
///
/// for attempt in 0..backoff.max_retries() {
///     // issue the call here ...
///     if !backoff.has_remaining(attempt) {
///         break;
///     }
///     backoff.wait(attempt).await;
/// }
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Delay to wait after `attempt` (0-indexed) failed.
    ///
    /// `None` means the strategy refuses to schedule another attempt.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Total number of physical attempts, including the first one.
    ///
    /// Always at least 1.
    fn max_retries(&self) -> u32;

    /// Whether another attempt may follow `attempt`.
    fn has_remaining(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_retries()
    }

    /// Sleep for the delay scheduled after `attempt`, returning it.
    async fn wait(&self, attempt: u32) -> Duration {
        let delay = self.next_delay(attempt).unwrap_or(Duration::ZERO);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}

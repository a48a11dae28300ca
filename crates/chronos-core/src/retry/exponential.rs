//! Doubling backoff without jitter.

use super::scaled_delay;
use super::strategy::BackoffStrategy;
use std::time::Duration;

/// Exponential backoff with a deterministic schedule.
///
/// Delays grow as `initial_delay * multiplier^attempt`, optionally capped at
/// `max_delay`.
///
/// # Mathematical Formula
///
/// For attempt `n` (0-indexed, the attempt that just failed):
/// ```text
/// base_delay = initial_delay * (multiplier ^ n)
/// final_delay = min(base_delay, max_delay)
/// ```
///
/// # Examples
///
/// ```rust
/// use chronos_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// // Default configuration (max_retries=5, initial=1s, multiplier=2, no cap)
/// let backoff = ExponentialBackoff::default();
/// assert_eq!(backoff.next_delay(2), Some(Duration::from_secs(4)));
///
/// // Custom configuration
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(3)
///     .initial_delay(Duration::from_millis(100))
///     .max_delay(Duration::from_millis(250))
///     .build();
/// assert_eq!(backoff.next_delay(2), Some(Duration::from_millis(250)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExponentialBackoff {
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Option<Duration>,
    multiplier: u32,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// The delay after the first failed attempt.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }
}

impl Default for ExponentialBackoff {
    /// Defaults:
    /// - `max_retries`: 5 physical attempts
    /// - `initial_delay`: 1s
    /// - `max_delay`: none
    /// - `multiplier`: 2 (doubles each time)
    fn default() -> Self {
        ExponentialBackoffBuilder::default().build()
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let delay = scaled_delay(self.initial_delay, self.multiplier, attempt);
        Some(match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        })
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for configuring `ExponentialBackoff`.
#[derive(Debug, Default)]
pub struct ExponentialBackoffBuilder {
    max_retries: Option<u32>,
    initial_delay: Option<Duration>,
    max_delay: Option<Duration>,
    multiplier: Option<u32>,
}

impl ExponentialBackoffBuilder {
    /// Set the total number of physical attempts.
    ///
    /// Values below 1 are raised to 1. Default: 5
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries.max(1));
        self
    }

    /// Set the delay after the first failed attempt.
    ///
    /// Default: 1s
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = Some(delay);
        self
    }

    /// Cap every delay at `delay`.
    ///
    /// Default: uncapped
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = Some(delay);
        self
    }

    /// Set the growth factor between consecutive delays.
    ///
    /// Values below 1 are raised to 1. Default: 2
    pub fn multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = Some(multiplier.max(1));
        self
    }

    /// Build the `ExponentialBackoff` instance.
    ///
    /// Uses default values for any unset parameters.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_retries: self.max_retries.unwrap_or(5),
            initial_delay: self.initial_delay.unwrap_or(super::BASE_DELAY),
            max_delay: self.max_delay,
            multiplier: self.multiplier.unwrap_or(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::calculate_delay;

    #[test]
    fn test_default_matches_calculate_delay() {
        let backoff = ExponentialBackoff::default();

        for attempt in 0..10 {
            assert_eq!(backoff.next_delay(attempt), Some(calculate_delay(attempt)));
        }
    }

    #[test]
    fn test_exponential_delay_calculation() {
        let backoff = ExponentialBackoff::builder()
            .initial_delay(Duration::from_millis(100))
            .build();

        assert_eq!(backoff.next_delay(0).unwrap(), Duration::from_millis(100));
        assert_eq!(backoff.next_delay(1).unwrap(), Duration::from_millis(200));
        assert_eq!(backoff.next_delay(2).unwrap(), Duration::from_millis(400));
        assert_eq!(backoff.next_delay(3).unwrap(), Duration::from_millis(800));
    }

    #[test]
    fn test_max_delay_cap() {
        let backoff = ExponentialBackoff::builder()
            .initial_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(5))
            .multiplier(10)
            .build();

        for attempt in 1..10 {
            assert_eq!(backoff.next_delay(attempt), Some(Duration::from_secs(5)));
        }
    }

    #[test]
    fn test_builder_defaults() {
        let backoff = ExponentialBackoff::builder().build();

        assert_eq!(backoff.max_retries, 5);
        assert_eq!(backoff.initial_delay, Duration::from_secs(1));
        assert_eq!(backoff.max_delay, None);
        assert_eq!(backoff.multiplier, 2);
    }

    #[test]
    fn test_builder_clamps_to_one() {
        let backoff = ExponentialBackoff::builder()
            .max_retries(0)
            .multiplier(0)
            .build();

        assert_eq!(backoff.max_retries(), 1);
        assert_eq!(backoff.multiplier, 1);
        assert!(!backoff.has_remaining(0));
    }

    #[test]
    fn test_has_remaining() {
        let backoff = ExponentialBackoff::default();

        assert!(backoff.has_remaining(0));
        assert!(backoff.has_remaining(3));
        assert!(!backoff.has_remaining(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_sleeps_for_scheduled_delay() {
        let backoff = ExponentialBackoff::default();
        let start = tokio::time::Instant::now();

        let waited = backoff.wait(2).await;

        assert_eq!(waited, Duration::from_secs(4));
        assert!(start.elapsed() >= Duration::from_secs(4));
    }
}

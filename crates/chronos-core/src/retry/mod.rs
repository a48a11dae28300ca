//! Retry pacing.
//!
//! This module answers one question for the retry loops built on top of it:
//! how long to wait after attempt `n` failed.
//!
//! # Key Types
//!
//! - [`calculate_delay`] - The fixed `2^n` seconds schedule
//! - [`BackoffStrategy`] - Trait for anything that paces retries
//! - [`ExponentialBackoff`] - Configurable doubling backoff
//!
//! # Examples
//!
//! ```rust
//! use chronos_core::retry::calculate_delay;
//! use std::time::Duration;
//!
//! assert_eq!(calculate_delay(0), Duration::from_millis(1000));
//! assert_eq!(calculate_delay(3), Duration::from_millis(8000));
//! ```

mod exponential;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use strategy::BackoffStrategy;

use std::time::Duration;

/// Base unit of the default schedule.
pub const BASE_DELAY: Duration = Duration::from_millis(1000);

/// Delay to wait after attempt `attempt` (0-indexed) failed.
///
/// Returns `2^attempt` seconds: 1s, 2s, 4s, 8s, 16s for attempts 0 through 4.
/// There is no jitter. The result saturates rather than overflowing, so the
/// function is total over `u32`.
pub fn calculate_delay(attempt: u32) -> Duration {
    scaled_delay(BASE_DELAY, 2, attempt)
}

/// `base * multiplier^attempt`, saturating at `Duration::MAX`.
pub(crate) fn scaled_delay(base: Duration, multiplier: u32, attempt: u32) -> Duration {
    match multiplier.checked_pow(attempt) {
        Some(factor) => base.saturating_mul(factor),
        None if base.is_zero() => Duration::ZERO,
        None => Duration::MAX,
    }
}

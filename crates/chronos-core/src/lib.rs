#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the Chronos crates.
//!
//! This crate holds the pieces that have no I/O of their own:
//!
//! - **Backoff delay calculation** via [`retry::calculate_delay`]
//! - **Pluggable pacing** via the [`retry::BackoffStrategy`] trait
//! - **Doubling backoff without jitter** via [`retry::ExponentialBackoff`]
//!
//! # Examples
//!
//! ```rust
//! use chronos_core::prelude::*;
//! use std::time::Duration;
//!
//! let backoff = ExponentialBackoff::default();
//!
//! assert_eq!(backoff.max_retries(), 5);
//! assert_eq!(backoff.next_delay(0), Some(Duration::from_secs(1)));
//! assert_eq!(backoff.next_delay(4), Some(Duration::from_secs(16)));
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use chronos_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{
        BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder, calculate_delay,
    };
}

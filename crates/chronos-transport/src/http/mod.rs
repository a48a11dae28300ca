//! HTTP transport implementation
//!
//! Provides an HTTP client that implements the Transport trait, and the
//! retrying fetch layered over any Transport.

pub mod client;
pub mod retry;

pub use client::{HttpTransport, HttpTransportConfig};
pub use retry::{RetryPolicy, fetch_with_retry};

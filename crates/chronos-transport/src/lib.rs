//! Transport layer for Chronos
//!
//! Provides a trait-based transport abstraction so the prediction pipeline can
//! run against a real HTTP client or an in-process test double, plus the
//! retrying fetch that sits on top of it.
//!
//! # Architecture
//!
//! - **Transport trait**: one physical request, one response
//! - **HTTP transport**: `reqwest`-backed implementation
//! - **Resilient fetch**: bounded retries with exponential backoff over any transport
//!
//! # Usage
//!
//! ```ignore
//! use chronos_transport::{HttpRequest, HttpTransport, RetryPolicy};
//!
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::post("https://example.com/v1beta/models/m:generateContent")
//!     .with_json(&serde_json::json!({"contents": []}))?;
//! let response = RetryPolicy::default().fetch(&transport, &request).await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig, RetryPolicy, fetch_with_retry};
pub use traits::{HttpRequest, HttpResponse, Transport};

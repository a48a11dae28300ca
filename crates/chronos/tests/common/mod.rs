//! Common test utilities and fixtures
//!
//! - rstest fixtures for a mock server and a view
//! - wiremock helpers for the `generateContent` endpoint
//! - canned API responses

#![allow(dead_code)]

pub mod responses;

use chronos::Client;
use chronos::testing::MemoryView;
use rstest::*;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer};

/// Test API key constant
pub const TEST_API_KEY: &str = "test-api-key-12345";

/// Test model constant
pub const TEST_MODEL: &str = "gemini-test";

/// Fixture providing a wiremock HTTP server
#[fixture]
pub async fn mock_server() -> MockServer {
    MockServer::start().await
}

/// Fixture providing an empty in-memory view
#[fixture]
pub fn view() -> Arc<MemoryView> {
    Arc::new(MemoryView::new())
}

/// Matcher for a prediction request against the test model with the test key.
pub fn generate_content() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path(format!("/v1beta/models/{TEST_MODEL}:generateContent")))
        .and(query_param("key", TEST_API_KEY))
}

/// A client pointed at `server` with millisecond retry delays.
pub fn test_client(server: &MockServer, max_retries: u32) -> Client {
    Client::builder()
        .api_key(TEST_API_KEY)
        .base_url(server.uri())
        .model(TEST_MODEL)
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries)
        .retry_base_delay(Duration::from_millis(5))
        .build()
        .expect("Failed to build test client")
}

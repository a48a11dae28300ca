//! Request and response values, and the [`Transport`] seam
//!
//! The prediction client only ever builds JSON `POST`s, so the request side
//! stays small. Responses keep the raw body so a caller can inspect a failed
//! attempt after retries run out.

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

/// One HTTP request, cloned for every physical attempt.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: String,

    /// Full URL, query string included
    pub url: String,

    /// Request headers
    pub headers: HashMap<String, String>,

    /// Request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A request with no headers and no body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// A `POST` to `url`.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new("POST", url)
    }

    /// Add or replace a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Serialize `value` as the body and mark it `application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Serialization`](crate::TransportError::Serialization)
    /// if `value` cannot be serialized.
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        let mut request = self.with_header("Content-Type", "application/json");
        request.body = Some(body);
        Ok(request)
    }
}

/// A response as received, whatever its status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Raw body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Assemble a response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// `true` for 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends one request and returns one response.
///
/// One call is one physical attempt. Retrying is layered on top by
/// [`fetch_with_retry`](crate::http::fetch_with_retry).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request`.
    ///
    /// A non-2xx status is still `Ok`; only failures to obtain a response are
    /// errors.
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;
}

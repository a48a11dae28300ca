//! Integration tests for HTTP transport

use chronos_transport::http::retry::BackoffStrategy;
use chronos_transport::{HttpRequest, HttpTransport, RetryPolicy, Transport, TransportError};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy::builder()
        .max_retries(max_retries)
        .initial_delay(Duration::from_millis(5))
        .build()
}

#[tokio::test]
async fn test_http_request_builder() {
    let request = HttpRequest::post("https://example.com")
        .with_header("x-goog-api-client", "chronos")
        .with_json(&serde_json::json!({}))
        .unwrap();

    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "https://example.com");
    assert_eq!(request.headers.len(), 2);
    assert_eq!(request.body, Some(b"{}".to_vec()));
}

#[tokio::test]
async fn test_send_http_passes_through_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/test:generateContent"))
        .and(query_param("key", "secret"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"hello": "world"})))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().expect("Failed to create HTTP transport");
    let request = HttpRequest::new(
        "POST",
        format!(
            "{}/v1beta/models/test:generateContent?key=secret",
            mock_server.uri()
        ),
    )
    .with_json(&serde_json::json!({"hello": "world"}))
    .unwrap();

    let response = transport.send_http(request).await.expect("request failed");

    assert_eq!(response.status, 418);
    assert_eq!(response.text(), "teapot");
    mock_server.verify().await;
}

#[tokio::test]
async fn test_fetch_retries_server_errors_until_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::new("POST", mock_server.uri());

    let response = fast_policy(5).fetch(&transport, &request).await.unwrap();

    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["ok"], true);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_fetch_gives_up_with_final_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::new("POST", mock_server.uri());

    let err = fast_policy(3).fetch(&transport, &request).await.unwrap_err();

    match err {
        TransportError::Api { status, response } => {
            assert_eq!(status, 500);
            assert_eq!(response.text(), "boom");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    mock_server.verify().await;
}

#[tokio::test]
async fn test_fetch_does_not_retry_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::new("POST", mock_server.uri());

    let err = fast_policy(5).fetch(&transport, &request).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_connection_refused_is_retried_then_propagated() {
    // Grab a free port, then release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new().unwrap();
    let request = HttpRequest::new("GET", format!("http://{}/", addr));
    let policy = fast_policy(2);

    let err = policy.fetch(&transport, &request).await.unwrap_err();

    assert!(err.is_network(), "unexpected error: {err:?}");
    assert_eq!(policy.max_retries(), 2);
}

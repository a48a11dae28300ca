//! End-to-end prediction tests against a mocked `generateContent` endpoint

mod common;

use assert_matches::assert_matches;
use chronos::testing::MemoryView;
use chronos::{
    ANOMALY_MESSAGE, CRITICAL_ERROR_MESSAGE, Element, Error, PredictionEngine, PredictionError,
};
use chronos_transport::TransportError;
use common::responses;
use common::{TEST_API_KEY, generate_content, mock_server, test_client, view};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::body_partial_json;
use wiremock::{MockServer, ResponseTemplate};

#[rstest]
#[tokio::test]
async fn test_grounded_prediction_is_rendered(
    #[future] mock_server: MockServer,
    view: Arc<MemoryView>,
) {
    let server = mock_server.await;

    generate_content()
        .and(body_partial_json(json!({
            "tools": [{"google_search": {}}],
            "contents": [{"parts": [{"text": chronos::config::DEFAULT_PROMPT}]}],
            "systemInstruction": {
                "parts": [{"text": chronos::config::DEFAULT_SYSTEM_INSTRUCTION}]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(responses::grounded_prediction()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    let prediction = engine.generate_prediction().await.expect("prediction");

    assert_eq!(prediction.sources.len(), 2);
    assert_eq!(
        view.text(Element::PredictionText),
        "Within a decade, grid-scale storage will make renewable power the cheapest option everywhere."
    );
    assert_eq!(view.sources_list(), "Storage Outlook, Battery Review");
    assert_eq!(view.links()[1].uri, "https://science.example/batteries");
    assert!(view.is_visible(Element::PredictionSources));
    assert!(!view.is_visible(Element::PredictionLoading));
    server.verify().await;
}

#[rstest]
#[tokio::test]
async fn test_ungrounded_prediction_hides_sources(
    #[future] mock_server: MockServer,
    view: Arc<MemoryView>,
) {
    let server = mock_server.await;

    generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(responses::ungrounded_prediction()))
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    engine.generate_prediction().await.expect("prediction");

    assert_eq!(view.text(Element::PredictionText), "The future is bright.");
    assert!(!view.is_visible(Element::PredictionSources));
    assert!(view.links().is_empty());
}

#[rstest]
#[tokio::test]
async fn test_transient_unavailability_is_retried(
    #[future] mock_server: MockServer,
    view: Arc<MemoryView>,
) {
    let server = mock_server.await;

    generate_content()
        .respond_with(ResponseTemplate::new(503).set_body_json(responses::error_unavailable()))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(responses::ungrounded_prediction()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    engine.generate_prediction().await.expect("prediction");

    assert_eq!(view.text(Element::PredictionText), "The future is bright.");
    server.verify().await;
}

#[rstest]
#[tokio::test]
async fn test_persistent_server_error_shows_critical_message(
    #[future] mock_server: MockServer,
    view: Arc<MemoryView>,
) {
    let server = mock_server.await;

    generate_content()
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(5)
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    let err = engine.generate_prediction().await.unwrap_err();

    assert_matches!(
        err,
        PredictionError::Request(Error::Transport(TransportError::Api { status: 500, .. }))
    );
    assert_eq!(view.text(Element::PredictionText), CRITICAL_ERROR_MESSAGE);
    assert!(!view.is_visible(Element::PredictionLoading));
    server.verify().await;
}

#[rstest]
#[tokio::test]
async fn test_client_error_is_not_retried(#[future] mock_server: MockServer, view: Arc<MemoryView>) {
    let server = mock_server.await;

    generate_content()
        .respond_with(ResponseTemplate::new(400).set_body_json(responses::error_invalid_key()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    let err = engine.generate_prediction().await.unwrap_err();

    match err {
        PredictionError::Request(err) => assert_eq!(err.status(), Some(400)),
        other => panic!("expected request error, got {other:?}"),
    }
    assert_eq!(view.text(Element::PredictionText), CRITICAL_ERROR_MESSAGE);
    server.verify().await;
}

#[rstest]
#[tokio::test]
async fn test_empty_candidate_is_an_anomaly(
    #[future] mock_server: MockServer,
    view: Arc<MemoryView>,
) {
    let server = mock_server.await;

    generate_content()
        .respond_with(ResponseTemplate::new(200).set_body_json(responses::empty_candidate()))
        .expect(1)
        .mount(&server)
        .await;

    let engine = PredictionEngine::new(test_client(&server, 5), view.clone());
    let err = engine.generate_prediction().await.unwrap_err();

    assert_matches!(err, PredictionError::MissingText);
    assert_eq!(view.text(Element::PredictionText), ANOMALY_MESSAGE);
    server.verify().await;
}

#[rstest]
#[tokio::test]
async fn test_unreachable_host_shows_critical_message(view: Arc<MemoryView>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = chronos::Client::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("http://{addr}"))
        .max_retries(2)
        .retry_base_delay(std::time::Duration::from_millis(5))
        .build()
        .unwrap();
    let engine = PredictionEngine::new(client, view.clone());

    let err = engine.generate_prediction().await.unwrap_err();

    assert_matches!(err, PredictionError::Request(ref e) if e.is_connection_error());
    assert_eq!(view.text(Element::PredictionText), CRITICAL_ERROR_MESSAGE);
}

//! The "generate a prediction" action.
//!
//! [`PredictionEngine::generate_prediction`] runs one request through the
//! [`Client`] and reflects every stage on the [`View`]:
//!
//! 1. clear the text, hide the sources panel, show the loading indicator
//! 2. fetch (with retries) and parse
//! 3. render the text and sources, or one of two fixed messages
//! 4. hide the loading indicator
//!
//! Runs are independent. Two overlapping runs both write to the view and the
//! later write wins.

use crate::client::Client;
use crate::error::PredictionError;
use crate::observability::{self, RequestTimer};
use crate::types::{Prediction, Source};
use crate::view::{Element, SourceLink, View};
use std::sync::Arc;

/// Shown when the API answered but the first candidate had no text.
pub const ANOMALY_MESSAGE: &str = "ERROR: Prediction failed. Engine anomaly detected. Try again.";

/// Shown when the request failed outright.
pub const CRITICAL_ERROR_MESSAGE: &str =
    "CRITICAL ERROR: Connection to the future severed. Check console for technical details.";

/// Links for `sources`, labelled by title or `Source N` (1-based) when the
/// title is empty.
pub fn source_links(sources: &[Source]) -> Vec<SourceLink> {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| SourceLink {
            uri: source.uri.clone(),
            label: if source.title.is_empty() {
                format!("Source {}", index + 1)
            } else {
                source.title.clone()
            },
        })
        .collect()
}

/// Coordinates prediction requests and the prediction panel.
pub struct PredictionEngine {
    client: Client,
    view: Arc<dyn View>,
}

impl PredictionEngine {
    /// Create an engine that renders into `view`.
    pub fn new(client: Client, view: Arc<dyn View>) -> Self {
        Self { client, view }
    }

    /// The client used for requests.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Run one prediction and render the outcome.
    ///
    /// Never fails from the caller's point of view: every error ends up as a
    /// message on the view. The outcome is also returned for callers that want
    /// to inspect it.
    pub async fn generate_prediction(&self) -> Result<Prediction, PredictionError> {
        self.view.set_text(Element::PredictionText, "");
        self.view.set_visible(Element::PredictionSources, false);
        self.view.set_visible(Element::PredictionLoading, true);

        let timer = RequestTimer::start();
        let model = self.client.config().model.as_str();
        let outcome = self.client.generate(&self.client.default_request()).await;

        match &outcome {
            Ok(prediction) => {
                self.render(prediction);
                observability::log_prediction_rendered(
                    model,
                    prediction.text.len(),
                    prediction.sources.len(),
                    timer.elapsed(),
                );
            }
            Err(PredictionError::MissingText) => {
                self.view.set_text(Element::PredictionText, ANOMALY_MESSAGE);
                observability::log_prediction_anomaly(model, timer.elapsed());
            }
            Err(PredictionError::Request(err)) => {
                self.view
                    .set_text(Element::PredictionText, CRITICAL_ERROR_MESSAGE);
                observability::log_prediction_failed(model, err, err.status(), timer.elapsed());
            }
        }

        self.view.set_visible(Element::PredictionLoading, false);
        outcome
    }

    fn render(&self, prediction: &Prediction) {
        self.view.set_text(Element::PredictionText, &prediction.text);

        let links = source_links(&prediction.sources);
        if links.is_empty() {
            self.view.set_visible(Element::PredictionSources, false);
            return;
        }

        self.view.clear_links();
        for link in &links {
            self.view.append_link(link);
        }
        self.view.set_visible(Element::PredictionSources, true);
    }
}

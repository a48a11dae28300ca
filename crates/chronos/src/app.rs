//! Wires the three interactive features to one view.

use crate::archive::{Archive, ArchiveEntry, FormHandler};
use crate::client::Client;
use crate::error::PredictionError;
use crate::navigation::Navigator;
use crate::prediction::PredictionEngine;
use crate::types::Prediction;
use crate::view::{Page, View};
use std::sync::Arc;

/// Navigation, the archive form and the prediction generator sharing a view.
///
/// Constructing the app puts the view in its initial state: the archive page
/// shown and its control active.
pub struct ChronosApp {
    navigator: Navigator,
    form: FormHandler,
    prediction: PredictionEngine,
}

impl ChronosApp {
    /// Build the app around `client` and `view`.
    pub fn new(client: Client, view: Arc<dyn View>) -> Self {
        let form = FormHandler::new(Arc::clone(&view))
            .with_success_duration(client.config().success_message_duration);
        Self {
            navigator: Navigator::new(Arc::clone(&view)),
            form,
            prediction: PredictionEngine::new(client, view),
        }
    }

    /// Build the app from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or a variable is invalid.
    #[cfg(feature = "env")]
    pub fn from_env(view: Arc<dyn View>) -> crate::error::Result<Self> {
        let config = crate::config::ClientConfig::from_dotenv()?;
        Ok(Self::new(Client::from_config(config)?, view))
    }

    /// Send archived entries to `archive`.
    pub fn with_archive(mut self, archive: Arc<dyn Archive>) -> Self {
        self.form = self.form.with_archive(archive);
        self
    }

    /// Handle a click on a navigation control.
    pub fn navigate(&self, target: &str) -> Page {
        self.navigator.click(target)
    }

    /// The page currently shown.
    pub fn current_page(&self) -> Page {
        self.navigator.current()
    }

    /// Handle a submit of the archive form.
    pub fn submit_archive(&self) -> Option<ArchiveEntry> {
        self.form.submit()
    }

    /// Handle a click on "generate prediction".
    pub async fn generate_prediction(&self) -> Result<Prediction, PredictionError> {
        self.prediction.generate_prediction().await
    }
}

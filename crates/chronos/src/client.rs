//! Client for the `generateContent` endpoint

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chronos_transport::{HttpRequest, HttpTransport, HttpTransportConfig, RetryPolicy, Transport};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, PredictionError, Result},
    types::{GenerateContentResponse, Prediction, PredictionRequest},
};

/// Client that turns a [`PredictionRequest`] into a [`Prediction`].
///
/// Owns the transport and retry policy. Cloning is cheap.
///
/// # Example
///
/// ```rust,no_run
/// use chronos::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder().api_key("your-api-key").build()?;
/// let prediction = client.generate(&client.default_request()).await?;
/// println!("{}", prediction.text);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    retry_policy: RetryPolicy,
    api_key: SecretString,
    config: ClientConfig,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.config.base_url)
            .field("model", &self.inner.config.model)
            .field("retry_policy", &self.inner.retry_policy)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object, using the HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(HttpTransportConfig {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            ..Default::default()
        })?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the base URL is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::MissingConfig("api_key".to_string()))?;

        // Fail at construction rather than on first request.
        Url::parse(&config.base_url)?;

        let retry_policy = RetryPolicy::builder()
            .max_retries(config.max_retries)
            .initial_delay(config.retry_base_delay)
            .build();

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                retry_policy,
                api_key,
                config,
            }),
        })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The retry policy applied to every request.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.inner.retry_policy
    }

    /// The request built from the configured prompt, instruction and grounding flag.
    pub fn default_request(&self) -> PredictionRequest {
        let config = &self.inner.config;
        PredictionRequest::new(&config.prompt, &config.system_instruction)
            .with_grounding(config.grounding)
    }

    /// `{base_url}/v1beta/models/{model}:generateContent?key={api_key}`
    pub(crate) fn endpoint(&self) -> Result<Url> {
        let config = &self.inner.config;
        let mut url = Url::parse(&format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        ))?;
        url.query_pairs_mut()
            .append_pair("key", self.inner.api_key.expose_secret());
        Ok(url)
    }

    /// Run one prediction request without touching any view.
    ///
    /// # Errors
    ///
    /// - [`PredictionError::MissingText`] if the response parsed but had no text
    /// - [`PredictionError::Request`] for transport, status and parse failures
    pub async fn generate(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<Prediction, PredictionError> {
        let http_request = HttpRequest::post(self.endpoint()?.as_str())
            .with_json(&request.to_body())?;

        let response = self
            .inner
            .retry_policy
            .fetch(self.inner.transport.as_ref(), &http_request)
            .await?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&response.body)?;
        let text = parsed.first_text().ok_or(PredictionError::MissingText)?;

        Ok(Prediction {
            text: text.to_string(),
            sources: parsed.sources(),
        })
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the total number of physical attempts.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the delay after the first failed attempt.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.config.retry_base_delay = delay;
        self
    }

    /// Use a custom transport instead of HTTP.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        match self.transport {
            Some(transport) => Client::with_transport(self.config, transport),
            None => Client::from_config(self.config),
        }
    }
}

//! Configuration for the Chronos client

use secrecy::SecretString;
use std::time::Duration;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generative model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

/// Prompt sent with every prediction.
pub const DEFAULT_PROMPT: &str = "Based on current global news, scientific advancements, and economic trends, write a paragraph predicting the single most impactful societal change that will occur in the next decade.";

/// System instruction sent with every prediction.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are the Chronos Prediction Engine. Your response must be an optimistic, single-paragraph prediction about the future, written in a clear, authoritative, and futuristic tone.";

/// Configuration for the Chronos client.
///
/// Holds the endpoint, credentials, retry budget and the fixed prediction
/// prompt. The API key is never a literal in code; it comes from the caller
/// or from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as the `key` query parameter
    pub api_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: String,

    /// Model name used in the `generateContent` path
    pub model: String,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Total physical attempts per prediction request
    pub max_retries: u32,

    /// Delay after the first failed attempt; doubles for each further attempt
    pub retry_base_delay: Duration,

    /// Prompt sent to the model
    pub prompt: String,

    /// System instruction sent to the model
    pub system_instruction: String,

    /// Whether to ask for Google Search grounding
    pub grounding: bool,

    /// How long the archive success indicator stays visible
    pub success_message_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(30),
            max_retries: 5,
            retry_base_delay: Duration::from_secs(1),
            prompt: DEFAULT_PROMPT.to_string(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            grounding: true,
            success_message_duration: Duration::from_secs(7),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(SecretString::new(api_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `GEMINI_API_KEY` for authentication
    /// - `CHRONOS_BASE_URL` for the API base URL
    /// - `CHRONOS_MODEL` for the model name
    /// - `CHRONOS_TIMEOUT` for request timeout (in seconds)
    /// - `CHRONOS_MAX_RETRIES` for the attempt budget
    ///
    /// Unparseable numeric values are ignored and the default is kept.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let mut config = Self::default();

        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            config.api_key = Some(SecretString::new(api_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("CHRONOS_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(model) = env::var("CHRONOS_MODEL") {
            config.model = model;
        }

        if let Ok(timeout_str) = env::var("CHRONOS_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(max_retries_str) = env::var("CHRONOS_MAX_RETRIES")
            && let Ok(max_retries) = max_retries_str.parse::<u32>()
        {
            config.max_retries = max_retries;
        }

        Ok(config)
    }

    /// Load a `.env` file from the working directory (if any), then read the
    /// environment as [`ClientConfig::from_env`] does.
    #[cfg(feature = "env")]
    pub fn from_dotenv() -> Result<Self, crate::error::Error> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(crate::error::Error::InvalidConfig(err.to_string())),
        }
        Self::from_env()
    }

    /// Merge this configuration with another, with the other taking precedence
    /// wherever it differs from the defaults.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        let defaults = ClientConfig::default();

        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url != defaults.base_url {
            self.base_url = other.base_url;
        }
        if other.model != defaults.model {
            self.model = other.model;
        }
        if other.timeout != defaults.timeout {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != defaults.connect_timeout {
            self.connect_timeout = other.connect_timeout;
        }
        if other.max_retries != defaults.max_retries {
            self.max_retries = other.max_retries;
        }
        if other.retry_base_delay != defaults.retry_base_delay {
            self.retry_base_delay = other.retry_base_delay;
        }
        if other.prompt != defaults.prompt {
            self.prompt = other.prompt;
        }
        if other.system_instruction != defaults.system_instruction {
            self.system_instruction = other.system_instruction;
        }
        if other.grounding != defaults.grounding {
            self.grounding = other.grounding;
        }
        if other.success_message_duration != defaults.success_message_duration {
            self.success_message_duration = other.success_message_duration;
        }

        self
    }
}

/// Builder for creating client configurations.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the attempt budget.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the delay after the first failed attempt.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.config.retry_base_delay = delay;
        self
    }

    /// Set the prompt.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the system instruction.
    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.config.system_instruction = instruction.into();
        self
    }

    /// Enable or disable search grounding.
    pub fn grounding(mut self, grounding: bool) -> Self {
        self.config.grounding = grounding;
        self
    }

    /// Set how long the archive success indicator stays visible.
    pub fn success_message_duration(mut self, duration: Duration) -> Self {
        self.config.success_message_duration = duration;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

//! Structured logging helpers
//!
//! The operator-facing diagnostics of the prediction flow go through here so
//! the field names stay consistent. Transport-level events (attempts,
//! retries, statuses) are logged by `chronos-transport`.

use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Timer for measuring how long a prediction took end to end
#[derive(Debug, Clone, Copy)]
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Log a rendered prediction
pub fn log_prediction_rendered(model: &str, text_len: usize, sources: usize, elapsed: Duration) {
    info!(
        model = %model,
        text_len,
        sources,
        elapsed_ms = elapsed.as_millis(),
        "Prediction rendered"
    );
}

/// Log a successful response that carried no text
pub fn log_prediction_anomaly(model: &str, elapsed: Duration) {
    warn!(
        model = %model,
        elapsed_ms = elapsed.as_millis(),
        "Prediction response contained no text"
    );
}

/// Log a failed prediction request with full detail
pub fn log_prediction_failed(
    model: &str,
    error: &dyn std::error::Error,
    status: Option<u16>,
    elapsed: Duration,
) {
    error!(
        model = %model,
        error = %error,
        status,
        elapsed_ms = elapsed.as_millis(),
        "API Call Failed"
    );
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"chronos=info"`).
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "trace")]
pub fn init_tracing(default_directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

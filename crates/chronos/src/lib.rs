//! # Chronos
//!
//! Logic behind the Chronos time-capsule page:
//! - Two-page navigation (archive / future)
//! - A message archive form with a timed success indicator
//! - A prediction generator backed by the Gemini `generateContent` API with
//!   Google Search grounding and retrying fetches
//!
//! The UI itself is abstracted behind [`View`]; any front end that can show,
//! hide and fill elements can host the logic.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chronos::{ChronosApp, Client, testing::MemoryView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let view = Arc::new(MemoryView::new());
//!     let client = Client::builder().api_key("your-api-key").build()?;
//!     let app = ChronosApp::new(client, view.clone());
//!
//!     app.navigate("future");
//!     let _ = app.generate_prediction().await;
//!     println!("{}", view.text(chronos::Element::PredictionText));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use app::ChronosApp;
pub use archive::{Archive, ArchiveEntry, FormHandler, LogArchive};
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, PredictionError, Result};
pub use navigation::Navigator;
pub use prediction::{ANOMALY_MESSAGE, CRITICAL_ERROR_MESSAGE, PredictionEngine};
pub use types::{Prediction, PredictionRequest, Source};
pub use view::{Element, FormField, Page, SourceLink, UnknownPage, View};

// Public modules
pub mod app;
pub mod archive;
pub mod client;
pub mod config;
pub mod error;
pub mod navigation;
pub mod observability;
pub mod prediction;
pub mod testing;
pub mod types;
pub mod view;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! The "archive a message" form.
//!
//! Archiving has no storage behind it: an accepted entry is handed to an
//! [`Archive`] sink, which by default writes a structured log event.

use crate::view::{Element, FormField, View};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

/// A submitted form entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
}

impl ArchiveEntry {
    /// Read the three fields from `view`.
    ///
    /// Returns `None` if any field is empty.
    pub fn from_view(view: &dyn View) -> Option<Self> {
        let entry = Self {
            name: view.field_value(FormField::Name),
            email: view.field_value(FormField::Email),
            message: view.field_value(FormField::Message),
        };
        entry.is_complete().then_some(entry)
    }

    /// Whether every field is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Where accepted entries go.
pub trait Archive: Send + Sync {
    /// Record one accepted entry.
    fn archive(&self, entry: &ArchiveEntry);
}

/// Archive that logs each entry through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogArchive;

impl Archive for LogArchive {
    fn archive(&self, entry: &ArchiveEntry) {
        info!(
            name = %entry.name,
            email = %entry.email,
            message = %entry.message,
            "Time Capsule Message Archived"
        );
    }
}

/// Handles submissions of the archive form.
pub struct FormHandler {
    view: Arc<dyn View>,
    archive: Arc<dyn Archive>,
    success_duration: Duration,
}

impl FormHandler {
    /// Create a handler that logs entries and shows the indicator for 7 seconds.
    pub fn new(view: Arc<dyn View>) -> Self {
        Self {
            view,
            archive: Arc::new(LogArchive),
            success_duration: Duration::from_secs(7),
        }
    }

    /// Send accepted entries to `archive` instead of the log.
    pub fn with_archive(mut self, archive: Arc<dyn Archive>) -> Self {
        self.archive = archive;
        self
    }

    /// Change how long the success indicator stays visible.
    pub fn with_success_duration(mut self, duration: Duration) -> Self {
        self.success_duration = duration;
        self
    }

    /// Handle a submit event.
    ///
    /// If all three fields are filled, the entry is archived, the success
    /// indicator is shown, the form is cleared and a timer is spawned to hide
    /// the indicator again. Timers are never cancelled, so after rapid
    /// resubmissions the oldest pending timer hides the indicator early.
    ///
    /// If any field is empty nothing happens and `None` is returned. The same
    /// holds outside a tokio runtime, where the hide timer cannot be
    /// scheduled: the view is left untouched.
    pub fn submit(&self) -> Option<ArchiveEntry> {
        let Some(entry) = ArchiveEntry::from_view(self.view.as_ref()) else {
            debug!("Archive form incomplete, ignoring submit");
            return None;
        };

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(error = %err, "No runtime for the success timer, ignoring submit");
                return None;
            }
        };

        self.archive.archive(&entry);
        self.view.set_visible(Element::SuccessMessage, true);
        self.view.reset_form();

        let view = Arc::clone(&self.view);
        let duration = self.success_duration;
        runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            view.set_visible(Element::SuccessMessage, false);
        });

        Some(entry)
    }
}

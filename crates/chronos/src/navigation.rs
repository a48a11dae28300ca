//! Page navigation.

use crate::view::{Element, Page, View};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Switches between the archive and future pages.
///
/// A two-state machine starting on [`Page::Archive`]. There is no terminal
/// state; every transition only changes visibility and active-link styling.
pub struct Navigator {
    view: Arc<dyn View>,
    current: Mutex<Page>,
}

impl Navigator {
    /// Create a navigator and show the archive page.
    pub fn new(view: Arc<dyn View>) -> Self {
        let navigator = Self {
            view,
            current: Mutex::new(Page::Archive),
        };
        navigator.show_page(Page::Archive);
        navigator
    }

    /// The page currently shown.
    pub fn current(&self) -> Page {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hide every page, show `page`, and mark only its control active.
    pub fn show_page(&self, page: Page) {
        for other in Page::ALL {
            self.view.set_visible(Element::Page(other), false);
        }
        self.view.set_visible(Element::Page(page), true);

        for other in Page::ALL {
            self.view.set_active(other, other == page);
        }

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = page;
        debug!(page = %page, "Page shown");
    }

    /// Handle a click on a navigation control tagged with `target`.
    ///
    /// Unknown targets are ignored. Returns the page shown afterwards.
    pub fn click(&self, target: &str) -> Page {
        match target.parse::<Page>() {
            Ok(page) => self.show_page(page),
            Err(err) => debug!(error = %err, "Ignoring navigation click"),
        }
        self.current()
    }
}

//! The page surface the Chronos logic drives.
//!
//! Navigation, the archive form and the prediction panel never touch a
//! concrete UI. They talk to a [`View`], which a browser binding, a terminal
//! front end or [`MemoryView`](crate::testing::MemoryView) can implement.

use std::fmt;
use std::str::FromStr;

/// One of the two pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// The message archive form
    Archive,
    /// The prediction generator
    Future,
}

impl Page {
    /// Every page, in display order.
    pub const ALL: [Page; 2] = [Page::Archive, Page::Future];

    /// Identifier used by navigation controls.
    pub fn id(self) -> &'static str {
        match self {
            Page::Archive => "archive",
            Page::Future => "future",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// A navigation target that names no page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

/// Elements whose visibility or text the logic controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// A page container
    Page(Page),
    /// "Message archived" indicator under the form
    SuccessMessage,
    /// Prediction text area
    PredictionText,
    /// Loading indicator shown while a prediction runs
    PredictionLoading,
    /// Panel wrapping the sources list
    PredictionSources,
}

/// The three archive form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message body
    Message,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];
}

/// A rendered citation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    /// Link target, opened in a new tab
    pub uri: String,
    /// Visible label
    pub label: String,
}

/// Capabilities the Chronos logic needs from a UI.
///
/// Methods take `&self`; implementations use interior mutability so a view can
/// be shared between the navigator, the form handler, the prediction
/// orchestrator and the timer tasks they spawn.
pub trait View: Send + Sync {
    /// Show or hide an element.
    fn set_visible(&self, element: Element, visible: bool);

    /// Mark the navigation control for `page` as active or inactive.
    fn set_active(&self, page: Page, active: bool);

    /// Replace the text content of an element.
    fn set_text(&self, element: Element, text: &str);

    /// Remove every link from the sources list.
    fn clear_links(&self);

    /// Append a link to the sources list. Links render comma-separated.
    fn append_link(&self, link: &SourceLink);

    /// Current value of a form field.
    fn field_value(&self, field: FormField) -> String;

    /// Clear every form field.
    fn reset_form(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert_eq!(Page::Future.to_string(), "future");
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(
            "settings".parse::<Page>(),
            Err(UnknownPage("settings".to_string()))
        );
        assert!("Archive".parse::<Page>().is_err());
    }
}

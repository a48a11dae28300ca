//! Testing utilities
//!
//! Provides an in-memory [`View`] and a scripted [`Transport`] so the
//! navigator, the archive form and the prediction orchestrator can be driven
//! without a browser or a network.

use crate::view::{Element, FormField, Page, SourceLink, View};
use async_trait::async_trait;
use chronos_transport::{HttpRequest, HttpResponse, Transport, TransportError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single call made against a [`MemoryView`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// `set_visible`
    Visible(Element, bool),
    /// `set_active`
    Active(Page, bool),
    /// `set_text`
    Text(Element, String),
    /// `clear_links`
    ClearLinks,
    /// `append_link`
    AppendLink(SourceLink),
    /// `reset_form`
    ResetForm,
}

#[derive(Debug, Default)]
struct MemoryState {
    visible: HashMap<Element, bool>,
    active: HashMap<Page, bool>,
    text: HashMap<Element, String>,
    links: Vec<SourceLink>,
    fields: HashMap<FormField, String>,
    events: Vec<ViewEvent>,
}

/// A view that keeps everything in memory.
///
/// Every element starts hidden, every field empty, no control active.
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<MemoryState>,
}

impl MemoryView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Type into a form field.
    pub fn fill(&self, field: FormField, value: impl Into<String>) {
        self.state().fields.insert(field, value.into());
    }

    /// Fill all three archive fields.
    pub fn fill_form(&self, name: &str, email: &str, message: &str) {
        self.fill(FormField::Name, name);
        self.fill(FormField::Email, email);
        self.fill(FormField::Message, message);
    }

    /// Whether `element` is currently shown.
    pub fn is_visible(&self, element: Element) -> bool {
        self.state().visible.get(&element).copied().unwrap_or(false)
    }

    /// Pages whose navigation control is marked active.
    pub fn active_pages(&self) -> Vec<Page> {
        let state = self.state();
        Page::ALL
            .into_iter()
            .filter(|page| state.active.get(page).copied().unwrap_or(false))
            .collect()
    }

    /// Text content of `element`.
    pub fn text(&self, element: Element) -> String {
        self.state().text.get(&element).cloned().unwrap_or_default()
    }

    /// Links currently in the sources list.
    pub fn links(&self) -> Vec<SourceLink> {
        self.state().links.clone()
    }

    /// The sources list as it reads on screen: labels joined by `", "`.
    pub fn sources_list(&self) -> String {
        self.state()
            .links
            .iter()
            .map(|link| link.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every call received so far, in order.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.state().events.clone()
    }
}

impl View for MemoryView {
    fn set_visible(&self, element: Element, visible: bool) {
        let mut state = self.state();
        state.visible.insert(element, visible);
        state.events.push(ViewEvent::Visible(element, visible));
    }

    fn set_active(&self, page: Page, active: bool) {
        let mut state = self.state();
        state.active.insert(page, active);
        state.events.push(ViewEvent::Active(page, active));
    }

    fn set_text(&self, element: Element, text: &str) {
        let mut state = self.state();
        state.text.insert(element, text.to_string());
        state.events.push(ViewEvent::Text(element, text.to_string()));
    }

    fn clear_links(&self) {
        let mut state = self.state();
        state.links.clear();
        state.events.push(ViewEvent::ClearLinks);
    }

    fn append_link(&self, link: &SourceLink) {
        let mut state = self.state();
        state.links.push(link.clone());
        state.events.push(ViewEvent::AppendLink(link.clone()));
    }

    fn field_value(&self, field: FormField) -> String {
        self.state().fields.get(&field).cloned().unwrap_or_default()
    }

    fn reset_form(&self) {
        let mut state = self.state();
        state.fields.clear();
        state.events.push(ViewEvent::ResetForm);
    }
}

/// A transport that replays queued outcomes, one per call.
///
/// Once the queue is empty every further call fails with a connection error.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    /// Create a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and `body`.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        let response = HttpResponse::new(status, HashMap::new(), body.into().into_bytes());
        self.push(Ok(response))
    }

    /// Queue a JSON response with status 200.
    pub fn respond_json(self, body: &serde_json::Value) -> Self {
        self.respond(200, body.to_string())
    }

    /// Queue a transport error.
    pub fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<HttpResponse, TransportError>) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
        self
    }

    /// Number of calls received.
    pub fn calls(&self) -> usize {
        self.requests().len()
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send_http(&self, request: HttpRequest) -> chronos_transport::Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("script exhausted".into())))
    }
}

//! ==============================================================================
//! state.rs - ui state machine
//! ==============================================================================
//!
//! purpose:
//!     the single piece of mutable state behind the dashboard. every
//!     transition is a plain method so each handler can be tested without a
//!     browser or a network.
//!
//! states:
//!     idle -> (submit) -> loading -> idle with results | idle with error
//!     a view switch returns to idle with nothing shown, at any time.
//!
//! staleness:
//!     each outbound request takes a ticket from a monotonic counter. only
//!     the completion carrying the current in-flight ticket is applied;
//!     older ones (superseded, or issued before a view switch) are dropped.
//!
//! ==============================================================================

use url::Url;

use crate::category::{Category, EndpointDescriptor};
use crate::config::{ClientConfig, CONFIGURE_PATH};
use crate::configure::ConfigForm;
use crate::error::{ClientError, ErrorBanner, Operation};
use crate::payload::QueryResult;
use crate::render::{render_results, ResultsView, CONFIGURED};

// ==============================================================================
// types
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Query(Category),
    Configure,
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Query(Category::default())
    }
}

/// identifies one outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub operation: Operation,
}

/// a validated query, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub ticket: Ticket,
    pub category: Category,
    pub url: String,
}

/// a serialized configuration request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfiguration {
    pub ticket: Ticket,
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub view: ActiveView,
    pub prompt: String,
    pub config_form: ConfigForm,
    pub loading: bool,
    pub error: Option<ErrorBanner>,
    pub results: ResultsView,
    in_flight: Option<Ticket>,
    next_ticket: u64,
}

// ==============================================================================
// view selection + helpers
// ==============================================================================

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// descriptor of the active category, `None` on the configure view
    pub fn descriptor(&self) -> Option<&'static EndpointDescriptor> {
        match self.view {
            ActiveView::Query(category) => Some(category.descriptor()),
            ActiveView::Configure => None,
        }
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.view = view;
        self.prompt.clear();
        self.clear_results();
        self.hide_error();
        if let Some(ticket) = self.in_flight.take() {
            log::debug!("view switch abandons request #{}", ticket.id);
        }
        self.show_loading(false);
    }

    pub fn select_category(&mut self, category: Category) {
        self.select_view(ActiveView::Query(category));
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn show_loading(&mut self, show: bool) {
        self.loading = show;
    }

    pub fn show_error(&mut self, err: &ClientError) {
        self.error = Some(err.banner());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    pub fn clear_results(&mut self) {
        self.results = ResultsView::Cleared;
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    fn issue(&mut self, operation: Operation) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket {
            id: self.next_ticket,
            operation,
        };
        self.in_flight = Some(ticket);
        self.show_loading(true);
        self.hide_error();
        self.clear_results();
        ticket
    }

    /// returns false for a stale ticket, leaving state untouched
    fn settle(&mut self, ticket: Ticket) -> bool {
        if self.in_flight != Some(ticket) {
            log::debug!("dropping stale response for request #{}", ticket.id);
            return false;
        }
        self.in_flight = None;
        self.show_loading(false);
        true
    }

    fn fail(&mut self, err: &ClientError) {
        log::warn!("{}", err);
        self.show_error(err);
    }
}

// ==============================================================================
// query transitions
// ==============================================================================

impl UiState {
    /// validate the prompt and enter loading. `None` means nothing to send
    /// (the reason, if any, is already in the error banner).
    pub fn begin_query(&mut self, config: &ClientConfig) -> Option<PendingQuery> {
        let ActiveView::Query(category) = self.view else {
            log::debug!("query ignored on configure view");
            return None;
        };

        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            self.show_error(&ClientError::EmptyInput);
            return None;
        }

        let url = match query_url(config, category, prompt) {
            Ok(url) => url,
            Err(err) => {
                self.fail(&err);
                return None;
            }
        };

        let ticket = self.issue(Operation::Query);
        log::info!("request #{}: GET {}", ticket.id, url);
        Some(PendingQuery {
            ticket,
            category,
            url: url.to_string(),
        })
    }

    /// apply the outcome of a query; false if it was stale
    pub fn complete_query(
        &mut self,
        ticket: Ticket,
        outcome: Result<QueryResult, ClientError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match outcome {
            Ok(result) => self.results = render_results(result),
            Err(err) => self.fail(&err),
        }
        true
    }
}

/// `{base}{path}?prompt=...`
pub fn query_url(config: &ClientConfig, category: Category, prompt: &str) -> Result<Url, ClientError> {
    let mut url = config.endpoint(category.descriptor().path)?;
    url.query_pairs_mut().append_pair("prompt", prompt);
    Ok(url)
}

// ==============================================================================
// configuration transitions
// ==============================================================================

impl UiState {
    pub fn begin_configuration(&mut self, config: &ClientConfig) -> Option<PendingConfiguration> {
        let prepared = self.config_form.to_request(config).and_then(|request| {
            let body = serde_json::to_string(&request)
                .map_err(|e| ClientError::Encode(e.to_string()))?;
            let url = config.endpoint(CONFIGURE_PATH)?;
            Ok((url, body))
        });

        let (url, body) = match prepared {
            Ok(parts) => parts,
            Err(err) => {
                self.clear_results();
                self.fail(&err);
                return None;
            }
        };

        let ticket = self.issue(Operation::Configure);
        log::info!(
            "request #{}: POST {} ({} -> {})",
            ticket.id,
            url,
            self.config_form.target,
            self.config_form.algorithm
        );
        Some(PendingConfiguration {
            ticket,
            url: url.to_string(),
            body,
        })
    }

    pub fn complete_configuration(
        &mut self,
        ticket: Ticket,
        outcome: Result<(), ClientError>,
    ) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        match outcome {
            Ok(()) => self.results = ResultsView::Confirmation(CONFIGURED.to_string()),
            Err(err) => self.fail(&err),
        }
        true
    }
}

// ==============================================================================
// tests
// ==============================================================================

//! ==============================================================================
//! controller.rs - client ui controller
//! ==============================================================================
//!
//! purpose:
//!     wires the ui state machine to a `Transport`. the dashboard owns one
//!     controller and forwards dom events to it; every state change is
//!     pushed to an observer (the dashboard mirrors it into a signal).
//!
//! rules:
//!     - state is never borrowed across an await
//!     - every request that starts also settles, so loading always clears
//!     - nothing is retried; each failure is shown once
//!
//! ==============================================================================

use std::cell::RefCell;

use crate::category::Category;
use crate::config::ClientConfig;
use crate::configure::ConfigForm;
use crate::error::{ClientError, Operation};
use crate::payload::{decode_envelope, QueryResult};
use crate::state::{ActiveView, UiState};
use crate::transport::{HttpResponse, Transport};

/// receives a snapshot after every state change
pub type Observer = Box<dyn Fn(&UiState)>;

pub struct Controller<T> {
    transport: T,
    config: ClientConfig,
    state: RefCell<UiState>,
    observer: Option<Observer>,
}

impl<T: Transport> Controller<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            state: RefCell::new(UiState::new()),
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&UiState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state);
            (result, self.observer.as_ref().map(|_| state.clone()))
        };
        if let (Some(observer), Some(snapshot)) = (&self.observer, snapshot) {
            observer(&snapshot);
        }
        result
    }

    // ==========================================================================
    // synchronous handlers
    // ==========================================================================

    pub fn select_view(&self, view: ActiveView) {
        self.update(|s| s.select_view(view));
    }

    pub fn select_category(&self, category: Category) {
        self.select_view(ActiveView::Query(category));
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        let prompt = prompt.into();
        self.update(|s| s.set_prompt(prompt));
    }

    pub fn edit_config(&self, edit: impl FnOnce(&mut ConfigForm)) {
        self.update(|s| edit(&mut s.config_form));
    }

    // ==========================================================================
    // network handlers
    // ==========================================================================

    /// GET the active category with the current prompt and render the answer
    pub async fn run_query(&self) {
        let Some(pending) = self.update(|s| s.begin_query(&self.config)) else {
            return;
        };
        let outcome = fetch_query(&self.transport, &pending.url).await;
        self.update(|s| s.complete_query(pending.ticket, outcome));
    }

    /// POST the configuration form; only the status is consulted
    pub async fn submit_configuration(&self) {
        let Some(pending) = self.update(|s| s.begin_configuration(&self.config)) else {
            return;
        };
        let outcome = send_configuration(&self.transport, &pending.url, pending.body).await;
        self.update(|s| s.complete_configuration(pending.ticket, outcome));
    }
}

// ==============================================================================
// request helpers
// ==============================================================================

pub async fn fetch_query<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
) -> Result<QueryResult, ClientError> {
    let response = transport
        .get(url)
        .await
        .map_err(|e| ClientError::network(Operation::Query, e))?;
    interpret_query(&response)
}

/// status first (429, then any other failure), body only on success
pub fn interpret_query(response: &HttpResponse) -> Result<QueryResult, ClientError> {
    if response.status == 429 {
        return Err(ClientError::RateLimited);
    }
    if !response.is_success() {
        return Err(ClientError::Server(response.status));
    }
    decode_envelope(&response.body)
}

pub async fn send_configuration<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    body: String,
) -> Result<(), ClientError> {
    let response = transport
        .post_json(url, body)
        .await
        .map_err(|e| ClientError::network(Operation::Configure, e))?;
    if !response.is_success() {
        return Err(ClientError::ConfigurationFailed(response.status));
    }
    Ok(())
}

// ==============================================================================
// tests
// ==============================================================================

//! ==============================================================================
//! api.rs - browser side of the rate-limited api client
//! ==============================================================================
//!
//! purpose:
//!     gloo-net implementation of `shared::Transport`, plus the copyable
//!     handle components use to reach the controller from event handlers.
//!
//! ==============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::prelude::*;
use shared::{ActiveView, Category, ConfigForm, Controller, HttpResponse, Transport, TransportError};

// ==============================================================================
// transport
// ==============================================================================

/// fetch-backed transport
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        read_response(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, TransportError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        read_response(response).await
    }
}

/// the body only matters on success; an unreadable error body is not a
/// network failure
async fn read_response(response: Response) -> Result<HttpResponse, TransportError> {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) if response.ok() => return Err(TransportError::Body(e.to_string())),
        Err(_) => String::new(),
    };
    Ok(HttpResponse { status, body })
}

// ==============================================================================
// controller handle
// ==============================================================================

type PlaygroundController = Controller<FetchTransport>;

/// Copy + Send handle around the controller so it can ride in any closure
#[derive(Clone, Copy)]
pub struct PlaygroundHandle(StoredValue<Rc<PlaygroundController>, LocalStorage>);

impl PlaygroundHandle {
    pub fn new(controller: PlaygroundController) -> Self {
        Self(StoredValue::new_local(Rc::new(controller)))
    }

    fn controller(&self) -> Rc<PlaygroundController> {
        self.0.get_value()
    }

    pub fn select_view(&self, view: ActiveView) {
        self.controller().select_view(view);
    }

    pub fn select_category(&self, category: Category) {
        self.controller().select_category(category);
    }

    pub fn set_prompt(&self, prompt: String) {
        self.controller().set_prompt(prompt);
    }

    pub fn edit_config(&self, edit: impl FnOnce(&mut ConfigForm)) {
        self.controller().edit_config(edit);
    }

    pub fn run_query(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            controller.run_query().await;
        });
    }

    pub fn submit_configuration(&self) {
        let controller = self.controller();
        leptos::task::spawn_local(async move {
            controller.submit_configuration().await;
        });
    }
}

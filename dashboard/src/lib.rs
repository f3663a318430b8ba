//! ==============================================================================
//! lib.rs - Rate Limit Playground Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for the rate-limited api demo. query the four
//!     content endpoints (trivia, travel, sports, movies) and push rate
//!     limiting configuration to the backend.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - all behavior lives in `shared::Controller`; components only forward
//!       dom events and render the `UiState` snapshot it publishes
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use shared::{ActiveView, ClientConfig, Controller, UiState};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod logging;

use api::{FetchTransport, PlaygroundHandle};
use components::{ConfigureView, Header, QueryView, ResultsPanel, StatusPanel, TabNav};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("rate limit playground starting against {}", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let (state, set_state) = signal(UiState::new());
    let controller = Controller::new(FetchTransport, config)
        .with_observer(move |snapshot| set_state.set(snapshot.clone()));
    let handle = PlaygroundHandle::new(controller);

    let on_configure = move || state.with(|s| s.view == ActiveView::Configure);

    view! {
        <Title text=move || state.with(page_title) />
        <Header />
        <div class="container">
            <TabNav state=state handle=handle />

            <Show
                when=on_configure
                fallback=move || view! { <QueryView state=state handle=handle /> }
            >
                <ConfigureView state=state handle=handle />
            </Show>

            <StatusPanel state=state />
            <ResultsPanel state=state />
        </div>
    }
}

fn page_title(state: &UiState) -> String {
    match state.descriptor() {
        Some(descriptor) => format!("{} | Rate Limit Playground", descriptor.title),
        None => "Configure | Rate Limit Playground".to_string(),
    }
}

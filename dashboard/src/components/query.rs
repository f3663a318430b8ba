//! Query view: title, description and the prompt box for one category

use leptos::prelude::*;
use shared::UiState;

use crate::api::PlaygroundHandle;

#[component]
pub fn QueryView(state: ReadSignal<UiState>, handle: PlaygroundHandle) -> impl IntoView {
    // descriptor is None only on the configure view, which never shows this
    let copy = move |pick: fn(&shared::EndpointDescriptor) -> &'static str| {
        state.with(|s| s.descriptor().map(pick).unwrap_or_default())
    };

    view! {
        <div class="card">
            <h2 id="page-title">{move || copy(|d| d.title)}</h2>
            <p id="page-desc" style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                {move || copy(|d| d.description)}
            </p>

            <div class="input-group">
                <input
                    id="user-prompt"
                    type="text"
                    placeholder=move || copy(|d| d.placeholder)
                    prop:value=move || state.with(|s| s.prompt.clone())
                    on:input=move |ev| handle.set_prompt(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            handle.run_query();
                        }
                    }
                />
                <button
                    on:click=move |_| handle.run_query()
                    disabled=move || state.with(|s| s.loading)
                >
                    "Ask"
                </button>
            </div>
        </div>
    }
}

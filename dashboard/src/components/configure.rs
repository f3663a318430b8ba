//! Configure view component
//!
//! picks a target endpoint and an algorithm, collects the numeric
//! parameters and posts them to the backend. fields the chosen algorithm
//! does not read are dimmed but still sent (as typed, or 0).

use leptos::prelude::*;
use shared::{Algorithm, Category, NumericField, UiState};

use crate::api::PlaygroundHandle;

#[component]
pub fn ConfigureView(state: ReadSignal<UiState>, handle: PlaygroundHandle) -> impl IntoView {
    let form_value = move |field: NumericField| state.with(|s| s.config_form.field(field).to_string());

    let window_based = move || {
        state.with(|s| {
            Algorithm::from_id(&s.config_form.algorithm)
                .map(Algorithm::uses_window)
                .unwrap_or(true)
        })
    };

    view! {
        <div class="card">
            <h2>"⚙️ Configure Rate Limiting"</h2>
            <p style="color: var(--text-secondary); margin-bottom: 1rem; font-size: 0.875rem;">
                "Choose an endpoint and the algorithm the backend should enforce on it."
            </p>

            <div class="form-grid">
                <label>
                    "Endpoint"
                    <select
                        id="api-select"
                        prop:value=move || state.with(|s| s.config_form.target.id())
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<Category>() {
                                Ok(target) => handle.edit_config(|form| form.target = target),
                                Err(err) => log::warn!("{}", err),
                            }
                        }
                    >
                        {Category::ALL.into_iter().map(|category| view! {
                            <option value=category.id()>{category.descriptor().title}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>

                <label>
                    "Algorithm"
                    <select
                        id="algo-select"
                        prop:value=move || state.with(|s| s.config_form.algorithm.clone())
                        on:change=move |ev| {
                            let algorithm = event_target_value(&ev);
                            handle.edit_config(|form| form.algorithm = algorithm);
                        }
                    >
                        {Algorithm::ALL.into_iter().map(|algorithm| view! {
                            <option value=algorithm.id()>{algorithm.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>

                {NumericField::ALL.into_iter().map(|field| {
                    let applies = move || {
                        let window_field = matches!(field, NumericField::Limit | NumericField::WindowSize);
                        window_field == window_based()
                    };
                    view! {
                        <label style=move || if applies() { "" } else { "opacity: 0.5;" }>
                            {field.label()}
                            <input
                                type="number"
                                min="0"
                                placeholder="0"
                                prop:value=move || form_value(field)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    handle.edit_config(|form| form.set_field(field, value));
                                }
                            />
                        </label>
                    }
                }).collect::<Vec<_>>()}
            </div>

            <button
                on:click=move |_| handle.submit_configuration()
                disabled=move || state.with(|s| s.loading)
            >
                {move || if state.with(|s| s.loading) {
                    view! { <span class="spinner"></span> " Saving..." }.into_any()
                } else {
                    view! { "Apply Configuration" }.into_any()
                }}
            </button>
        </div>
    }
}

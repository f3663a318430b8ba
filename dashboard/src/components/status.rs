//! Loading indicator and error banner

use leptos::prelude::*;
use shared::UiState;

#[component]
pub fn StatusPanel(state: ReadSignal<UiState>) -> impl IntoView {
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <Show when=move || loading.get()>
            <div id="loading" class="loading">
                <span class="spinner"></span>
                " Loading..."
            </div>
        </Show>

        {move || error.get().map(|banner| view! {
            <div id="error-container" class="result error" style="background: rgba(239, 68, 68, 0.1); border-color: var(--error);">
                <div style="font-weight: 600; color: var(--error);" id="error-title">{banner.title}</div>
                <div style="color: var(--text-secondary); font-size: 0.875rem;" id="error-msg">{banner.message}</div>
            </div>
        })}
    }
}

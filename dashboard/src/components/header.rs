//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Rate Limit Playground"</h1>
                <p class="subtitle">"Query a rate-limited API and tune its limits"</p>
            </div>
            <span class="badge">"Rust + WASM"</span>
        </header>
    }
}

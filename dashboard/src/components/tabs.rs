//! Tab navigation component

use leptos::prelude::*;
use shared::{ActiveView, Category, UiState};

use crate::api::PlaygroundHandle;

#[component]
pub fn TabNav(state: ReadSignal<UiState>, handle: PlaygroundHandle) -> impl IntoView {
    let is_active = move |view: ActiveView| state.with(|s| s.view == view);

    view! {
        <nav class="tabs">
            {Category::ALL.into_iter().map(|category| {
                let view = ActiveView::Query(category);
                view! {
                    <button
                        class=move || if is_active(view) { "nav-item tab active" } else { "nav-item tab" }
                        data-type=category.id()
                        on:click=move |_| handle.select_category(category)
                    >
                        {category.nav_label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
            <button
                class=move || if is_active(ActiveView::Configure) { "nav-item tab active" } else { "nav-item tab" }
                data-type="configure"
                on:click=move |_| handle.select_view(ActiveView::Configure)
            >
                "⚙️ Configure"
            </button>
        </nav>
    }
}

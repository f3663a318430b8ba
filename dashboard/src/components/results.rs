//! Results area: placeholder, text block, record cards or confirmation

use leptos::prelude::*;
use shared::{Card, ResultsView, UiState};

#[component]
pub fn ResultsPanel(state: ReadSignal<UiState>) -> impl IntoView {
    // typing republishes the whole state; only rebuild cards when they change
    let results = Memo::new(move |_| state.with(|s| s.results.clone()));

    view! {
        <div id="results-grid" class="results-grid">
            {move || match results.get() {
                ResultsView::Cleared => ().into_any(),
                ResultsView::Placeholder(msg)
                | ResultsView::Text(msg)
                | ResultsView::Confirmation(msg) => view! {
                    <div class="placeholder-msg">{msg}</div>
                }.into_any(),
                ResultsView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ResultCard card=card /> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ResultCard(card: Card) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{card.heading}</h3>
            {card.rows.into_iter().map(|row| view! {
                <div class="data-row">
                    <span class="data-key">{row.label}":"</span>
                    " "{row.value}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

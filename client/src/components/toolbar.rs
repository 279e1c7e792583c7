//! Pad controls: clear the drawing, or ask the classifier about it.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Toolbar with the two pad actions. Both buttons bump request counters in
/// [`UiState`]; the pad host performs the actual work.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toolbar">
            <button on:click=move |_| ui.update(UiState::request_clear)>"Clear"</button>
            <button on:click=move |_| ui.update(UiState::request_classify)>"What digit?"</button>
        </div>
    }
}

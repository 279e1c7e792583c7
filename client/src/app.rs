//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::answer_readout::AnswerReadout;
use crate::components::pad_host::PadHost;
use crate::components::toolbar::Toolbar;
use crate::state::classifier::ClassifierState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared state contexts and composes the single pad page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let classifier = RwSignal::new(ClassifierState::default());
    provide_context(ui);
    provide_context(classifier);

    view! {
        <Title text="Digit Pad"/>

        <main class="pad-page">
            <h1>"Draw a digit"</h1>
            <PadHost/>
            <Toolbar/>
            <AnswerReadout/>
        </main>
    }
}

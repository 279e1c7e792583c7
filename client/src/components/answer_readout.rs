//! Answer readout under the pad.

use leptos::prelude::*;

use crate::state::classifier::ClassifierState;

/// Shows the classifier's verdict for the current drawing.
#[component]
pub fn AnswerReadout() -> impl IntoView {
    let classifier = expect_context::<RwSignal<ClassifierState>>();

    view! {
        <p class="answer">{move || classifier.get().message()}</p>
    }
}

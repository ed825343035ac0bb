//! Answer Kind Selector Component
//!
//! Buttons switching an answer between text, image and LaTeX input.

use leptos::prelude::*;

use crate::store::AnswerKind;

/// Kind selector buttons for one answer
#[component]
pub fn KindSelector(
    current_kind: Memo<AnswerKind>,
    on_change: impl Fn(AnswerKind) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="kind-selector">
            {AnswerKind::ALL.iter().map(|kind| {
                let kind = *kind;
                let is_selected = move || current_kind.get() == kind;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "kind-btn active" } else { "kind-btn" }
                        data-type=kind.as_str()
                        on:click=move |_| on_change(kind)
                    >
                        {kind.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

//! Answer Input Component
//!
//! The content field of an answer. The element is rebuilt only when the
//! kind changes; name and id follow the answer's position.

use leptos::prelude::*;

use crate::naming::answer_field;
use crate::store::AnswerKind;

#[component]
pub fn AnswerInput(
    kind: Memo<AnswerKind>,
    /// (question, answer) positions
    position: Memo<(usize, usize)>,
    value: Signal<String>,
    on_input: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let name = move || {
        let (q, a) = position.get();
        answer_field(q, a)
    };
    let placeholder = move || format!("Option {}", position.get().1);

    move || match kind.get() {
        AnswerKind::Text => view! {
            <input
                type="text"
                class="answer-input"
                id=name
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                required
            />
        }
        .into_any(),
        AnswerKind::Image => view! {
            <input type="file" class="answer-input" id=name name=name accept="image/*" required />
        }
        .into_any(),
        AnswerKind::Latex => view! {
            <textarea
                class="answer-input"
                id=name
                name=name
                placeholder="Enter LaTeX"
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                required
            ></textarea>
        }
        .into_any(),
    }
}

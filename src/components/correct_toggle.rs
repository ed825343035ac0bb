//! Correct Toggle Component
//!
//! Correctness button paired with the hidden field that carries the flag
//! through form submission.

use leptos::prelude::*;

use crate::naming::correct_field;
use crate::store::correct_label;

#[component]
pub fn CorrectToggle(
    correct: Memo<bool>,
    /// (question, answer) positions
    position: Memo<(usize, usize)>,
    on_toggle: impl Fn() + Copy + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if correct.get() { "correct-answer-btn correct" } else { "correct-answer-btn incorrect" }
            on:click=move |_| on_toggle()
        >
            {move || correct_label(correct.get())}
        </button>
        <input
            type="hidden"
            name=move || { let (q, a) = position.get(); correct_field(q, a) }
            prop:value=move || correct_label(correct.get())
        />
    }
}

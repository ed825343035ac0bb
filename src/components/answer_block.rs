//! Answer Block Component
//!
//! One answer option: content field, kind selector, correctness toggle and
//! delete button.

use leptos::prelude::*;

use crate::components::answer_input::AnswerInput;
use crate::components::correct_toggle::CorrectToggle;
use crate::components::kind_selector::KindSelector;
use crate::naming::answer_field;
use crate::store::{
    store_delete_answer, store_set_answer_kind, store_set_answer_value, store_toggle_correct,
    use_form_store, AnswerKind,
};

#[component]
pub fn AnswerBlock(question_key: u32, answer_key: u32) -> impl IntoView {
    let store = use_form_store();

    let position = Memo::new(move |_| {
        store.read().answer_position(question_key, answer_key).unwrap_or((0, 0))
    });
    let kind = Memo::new(move |_| {
        store.read().answer_by_key(question_key, answer_key).map(|a| a.kind).unwrap_or_default()
    });
    let correct = Memo::new(move |_| {
        store.read().answer_by_key(question_key, answer_key).is_some_and(|a| a.correct)
    });
    let value = Signal::derive(move || {
        store.read().answer_by_key(question_key, answer_key).map(|a| a.value.clone()).unwrap_or_default()
    });

    view! {
        <div class="answer-option">
            <label class="answer-label" for=move || { let (q, a) = position.get(); answer_field(q, a) }>
                {move || format!("Option {}", position.get().1)}
            </label>
            <AnswerInput
                kind=kind
                position=position
                value=value
                on_input=move |v: String| store_set_answer_value(&store, question_key, answer_key, v)
            />
            <div class="answer-controls">
                <KindSelector
                    current_kind=kind
                    on_change=move |k: AnswerKind| store_set_answer_kind(&store, question_key, answer_key, k)
                />
                <div>
                    <CorrectToggle
                        correct=correct
                        position=position
                        on_toggle=move || store_toggle_correct(&store, question_key, answer_key)
                    />
                    <button
                        type="button"
                        class="delete-answer-btn"
                        on:click=move |_| store_delete_answer(&store, question_key, answer_key)
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Question Block Component
//!
//! One question: numbered label, prompt field, its answers and the
//! add-answer / delete-question buttons.

use leptos::prelude::*;

use crate::components::answer_block::AnswerBlock;
use crate::naming::question_field;
use crate::store::{
    store_add_answer, store_delete_question, store_set_question_text, use_form_store,
};

#[component]
pub fn QuestionBlock(question_key: u32) -> impl IntoView {
    let store = use_form_store();

    let position = Memo::new(move |_| store.read().question_position(question_key).unwrap_or(0));
    // Minimum one question: the delete button is hidden on a lone question
    let can_delete = Memo::new(move |_| store.read().can_delete_question());
    let field = move || question_field(position.get());

    view! {
        <div class="question-item">
            <label class="question-label" for=field>
                {move || format!("Question {}", position.get())}
            </label>
            <input
                type="text"
                class="question-input"
                id=field
                name=field
                placeholder="Enter question text"
                prop:value=move || {
                    store.read().question_by_key(question_key).map(|q| q.text.clone()).unwrap_or_default()
                }
                on:input=move |ev| store_set_question_text(&store, question_key, event_target_value(&ev))
                required
            />
            <span class="answers-heading">"Answer Options"</span>
            <div class="answers-container">
                <For
                    each=move || store.read().answer_keys(question_key)
                    key=|answer_key| *answer_key
                    children=move |answer_key| view! {
                        <AnswerBlock question_key=question_key answer_key=answer_key />
                    }
                />
            </div>
            <button
                type="button"
                class="add-answer-btn"
                on:click=move |_| store_add_answer(&store, question_key)
            >
                "Add Answer"
            </button>
            <button
                type="button"
                class=move || if can_delete.get() { "delete-question-btn" } else { "delete-question-btn hidden" }
                on:click=move |_| store_delete_question(&store, question_key)
            >
                "Delete Question"
            </button>
        </div>
    }
}

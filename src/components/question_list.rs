//! Question List Component
//!
//! All question blocks in order, plus the add-question button.

use leptos::prelude::*;

use crate::components::question_block::QuestionBlock;
use crate::context::use_form_context;
use crate::store::{store_add_question, use_form_store};

#[component]
pub fn QuestionList() -> impl IntoView {
    let store = use_form_store();
    let ctx = use_form_context();

    view! {
        <div id="questions-list" class="questions-list">
            <For
                each=move || store.read().question_keys()
                key=|question_key| *question_key
                children=move |question_key| view! { <QuestionBlock question_key=question_key /> }
            />
        </div>
        <button
            type="button"
            id="add-question-btn"
            class="add-question-btn"
            on:click=move |_| store_add_question(&store, ctx.answers_per_new_question())
        >
            "Add Question"
        </button>
    }
}

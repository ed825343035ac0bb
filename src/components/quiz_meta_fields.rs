//! Quiz Meta Fields Component
//!
//! Title, password, description, question order and time per question.

use leptos::prelude::*;

use crate::models::QuestionOrder;
use crate::store::{use_form_store, FormStateStoreFields};

#[component]
pub fn QuizMetaFields() -> impl IntoView {
    let store = use_form_store();

    view! {
        <div class="quiz-meta">
            <label for="title">"Title"</label>
            <input
                type="text"
                id="title"
                name="title"
                placeholder="Quiz title"
                prop:value=move || store.title().get()
                on:input=move |ev| *store.title().write() = event_target_value(&ev)
                required
            />

            <label for="password">"Password"</label>
            <input
                type="password"
                id="password"
                name="password"
                autocomplete="new-password"
                prop:value=move || store.password().get()
                on:input=move |ev| *store.password().write() = event_target_value(&ev)
            />

            <label for="description">"Description"</label>
            <textarea
                id="description"
                name="description"
                placeholder="What is this quiz about?"
                prop:value=move || store.description().get()
                on:input=move |ev| *store.description().write() = event_target_value(&ev)
            ></textarea>

            <fieldset class="question-order">
                <legend>"Question Order"</legend>
                {QuestionOrder::ALL.iter().map(|order| {
                    let order = *order;
                    let id = format!("question-order-{}", order.as_str());
                    view! {
                        <input
                            type="radio"
                            id=id.clone()
                            name="question-order"
                            value=order.as_str()
                            prop:checked=move || store.question_order().get() == order
                            on:change=move |_| *store.question_order().write() = order
                        />
                        <label for=id>{order.label()}</label>
                    }
                }).collect_view()}
            </fieldset>

            <label for="time-per-question">"Seconds per Question"</label>
            <input
                type="number"
                id="time-per-question"
                name="time-per-question"
                min="1"
                prop:value=move || store.time_per_question().get().to_string()
                on:input=move |ev| {
                    // Keep the last valid number while the field is being edited
                    if let Ok(seconds) = event_target_value(&ev).parse::<u32>() {
                        *store.time_per_question().write() = seconds;
                    }
                }
                required
            />
        </div>
    }
}

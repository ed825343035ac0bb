//! Quiz Form App
//!
//! Root component: provides the store and settings, renders the form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{QuestionList, QuizMetaFields};
use crate::config::FormConfig;
use crate::context::FormContext;
use crate::naming::FieldName;
use crate::store::{FieldValue, FormState};

#[component]
pub fn App(config: FormConfig, initial: FormState) -> impl IntoView {
    let store = Store::new(initial);
    provide_context(store);
    provide_context(FormContext::new(config.clone()));
    let method = config.form_method();

    // Let the browser post the form; only log what is about to be sent
    let on_submit = move |_: web_sys::SubmitEvent| {
        let state = store.read();
        let fields = state.fields();
        let files = fields.iter().filter(|f| f.value == FieldValue::File).count();
        let questions = fields
            .iter()
            .filter(|f| matches!(FieldName::parse(&f.name), Some(FieldName::Question(_))))
            .count();
        log::info!(
            "submitting {} questions as {} fields ({} file inputs)",
            questions,
            fields.len(),
            files
        );
    };

    view! {
        <form
            class="quiz-form"
            action=config.action
            method=method
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <QuizMetaFields />
            <QuestionList />
            <button type="submit" class="submit-btn">{config.submit_label}</button>
        </form>
    }
}

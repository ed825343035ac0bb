//! Form Context
//!
//! Read-only settings provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::FormConfig;

/// Form-wide settings provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    config: StoredValue<FormConfig>,
}

impl FormContext {
    pub fn new(config: FormConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// Empty answers attached to a new question
    pub fn answers_per_new_question(&self) -> usize {
        self.config.with_value(|c| c.answers_per_new_question)
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}

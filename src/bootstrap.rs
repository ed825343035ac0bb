//! Host Page Bootstrap
//!
//! Reads configuration and the quiz record to edit from the host page.

use wasm_bindgen::prelude::*;

use crate::config::FormConfig;
use crate::error::{FormError, FormResult};
use crate::models::QuizRecord;
use crate::store::FormState;

/// Global the host page may define to configure the form
pub const CONFIG_GLOBAL: &str = "QUIZ_FORM_CONFIG";

fn window() -> FormResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| FormError::NotFound("window".to_string()))
}

/// Read `window.QUIZ_FORM_CONFIG`; defaults when it is not defined
pub fn load_config() -> FormResult<FormConfig> {
    let window = window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| FormError::Internal(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(FormConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| FormError::InvalidInput(e.to_string()))
}

/// Read the embedded quiz record. `None` means create mode.
pub fn load_record(element_id: &str) -> FormResult<Option<QuizRecord>> {
    let document = window()?
        .document()
        .ok_or_else(|| FormError::NotFound("document".to_string()))?;
    let Some(element) = document.get_element_by_id(element_id) else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    QuizRecord::from_json(&raw).map(Some)
}

/// Initial form state: hydrated in edit mode, one empty question otherwise.
/// Unreadable hydration data falls back to create mode.
pub fn initial_state(config: &FormConfig) -> FormState {
    match load_record(&config.data_element_id) {
        Ok(Some(record)) => {
            log::info!("editing quiz \"{}\" with {} questions", record.title, record.questions.len());
            FormState::from_record(&record, config.answers_per_new_question)
        }
        Ok(None) => FormState::new(config.answers_per_new_question),
        Err(e) => {
            log::warn!("ignoring quiz data in #{}: {}", config.data_element_id, e);
            FormState::new(config.answers_per_new_question)
        }
    }
}

//! Form Configuration
//!
//! Host-page settings, read once at startup. Every key is optional.

use serde::Deserialize;

/// Settings supplied by the host page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Form action URL; empty posts back to the current page
    pub action: String,
    /// `post` or `get`; a native form cannot send anything else
    pub method: String,
    /// Id of the element holding the quiz record JSON in edit mode
    pub data_element_id: String,
    /// Empty answers attached to every freshly added question
    pub answers_per_new_question: usize,
    pub submit_label: String,
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: "post".to_string(),
            data_element_id: "quiz-data".to_string(),
            answers_per_new_question: 4,
            submit_label: "Save Quiz".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Parsed log level, `Info` when unrecognized
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Method for the `<form>` element. Browsers send any other value as a
    /// bodiless GET, so unsupported methods fall back to `post`.
    pub fn form_method(&self) -> &'static str {
        match self.method.trim().to_ascii_lowercase().as_str() {
            "post" => "post",
            "get" => "get",
            other => {
                log::warn!("unsupported form method \"{}\", using post", other);
                "post"
            }
        }
    }
}

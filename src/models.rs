//! Quiz Record Models
//!
//! Hydration input as serialized by the quiz server for edit mode.
//! Keys follow the server's exported field names; snake_case aliases are
//! accepted. Any field that is missing or has the wrong shape falls back to
//! its default instead of failing the whole record.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Order in which questions are presented during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuestionOrder {
    #[serde(alias = "Random", alias = "RANDOM")]
    Random,
    #[default]
    #[serde(other)]
    Fixed,
}

impl QuestionOrder {
    pub const ALL: [QuestionOrder; 2] = [QuestionOrder::Fixed, QuestionOrder::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionOrder::Fixed => "fixed",
            QuestionOrder::Random => "random",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionOrder::Fixed => "Fixed",
            QuestionOrder::Random => "Random",
        }
    }
}

/// Quiz record to edit
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct QuizRecord {
    #[serde(rename = "Title", alias = "title", deserialize_with = "lenient")]
    pub title: String,
    #[serde(rename = "Password", alias = "password", deserialize_with = "lenient")]
    pub password: String,
    #[serde(rename = "Description", alias = "description", deserialize_with = "lenient")]
    pub description: String,
    #[serde(rename = "QuestionOrder", alias = "question_order", deserialize_with = "lenient")]
    pub question_order: QuestionOrder,
    #[serde(rename = "TimePerQuestion", alias = "time_per_question", deserialize_with = "lenient")]
    pub time_per_question: Option<u32>,
    #[serde(rename = "Questions", alias = "questions", deserialize_with = "lenient")]
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct QuestionRecord {
    #[serde(rename = "Text", alias = "text", deserialize_with = "lenient")]
    pub text: String,
    #[serde(rename = "Answers", alias = "answers", deserialize_with = "lenient")]
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AnswerRecord {
    #[serde(rename = "Text", alias = "text", deserialize_with = "lenient")]
    pub text: String,
    #[serde(rename = "LaTeX", alias = "latex", deserialize_with = "lenient")]
    pub latex: String,
    #[serde(rename = "IsCorrect", alias = "is_correct", deserialize_with = "lenient")]
    pub is_correct: bool,
    #[serde(rename = "ImageName", alias = "image_name", deserialize_with = "lenient")]
    pub image_name: String,
    /// Base64 image payload; only its presence matters here
    #[serde(rename = "Image", alias = "image", deserialize_with = "lenient")]
    pub image: Option<String>,
}

impl AnswerRecord {
    pub fn has_image(&self) -> bool {
        !self.image_name.is_empty() || self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl QuizRecord {
    /// Decode the embedded record. The server may wrap the JSON object in a
    /// JSON string literal, so one level of string wrapping is unwrapped.
    pub fn from_json(raw: &str) -> FormResult<Self> {
        let mut value: serde_json::Value = serde_json::from_str(raw.trim())?;
        if let serde_json::Value::String(inner) = &value {
            value = serde_json::from_str(inner.trim())?;
        }
        if !value.is_object() {
            return Err(FormError::InvalidInput(format!("quiz record is not an object: {}", value)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Deserialize a field, substituting the default for null or mistyped values
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

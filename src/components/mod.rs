//! UI Components
//!
//! Leptos components projecting the form store to the DOM.

mod answer_block;
mod answer_input;
mod correct_toggle;
mod kind_selector;
mod question_block;
mod question_list;
mod quiz_meta_fields;

pub use question_list::QuestionList;
pub use quiz_meta_fields::QuizMetaFields;

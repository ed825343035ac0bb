//! Quiz Form State Store
//!
//! The form's view-model. Questions and answers are kept as ordered lists;
//! their positions, and therefore their field names, are always recomputed
//! from list order, so removals never leave gaps. The DOM is a projection of
//! this state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{QuestionOrder, QuizRecord};
use crate::naming::{answer_field, correct_field, question_field};

/// Hidden-field value for a correct answer, as read by the server parser
pub const CORRECT: &str = "Correct";
/// Hidden-field value for an incorrect answer
pub const INCORRECT: &str = "Incorrect";

/// Default seconds per question for new quizzes
pub const DEFAULT_TIME_PER_QUESTION: u32 = 30;

/// Encoded correctness flag
pub fn correct_label(correct: bool) -> &'static str {
    if correct { CORRECT } else { INCORRECT }
}

/// Input element used for an answer's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerKind {
    /// Single-line text box
    #[default]
    Text,
    /// File picker restricted to images
    Image,
    /// Multi-line LaTeX source
    Latex,
}

impl AnswerKind {
    pub const ALL: [AnswerKind; 3] = [AnswerKind::Text, AnswerKind::Image, AnswerKind::Latex];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKind::Text => "text",
            AnswerKind::Image => "image",
            AnswerKind::Latex => "latex",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerKind::Text => "Text",
            AnswerKind::Image => "Image",
            AnswerKind::Latex => "LaTeX",
        }
    }
}

/// One answer option being edited
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDraft {
    /// Stable render key, unrelated to position
    pub key: u32,
    pub kind: AnswerKind,
    /// Current content; always empty for image pickers
    pub value: String,
    pub correct: bool,
}

/// One question being edited
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    /// Stable render key, unrelated to position
    pub key: u32,
    pub text: String,
    pub answers: Vec<AnswerDraft>,
}

/// Value a named field contributes to the posted form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// A file picker; its payload lives in the browser only
    File,
}

/// A flat named field, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub value: FieldValue,
}

impl FormField {
    fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: FieldValue::Text(value.into()) }
    }
}

/// Whole form state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct FormState {
    pub title: String,
    pub password: String,
    pub description: String,
    pub question_order: QuestionOrder,
    pub time_per_question: u32,
    pub questions: Vec<QuestionDraft>,
    /// Next render key to hand out
    next_key: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            title: String::new(),
            password: String::new(),
            description: String::new(),
            question_order: QuestionOrder::Fixed,
            time_per_question: DEFAULT_TIME_PER_QUESTION,
            questions: Vec::new(),
            next_key: 1,
        }
    }
}

impl FormState {
    /// Create mode: one empty question with `answers` empty options
    pub fn new(answers: usize) -> Self {
        let mut state = Self::default();
        state.add_question(answers);
        state
    }

    /// Edit mode: replace everything with the contents of `record`
    pub fn from_record(record: &QuizRecord, answers_for_empty: usize) -> Self {
        let mut state = Self::default();
        state.hydrate(record, answers_for_empty);
        state
    }

    /// Populate meta fields, questions and answers from a stored record.
    /// A record without questions still yields one empty question.
    pub fn hydrate(&mut self, record: &QuizRecord, answers_for_empty: usize) {
        self.title = record.title.clone();
        self.password = record.password.clone();
        self.description = record.description.clone();
        self.question_order = record.question_order;
        self.time_per_question = record
            .time_per_question
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_TIME_PER_QUESTION);
        self.questions.clear();

        for question in &record.questions {
            let answers: Vec<AnswerDraft> = question
                .answers
                .iter()
                .map(|answer| {
                    let (kind, value) = if answer.has_image() {
                        (AnswerKind::Image, String::new())
                    } else if !answer.latex.is_empty() {
                        (AnswerKind::Latex, answer.latex.clone())
                    } else {
                        (AnswerKind::Text, answer.text.clone())
                    };
                    AnswerDraft { key: self.take_key(), kind, value, correct: answer.is_correct }
                })
                .collect();
            let key = self.take_key();
            self.questions.push(QuestionDraft { key, text: question.text.clone(), answers });
        }

        if self.questions.is_empty() {
            self.add_question(answers_for_empty);
        }
    }

    fn take_key(&mut self) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    fn empty_answer(&mut self) -> AnswerDraft {
        AnswerDraft { key: self.take_key(), kind: AnswerKind::Text, value: String::new(), correct: false }
    }

    // ========================
    // Lookups
    // ========================

    /// 1-based position of the question with `key`
    pub fn question_position(&self, key: u32) -> Option<usize> {
        self.questions.iter().position(|q| q.key == key).map(|i| i + 1)
    }

    /// 1-based (question, answer) position of an answer
    pub fn answer_position(&self, question_key: u32, answer_key: u32) -> Option<(usize, usize)> {
        let q = self.question_position(question_key)?;
        let a = self.questions[q - 1].answers.iter().position(|a| a.key == answer_key)?;
        Some((q, a + 1))
    }

    pub fn question_by_key(&self, key: u32) -> Option<&QuestionDraft> {
        self.questions.iter().find(|q| q.key == key)
    }

    pub fn answer_by_key(&self, question_key: u32, answer_key: u32) -> Option<&AnswerDraft> {
        self.question_by_key(question_key)?.answers.iter().find(|a| a.key == answer_key)
    }

    /// Render keys of all questions, in order
    pub fn question_keys(&self) -> Vec<u32> {
        self.questions.iter().map(|q| q.key).collect()
    }

    /// Render keys of a question's answers, in order
    pub fn answer_keys(&self, question_key: u32) -> Vec<u32> {
        self.question_by_key(question_key)
            .map(|q| q.answers.iter().map(|a| a.key).collect())
            .unwrap_or_default()
    }

    pub fn question(&self, position: usize) -> Option<&QuestionDraft> {
        position.checked_sub(1).and_then(|i| self.questions.get(i))
    }

    fn question_mut(&mut self, position: usize) -> Option<&mut QuestionDraft> {
        position.checked_sub(1).and_then(|i| self.questions.get_mut(i))
    }

    #[cfg(test)]
    pub fn answer(&self, question: usize, answer: usize) -> Option<&AnswerDraft> {
        self.question(question)?.answers.get(answer.checked_sub(1)?)
    }

    fn answer_mut(&mut self, question: usize, answer: usize) -> Option<&mut AnswerDraft> {
        let index = answer.checked_sub(1)?;
        self.question_mut(question)?.answers.get_mut(index)
    }

    /// Whether delete controls are shown; at least one question must remain
    pub fn can_delete_question(&self) -> bool {
        self.questions.len() > 1
    }

    // ========================
    // Mutations
    // ========================

    /// Append an empty question with `answers` empty options.
    /// Returns its position.
    pub fn add_question(&mut self, answers: usize) -> usize {
        let answers: Vec<AnswerDraft> = (0..answers).map(|_| self.empty_answer()).collect();
        let key = self.take_key();
        self.questions.push(QuestionDraft { key, text: String::new(), answers });
        self.questions.len()
    }

    /// Remove a question. Refused for the last remaining question.
    pub fn delete_question(&mut self, position: usize) -> bool {
        if !self.can_delete_question() || self.question(position).is_none() {
            return false;
        }
        self.questions.remove(position - 1);
        true
    }

    /// Append an empty, incorrect text answer. Returns its position.
    pub fn add_answer(&mut self, question: usize) -> Option<usize> {
        self.question(question)?;
        let answer = self.empty_answer();
        let draft = self.question_mut(question)?;
        draft.answers.push(answer);
        Some(draft.answers.len())
    }

    /// Remove an answer; later siblings move up one position
    pub fn delete_answer(&mut self, question: usize, answer: usize) -> bool {
        let Some(draft) = self.question_mut(question) else { return false };
        if answer == 0 || answer > draft.answers.len() {
            return false;
        }
        draft.answers.remove(answer - 1);
        true
    }

    /// Switch the input kind. A real switch discards the current value.
    pub fn set_answer_kind(&mut self, question: usize, answer: usize, kind: AnswerKind) -> bool {
        let Some(draft) = self.answer_mut(question, answer) else { return false };
        if draft.kind != kind {
            draft.kind = kind;
            draft.value.clear();
        }
        true
    }

    /// Flip correctness. Returns the new state.
    pub fn toggle_correct(&mut self, question: usize, answer: usize) -> Option<bool> {
        let draft = self.answer_mut(question, answer)?;
        draft.correct = !draft.correct;
        Some(draft.correct)
    }

    pub fn set_question_text(&mut self, question: usize, text: String) -> bool {
        match self.question_mut(question) {
            Some(draft) => {
                draft.text = text;
                true
            }
            None => false,
        }
    }

    /// Store typed content. Ignored for image pickers.
    pub fn set_answer_value(&mut self, question: usize, answer: usize, value: String) -> bool {
        match self.answer_mut(question, answer) {
            Some(draft) if draft.kind != AnswerKind::Image => {
                draft.value = value;
                true
            }
            _ => false,
        }
    }

    // ========================
    // Submission projection
    // ========================

    /// Flat fields in document order, as the browser will post them
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text("title", self.title.as_str()),
            FormField::text("password", self.password.as_str()),
            FormField::text("description", self.description.as_str()),
            FormField::text("question-order", self.question_order.as_str()),
            FormField::text("time-per-question", self.time_per_question.to_string()),
        ];
        for (qi, question) in self.questions.iter().enumerate() {
            let q = qi + 1;
            fields.push(FormField::text(question_field(q), question.text.as_str()));
            for (ai, answer) in question.answers.iter().enumerate() {
                let a = ai + 1;
                let value = match answer.kind {
                    AnswerKind::Image => FieldValue::File,
                    _ => FieldValue::Text(answer.value.clone()),
                };
                fields.push(FormField { name: answer_field(q, a), value });
                fields.push(FormField::text(correct_field(q, a), correct_label(answer.correct)));
            }
        }
        fields
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Components address drafts by render key; positions are resolved at the
// moment of the click. Unknown keys are ignored.

pub fn store_add_question(store: &FormStore, answers: usize) {
    let position = store.write().add_question(answers);
    log::debug!("added question {}", position);
}

pub fn store_delete_question(store: &FormStore, question_key: u32) {
    let mut state = store.write();
    let Some(position) = state.question_position(question_key) else {
        log::warn!("delete: no question with key {}", question_key);
        return;
    };
    if state.delete_question(position) {
        log::debug!("deleted question {}, {} remain", position, state.questions.len());
    }
}

pub fn store_add_answer(store: &FormStore, question_key: u32) {
    let mut state = store.write();
    let Some(position) = state.question_position(question_key) else {
        log::warn!("add answer: no question with key {}", question_key);
        return;
    };
    if let Some(answer) = state.add_answer(position) {
        log::debug!("added answer {}-{}", position, answer);
    }
}

pub fn store_delete_answer(store: &FormStore, question_key: u32, answer_key: u32) {
    let mut state = store.write();
    let Some((q, a)) = state.answer_position(question_key, answer_key) else {
        log::warn!("delete answer: no answer with key {}/{}", question_key, answer_key);
        return;
    };
    state.delete_answer(q, a);
    log::debug!("deleted answer {}-{}", q, a);
}

pub fn store_set_answer_kind(store: &FormStore, question_key: u32, answer_key: u32, kind: AnswerKind) {
    let mut state = store.write();
    let Some((q, a)) = state.answer_position(question_key, answer_key) else {
        log::warn!("set kind: no answer with key {}/{}", question_key, answer_key);
        return;
    };
    state.set_answer_kind(q, a, kind);
    log::debug!("answer {}-{} is now {}", q, a, kind.as_str());
}

pub fn store_toggle_correct(store: &FormStore, question_key: u32, answer_key: u32) {
    let mut state = store.write();
    let Some((q, a)) = state.answer_position(question_key, answer_key) else {
        log::warn!("toggle correct: no answer with key {}/{}", question_key, answer_key);
        return;
    };
    if let Some(correct) = state.toggle_correct(q, a) {
        log::debug!("answer {}-{} marked {}", q, a, correct_label(correct));
    }
}

pub fn store_set_question_text(store: &FormStore, question_key: u32, text: String) {
    let mut state = store.write();
    let Some(q) = state.question_position(question_key) else {
        log::warn!("set text: no question with key {}", question_key);
        return;
    };
    state.set_question_text(q, text);
}

pub fn store_set_answer_value(store: &FormStore, question_key: u32, answer_key: u32, value: String) {
    let mut state = store.write();
    let Some((q, a)) = state.answer_position(question_key, answer_key) else {
        log::warn!("set value: no answer with key {}/{}", question_key, answer_key);
        return;
    };
    state.set_answer_value(q, a, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerRecord, QuestionRecord};
    use crate::naming::FieldName;

    fn names(state: &FormState) -> Vec<String> {
        state.fields().into_iter().map(|f| f.name).collect()
    }

    fn question_names(state: &FormState) -> Vec<String> {
        names(state)
            .into_iter()
            .filter(|n| matches!(FieldName::parse(n), Some(FieldName::Question(_))))
            .collect()
    }

    fn answer_names(state: &FormState, question: usize) -> Vec<String> {
        names(state)
            .into_iter()
            .filter(|n| matches!(FieldName::parse(n), Some(FieldName::Answer(q, _)) if q == question))
            .collect()
    }

    /// Every positional name is present exactly once and nothing else exists
    fn assert_dense(state: &FormState) {
        let mut expected = Vec::new();
        for (qi, question) in state.questions.iter().enumerate() {
            expected.push(question_field(qi + 1));
            for ai in 0..question.answers.len() {
                expected.push(answer_field(qi + 1, ai + 1));
                expected.push(correct_field(qi + 1, ai + 1));
            }
        }
        let actual: Vec<String> =
            names(state).into_iter().filter(|n| FieldName::parse(n).is_some()).collect();
        assert_eq!(actual, expected);
    }

    fn answer(text: &str, is_correct: bool) -> AnswerRecord {
        AnswerRecord { text: text.to_string(), is_correct, ..Default::default() }
    }

    fn record_with(questions: Vec<QuestionRecord>) -> QuizRecord {
        QuizRecord { title: "Math".to_string(), questions, ..Default::default() }
    }

    #[test]
    fn test_new_form_has_one_question() {
        let state = FormState::new(4);
        assert_eq!(state.questions.len(), 1);
        assert_eq!(answer_names(&state, 1), vec!["answer-1-1", "answer-1-2", "answer-1-3", "answer-1-4"]);
        assert!(!state.can_delete_question());
        assert_dense(&state);
    }

    #[test]
    fn test_question_names_stay_dense() {
        let mut state = FormState::new(2);
        // add, add, delete first, add, delete middle, delete last
        state.add_question(2);
        state.add_question(2);
        assert!(state.delete_question(1));
        state.add_question(1);
        assert!(state.delete_question(2));
        assert!(state.delete_question(2));
        assert_eq!(question_names(&state), vec!["question-1"]);
        assert_dense(&state);

        for _ in 0..5 {
            state.add_question(0);
            assert_dense(&state);
        }
        assert_eq!(question_names(&state).len(), 6);
        assert_eq!(question_names(&state).last().unwrap(), "question-6");
    }

    #[test]
    fn test_last_question_cannot_be_deleted() {
        let mut state = FormState::new(1);
        assert!(!state.delete_question(1));
        assert_eq!(state.questions.len(), 1);
        state.add_question(1);
        assert!(state.can_delete_question());
        assert!(!state.delete_question(3));
        assert!(!state.delete_question(0));
        assert!(state.delete_question(2));
        assert!(!state.can_delete_question());
    }

    #[test]
    fn test_delete_middle_question_renumbers_nested_answers() {
        let mut state = FormState::new(0);
        state.add_question(0);
        state.add_question(0);
        for (q, text) in [(1, "one"), (2, "two"), (3, "three")] {
            state.set_question_text(q, text.to_string());
            state.add_answer(q);
            state.add_answer(q);
            state.set_answer_value(q, 1, format!("{}-a", text));
        }

        assert!(state.delete_question(2));

        assert_eq!(question_names(&state), vec!["question-1", "question-2"]);
        assert_eq!(state.question(2).unwrap().text, "three");
        assert_eq!(answer_names(&state, 2), vec!["answer-2-1", "answer-2-2"]);
        let fields = state.fields();
        let moved = fields.iter().find(|f| f.name == "answer-2-1").unwrap();
        assert_eq!(moved.value, FieldValue::Text("three-a".to_string()));
        assert!(!names(&state).iter().any(|n| n.contains("-3")));
        assert_dense(&state);
    }

    #[test]
    fn test_answer_names_stay_dense() {
        let mut state = FormState::new(0);
        for _ in 0..4 {
            state.add_answer(1);
        }
        state.set_answer_value(1, 3, "third".to_string());
        assert!(state.delete_answer(1, 2));
        assert_eq!(answer_names(&state, 1), vec!["answer-1-1", "answer-1-2", "answer-1-3"]);
        assert_eq!(state.answer(1, 2).unwrap().value, "third");
        assert!(state.delete_answer(1, 1));
        assert_eq!(state.add_answer(1), Some(3));
        assert_eq!(answer_names(&state, 1), vec!["answer-1-1", "answer-1-2", "answer-1-3"]);
        assert!(!state.delete_answer(1, 4));
        assert!(!state.delete_answer(1, 0));
        assert!(!state.delete_answer(2, 1));
        assert_dense(&state);
    }

    #[test]
    fn test_new_answer_defaults() {
        let mut state = FormState::new(0);
        assert_eq!(state.add_answer(1), Some(1));
        let answer = state.answer(1, 1).unwrap();
        assert_eq!(answer.kind, AnswerKind::Text);
        assert!(!answer.correct);
        let fields = state.fields();
        let hidden = fields.iter().find(|f| f.name == "correct-answer-1-1").unwrap();
        assert_eq!(hidden.value, FieldValue::Text(INCORRECT.to_string()));
        assert_eq!(state.add_answer(9), None);
    }

    #[test]
    fn test_toggle_correct_is_involutive_and_mirrored() {
        let mut state = FormState::new(2);
        let hidden = |state: &FormState| {
            state.fields().into_iter().find(|f| f.name == "correct-answer-1-2").unwrap().value
        };

        assert_eq!(state.toggle_correct(1, 2), Some(true));
        assert_eq!(hidden(&state), FieldValue::Text(CORRECT.to_string()));
        assert_eq!(correct_label(state.answer(1, 2).unwrap().correct), CORRECT);

        assert_eq!(state.toggle_correct(1, 2), Some(false));
        assert_eq!(hidden(&state), FieldValue::Text(INCORRECT.to_string()));
        assert!(!state.answer(1, 1).unwrap().correct);
        assert_eq!(state.toggle_correct(1, 3), None);
    }

    #[test]
    fn test_set_answer_kind_keeps_name_and_discards_value() {
        let mut state = FormState::new(1);
        state.set_answer_value(1, 1, "x^2".to_string());
        let key = state.answer(1, 1).unwrap().key;

        assert!(state.set_answer_kind(1, 1, AnswerKind::Latex));
        assert_eq!(state.answer(1, 1).unwrap().value, "");
        assert_eq!(state.answer(1, 1).unwrap().key, key);
        assert_eq!(answer_names(&state, 1), vec!["answer-1-1"]);

        assert!(state.set_answer_kind(1, 1, AnswerKind::Text));
        assert_eq!(state.answer(1, 1).unwrap().value, "");

        state.set_answer_value(1, 1, "kept".to_string());
        assert!(state.set_answer_kind(1, 1, AnswerKind::Text));
        assert_eq!(state.answer(1, 1).unwrap().value, "kept");

        assert!(state.set_answer_kind(1, 1, AnswerKind::Image));
        assert!(!state.set_answer_value(1, 1, "ignored".to_string()));
        let field = state.fields().into_iter().find(|f| f.name == "answer-1-1").unwrap();
        assert_eq!(field.value, FieldValue::File);
        assert!(!state.set_answer_kind(1, 2, AnswerKind::Text));
    }

    #[test]
    fn test_hydrate_two_by_two() {
        let record = record_with(vec![
            QuestionRecord { text: "2 + 2".to_string(), answers: vec![answer("4", true), answer("5", false)] },
            QuestionRecord { text: "3 * 3".to_string(), answers: vec![answer("6", false), answer("9", true)] },
        ]);
        let state = FormState::from_record(&record, 4);

        assert_eq!(state.title, "Math");
        assert_eq!(state.questions.len(), 2);
        let fields = state.fields();
        let answers: Vec<&str> = fields
            .iter()
            .filter(|f| matches!(FieldName::parse(&f.name), Some(FieldName::Answer(..))))
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(answers, vec!["answer-1-1", "answer-1-2", "answer-2-1", "answer-2-2"]);

        let correct: Vec<&str> = fields
            .iter()
            .filter(|f| f.value == FieldValue::Text(CORRECT.to_string()))
            .filter(|f| matches!(FieldName::parse(&f.name), Some(FieldName::CorrectAnswer(..))))
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(correct, vec!["correct-answer-1-1", "correct-answer-2-2"]);
        assert_dense(&state);
    }

    #[test]
    fn test_hydrate_selects_answer_kind() {
        let record = record_with(vec![QuestionRecord {
            text: "Pick".to_string(),
            answers: vec![
                answer("plain", false),
                AnswerRecord { latex: "\\sqrt{2}".to_string(), ..Default::default() },
                AnswerRecord { image_name: "cat.png".to_string(), text: "ignored".to_string(), ..Default::default() },
            ],
        }]);
        let state = FormState::from_record(&record, 4);
        let kinds: Vec<AnswerKind> = state.questions[0].answers.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnswerKind::Text, AnswerKind::Latex, AnswerKind::Image]);
        assert_eq!(state.answer(1, 2).unwrap().value, "\\sqrt{2}");
        assert_eq!(state.answer(1, 3).unwrap().value, "");
    }

    #[test]
    fn test_hydrate_empty_record_starts_with_one_question() {
        let state = FormState::from_record(&QuizRecord::default(), 2);
        assert_eq!(state.questions.len(), 1);
        assert_eq!(state.questions[0].answers.len(), 2);
        assert_eq!(state.time_per_question, DEFAULT_TIME_PER_QUESTION);
        assert_eq!(state.question_order, QuestionOrder::Fixed);
    }

    #[test]
    fn test_render_keys_are_unique() {
        let mut state = FormState::new(3);
        state.add_question(3);
        state.delete_question(1);
        state.add_question(3);
        let mut keys: Vec<u32> = state
            .questions
            .iter()
            .flat_map(|q| std::iter::once(q.key).chain(q.answers.iter().map(|a| a.key)))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_positions_by_key() {
        let mut state = FormState::new(2);
        state.add_question(2);
        let second = state.questions[1].key;
        let answer_key = state.questions[1].answers[1].key;
        assert_eq!(state.question_position(second), Some(2));
        assert_eq!(state.answer_position(second, answer_key), Some((2, 2)));
        state.delete_question(1);
        assert_eq!(state.question_position(second), Some(1));
        assert_eq!(state.answer_position(second, answer_key), Some((1, 2)));
        assert_eq!(state.question_position(9999), None);
    }

    #[test]
    fn test_every_question_delete_position_stays_dense() {
        for size in 1..=4 {
            for target in 1..=size {
                let mut state = FormState::new(2);
                for _ in 1..size {
                    state.add_question(2);
                }
                assert_dense(&state);
                let deleted = state.delete_question(target);
                assert_eq!(deleted, size > 1, "size {} target {}", size, target);
                assert_dense(&state);
                assert_eq!(question_names(&state).len(), if deleted { size - 1 } else { size });
                state.add_question(1);
                assert_dense(&state);
            }
        }
    }

    #[test]
    fn test_every_answer_delete_position_stays_dense() {
        for size in 1..=4 {
            for target in 1..=size {
                let mut state = FormState::new(size);
                state.add_question(size);
                assert!(state.delete_answer(2, target));
                assert_dense(&state);
                let expected: Vec<String> = (1..size).map(|a| answer_field(2, a)).collect();
                assert_eq!(answer_names(&state, 2), expected);
                assert_eq!(answer_names(&state, 1).len(), size);
                state.add_answer(2);
                assert_dense(&state);
            }
        }
    }

    #[test]
    fn test_store_helpers_ignore_unknown_keys() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(FormState::new(2));
        let before = FormState::clone(&store.read());

        store_delete_question(&store, 999);
        store_add_answer(&store, 999);
        store_delete_answer(&store, 999, 1);
        store_set_answer_kind(&store, 999, 1, AnswerKind::Latex);
        store_toggle_correct(&store, 999, 1);
        store_set_question_text(&store, 999, "x".to_string());
        store_set_answer_value(&store, 999, 1, "x".to_string());
        assert_eq!(store.read().fields(), before.fields());

        let question_key = before.questions[0].key;
        let answer_key = before.questions[0].answers[1].key;
        store_toggle_correct(&store, question_key, answer_key);
        store_delete_answer(&store, question_key, before.questions[0].answers[0].key);
        let state = store.read();
        assert_eq!(answer_names(&state, 1), vec!["answer-1-1"]);
        assert!(state.answer(1, 1).unwrap().correct);
    }

    #[test]
    fn test_meta_fields_lead_the_form() {
        let mut state = FormState::new(0);
        state.question_order = QuestionOrder::Random;
        let fields = state.fields();
        let meta: Vec<&str> = fields.iter().take(5).map(|f| f.name.as_str()).collect();
        assert_eq!(meta, vec!["title", "password", "description", "question-order", "time-per-question"]);
        assert_eq!(fields[3].value, FieldValue::Text("random".to_string()));
        assert_eq!(fields[4].value, FieldValue::Text("30".to_string()));
    }
}

//! Field Naming Utilities
//!
//! Positional form field names shared with the server-side form parser.
//! All positions are 1-based.

use std::fmt;

/// Name of the question prompt field at `question`
pub fn question_field(question: usize) -> String {
    format!("question-{}", question)
}

/// Name of the content field of answer `answer` under `question`
pub fn answer_field(question: usize, answer: usize) -> String {
    format!("answer-{}-{}", question, answer)
}

/// Name of the hidden correctness field paired with an answer
pub fn correct_field(question: usize, answer: usize) -> String {
    format!("correct-answer-{}-{}", question, answer)
}

/// A parsed positional field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Question(usize),
    Answer(usize, usize),
    CorrectAnswer(usize, usize),
}

impl FieldName {
    /// Parse a flat field name. Returns None for meta fields and anything
    /// that is not a positional name with 1-based indices.
    pub fn parse(name: &str) -> Option<Self> {
        // "correct-answer-" must be tried before "answer-"
        if let Some(rest) = name.strip_prefix("correct-answer-") {
            let (q, a) = parse_pair(rest)?;
            return Some(FieldName::CorrectAnswer(q, a));
        }
        if let Some(rest) = name.strip_prefix("answer-") {
            let (q, a) = parse_pair(rest)?;
            return Some(FieldName::Answer(q, a));
        }
        if let Some(rest) = name.strip_prefix("question-") {
            return parse_index(rest).map(FieldName::Question);
        }
        None
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FieldName::Question(q) => f.write_str(&question_field(q)),
            FieldName::Answer(q, a) => f.write_str(&answer_field(q, a)),
            FieldName::CorrectAnswer(q, a) => f.write_str(&correct_field(q, a)),
        }
    }
}

fn parse_pair(s: &str) -> Option<(usize, usize)> {
    let (q, a) = s.split_once('-')?;
    Some((parse_index(q)?, parse_index(a)?))
}

fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok().filter(|n| *n > 0)
}

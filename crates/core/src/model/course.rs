use serde::{Deserialize, Serialize};

/// One expandable entry in the "Learn" list: a question headline plus the
/// explanation shown when the entry is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
    /// Optional verbatim code sample rendered beneath the answer.
    #[serde(default)]
    pub code: Option<String>,
    /// Optional illustration URL rendered above the answer.
    #[serde(default)]
    pub illustration: Option<String>,
}

/// One true/false statement in the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub statement: String,
    pub correct_answer: bool,
}

/// The content bundle one widget instance teaches from. Loaded once at
/// startup and read-only for the lifetime of the session; entry order is
/// the display order and gives every entry its stable index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub tagline: String,
    pub qa_entries: Vec<QaEntry>,
    pub quiz: Vec<QuizQuestion>,
}

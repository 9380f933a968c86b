use primer_core::model::{QuizQuestion, Session};
use primer_core::scoring::Scorecard;

/// Render-ready row for one true/false quiz question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRowVm {
    pub index: usize,
    pub statement: String,
    pub choice: Option<bool>,
}

#[must_use]
pub fn map_quiz_rows(questions: &[QuizQuestion], session: &Session) -> Vec<QuizRowVm> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuizRowVm {
            index,
            statement: question.statement.clone(),
            choice: session.answer(index),
        })
        .collect()
}

/// Render-ready score line. `percent` keeps the exact value; `label`
/// rounds to a whole percent for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreVm {
    pub percent: f64,
    pub label: String,
}

#[must_use]
pub fn map_score(card: Scorecard) -> ScoreVm {
    let percent = card.percent();
    ScoreVm {
        percent,
        label: format!("Your Score: {percent:.0}%"),
    }
}

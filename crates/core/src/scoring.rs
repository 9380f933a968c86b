use crate::model::{QuizQuestion, Session};

/// Aggregate quiz result: how many recorded choices matched the answer
/// key, out of how many questions the course asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scorecard {
    correct: u32,
    total: u32,
}

impl Scorecard {
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Score as a percentage in `[0.0, 100.0]`, computed with plain
    /// floating-point division and no rounding. An empty question list
    /// scores `0.0`, never `NaN`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.correct) / f64::from(self.total)
    }
}

/// Grades a session against the full question list.
///
/// The denominator is always the total question count: an unanswered
/// question counts as incorrect, never as excluded. Pure function of the
/// current choices, so callers recompute it whenever they need it instead
/// of caching a result.
#[must_use]
pub fn grade(questions: &[QuizQuestion], session: &Session) -> Scorecard {
    let mut correct = 0_u32;
    let mut total = 0_u32;

    for (index, question) in questions.iter().enumerate() {
        total = total.saturating_add(1);
        if session.answer(index) == Some(question.correct_answer) {
            correct = correct.saturating_add(1);
        }
    }

    Scorecard { correct, total }
}

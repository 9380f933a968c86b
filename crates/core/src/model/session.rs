use std::collections::BTreeMap;

use crate::model::Course;

// ─── EVENTS ────────────────────────────────────────────────────────────────────

/// A discrete interaction event, produced by the rendering surface from a
/// user gesture and consumed by [`Session::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Expand the Q&A item at this index, or collapse it if already open.
    ToggleItem(usize),
    /// Record a true/false choice for the quiz question at this index.
    SelectAnswer { index: usize, value: bool },
    /// Reveal the quiz score.
    RevealResults,
}

// ─── SESSION STATE ─────────────────────────────────────────────────────────────

/// In-progress interaction state for one mounted widget instance.
///
/// Every transition is by value: it consumes the current snapshot and
/// returns the next one, so a caller holds exactly one authoritative
/// snapshot at a time and swaps it wholesale. Indices outside the counts
/// fixed at construction are rejected silently; no sequence of events can
/// put a snapshot into an invalid state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    expanded: Option<usize>,
    answers: BTreeMap<usize, bool>,
    results_revealed: bool,
    qa_count: usize,
    quiz_count: usize,
}

impl Session {
    /// Fresh session: nothing expanded, nothing answered, score hidden.
    #[must_use]
    pub fn new(qa_count: usize, quiz_count: usize) -> Self {
        Self {
            expanded: None,
            answers: BTreeMap::new(),
            results_revealed: false,
            qa_count,
            quiz_count,
        }
    }

    /// Fresh session sized to the given course.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        Self::new(course.qa_entries.len(), course.quiz.len())
    }

    /// Routes an event to its transition.
    #[must_use]
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::ToggleItem(index) => self.toggle(index),
            SessionEvent::SelectAnswer { index, value } => self.select_answer(index, value),
            SessionEvent::RevealResults => self.reveal_results(),
        }
    }

    /// Expands the Q&A item at `index`; toggling the open item collapses
    /// it. Disclosure is exclusive, so opening one item closes whichever
    /// was open before in the same transition.
    ///
    /// An out-of-range index leaves the snapshot untouched.
    #[must_use]
    pub fn toggle(mut self, index: usize) -> Self {
        if index >= self.qa_count {
            return self;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        self
    }

    /// Records `value` for quiz question `index`, overwriting any earlier
    /// choice. Choices for other questions are never affected, and no
    /// transition removes a recorded choice.
    ///
    /// An out-of-range index leaves the snapshot untouched.
    #[must_use]
    pub fn select_answer(mut self, index: usize, value: bool) -> Self {
        if index >= self.quiz_count {
            return self;
        }
        self.answers.insert(index, value);
        self
    }

    /// Marks results as revealed. Idempotent, and one-way for the life of
    /// the session; choices may still change afterwards.
    #[must_use]
    pub fn reveal_results(mut self) -> Self {
        self.results_revealed = true;
        self
    }

    /// Index of the currently open Q&A item, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// The recorded choice for quiz question `index`, if any.
    #[must_use]
    pub fn answer(&self, index: usize) -> Option<bool> {
        self.answers.get(&index).copied()
    }

    /// How many quiz questions have a recorded choice.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────

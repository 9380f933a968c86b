use dioxus::prelude::*;

use primer_core::model::SessionEvent;

use crate::vm::{QuizRowVm, ScoreVm};

/// The "Test Your Knowledge" half: true/false rows, the reveal button and
/// the score line once results are revealed.
#[component]
pub(crate) fn QuizSection(
    rows: Vec<QuizRowVm>,
    score: Option<ScoreVm>,
    on_event: EventHandler<SessionEvent>,
) -> Element {
    let question_rows = rows.iter().cloned().map(|row| {
        rsx! {
            QuizRow { row, on_event }
        }
    });

    rsx! {
        section { class: "quiz-section",
            h2 { class: "section-title", "Test Your Knowledge" }
            div { class: "quiz-list", {question_rows} }
            div { class: "quiz-actions",
                button {
                    class: "quiz-reveal",
                    r#type: "button",
                    onclick: move |_| on_event.call(SessionEvent::RevealResults),
                    "Check Results"
                }
                if let Some(score) = score.as_ref() {
                    p { class: "quiz-score", "{score.label}" }
                }
            }
        }
    }
}

#[component]
fn QuizRow(row: QuizRowVm, on_event: EventHandler<SessionEvent>) -> Element {
    rsx! {
        div { class: "quiz-row",
            p { class: "quiz-row__statement", "{row.statement}" }
            div { class: "quiz-row__choices",
                ChoiceButton { index: row.index, value: true, choice: row.choice, on_event }
                ChoiceButton { index: row.index, value: false, choice: row.choice, on_event }
            }
        }
    }
}

#[component]
fn ChoiceButton(
    index: usize,
    value: bool,
    choice: Option<bool>,
    on_event: EventHandler<SessionEvent>,
) -> Element {
    let selected = choice == Some(value);
    let label = if value { "True" } else { "False" };
    let class = if selected {
        "quiz-choice quiz-choice--selected"
    } else {
        "quiz-choice"
    };
    let pressed_attr = if selected { "true" } else { "false" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{pressed_attr}",
            onclick: move |_| on_event.call(SessionEvent::SelectAnswer { index, value }),
            "{label}"
        }
    }
}

use primer_core::model::SessionEvent;

use super::test_harness::{fixture_course, setup_lesson_harness};

fn expanded_count(html: &str) -> usize {
    html.matches(r#"aria-expanded="true""#).count()
}

fn pressed_count(html: &str) -> usize {
    html.matches(r#"aria-pressed="true""#).count()
}

#[test]
fn lesson_renders_collapsed_sections_and_no_score() {
    let harness = setup_lesson_harness(fixture_course());
    let html = harness.render();

    assert!(html.contains("Fixture Course"), "missing hero title in {html}");
    assert!(html.contains("Learn"), "missing Learn header in {html}");
    assert!(
        html.contains("Test Your Knowledge"),
        "missing quiz header in {html}"
    );
    assert!(html.contains("Fixture question 0?"));
    assert!(html.contains("Fixture statement 4."));
    assert_eq!(expanded_count(&html), 0);
    assert!(!html.contains("Fixture answer body 0."));
    assert!(!html.contains("Your Score:"));
}

#[test]
fn toggle_expands_and_a_second_toggle_collapses() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::ToggleItem(0));
    let html = harness.render();
    assert_eq!(expanded_count(&html), 1);
    assert!(html.contains("Fixture answer body 0."), "missing body in {html}");

    harness.dispatch(SessionEvent::ToggleItem(0));
    let html = harness.render();
    assert_eq!(expanded_count(&html), 0);
    assert!(!html.contains("Fixture answer body 0."));
}

#[test]
fn toggling_another_item_swaps_the_open_panel() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::ToggleItem(0));
    harness.dispatch(SessionEvent::ToggleItem(2));
    let html = harness.render();
    assert_eq!(expanded_count(&html), 1);
    assert!(html.contains("Fixture answer body 2."));
    assert!(!html.contains("Fixture answer body 0."));
    assert!(html.contains("mov rax, 2"), "missing code sample in {html}");
}

#[test]
fn expanded_item_shows_its_illustration() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::ToggleItem(0));
    let html = harness.render();
    assert!(
        html.contains("https://example.com/stack.png"),
        "missing illustration in {html}"
    );
}

#[test]
fn selecting_an_answer_marks_exactly_one_choice_pressed() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::SelectAnswer {
        index: 1,
        value: true,
    });
    let html = harness.render();
    assert_eq!(pressed_count(&html), 1);
    assert!(html.contains(r#"aria-pressed="true">True"#), "missing pressed True in {html}");

    harness.dispatch(SessionEvent::SelectAnswer {
        index: 1,
        value: false,
    });
    let html = harness.render();
    assert_eq!(pressed_count(&html), 1);
    assert!(html.contains(r#"aria-pressed="true">False"#), "missing pressed False in {html}");
}

#[test]
fn answers_on_different_questions_stay_independent() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::SelectAnswer {
        index: 0,
        value: true,
    });
    harness.dispatch(SessionEvent::SelectAnswer {
        index: 3,
        value: false,
    });
    let html = harness.render();
    assert_eq!(pressed_count(&html), 2);
}

#[test]
fn reveal_scores_fixture_answers_at_sixty_percent() {
    let mut harness = setup_lesson_harness(fixture_course());

    for (index, value) in [true, true, true, false, false].into_iter().enumerate() {
        harness.dispatch(SessionEvent::SelectAnswer { index, value });
    }
    harness.dispatch(SessionEvent::RevealResults);
    let html = harness.render();
    assert!(html.contains("Your Score: 60%"), "missing score in {html}");
}

#[test]
fn reveal_with_no_answers_scores_zero() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::RevealResults);
    let html = harness.render();
    assert!(html.contains("Your Score: 0%"), "missing score in {html}");
}

#[test]
fn score_tracks_answer_changes_after_reveal() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::RevealResults);
    assert!(harness.render().contains("Your Score: 0%"));

    harness.dispatch(SessionEvent::SelectAnswer {
        index: 0,
        value: true,
    });
    let html = harness.render();
    assert!(html.contains("Your Score: 20%"), "score did not recompute in {html}");
}

#[test]
fn session_handle_reflects_dispatched_events() {
    let mut harness = setup_lesson_harness(fixture_course());

    harness.dispatch(SessionEvent::ToggleItem(1));
    harness.dispatch(SessionEvent::SelectAnswer {
        index: 0,
        value: false,
    });

    let session = harness.handles.session();
    let snapshot = session();
    assert_eq!(snapshot.expanded(), Some(1));
    assert_eq!(snapshot.answer(0), Some(false));
    assert!(!snapshot.results_revealed());
}

#[test]
fn embedded_course_renders_end_to_end() {
    let course = content::embedded_course().expect("embedded course parses");
    let mut harness = setup_lesson_harness(course);

    let html = harness.render();
    assert!(html.contains("Understanding Calling Conventions"));
    assert!(html.contains("What does calling conventions entail?"));

    harness.dispatch(SessionEvent::ToggleItem(7));
    let html = harness.render();
    assert!(html.contains("add_numbers"), "missing code sample in {html}");
}

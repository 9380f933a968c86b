use dioxus::prelude::*;

use primer_core::model::{Session, SessionEvent};
use primer_core::scoring::grade;

use crate::context::AppContext;
use crate::views::qa::QaSection;
use crate::views::quiz::QuizSection;
use crate::vm::{map_qa_items, map_quiz_rows, map_score};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();

    let course_for_session = course.clone();
    let session = use_signal(move || Session::for_course(&course_for_session));

    // Single funnel for every interaction: swap the session snapshot for
    // the one the event produces and let the render below derive the rest.
    let dispatch = use_callback(move |event: SessionEvent| {
        let mut session = session;
        let next = session().apply(event);
        session.set(next);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let session_now = session.read();
    let qa_items = map_qa_items(&course.qa_entries, session_now.expanded());
    let quiz_rows = map_quiz_rows(&course.quiz, &session_now);
    // Recomputed on every render; the score is never cached anywhere.
    let score = session_now
        .results_revealed()
        .then(|| map_score(grade(&course.quiz, &session_now)));

    rsx! {
        div { class: "page lesson-page",
            header { class: "lesson-hero",
                span { class: "lesson-hero__badge", aria_hidden: "true", "⚙" }
                h1 { class: "lesson-hero__title", "{course.title}" }
                p { class: "lesson-hero__tagline", "{course.tagline}" }
            }
            QaSection { items: qa_items, on_event: dispatch }
            QuizSection { rows: quiz_rows, score, on_event: dispatch }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SessionEvent>>>>,
    session: Rc<RefCell<Option<Signal<Session>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<SessionEvent>, session: Signal<Session>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<SessionEvent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<Session> {
        (*self.session.borrow()).expect("lesson session registered")
    }
}

use dioxus::prelude::*;

use crate::views::LessonView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. The course title renders in the page hero.
        document::Title { "Calling Conventions Primer" }

        // One root container that the page layout CSS hangs off.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                LessonView {}
            }
        }
    }
}

use dioxus::prelude::*;

use primer_core::model::SessionEvent;

use crate::vm::QaItemVm;

/// The "Learn" half of the page: an exclusive accordion of Q&A entries.
#[component]
pub(crate) fn QaSection(items: Vec<QaItemVm>, on_event: EventHandler<SessionEvent>) -> Element {
    let rows = items.iter().cloned().map(|item| {
        rsx! {
            QaItem { item, on_event }
        }
    });

    rsx! {
        section { class: "qa-section",
            h2 { class: "section-title", "Learn" }
            div { class: "qa-list", {rows} }
        }
    }
}

#[component]
fn QaItem(item: QaItemVm, on_event: EventHandler<SessionEvent>) -> Element {
    let index = item.index;
    let expanded_attr = if item.expanded { "true" } else { "false" };
    let chevron = if item.expanded {
        "qa-item__chevron qa-item__chevron--open"
    } else {
        "qa-item__chevron"
    };

    rsx! {
        div { class: "qa-item",
            button {
                class: "qa-item__header",
                r#type: "button",
                aria_expanded: "{expanded_attr}",
                onclick: move |_| on_event.call(SessionEvent::ToggleItem(index)),
                span { class: "qa-item__question", "{item.question}" }
                span { class: "{chevron}", aria_hidden: "true", "▾" }
            }
            if item.expanded {
                div { class: "qa-item__body",
                    if let Some(illustration) = item.illustration.as_ref() {
                        img {
                            class: "qa-item__illustration",
                            src: "{illustration}",
                            alt: "Concept visualization",
                        }
                    }
                    p { class: "qa-item__answer", "{item.answer}" }
                    if let Some(code) = item.code.as_ref() {
                        pre { class: "qa-item__code",
                            code { "{code}" }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

const PLACEHOLDER_ROWS: usize = 6;

/// Grey placeholder cards shown while the notes list is loading.
#[component]
pub fn NoteSkeleton() -> Element {
    rsx! {
        div {
            class: "note-list",
            "aria-busy": "true",
            for i in 0..PLACEHOLDER_ROWS {
                div {
                    key: "{i}",
                    class: "note-card note-card--skeleton",
                    div { class: "skeleton-line skeleton-line--title" }
                    div { class: "skeleton-line" }
                    div { class: "skeleton-line skeleton-line--short" }
                }
            }
        }
    }
}

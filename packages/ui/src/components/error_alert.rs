use dioxus::prelude::*;

/// Inline error banner shown above a form or in place of the notes list.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "error-alert",
            role: "alert",
            span { class: "error-alert-icon", "!" }
            span { class: "error-alert-message", "{message}" }
        }
    }
}

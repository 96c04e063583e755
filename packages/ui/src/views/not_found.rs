use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "page page--centered",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Nothing lives at {path}" }
            button {
                class: "primary",
                onclick: move |_| on_home.call(()),
                "Back to Home"
            }
        }
    }
}

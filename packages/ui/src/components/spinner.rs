use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        span {
            class: "spinner {class}",
            role: "progressbar",
            "aria-label": "Loading",
        }
    }
}

use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    let navigate_home = move |_: ()| {
        nav.push(Route::Login {});
    };

    rsx! {
        ui::views::NotFoundView {
            path: format!("/{}", segments.join("/")),
            on_home: navigate_home,
        }
    }
}

use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();

    let navigate_login = move |_: ()| {
        nav.push(Route::Login {});
    };

    let navigate_notes = move |_: ()| {
        nav.replace(Route::Notes {});
    };

    rsx! {
        ui::views::SignupView {
            on_signed_up: navigate_login,
            on_authenticated: navigate_notes,
            on_navigate_login: navigate_login,
        }
    }
}

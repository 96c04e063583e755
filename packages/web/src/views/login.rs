use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    let navigate_notes = move |_: ()| {
        nav.replace(Route::Notes {});
    };

    let navigate_signup = move |_: ()| {
        nav.push(Route::Signup {});
    };

    rsx! {
        ui::views::LoginView {
            on_authenticated: navigate_notes,
            on_navigate_signup: navigate_signup,
        }
    }
}

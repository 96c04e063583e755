use dioxus::prelude::*;
use crate::Route;

/// Layout for every route that needs a session token.
#[component]
pub fn Protected() -> Element {
    let nav = use_navigator();

    let redirect_login = move |_: ()| {
        nav.replace(Route::Login {});
    };

    rsx! {
        ui::views::ProtectedLayoutView {
            on_redirect_login: redirect_login,
            Outlet::<Route> {}
        }
    }
}

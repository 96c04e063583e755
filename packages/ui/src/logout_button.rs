use dioxus::prelude::*;

use crate::components::{use_toast, ToastOptions};
use crate::icons::FaRightFromBracket;
use crate::{use_session, Icon};

/// Floating button on every protected view. Clears the token, then hands
/// navigation to the platform.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Log out".to_string())] label: String,
) -> Element {
    let session = use_session();
    let toast_api = use_toast();

    let onclick = move |_| match session.logout() {
        Ok(()) => on_logged_out.call(()),
        Err(e) => {
            tracing::error!("Logout failed: {}", e);
            toast_api.error(e.to_string(), ToastOptions::new());
        }
    };

    rsx! {
        button {
            class: "logout-button",
            title: "Log out",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

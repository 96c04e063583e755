use dioxus::prelude::*;
use store::Access;

use crate::{use_session, LogoutButton};

/// Wraps every view that needs a token.
///
/// Without a token nothing below renders and `on_redirect_login` fires; the
/// platform replaces the current history entry with its login route.
#[component]
pub fn ProtectedLayoutView(on_redirect_login: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    if session.protected_access() != Access::Allow {
        tracing::debug!("No session token, redirecting to login");
        on_redirect_login.call(());
        return rsx! {};
    }

    rsx! {
        {children}
        LogoutButton { on_logged_out: on_redirect_login }
    }
}

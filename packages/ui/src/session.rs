//! Session context: the token slot shared by every view.
//!
//! Views never touch storage directly. They read the token through
//! [`SessionHandle`], and the auth flows write it through [`make_session`].
//! After a flow writes, [`SessionHandle::reload`] pulls the new value into the
//! signal so guards re-render.

use api::{ApiClient, ApiError, Notebook};
use dioxus::prelude::*;
use store::guard::{self, Access};
use store::Session;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Durable token session for the current platform: `localStorage` in the
/// browser, a file under the data directory on native.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_session() -> Session<PlatformStore> {
    Session::new(store::LocalStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_session() -> Session<PlatformStore> {
    Session::new(store::FileStore::default_location())
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_session() -> Session<PlatformStore> {
    use std::sync::OnceLock;

    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    Session::new(STORE.get_or_init(store::MemoryStore::new).clone())
}

/// Snapshot of the token slot as the UI last saw it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    fn load() -> Self {
        Self {
            token: make_session().token(),
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    state: Signal<SessionState>,
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Guard decision for views that need a token. Subscribes the caller, so
    /// a layout re-renders (and redirects) as soon as the token goes away.
    pub fn protected_access(&self) -> Access {
        guard::protected(self.state.read().token.as_deref())
    }

    /// Guard decision for login and signup.
    pub fn public_access(&self) -> Access {
        guard::public(self.state.read().token.as_deref())
    }

    /// Re-read the durable slot into the signal.
    pub fn reload(&self) {
        let mut state = self.state;
        state.set(SessionState::load());
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        api::auth::logout(&make_session())?;
        self.reload();
        Ok(())
    }

    /// Notes service bound to the current token. Reads without subscribing.
    pub fn notebook(&self, client: Signal<ApiClient>) -> Notebook {
        let token = self.state.peek().token.clone();
        Notebook::new(client.peek().clone(), token)
    }
}

pub fn use_session() -> SessionHandle {
    SessionHandle {
        state: use_context::<Signal<SessionState>>(),
    }
}

/// Loads the stored token once and shares it with everything below.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::load);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

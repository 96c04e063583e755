//! Shared UI for the web and desktop apps.
//!
//! Views here never know the route table: each takes navigation callbacks,
//! and the platform crates map those onto their own `Route` enum.

use dioxus::prelude::*;

pub mod components;
pub mod views;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, use_api, ApiProvider};

mod session;
pub use session::{make_session, use_session, PlatformStore, SessionHandle, SessionProvider, SessionState};

mod logout_button;
pub use logout_button::LogoutButton;

pub const NOTES_CSS: Asset = asset!("/assets/notes.css");

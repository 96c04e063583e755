//! Transient notifications, provided by `dioxus_primitives::toast`.
//!
//! Wrap the app in [`ToastProvider`]; anything below it calls [`use_toast`]
//! and pushes `success` / `error` messages with [`ToastOptions`].

use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            {children}
        }
    }
}

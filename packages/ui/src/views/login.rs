use api::{LoginForm, Submission};
use dioxus::prelude::*;
use store::Access;

use crate::components::ErrorAlert;
use crate::{make_session, use_api, use_session};

/// Email and password login.
///
/// Visiting while a token is present skips the form: `on_authenticated` fires
/// before anything renders. It fires again after a successful login.
#[component]
pub fn LoginView(
    on_authenticated: EventHandler<()>,
    on_navigate_signup: EventHandler<()>,
) -> Element {
    let session = use_session();
    let api_client = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::default);

    if session.public_access() != Access::Allow {
        on_authenticated.call(());
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !submission.write().try_begin() {
            return;
        }
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        spawn(async move {
            error.set(None);
            let client = api_client.peek().clone();
            match api::auth::login(&client, &make_session(), &form).await {
                Ok(()) => {
                    submission.write().finish();
                    session.reload();
                    on_authenticated.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.to_string()));
                    submission.write().finish();
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page--centered",
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                h1 { "Log in" }

                if let Some(message) = error() {
                    ErrorAlert { message }
                }

                div {
                    class: "form-field",
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submission().in_flight(),
                    if submission().in_flight() { "Logging in..." } else { "Log in" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_signup.call(());
                        },
                        "Sign up"
                    }
                }
            }
        }
    }
}

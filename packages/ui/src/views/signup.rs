use api::{SignupForm, Submission};
use dioxus::prelude::*;
use store::Access;

use crate::components::{use_toast, ErrorAlert, ToastOptions};
use crate::{use_api, use_session};

/// Account creation. Does not log in: on success the server's message is shown
/// as a toast and `on_signed_up` sends the user to the login view.
#[component]
pub fn SignupView(
    on_signed_up: EventHandler<()>,
    on_authenticated: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let session = use_session();
    let api_client = use_api();
    let toast_api = use_toast();
    let mut form = use_signal(SignupForm::default);
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
        let submitted = form();
        spawn(async move {
            error.set(None);
            let client = api_client.peek().clone();
            match api::auth::signup(&client, &submitted).await {
                Ok(message) => {
                    submission.write().finish();
                    toast_api.success(message, ToastOptions::new());
                    on_signed_up.call(());
                }
                Err(e) => {
                    tracing::warn!("Signup failed: {}", e);
                    let message = e.to_string();
                    toast_api.error(message.clone(), ToastOptions::new());
                    error.set(Some(message));
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
                h1 { "Create an account" }

                if let Some(message) = error() {
                    ErrorAlert { message }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "signup-first-name", "First name" }
                        input {
                            id: "signup-first-name",
                            autocomplete: "given-name",
                            required: true,
                            value: form.read().first_name.clone(),
                            oninput: move |evt| form.write().first_name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "signup-last-name", "Last name" }
                        input {
                            id: "signup-last-name",
                            autocomplete: "family-name",
                            required: true,
                            value: form.read().last_name.clone(),
                            oninput: move |evt| form.write().last_name = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "signup-age", "Age" }
                    input {
                        id: "signup-age",
                        r#type: "number",
                        min: "1",
                        max: "150",
                        required: true,
                        value: form.read().age.clone(),
                        oninput: move |evt| form.write().age = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "signup-email", "Email" }
                    input {
                        id: "signup-email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: form.read().email.clone(),
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "signup-password", "Password" }
                    input {
                        id: "signup-password",
                        r#type: "password",
                        autocomplete: "new-password",
                        required: true,
                        value: form.read().password.clone(),
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submission().in_flight(),
                    if submission().in_flight() { "Creating account..." } else { "Sign up" }
                }

                p {
                    class: "auth-switch",
                    "Already registered? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate_login.call(());
                        },
                        "Log in"
                    }
                }
            }
        }
    }
}

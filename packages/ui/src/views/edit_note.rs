use api::{NoteForm, NoteId, Submission};
use dioxus::prelude::*;

use crate::components::{use_toast, ErrorAlert, Spinner, ToastOptions};
use crate::{use_api, use_session};

/// Loads one note into a form and saves it back as a full update.
#[component]
pub fn EditNoteView(
    note_id: String,
    /// Called after a successful save and by "Back to Notes".
    on_navigate_notes: EventHandler<()>,
) -> Element {
    // Track the id in a signal so the loader re-runs when the route param changes
    let mut id_signal = use_signal(|| NoteId::new(note_id.clone()));
    if id_signal.peek().as_str() != note_id {
        id_signal.set(NoteId::new(note_id.clone()));
    }

    let session = use_session();
    let api_client = use_api();
    let toast_api = use_toast();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(Submission::default);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            loading.set(true);
            match session.notebook(api_client).open(&id).await {
                Ok(note) => {
                    title.set(note.title);
                    content.set(note.content);
                    error.set(None);
                }
                Err(e) => {
                    tracing::warn!("Failed to load note {}: {}", id, e);
                    error.set(Some(e.to_string()));
                    toast_api.error("Failed to fetch note details".to_string(), ToastOptions::new());
                }
            }
            loading.set(false);
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if !saving.write().try_begin() {
            return;
        }
        let id = id_signal();
        let form = NoteForm::new(title(), content());
        spawn(async move {
            match session.notebook(api_client).update(&id, &form).await {
                Ok(()) => {
                    saving.write().finish();
                    toast_api.success("Note updated successfully".to_string(), ToastOptions::new());
                    on_navigate_notes.call(());
                }
                Err(e) => {
                    tracing::warn!("Update of {} failed: {}", id, e);
                    let message = e.to_string();
                    toast_api.error(message.clone(), ToastOptions::new());
                    error.set(Some(message));
                    saving.write().finish();
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "page page--centered",
                Spinner { class: "spinner--large" }
            }
        };
    }

    rsx! {
        div {
            class: "page",
            button {
                class: "secondary back-button",
                onclick: move |_| on_navigate_notes.call(()),
                "Back to Notes"
            }

            form {
                class: "note-form",
                onsubmit: handle_save,
                h1 { "Edit Note" }

                if let Some(message) = error() {
                    ErrorAlert { message }
                }

                div {
                    class: "form-field",
                    label { r#for: "edit-title", "Title" }
                    input {
                        id: "edit-title",
                        required: true,
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "edit-content", "Content" }
                    textarea {
                        id: "edit-content",
                        required: true,
                        rows: "8",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving().in_flight(),
                    if saving().in_flight() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

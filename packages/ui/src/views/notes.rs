//! The notes list with its create form.
//!
//! List state lives in an [`api::NotesBoard`]; every successful mutation hands
//! back a fresh server listing which replaces the board's contents.

use api::{BoardView, Note, NoteForm, NoteId, NotesBoard, RowState, Submission};
use dioxus::prelude::*;

use crate::components::{use_toast, ErrorAlert, NoteSkeleton, Spinner, ToastOptions};
use crate::icons::{FaPenToSquare, FaTrash};
use crate::{use_api, use_session, Icon};

#[component]
pub fn NotesView(on_edit_note: EventHandler<NoteId>) -> Element {
    let session = use_session();
    let api_client = use_api();
    let toast_api = use_toast();
    let mut board = use_signal(NotesBoard::new);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submission = use_signal(Submission::default);

    // Fetch on entry
    let _loader = use_resource(move || async move {
        let notes = session.notebook(api_client).refresh().await;
        if let Err(e) = &notes {
            tracing::warn!("Failed to load notes: {}", e);
        }
        board.write().apply_refresh(notes);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if !submission.write().try_begin() {
            return;
        }
        let form = NoteForm::new(title(), content());
        spawn(async move {
            match session.notebook(api_client).create(&form).await {
                Ok(refreshed) => {
                    title.set(String::new());
                    content.set(String::new());
                    error.set(None);
                    toast_api.success("Note created successfully".to_string(), ToastOptions::new());
                    board.write().apply_refresh(refreshed.notes);
                }
                Err(e) => {
                    tracing::warn!("Create failed: {}", e);
                    let message = e.to_string();
                    toast_api.error(message.clone(), ToastOptions::new());
                    error.set(Some(message));
                }
            }
            submission.write().finish();
        });
    };

    let handle_delete = move |id: NoteId| {
        if !board.write().begin_delete(id.clone()) {
            return;
        }
        spawn(async move {
            match session.notebook(api_client).delete(&id).await {
                Ok(refreshed) => {
                    error.set(None);
                    toast_api.success("Note deleted successfully".to_string(), ToastOptions::new());
                    board.write().apply_refresh(refreshed.notes);
                }
                Err(e) => {
                    tracing::warn!("Delete of {} failed: {}", id, e);
                    let message = e.to_string();
                    toast_api.error(message.clone(), ToastOptions::new());
                    error.set(Some(message));
                }
            }
            board.write().finish_delete(&id);
        });
    };

    let snapshot = board();
    let listing = match snapshot.view() {
        BoardView::Loading => rsx! { NoteSkeleton {} },
        BoardView::Failed(message) => rsx! {
            ErrorAlert { message: message.to_string() }
        },
        BoardView::Empty => rsx! {
            div {
                class: "notes-empty",
                h2 { "No notes yet" }
                p { "Create your first note above." }
            }
        },
        BoardView::Notes(notes) => rsx! {
            div {
                class: "note-list",
                for note in notes.iter() {
                    NoteRow {
                        key: "{note.id}",
                        note: note.clone(),
                        state: snapshot.row_state(&note.id),
                        on_edit: on_edit_note,
                        on_delete: handle_delete,
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            form {
                class: "note-form",
                onsubmit: handle_create,
                h1 { "My Notes" }

                if let Some(message) = error() {
                    ErrorAlert { message }
                }

                div {
                    class: "form-field",
                    label { r#for: "note-title", "Title" }
                    input {
                        id: "note-title",
                        required: true,
                        placeholder: "Note title",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "note-content", "Content" }
                    textarea {
                        id: "note-content",
                        required: true,
                        rows: "4",
                        placeholder: "Write something...",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submission().in_flight(),
                    if submission().in_flight() { "Adding..." } else { "Add Note" }
                }
            }

            {listing}
        }
    }
}

/// One note card. Actions appear on hover, and stay visible (disabled, with a
/// spinner on delete) while this row is being deleted.
#[component]
fn NoteRow(
    note: Note,
    state: RowState,
    on_edit: EventHandler<NoteId>,
    on_delete: EventHandler<NoteId>,
) -> Element {
    let deleting = state == RowState::Deleting;
    let created = note.created_label();
    let edit_id = note.id.clone();
    let delete_id = note.id.clone();

    rsx! {
        div {
            class: if deleting { "note-card note-card--deleting" } else { "note-card" },
            div {
                class: "note-body",
                h2 { class: "note-title", "{note.title}" }
                p { class: "note-content", "{note.content}" }
                small { class: "note-created", "Created: {created}" }
            }
            div {
                class: "note-actions",
                button {
                    class: "note-action",
                    title: "Edit note",
                    disabled: deleting,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "note-action note-action--danger",
                    title: "Delete note",
                    disabled: deleting,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    if deleting {
                        Spinner {}
                    } else {
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}

//! # Notebook: CRUD on the notes resource
//!
//! [`Notebook`] binds an [`ApiClient`] to the current session token and exposes
//! the note operations the views need. The server is the only source of truth:
//! no operation patches a local copy. Every mutation that succeeds is followed
//! by [`Notebook::refresh`], and the freshly fetched list is handed back in a
//! [`Refreshed`] so the caller can replace whatever it was showing.
//!
//! A refresh that fails after a successful mutation is not reported as a failed
//! mutation: the note *was* created or deleted. The caller receives
//! `Ok(Refreshed { notes: Err(..) })` and shows the list error instead.
//!
//! Updates are the exception. The edit view navigates back to the list, and the
//! list fetches on entry, so [`Notebook::update`] returns nothing.

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::forms::NoteForm;
use crate::models::{timestamp_now, Note, NoteId};

/// Outcome of the refresh that follows a successful mutation.
#[derive(Debug)]
pub struct Refreshed {
    pub notes: Result<Vec<Note>, ApiError>,
}

/// Authenticated access to the current user's notes.
#[derive(Clone, Debug)]
pub struct Notebook {
    client: ApiClient,
    token: Option<String>,
}

impl Notebook {
    pub fn new(client: ApiClient, token: Option<String>) -> Self {
        Self { client, token }
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Fetch the full list from the server.
    pub async fn refresh(&self) -> Result<Vec<Note>, ApiError> {
        self.client.list_notes(self.token()).await
    }

    /// Create a note stamped with the current local time, then refresh.
    pub async fn create(&self, form: &NoteForm) -> Result<Refreshed, ApiError> {
        let draft = form.draft(timestamp_now())?;
        self.client.create_note(self.token(), &draft).await?;
        tracing::info!("Created note {:?}", draft.title);
        Ok(self.after_mutation().await)
    }

    pub async fn open(&self, id: &NoteId) -> Result<Note, ApiError> {
        self.client.get_note(self.token(), id).await
    }

    /// Replace title and content of an existing note.
    pub async fn update(&self, id: &NoteId, form: &NoteForm) -> Result<(), ApiError> {
        let update = form.validate()?;
        self.client.update_note(self.token(), id, &update).await?;
        tracing::info!("Updated note {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: &NoteId) -> Result<Refreshed, ApiError> {
        self.client.delete_note(self.token(), id).await?;
        tracing::info!("Deleted note {}", id);
        Ok(self.after_mutation().await)
    }

    async fn after_mutation(&self) -> Refreshed {
        Refreshed {
            notes: self.refresh().await,
        }
    }
}

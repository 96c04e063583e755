//! View state for the notes list.
//!
//! [`NotesBoard`] is plain data so it can sit in a UI signal and be tested
//! without rendering anything. It tracks the fetched list and the single note
//! id whose delete request is in flight.

use crate::errors::ApiError;
use crate::models::{Note, NoteId};

/// Result of the most recent fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Loading,
    Failed(String),
    Loaded(Vec<Note>),
}

/// What the list region should render.
#[derive(Debug, PartialEq)]
pub enum BoardView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Notes(&'a [Note]),
}

/// Per-row control state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowState {
    /// Actions revealed on hover, fully interactive.
    Idle,
    /// Delete in flight: actions stay visible, controls disabled, spinner shown.
    Deleting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotesBoard {
    listing: Listing,
    deleting: Option<NoteId>,
}

impl Default for NotesBoard {
    fn default() -> Self {
        Self {
            listing: Listing::Loading,
            deleting: None,
        }
    }
}

impl NotesBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Replace the list with the server's answer.
    pub fn apply_refresh(&mut self, result: Result<Vec<Note>, ApiError>) {
        self.listing = match result {
            Ok(notes) => Listing::Loaded(notes),
            Err(e) => Listing::Failed(e.to_string()),
        };
    }

    pub fn view(&self) -> BoardView<'_> {
        match &self.listing {
            Listing::Loading => BoardView::Loading,
            Listing::Failed(message) => BoardView::Failed(message),
            Listing::Loaded(notes) if notes.is_empty() => BoardView::Empty,
            Listing::Loaded(notes) => BoardView::Notes(notes),
        }
    }

    /// Mark `id` as the note being deleted. A newer delete of another note
    /// takes over the slot; a repeat for the note already in flight returns
    /// `false` and must not send a second request.
    pub fn begin_delete(&mut self, id: NoteId) -> bool {
        if self.deleting.as_ref() == Some(&id) {
            return false;
        }
        self.deleting = Some(id);
        true
    }

    /// Clear the in-flight marker if it still belongs to `id`.
    pub fn finish_delete(&mut self, id: &NoteId) {
        if self.deleting.as_ref() == Some(id) {
            self.deleting = None;
        }
    }

    pub fn deleting(&self) -> Option<&NoteId> {
        self.deleting.as_ref()
    }

    pub fn row_state(&self, id: &NoteId) -> RowState {
        if self.deleting.as_ref() == Some(id) {
            RowState::Deleting
        } else {
            RowState::Idle
        }
    }
}

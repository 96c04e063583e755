//! Wire models for the notes API.

mod envelope;
mod note;
mod user;

pub use envelope::Envelope;
pub use note::{format_timestamp, timestamp_now, Note, NoteDraft, NoteId, NoteUpdate};
pub use user::{Credentials, NewUser};

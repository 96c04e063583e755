//! # Note entity
//!
//! [`Note`] mirrors the server's JSON shape `{ _id, title, content, createdAt }`.
//! The id is opaque and server-assigned; it is only ever echoed back in URLs.
//! `createdAt` is kept as the string the server sent, since the client never
//! computes with it; [`Note::created_label`] formats it for display.
//!
//! Outgoing bodies are separate types: [`NoteDraft`] for creation (carries a
//! client-generated timestamp) and [`NoteUpdate`] for the full `PUT` update.

use std::fmt;

use chrono::{DateTime, Datelike, Local, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};

/// Opaque, server-assigned note identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A note as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Note {
    /// Creation time as `Mar 3rd 2025, 4:05 pm` in local time, or the raw
    /// value when it is not an RFC 3339 timestamp.
    pub fn created_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => format_timestamp(&dt.with_timezone(&Local)),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Body of `POST /v1/notes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Body of `PUT /v1/notes/:id`. Always a full replacement of title and content.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
}

impl NoteUpdate {
    pub fn into_draft(self, created_at: String) -> NoteDraft {
        NoteDraft {
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}

/// Current local time with its UTC offset, e.g. `2025-03-03T16:05:09+01:00`.
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Display format used in the notes list.
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let day = dt.day();
    format!(
        "{} {}{} {}",
        dt.format("%b"),
        day,
        ordinal_suffix(day),
        dt.format("%Y, %-I:%M %P"),
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_decode_server_note() {
        let note: Note = serde_json::from_str(
            r#"{"_id":"65f1c0","title":"Groceries","content":"Milk","createdAt":"2025-03-03T16:05:00+01:00","__v":0}"#,
        )
        .unwrap();
        assert_eq!(note.id.as_str(), "65f1c0");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.created_at, "2025-03-03T16:05:00+01:00");
    }

    #[test]
    fn test_draft_wire_keys() {
        let draft = NoteUpdate {
            title: "t".into(),
            content: "c".into(),
        }
        .into_draft("2025-01-01T00:00:00Z".into());
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["createdAt"], "2025-01-01T00:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_format_timestamp() {
        let tz = FixedOffset::east_opt(3600).unwrap();
        let dt = tz.with_ymd_and_hms(2025, 3, 3, 16, 5, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Mar 3rd 2025, 4:05 pm");

        let dt = tz.with_ymd_and_hms(2024, 12, 12, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "Dec 12th 2024, 12:30 am");
    }

    #[test]
    fn test_ordinal_suffixes() {
        let suffixes: Vec<_> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 31]
            .into_iter()
            .map(ordinal_suffix)
            .collect();
        assert_eq!(
            suffixes,
            ["st", "nd", "rd", "th", "th", "th", "th", "st", "nd", "rd", "st"]
        );
    }

    #[test]
    fn test_unparseable_timestamp_is_shown_verbatim() {
        let note = Note {
            id: NoteId::new("1"),
            title: "t".into(),
            content: "c".into(),
            created_at: "yesterday".into(),
        };
        assert_eq!(note.created_label(), "yesterday");
    }

    #[test]
    fn test_timestamp_now_is_rfc3339() {
        assert!(DateTime::parse_from_rfc3339(&timestamp_now()).is_ok());
    }
}

//! # API crate: client side of the notes REST API
//!
//! Everything the views need to talk to the notes server, with no UI code. The
//! server itself is external; this crate only knows its wire contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | API base URL from `API_BASE_URL` (runtime on native, build time on wasm) |
//! | [`headers`] | JSON content type and the raw `Authorization: <token>` header |
//! | [`client`] | [`ApiClient`], one async method per endpoint, envelope decoding |
//! | [`forms`] | Raw form input and the trimming/required/age checks run before sending |
//! | [`auth`] | Login, signup and logout flows; the only writers of the session token |
//! | [`notes`] | [`Notebook`] CRUD with refresh-after-mutation, and the list view's [`NotesBoard`] |
//! | [`models`] | Wire types: [`Note`], [`Envelope`], request bodies |
//! | [`errors`] | [`ApiError`], [`ValidationError`], [`ConfigError`] |
//!
//! ## Error surface
//!
//! Every flow returns `Result<_, ApiError>`. The error's `Display` is written for
//! the user: a server message is passed through verbatim, validation failures
//! read like `Title is required`, and transport failures say the server could
//! not be reached. None of them are fatal; the form stays usable for a retry.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod forms;
pub mod headers;
pub mod models;
pub mod notes;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use errors::{ApiError, ConfigError, ValidationError};
pub use forms::{LoginForm, NoteForm, SignupForm, Submission};
pub use models::{Envelope, Note, NoteId};
pub use notes::{BoardView, Listing, Notebook, NotesBoard, Refreshed, RowState};
